//! Deterministic task fingerprints.
//!
//! A fingerprint is a fixed-width sequence of glyphs derived from a task
//! identifier. Identical identifiers always produce identical fingerprints,
//! and the underlying hash is stable across runs, so tags in persisted logs
//! stay comparable between sessions. Distinct identifiers usually, but not
//! necessarily, produce distinct fingerprints.

use crate::hash::stable_hash;

/// The fixed alphabet of easily distinguishable glyphs.
pub const GLYPHS: [char; 8] = ['🟥', '🟧', '🟨', '🟩', '🟦', '🟪', '🟫', '⬛'];

/// Number of glyphs in a fingerprint.
///
/// Three base-8 digits give 512 distinguishable tags, plenty for the handful
/// of tasks concurrently active in a build session, while keeping the prefix
/// narrow.
const FINGERPRINT_GLYPHS: usize = 3;

/// Map a task identifier to its visual fingerprint.
///
/// The hash of the identifier is decomposed into base-8 digits, least
/// significant first, and each digit selects a glyph. The result is always
/// exactly [`FINGERPRINT_GLYPHS`] glyphs, for any input including `""`.
pub fn fingerprint(task_id: &str) -> String {
  let base = GLYPHS.len() as u64;
  let mut value = stable_hash(task_id);

  let mut tag = String::with_capacity(FINGERPRINT_GLYPHS * 4);
  for _ in 0..FINGERPRINT_GLYPHS {
    tag.push(GLYPHS[(value % base) as usize]);
    value /= base;
  }
  tag
}

/// Prefix every line of `message` with the fingerprint of `task_id`.
///
/// Trailing newlines are stripped first, so the result never ends in a
/// tagged blank line. Interior empty lines are kept and tagged like any
/// other line. Lines are rejoined with `'\n'` and no trailing newline is
/// added. An empty message yields a single line holding just the tag and
/// its separating space.
pub fn prefix_each_line(task_id: &str, message: &str) -> String {
  let tag = fingerprint(task_id);

  message
    .trim_end_matches('\n')
    .split('\n')
    .map(|line| format!("{tag} {line}"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn fingerprint_is_deterministic() {
    assert_eq!(fingerprint("prepare-target"), fingerprint("prepare-target"));
  }

  #[test]
  fn fingerprint_matches_known_value() {
    // stable_hash("hello world") == 0xb94d27b9934d3e08, whose low base-8
    // digits are 0, 1, 0.
    let expected = format!("{}{}{}", GLYPHS[0], GLYPHS[1], GLYPHS[0]);
    assert_eq!(fingerprint("hello world"), expected);
  }

  #[test]
  fn fingerprint_is_three_glyphs_from_the_alphabet() {
    for id in ["", "a", "index-prepare", "some/very/long/target/identifier"] {
      let tag = fingerprint(id);
      assert_eq!(tag.chars().count(), 3, "identifier {id:?}");
      assert!(tag.chars().all(|glyph| GLYPHS.contains(&glyph)));
    }
  }

  #[test]
  fn fingerprints_vary_across_identifiers() {
    let tags: HashSet<String> = (0..100).map(|n| fingerprint(&format!("task-{n}"))).collect();
    assert!(tags.len() > 1);
  }

  #[test]
  fn multi_line_messages_get_the_same_tag_on_every_line() {
    let tag = fingerprint("X");
    assert_eq!(
      prefix_each_line("X", "one\ntwo\nthree"),
      format!("{tag} one\n{tag} two\n{tag} three")
    );
  }

  #[test]
  fn trailing_newlines_are_stripped() {
    let tag = fingerprint("T");
    assert_eq!(prefix_each_line("T", "a\nb\n\n"), format!("{tag} a\n{tag} b"));
  }

  #[test]
  fn interior_empty_lines_are_kept_and_tagged() {
    let tag = fingerprint("T");
    assert_eq!(prefix_each_line("T", "one\n\ntwo"), format!("{tag} one\n{tag} \n{tag} two"));
  }

  #[test]
  fn empty_message_yields_tag_only() {
    let tag = fingerprint("T");
    assert_eq!(prefix_each_line("T", ""), format!("{tag} "));
  }

  #[test]
  fn newline_only_message_collapses_to_tag_only() {
    let tag = fingerprint("T");
    assert_eq!(prefix_each_line("T", "\n\n"), format!("{tag} "));
  }

  #[test]
  fn same_task_id_yields_identical_prefix_across_calls() {
    let first = prefix_each_line("indexing", "started");
    let second = prefix_each_line("indexing", "finished");

    let prefix = |s: &str| s.chars().take(3).collect::<String>();
    assert_eq!(prefix(&first), prefix(&second));
  }

  mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
      #[test]
      fn fingerprint_width_is_fixed(id in ".*") {
        let tag = fingerprint(&id);
        prop_assert_eq!(tag.chars().count(), 3);
        prop_assert!(tag.chars().all(|glyph| GLYPHS.contains(&glyph)));
      }

      #[test]
      fn tagged_line_count_matches_input(message in "[a-z .\\n]{0,60}") {
        let tagged = prefix_each_line("worker", &message);
        let expected = message.trim_end_matches('\n').split('\n').count();
        prop_assert_eq!(tagged.split('\n').count(), expected);
      }

      #[test]
      fn every_tagged_line_starts_with_the_tag(message in "[a-z .\\n]{0,60}") {
        let prefix = format!("{} ", fingerprint("worker"));
        let tagged = prefix_each_line("worker", &message);
        prop_assert!(tagged.split('\n').all(|line| line.starts_with(&prefix)));
      }
    }
  }
}
