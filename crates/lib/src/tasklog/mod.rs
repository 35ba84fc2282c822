//! Visual tagging for interleaved build-task output.
//!
//! Many build tasks run concurrently and their log output lands in one
//! shared log. Every line is prefixed with a short fingerprint derived from
//! the task identifier, so a reader scanning the log can group lines by task
//! at a glance without reading identifier text.
//!
//! # Submodules
//!
//! - [`fingerprint`] - deterministic fingerprint and line-prefix functions
//! - [`writer`] - shared sink that tags messages before writing

pub mod fingerprint;
pub mod writer;

pub use fingerprint::{GLYPHS, fingerprint, prefix_each_line};
pub use writer::{TaskLog, TaskLogError};
