//! Shared task-log sink.
//!
//! Concurrent build tasks report output through one log. `TaskLog` is a
//! cheaply cloneable handle over a single sink that tags every message with
//! the owning task's fingerprint before writing, so interleaved lines remain
//! visually groupable per task.

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::debug;

use crate::tasklog::fingerprint::prefix_each_line;

/// Errors that can occur while appending to the task log.
#[derive(Debug, Error)]
pub enum TaskLogError {
  /// The underlying sink rejected the write.
  #[error("failed to write to task log sink: {0}")]
  Sink(#[from] io::Error),
}

/// A fingerprint-tagging writer over one shared log sink.
///
/// Clones share the underlying sink. The sink lock is held for the whole of
/// an `append`, so a multi-line message is written contiguously and lines
/// from concurrent tasks never tear mid-message.
pub struct TaskLog<W> {
  sink: Arc<Mutex<W>>,
}

impl<W> Clone for TaskLog<W> {
  fn clone(&self) -> Self {
    Self {
      sink: Arc::clone(&self.sink),
    }
  }
}

impl<W: AsyncWrite + Unpin> TaskLog<W> {
  /// Wrap `sink` as a shared task log.
  pub fn new(sink: W) -> Self {
    Self {
      sink: Arc::new(Mutex::new(sink)),
    }
  }

  /// Tag every line of `message` with the fingerprint of `task_id` and write
  /// the result to the sink, followed by a newline.
  pub async fn append(&self, task_id: &str, message: &str) -> Result<(), TaskLogError> {
    let tagged = prefix_each_line(task_id, message);
    debug!(task = task_id, "appending task output");

    let mut sink = self.sink.lock().await;
    sink.write_all(tagged.as_bytes()).await?;
    sink.write_all(b"\n").await?;
    sink.flush().await?;
    Ok(())
  }
}
