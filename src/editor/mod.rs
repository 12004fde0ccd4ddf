//! Editor-side collaborators.
//!
//! The mapping core never talks to an editor. [`SyncSession`] drives an
//! [`EditorHost`], translating cursor positions into lookups and highlight
//! requests, and turns every host failure into a user-visible message.
pub mod session;
pub mod terminal;

pub use session::{SyncOutcome, SyncSession};
pub use terminal::TerminalHost;

use serde::Serialize;
use std::fmt;

/// Opaque handle naming an open editor buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BufferHandle(String);

impl BufferHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failures reported by an editor host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("{0} is already open")]
    AlreadyOpen(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
}

/// Capabilities the sync session needs from the hosting editor.
pub trait EditorHost {
    /// Buffer that currently has focus.
    fn current_buffer(&self) -> Option<BufferHandle>;

    /// 1-based cursor line in `buffer`.
    fn current_cursor_line(&self, buffer: &BufferHandle) -> Result<u32, EditorError>;

    fn open_file_in_split_view(&mut self, path: &str) -> Result<BufferHandle, EditorError>;

    /// Replace the highlights in `buffer` with `lines`, centering on the first
    /// one. An empty slice only clears.
    fn highlight_lines(&mut self, buffer: &BufferHandle, lines: &[u32]) -> Result<(), EditorError>;

    fn list_open_buffers(&self) -> Vec<BufferHandle>;

    /// Show a one-line message to the user.
    fn notify(&mut self, message: &str);
}
