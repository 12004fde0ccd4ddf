/// Cursor synchronization between an IR buffer and its source buffer
///
/// Holds the active parse result and the buffer associations for one
/// editor session. Editor failures never escape: they are shown through
/// [`EditorHost::notify`] and returned as a [`SyncOutcome`].
use super::{BufferHandle, EditorError, EditorHost};
use crate::logging;
use crate::mapping::{self, ParseResult};
use crate::Result;
use std::path::Path;

pub const NO_SOURCE_FILE: &str = "No source file found in the IR file.";
pub const SOURCE_ALREADY_OPEN: &str = "Source file is already open in another buffer.";
pub const NO_IR_MAPPING: &str = "No mapping found for this line in the IR file.";
pub const NO_SOURCE_MAPPING: &str = "No mapping found for this line in the source file.";

/// What a session operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target buffer now highlights these lines.
    Highlighted {
        buffer: BufferHandle,
        lines: Vec<u32>,
    },
    /// `line` had no mapping; the target buffer's highlights were cleared.
    Cleared { buffer: BufferHandle, line: u32 },
    Opened(BufferHandle),
    /// The source file was already open and that buffer is now tracked.
    Adopted(BufferHandle),
    Skipped(String),
    Failed(EditorError),
    /// Focus is in a buffer this session does not track.
    Idle,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    ToSource,
    ToIr,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::ToSource => "ir->source",
            Direction::ToIr => "source->ir",
        }
    }

    fn no_mapping_message(self) -> &'static str {
        match self {
            Direction::ToSource => NO_IR_MAPPING,
            Direction::ToIr => NO_SOURCE_MAPPING,
        }
    }
}

pub struct SyncSession<H: EditorHost> {
    host: H,
    result: Option<ParseResult>,
    ir_buffer: Option<BufferHandle>,
    source_buffer: Option<BufferHandle>,
}

impl<H: EditorHost> SyncSession<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            result: None,
            ir_buffer: None,
            source_buffer: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    pub fn ir_buffer(&self) -> Option<&BufferHandle> {
        self.ir_buffer.as_ref()
    }

    pub fn source_buffer(&self) -> Option<&BufferHandle> {
        self.source_buffer.as_ref()
    }

    /// Parse `path` and track the host's focused buffer as the IR view.
    ///
    /// A missing or unreadable artifact is an error; a previous result, if
    /// any, is kept in that case.
    pub fn load_artifact(&mut self, path: &Path) -> Result<&ParseResult> {
        let result = mapping::parse_file(path)?;
        let ir_buffer = self
            .host
            .current_buffer()
            .unwrap_or_else(|| BufferHandle::new(path.to_string_lossy()));
        Ok(self.attach(ir_buffer, result))
    }

    /// Install an already-built result for `ir_buffer`.
    pub fn attach(&mut self, ir_buffer: BufferHandle, result: ParseResult) -> &ParseResult {
        match result.source_file_path.as_deref() {
            Some(path) => self.host.notify(&format!("Source file path: {}", path)),
            None => logging::log_missing_source(),
        }

        let keep_source = match (&self.source_buffer, &result.source_file_path) {
            (Some(buffer), Some(path)) => buffer.name() == path,
            _ => false,
        };
        if !keep_source {
            self.source_buffer = None;
        }

        self.ir_buffer = Some(ir_buffer);
        self.result.insert(result)
    }

    /// Open the tracked source file next to the IR view.
    pub fn open_source_file(&mut self) -> SyncOutcome {
        let Some(path) = self
            .result
            .as_ref()
            .and_then(|result| result.source_file_path.clone())
        else {
            self.host.notify(NO_SOURCE_FILE);
            return SyncOutcome::Skipped(NO_SOURCE_FILE.to_string());
        };

        if let Some(existing) = self
            .host
            .list_open_buffers()
            .into_iter()
            .find(|buffer| buffer.name() == path)
        {
            self.host.notify(SOURCE_ALREADY_OPEN);
            self.source_buffer = Some(existing.clone());
            return SyncOutcome::Adopted(existing);
        }

        match self.host.open_file_in_split_view(&path) {
            Ok(buffer) => {
                logging::log_source_opened(&path);
                self.source_buffer = Some(buffer.clone());
                SyncOutcome::Opened(buffer)
            }
            Err(err) => {
                self.host
                    .notify(&format!("Error opening source file: {}", err));
                logging::log_editor_failure("open_file_in_split_view", &err);
                SyncOutcome::Failed(err)
            }
        }
    }

    /// Sync from whichever tracked buffer has focus.
    pub fn sync_lines(&mut self) -> SyncOutcome {
        let current = self.host.current_buffer();
        if current.is_some() && current == self.ir_buffer {
            self.sync_to_source()
        } else if current.is_some() && current == self.source_buffer {
            self.sync_to_ir()
        } else {
            SyncOutcome::Idle
        }
    }

    /// Highlight the source lines for the IR cursor line.
    pub fn sync_to_source(&mut self) -> SyncOutcome {
        self.sync(Direction::ToSource)
    }

    /// Highlight the IR lines for the source cursor line.
    pub fn sync_to_ir(&mut self) -> SyncOutcome {
        self.sync(Direction::ToIr)
    }

    fn sync(&mut self, direction: Direction) -> SyncOutcome {
        let (from, to) = match direction {
            Direction::ToSource => (&self.ir_buffer, &self.source_buffer),
            Direction::ToIr => (&self.source_buffer, &self.ir_buffer),
        };
        let (Some(from), Some(to)) = (from.clone(), to.clone()) else {
            let reason = if self.ir_buffer.is_none() {
                "No IR artifact loaded."
            } else {
                "Source file is not open."
            };
            self.host.notify(reason);
            return SyncOutcome::Skipped(reason.to_string());
        };

        let line = match self.host.current_cursor_line(&from) {
            Ok(line) => line,
            Err(err) => return self.report_failure("current_cursor_line", err),
        };

        let lines: Vec<u32> = self
            .result
            .as_ref()
            .map(|result| match direction {
                Direction::ToSource => result.lookup_forward(line).to_vec(),
                Direction::ToIr => result.lookup_backward(line).to_vec(),
            })
            .unwrap_or_default();
        logging::log_sync(direction.label(), line, lines.len());

        if let Err(err) = self.host.highlight_lines(&from, &[]) {
            return self.report_failure("highlight_lines", err);
        }
        logging::log_highlight(to.name(), &lines);
        if let Err(err) = self.host.highlight_lines(&to, &lines) {
            return self.report_failure("highlight_lines", err);
        }

        if lines.is_empty() {
            self.host.notify(direction.no_mapping_message());
            SyncOutcome::Cleared { buffer: to, line }
        } else {
            SyncOutcome::Highlighted { buffer: to, lines }
        }
    }

    fn report_failure(&mut self, operation: &str, err: EditorError) -> SyncOutcome {
        logging::log_editor_failure(operation, &err);
        self.host.notify(&format!("Error in {}: {}", operation, err));
        SyncOutcome::Failed(err)
    }
}
