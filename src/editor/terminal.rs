use super::{BufferHandle, EditorError, EditorHost};
use crate::ui::formatter::Formatter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default number of lines shown on each side of a highlight
pub const DEFAULT_CONTEXT_LINES: usize = 3;

#[derive(Debug)]
struct TerminalBuffer {
    handle: BufferHandle,
    lines: Vec<String>,
    cursor: u32,
    highlights: Vec<u32>,
}

impl TerminalBuffer {
    fn clamp(&self, line: u32) -> u32 {
        let last = u32::try_from(self.lines.len()).unwrap_or(u32::MAX).max(1);
        line.clamp(1, last)
    }
}

/// [`EditorHost`] backed by in-memory buffers, rendering to a writer.
///
/// Every loaded file is a "split"; focus moves between them with
/// [`TerminalHost::focus`]. Highlights are rendered as a window of
/// context lines around the first highlighted line.
pub struct TerminalHost<W: Write> {
    buffers: Vec<TerminalBuffer>,
    focus: Option<usize>,
    context_lines: usize,
    out: W,
}

impl TerminalHost<io::Stdout> {
    pub fn stdout(context_lines: usize) -> Self {
        Self::new(io::stdout(), context_lines)
    }
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W, context_lines: usize) -> Self {
        Self {
            buffers: Vec::new(),
            focus: None,
            context_lines,
            out,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Load the IR artifact as the first view and focus it.
    pub fn open_primary(&mut self, path: &Path) -> Result<BufferHandle, EditorError> {
        self.load(&path.to_string_lossy())
    }

    /// Move focus to `buffer`.
    pub fn focus(&mut self, buffer: &BufferHandle) -> Result<(), EditorError> {
        let index = self.index_of(buffer)?;
        self.focus = Some(index);
        Ok(())
    }

    /// Place the cursor in `buffer`, clamped to its line range.
    pub fn set_cursor(&mut self, buffer: &BufferHandle, line: u32) -> Result<u32, EditorError> {
        let index = self.index_of(buffer)?;
        let buf = &mut self.buffers[index];
        buf.cursor = buf.clamp(line);
        Ok(buf.cursor)
    }

    pub fn highlights(&self, buffer: &BufferHandle) -> Option<&[u32]> {
        self.buffers
            .iter()
            .find(|buf| &buf.handle == buffer)
            .map(|buf| buf.highlights.as_slice())
    }

    pub fn line_count(&self, buffer: &BufferHandle) -> Option<usize> {
        self.buffers
            .iter()
            .find(|buf| &buf.handle == buffer)
            .map(|buf| buf.lines.len())
    }

    /// Render the window around the cursor of `buffer`.
    pub fn show(&mut self, buffer: &BufferHandle) -> Result<(), EditorError> {
        let index = self.index_of(buffer)?;
        let center = self.buffers[index].cursor;
        self.render(index, center);
        Ok(())
    }

    fn index_of(&self, buffer: &BufferHandle) -> Result<usize, EditorError> {
        self.buffers
            .iter()
            .position(|buf| &buf.handle == buffer)
            .ok_or_else(|| EditorError::NotFound(buffer.to_string()))
    }

    fn load(&mut self, path: &str) -> Result<BufferHandle, EditorError> {
        let handle = BufferHandle::new(path);
        if self.buffers.iter().any(|buf| buf.handle == handle) {
            return Err(EditorError::AlreadyOpen(path.to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EditorError::NotFound(path.to_string()),
            _ => EditorError::Io(format!("{}: {}", path, e)),
        })?;

        self.buffers.push(TerminalBuffer {
            handle: handle.clone(),
            lines: content.lines().map(str::to_string).collect(),
            cursor: 1,
            highlights: Vec::new(),
        });
        self.focus = Some(self.buffers.len() - 1);
        Ok(handle)
    }

    fn render(&mut self, index: usize, center: u32) {
        let buf = &self.buffers[index];
        if buf.lines.is_empty() {
            let _ = writeln!(self.out, "{}", Formatter::warning(format!("{} is empty", buf.handle)));
            return;
        }

        let center = buf.clamp(center) as usize;
        let first = center.saturating_sub(self.context_lines).max(1);
        let last = (center + self.context_lines).min(buf.lines.len());

        let _ = writeln!(self.out, "{}", Formatter::format_buffer_header(buf.handle.name()));
        for number in first..=last {
            let line_no = number as u32;
            let _ = writeln!(
                self.out,
                "{}",
                Formatter::format_buffer_line(
                    number,
                    &buf.lines[number - 1],
                    buf.highlights.contains(&line_no),
                    buf.cursor == line_no,
                )
            );
        }
    }
}

impl<W: Write> EditorHost for TerminalHost<W> {
    fn current_buffer(&self) -> Option<BufferHandle> {
        self.focus.map(|index| self.buffers[index].handle.clone())
    }

    fn current_cursor_line(&self, buffer: &BufferHandle) -> Result<u32, EditorError> {
        let index = self.index_of(buffer)?;
        Ok(self.buffers[index].cursor)
    }

    fn open_file_in_split_view(&mut self, path: &str) -> Result<BufferHandle, EditorError> {
        self.load(path)
    }

    fn highlight_lines(&mut self, buffer: &BufferHandle, lines: &[u32]) -> Result<(), EditorError> {
        let index = self.index_of(buffer)?;
        let buf = &mut self.buffers[index];
        buf.highlights = lines.to_vec();

        if let Some(&first) = lines.first() {
            buf.cursor = buf.clamp(first);
            self.render(index, first);
        }
        Ok(())
    }

    fn list_open_buffers(&self) -> Vec<BufferHandle> {
        self.buffers.iter().map(|buf| buf.handle.clone()).collect()
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", Formatter::info(message));
    }
}
