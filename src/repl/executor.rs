/// REPL command execution
///
/// Drives a [`SyncSession`] over a [`TerminalHost`], moving cursors and
/// rendering highlights for each command.
use super::commands::{ReplCommand, View};
use super::ReplConfig;
use crate::editor::{BufferHandle, EditorHost, SyncOutcome, SyncSession, TerminalHost};
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::{Result, SyncError};
use std::fmt::Display;
use std::io::Write;

/// Executor for REPL commands
pub struct ReplExecutor<W: Write> {
    session: SyncSession<TerminalHost<W>>,
}

impl<W: Write> ReplExecutor<W> {
    /// Load the IR dump, and open its source file when configured to.
    pub fn new(config: &ReplConfig, out: W) -> Result<Self> {
        let mut host = TerminalHost::new(out, config.context_lines);
        let ir_buffer = host.open_primary(&config.ir_path).map_err(|e| {
            SyncError::ArtifactRead(format!("{}: {}", config.ir_path.display(), e))
        })?;

        let mut session = SyncSession::new(host);
        session.load_artifact(&config.ir_path)?;

        let mut executor = Self { session };
        if config.open_source {
            executor.session.open_source_file();
            // Keep the IR view focused after the split opens.
            executor.refocus(&ir_buffer)?;
        }

        Ok(executor)
    }

    pub fn session(&self) -> &SyncSession<TerminalHost<W>> {
        &self.session
    }

    pub fn into_session(self) -> SyncSession<TerminalHost<W>> {
        self.session
    }

    /// Execute one command. Returns `true` when the REPL should exit.
    ///
    /// `History` is handled by the REPL loop, which owns the line editor.
    pub fn execute(&mut self, command: ReplCommand) -> Result<bool> {
        match command {
            ReplCommand::Exit => return Ok(true),
            ReplCommand::Help => self.emit(Formatter::format_repl_help())?,
            ReplCommand::History => {}
            ReplCommand::Ir(line) => {
                let buffer = self.view_buffer(View::Ir)?;
                self.move_cursor(&buffer, line)?;
                let outcome = self.session.sync_to_source();
                self.report(outcome)?;
            }
            ReplCommand::Src(line) => {
                let buffer = self.view_buffer(View::Source)?;
                self.move_cursor(&buffer, line)?;
                let outcome = self.session.sync_to_ir();
                self.report(outcome)?;
            }
            ReplCommand::Goto(line) => {
                let buffer = self
                    .session
                    .host()
                    .current_buffer()
                    .ok_or_else(|| SyncError::InvalidCommand("no buffer has focus".to_string()))?;
                self.move_cursor(&buffer, line)?;
                let outcome = self.session.sync_lines();
                self.report(outcome)?;
            }
            ReplCommand::Focus(view) => {
                let buffer = self.view_buffer(view)?;
                self.focus(&buffer)?;
                self.emit(Formatter::info(format!("Focused {}", buffer)))?;
            }
            ReplCommand::Open => {
                let outcome = self.session.open_source_file();
                self.report(outcome)?;
            }
            ReplCommand::Sync => {
                let outcome = self.session.sync_lines();
                self.report(outcome)?;
            }
            ReplCommand::Map => self.print_map()?,
            ReplCommand::Show => {
                if let Some(buffer) = self.session.host().current_buffer() {
                    self.session
                        .host_mut()
                        .show(&buffer)
                        .map_err(|e| miette::miette!("{}", e))?;
                }
            }
            ReplCommand::Buffers => self.print_buffers()?,
        }
        Ok(false)
    }

    fn view_buffer(&self, view: View) -> Result<BufferHandle> {
        let buffer = match view {
            View::Ir => self.session.ir_buffer(),
            View::Source => self.session.source_buffer(),
        };
        buffer.cloned().ok_or_else(|| {
            let message = match view {
                View::Ir => "no IR artifact loaded",
                View::Source => "source file is not open; use 'open' first",
            };
            SyncError::InvalidCommand(message.to_string()).into()
        })
    }

    fn focus(&mut self, buffer: &BufferHandle) -> Result<()> {
        self.session
            .host_mut()
            .focus(buffer)
            .map_err(|e| miette::miette!("{}", e))
    }

    /// Focus `buffer`, warning instead of failing when the host refuses.
    fn refocus(&mut self, buffer: &BufferHandle) -> Result<()> {
        if let Err(err) = self.session.host_mut().focus(buffer) {
            logging::log_editor_failure("focus", &err);
            self.emit(Formatter::warning(format!(
                "Could not refocus {}: {}",
                buffer, err
            )))?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, buffer: &BufferHandle, line: u32) -> Result<()> {
        self.focus(buffer)?;
        let placed = self
            .session
            .host_mut()
            .set_cursor(buffer, line)
            .map_err(|e| miette::miette!("{}", e))?;
        if placed != line {
            self.emit(Formatter::warning(format!(
                "Line {} is past the end of {}; cursor placed on line {}",
                line, buffer, placed
            )))?;
        }
        Ok(())
    }

    fn report(&mut self, outcome: SyncOutcome) -> Result<()> {
        match outcome {
            SyncOutcome::Highlighted { buffer, lines } => self.emit(Formatter::success(format!(
                "{}: {}",
                buffer,
                Formatter::format_line_list(&lines)
            ))),
            SyncOutcome::Opened(buffer) => self.emit(Formatter::success(format!("Opened {}", buffer))),
            SyncOutcome::Idle => self.emit(Formatter::warning("Focused buffer is not synchronized")),
            // Already reported to the user by the session.
            SyncOutcome::Cleared { .. }
            | SyncOutcome::Adopted(_)
            | SyncOutcome::Skipped(_)
            | SyncOutcome::Failed(_) => Ok(()),
        }
    }

    fn print_map(&mut self) -> Result<()> {
        let mut lines = Vec::new();
        match self.session.result() {
            None => lines.push(Formatter::warning("No IR artifact loaded")),
            Some(result) if result.mapping.is_empty() => {
                lines.push(Formatter::warning("No location references resolved."))
            }
            Some(result) => {
                lines.push(Formatter::info("IR → source:"));
                lines.extend(
                    result
                        .mapping
                        .forward_entries()
                        .map(|(line, targets)| Formatter::format_mapping_entry("IR ", line, targets)),
                );
                lines.push(Formatter::info("Source → IR:"));
                lines.extend(
                    result
                        .mapping
                        .backward_entries()
                        .map(|(line, targets)| Formatter::format_mapping_entry("src", line, targets)),
                );
            }
        }
        for line in lines {
            self.emit(line)?;
        }
        Ok(())
    }

    fn print_buffers(&mut self) -> Result<()> {
        let host = self.session.host();
        let current = host.current_buffer();
        let ir = self.session.ir_buffer().cloned();
        let source = self.session.source_buffer().cloned();

        let lines: Vec<String> = host
            .list_open_buffers()
            .into_iter()
            .map(|buffer| {
                let marker = if Some(&buffer) == current.as_ref() { "*" } else { " " };
                let role = if Some(&buffer) == ir.as_ref() {
                    "[ir]"
                } else if Some(&buffer) == source.as_ref() {
                    "[src]"
                } else {
                    ""
                };
                format!("{} {} {}", marker, buffer, role)
            })
            .collect();

        for line in lines {
            self.emit(line.trim_end())?;
        }
        Ok(())
    }

    fn emit(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.session.host_mut().writer_mut(), "{}", line)
            .map_err(|e| miette::miette!("Failed to write output: {}", e))
    }
}
