/// REPL session management with history
///
/// Reads commands with rustyline, hands them to the executor, and keeps
/// the command history across sessions.
use super::commands::ReplCommand;
use super::executor::ReplExecutor;
use super::ReplConfig;
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::Result;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{DefaultEditor, Editor};
use std::io::{self, Stdout};
use std::path::PathBuf;

/// REPL session state and editor
pub struct ReplSession {
    editor: Editor<(), FileHistory>,
    config: ReplConfig,
    executor: ReplExecutor<Stdout>,
    history_path: PathBuf,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new(config: ReplConfig) -> Result<Self> {
        let history_path = dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".ttir_sync_history");

        let mut editor = DefaultEditor::new()
            .map_err(|e| miette::miette!("Failed to initialize REPL editor: {}", e))?;

        // Load history if it exists
        let _ = editor.load_history(&history_path);

        let executor = ReplExecutor::new(&config, io::stdout())?;

        Ok(ReplSession {
            editor,
            config,
            executor,
            history_path,
        })
    }

    /// Run the REPL event loop
    pub fn run(&mut self) -> Result<()> {
        logging::log_interactive_mode_start();
        self.print_welcome();

        let prompt = format!(
            "{}> ",
            Formatter::info(format!(
                "ttir-sync [{}]",
                self.config
                    .ir_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ))
        );

        loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line.clone());

                    match self.execute_command(&line) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => {
                            eprintln!("{}", Formatter::error(format!("Error: {}", e)));
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", Formatter::info("Use 'exit' or Ctrl+D to quit"));
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(e) => {
                    eprintln!("{}", Formatter::error(format!("Error: {}", e)));
                    break;
                }
            }
        }

        let _ = self.editor.save_history(&self.history_path);

        Ok(())
    }

    fn execute_command(&mut self, line: &str) -> Result<bool> {
        let cmd = ReplCommand::parse(line)?;
        if cmd == ReplCommand::History {
            self.print_history();
            return Ok(false);
        }
        self.executor.execute(cmd)
    }

    fn print_welcome(&self) {
        if Formatter::is_quiet() {
            return;
        }
        println!("{}", Formatter::success("=== ttir-sync ==="));
        println!(
            "{}",
            Formatter::info(format!("IR: {}", self.config.ir_path.display()))
        );
        if let Some(path) = self
            .executor
            .session()
            .result()
            .and_then(|result| result.source_file_path.as_deref())
        {
            println!("{}", Formatter::info(format!("Source: {}", path)));
        }
        println!("{}", Formatter::info("Type 'help' for available commands"));
        println!();
    }

    fn print_history(&self) {
        for (idx, item) in self.editor.history().iter().enumerate() {
            println!("  {}: {}", idx, item);
        }
    }
}
