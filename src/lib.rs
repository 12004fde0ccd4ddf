pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod mapping;
pub mod repl;
pub mod ui;
use miette::Diagnostic;

pub use editor::{EditorHost, SyncSession};
pub use mapping::{parse_locations, LineMapping, ParseResult};

/// Result type alias for ttir-sync
pub type Result<T> = miette::Result<T>;

/// Error types for ttir-sync
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SyncError {
    #[error("Failed to read IR artifact: {0}")]
    #[diagnostic(
        code(ttir_sync::artifact_read_failed),
        help("Make sure the path points to a readable Triton IR dump, e.g. one written with MLIR_ENABLE_DUMP=1 or from the kernel's `asm[\"ttir\"]`.")
    )]
    ArtifactRead(String),

    #[error("No source file found in the IR file: {0}")]
    #[diagnostic(
        code(ttir_sync::missing_source_file),
        help("The dump needs a bare `#loc = loc(\"<path>\":<line>:<col>)` anchor. Dumps produced without debug locations cannot be mapped back to source.")
    )]
    MissingSourceFile(String),

    #[error("Invalid line number: {0}")]
    #[diagnostic(
        code(ttir_sync::invalid_line),
        help("Line numbers are 1-based positive integers.")
    )]
    InvalidLine(String),

    #[error("Invalid command: {0}")]
    #[diagnostic(
        code(ttir_sync::invalid_command),
        help("Type 'help' for the list of available commands.")
    )]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(ttir_sync::config_error),
        help("Check the syntax of .ttir-sync.toml or the file passed with --config.")
    )]
    ConfigError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(ttir_sync::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
