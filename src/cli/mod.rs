pub mod args;
pub mod commands;
pub mod output;

pub use args::{
    Cli, Commands, CompletionsArgs, InteractiveArgs, LookupArgs, MapArgs, OutputFormat,
    SourceArgs, Verbosity,
};
pub use commands::CommandContext;
