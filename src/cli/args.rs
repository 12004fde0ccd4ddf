use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ttir-sync")]
#[command(about = "Map Triton IR lines to source lines and back", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print internal details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (default: ./.ttir-sync.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity from flags; `None` when neither flag was given
    pub fn verbosity_override(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the IR → source and source → IR line mappings
    Map(MapArgs),

    /// Look up a single line in either direction
    Lookup(LookupArgs),

    /// Print the source file referenced by the IR dump
    Source(SourceArgs),

    /// Start an interactive session with synchronized IR and source views
    Interactive(InteractiveArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the IR dump
    pub ir: PathBuf,

    /// Only print the IR → source direction
    #[arg(long, conflicts_with = "backward_only")]
    pub forward_only: bool,

    /// Only print the source → IR direction
    #[arg(long)]
    pub backward_only: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Path to the IR dump
    pub ir: PathBuf,

    /// IR line to map to source lines
    #[arg(long, value_name = "LINE", required_unless_present = "source_line", conflicts_with = "source_line")]
    pub ir_line: Option<u32>,

    /// Source line to map to IR lines
    #[arg(long, value_name = "LINE")]
    pub source_line: Option<u32>,
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Path to the IR dump
    pub ir: PathBuf,
}

#[derive(Parser)]
pub struct InteractiveArgs {
    /// Path to the IR dump
    pub ir: PathBuf,

    /// Do not open the source file on start
    #[arg(long)]
    pub no_open_source: bool,

    /// Lines shown on each side of a highlighted line
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            _ => Verbosity::Verbose,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }

    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }
}
