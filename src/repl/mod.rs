/// Interactive REPL mode for synchronized IR and source views
///
/// Provides a Read-Eval-Print Loop in which moving the cursor in one view
/// highlights the corresponding lines in the other.
pub mod commands;
pub mod executor;
pub mod session;

pub use commands::{ReplCommand, View};
pub use executor::ReplExecutor;
pub use session::ReplSession;

use crate::Result;
use std::path::PathBuf;

/// Configuration for starting the REPL
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub ir_path: PathBuf,
    pub open_source: bool,
    pub context_lines: usize,
}

/// Start the REPL interactive session
pub fn start_repl(config: ReplConfig) -> Result<()> {
    let mut session = ReplSession::new(config)?;
    session.run()
}
