//! Command execution module
//!
//! Provides a unified interface for all commands through the Command trait.
//! Commands are grouped by concern, one file per group.

mod context;
mod registry;

// Command implementations
mod string;
mod key;
mod search;
mod admin;

pub use context::CommandContext;
pub use registry::CommandRegistry;

use crate::protocol::Reply;

/// Command execution trait
///
/// All commands implement this trait with a single execute method.
/// This provides loose coupling between command implementations and the dispatcher.
pub trait Command: Send + Sync {
    /// Execute the command with the given context and arguments
    ///
    /// Arguments:
    /// - ctx: the command context (holds the shared store)
    /// - args: command arguments (excluding the command name itself)
    ///
    /// Returns:
    /// - Reply to print back to the shell
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply;

    /// Get the command name (for debugging/logging)
    fn name(&self) -> &'static str;

    /// Other names the command answers to
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Get the minimum number of arguments required
    fn min_args(&self) -> usize {
        0
    }

    /// Get the maximum number of arguments (None = unlimited)
    fn max_args(&self) -> Option<usize> {
        None
    }
}

/// Build the standard wrong-arity error for a command
pub(crate) fn wrong_arity(name: &str) -> Reply {
    Reply::error(format!("ERR wrong number of arguments for '{}' command", name))
}
