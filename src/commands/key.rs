//! Key commands (DELETE, EXISTS)

use super::{Command, CommandContext, wrong_arity};
use crate::protocol::Reply;

/// DELETE command - Delete a key
///
/// Syntax: DELETE key
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply {
        let [key] = args else {
            return wrong_arity(self.name());
        };

        Reply::Bool(ctx.store.delete(key))
    }

    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["DEL"]
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// EXISTS command - Check if a key exists
///
/// Syntax: EXISTS key
pub struct ExistsCommand;

impl Command for ExistsCommand {
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply {
        let [key] = args else {
            return wrong_arity(self.name());
        };

        Reply::Bool(ctx.store.exists(key))
    }

    fn name(&self) -> &'static str {
        "EXISTS"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
