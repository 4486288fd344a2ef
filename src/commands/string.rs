//! String commands (SET, GET)

use super::{Command, CommandContext, wrong_arity};
use crate::protocol::Reply;

/// SET command - Set a key to a value
///
/// Syntax: SET key value
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply {
        let [key, value] = args else {
            return wrong_arity(self.name());
        };

        match ctx.store.set(key.as_str(), value.as_str()) {
            Ok(()) => Reply::Ok,
            Err(e) => Reply::error(format!("ERR {}", e)),
        }
    }

    fn name(&self) -> &'static str {
        "SET"
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// GET command - Get the value of a key
///
/// Syntax: GET key
pub struct GetCommand;

impl Command for GetCommand {
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply {
        let [key] = args else {
            return wrong_arity(self.name());
        };

        match ctx.store.get(key) {
            Some(value) => Reply::Value(value),
            None => Reply::Nil,
        }
    }

    fn name(&self) -> &'static str {
        "GET"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
