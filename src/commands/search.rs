//! Search commands (KEYS)

use super::{Command, CommandContext, wrong_arity};
use crate::protocol::Reply;

/// KEYS command - List keys, optionally filtered by a pattern
///
/// Syntax: KEYS [pattern]
///
/// Supported patterns:
/// - * : matches all keys (the default)
/// - prefix* : matches keys starting with prefix
/// - *suffix : matches keys ending with suffix
/// - *pattern* : matches keys containing pattern
pub struct KeysCommand;

impl Command for KeysCommand {
    fn execute(&self, ctx: &CommandContext, args: &[String]) -> Reply {
        let pattern = match args {
            [] => "*",
            [pattern] => pattern.as_str(),
            _ => return wrong_arity(self.name()),
        };

        // One snapshot, filtered and sorted outside the lock
        let mut keys: Vec<String> = ctx
            .store
            .keys()
            .into_iter()
            .filter(|key| matches_pattern(key, pattern))
            .collect();
        keys.sort_unstable();

        Reply::List(keys)
    }

    fn name(&self) -> &'static str {
        "KEYS"
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// Check if a key matches a pattern
fn matches_pattern(key: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    match (pattern.strip_prefix('*'), pattern.strip_suffix('*')) {
        (Some(rest), Some(_)) => {
            // *pattern* : contains
            let inner = rest.strip_suffix('*').unwrap_or(rest);
            key.contains(inner)
        }
        (Some(suffix), None) => key.ends_with(suffix),
        (None, Some(prefix)) => key.starts_with(prefix),
        (None, None) => key == pattern,
    }
}
