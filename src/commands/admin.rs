//! Admin commands (CLEAR, SIZE, INFO, HELP)

use super::{Command, CommandContext};
use crate::protocol::Reply;
use crate::store::StoreStats;
use serde::Serialize;

/// CLEAR command - Remove all keys
///
/// Syntax: CLEAR
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, ctx: &CommandContext, _args: &[String]) -> Reply {
        ctx.store.clear();
        Reply::Ok
    }

    fn name(&self) -> &'static str {
        "CLEAR"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["FLUSHDB"]
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// SIZE command - Number of stored keys
///
/// Syntax: SIZE
pub struct SizeCommand;

impl Command for SizeCommand {
    fn execute(&self, ctx: &CommandContext, _args: &[String]) -> Reply {
        Reply::integer(ctx.store.size() as i64)
    }

    fn name(&self) -> &'static str {
        "SIZE"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["DBSIZE"]
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[derive(Serialize)]
struct Info {
    version: &'static str,
    #[serde(flatten)]
    stats: StoreStats,
}

/// INFO command - Store statistics as JSON
///
/// Syntax: INFO
pub struct InfoCommand;

impl Command for InfoCommand {
    fn execute(&self, ctx: &CommandContext, _args: &[String]) -> Reply {
        let info = Info {
            version: env!("CARGO_PKG_VERSION"),
            stats: ctx.store.stats(),
        };

        match serde_json::to_string_pretty(&info) {
            Ok(json) => Reply::text(json),
            Err(e) => Reply::error(format!("ERR {}", e)),
        }
    }

    fn name(&self) -> &'static str {
        "INFO"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

const HELP_TEXT: &str = "\
Commands:
  SET <key> <value>   store a value (quote values with spaces: \"a b\")
  GET <key>           print a value, or (nil)
  DELETE <key>        remove a key (alias: DEL)
  EXISTS <key>        check whether a key is present
  KEYS [pattern]      list keys, optionally filtered (*, prefix*, *suffix, *infix*)
  CLEAR               remove every key (alias: FLUSHDB)
  SIZE                number of keys (alias: DBSIZE)
  INFO                store statistics
  HELP                this text
  EXIT                leave the shell (alias: QUIT)";

/// HELP command - Print the command reference
///
/// Syntax: HELP
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _ctx: &CommandContext, _args: &[String]) -> Reply {
        Reply::text(HELP_TEXT)
    }

    fn name(&self) -> &'static str {
        "HELP"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let ctx = CommandContext::new();
        ctx.store.set("key1", "value1").unwrap();
        ctx.store.set("key2", "value2").unwrap();
        assert_eq!(ctx.store.len(), 2);

        let result = ClearCommand.execute(&ctx, &[]);
        assert_eq!(result, Reply::Ok);

        assert_eq!(ctx.store.len(), 0);
        assert!(!ctx.store.exists("key1"));
    }

    #[test]
    fn test_size() {
        let ctx = CommandContext::new();
        assert_eq!(SizeCommand.execute(&ctx, &[]), Reply::integer(0));

        ctx.store.set("k", "v1").unwrap();
        ctx.store.set("k", "v2").unwrap();
        assert_eq!(SizeCommand.execute(&ctx, &[]), Reply::integer(1));
    }

    #[test]
    fn test_info() {
        let ctx = CommandContext::new();
        ctx.store.set("key1", "value1").unwrap();
        ctx.store.set("key2", "value2").unwrap();

        let Reply::Text(json) = InfoCommand.execute(&ctx, &[]) else {
            panic!("Expected text response");
        };

        let info: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(info["keys"], 2);
        assert_eq!(info["used_memory_bytes"], 20);
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_help_mentions_every_verb() {
        let Reply::Text(text) = HelpCommand.execute(&CommandContext::new(), &[]) else {
            panic!("Expected text response");
        };

        for verb in ["SET", "GET", "DELETE", "EXISTS", "KEYS", "CLEAR", "SIZE", "EXIT"] {
            assert!(text.contains(verb), "help is missing {}", verb);
        }
    }
}
