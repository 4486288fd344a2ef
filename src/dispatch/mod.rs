//! Command dispatcher
//!
//! Routes tokenized shell lines to the appropriate handler.
//! This module provides loose coupling between the shell and command implementations.

use crate::commands::{CommandContext, CommandRegistry};
use crate::protocol::Reply;
use crate::store::MemoryStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Command dispatcher
///
/// Receives tokenized commands, validates them, and routes to appropriate handlers
pub struct Dispatcher {
    /// Command registry
    registry: CommandRegistry,

    /// Command execution context
    context: CommandContext,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::new(),
        }
    }

    /// Create a dispatcher with specified store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::with_capacity(capacity),
        }
    }

    /// Create a dispatcher over a store shared with other dispatchers
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::with_store(store),
        }
    }

    /// Dispatch a command
    ///
    /// The first token is the command name, the rest are its arguments.
    pub fn dispatch(&self, tokens: &[String]) -> Reply {
        let Some((cmd_name, cmd_args)) = tokens.split_first() else {
            return Reply::error("ERR empty command");
        };

        debug!("Dispatching command: {}", cmd_name);

        // Look up the command
        let command = match self.registry.get(cmd_name) {
            Some(cmd) => cmd,
            None => {
                warn!("Unknown command: {}", cmd_name);
                return Reply::error(format!("ERR unknown command '{}'", cmd_name));
            }
        };

        // Validate argument count
        let too_few = cmd_args.len() < command.min_args();
        let too_many = command.max_args().is_some_and(|max| cmd_args.len() > max);
        if too_few || too_many {
            return Reply::error(format!(
                "ERR wrong number of arguments for '{}' command",
                cmd_name
            ));
        }

        // Execute the command
        command.execute(&self.context, cmd_args)
    }

    /// Get reference to the context (for testing/inspection)
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Get the shared store handle
    pub fn store(&self) -> Arc<MemoryStore> {
        Arc::clone(&self.context.store)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
