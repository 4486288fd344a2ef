//! Command execution context

use crate::store::MemoryStore;
use std::sync::Arc;

/// Context provided to commands during execution
///
/// The store is behind an `Arc` so that several contexts (one per shell
/// session, or per thread in tests) operate on the same data.
#[derive(Clone)]
pub struct CommandContext {
    /// The memory store
    pub store: Arc<MemoryStore>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        CommandContext {
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Create a context with a specific store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        CommandContext {
            store: Arc::new(MemoryStore::with_capacity(capacity)),
        }
    }

    /// Create a context over an existing store
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        CommandContext { store }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
