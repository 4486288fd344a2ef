//! FerrumKV - A small thread-safe in-memory key-value store with a command shell
//!
//! FerrumKV is designed with strong cohesion and loose coupling principles:
//! - Each module has a single, well-defined responsibility
//! - Modules communicate through clear, minimal interfaces
//! - No circular dependencies between modules

pub mod config;
pub mod protocol;
pub mod store;
pub mod commands;
pub mod dispatch;
pub mod shell;

/// Re-export commonly used types
pub use config::Config;
pub use store::{MemoryStore, StoreError, StoreStats};
pub use protocol::{Reply, LineParser, ProtocolError};
pub use commands::{Command, CommandContext};
pub use dispatch::Dispatcher;
