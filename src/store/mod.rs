//! In-memory storage module
//!
//! Provides the thread-safe key-value mapping.
//! This module is independent of parsing and command handling (loose coupling).

mod error;
mod memory;

pub use error::StoreError;
pub use memory::{MemoryStore, StoreStats};
