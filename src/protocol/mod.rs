//! Shell line protocol
//!
//! This module handles tokenizing input lines and rendering replies.
//! It is completely independent from other modules (loose coupling).

mod types;
mod line;

pub use types::{Reply, ProtocolError};
pub use line::LineParser;
