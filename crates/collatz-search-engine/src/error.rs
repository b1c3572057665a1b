//! Error types for the engine.

use thiserror::Error;

/// Errors that can occur while describing the node.
///
/// All of them are fatal: the search cannot be partitioned without a node
/// description.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Worker count must be at least one.
    #[error("invalid worker count: {0}")]
    InvalidWorkerCount(usize),

    /// Hostname could not be read.
    #[error("cannot read hostname: {0}")]
    Hostname(#[from] std::io::Error),
}
