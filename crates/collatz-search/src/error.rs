//! Error types for the search.

use collatz_search_core::PacketError;
use collatz_search_engine::NodeError;
use thiserror::Error;

/// Errors that can stop a search.
///
/// All of them happen before any worker starts, except `WorkerPanicked`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Partitioning or packet construction failed.
    #[error("packet error: {0}")]
    Packet(#[from] PacketError),

    /// The node could not be described.
    #[error("node error: {0}")]
    Node(#[from] NodeError),

    /// A worker thread panicked before producing its result.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
