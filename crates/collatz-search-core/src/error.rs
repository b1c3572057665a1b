//! Error types for the Collatz Search Core.

use thiserror::Error;

/// Errors raised when building or partitioning work packets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("starting value must be positive")]
    ZeroStart,

    #[error("starting value {0} is even")]
    EvenStart(String),

    #[error("ending value {end} is below starting value {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("block size must be a positive even number, got {0}")]
    InvalidBlockSize(u64),

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("expiry overflows the representable time range")]
    ExpiryOverflow,

    #[error("malformed integer: {0}")]
    MalformedInteger(String),
}

/// Errors raised when verifying a work authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("unsupported authenticator version: {0}")]
    UnsupportedVersion(String),

    #[error("secret version mismatch: expected {expected}, got {got}")]
    SecretVersionMismatch { expected: String, got: String },

    #[error("malformed digest: {0}")]
    MalformedDigest(String),

    #[error("authenticator does not match the claimed work")]
    Mismatch,

    #[error("{status} report carries evidence; only completed reports may")]
    UnexpectedEvidence { status: String },
}
