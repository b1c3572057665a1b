//! # Collatz Search Core
//!
//! Pure primitives for the Collatz search: the stepper, work packets,
//! range partitioning, and evidence authenticators.
//!
//! This crate contains no threads, no I/O, no logging. It is pure computation
//! over arbitrary-precision integers and the data shapes exchanged with a
//! coordinator.
//!
//! ## Key Types
//!
//! - [`WorkPacket`] - A half-open range of odd seeds assigned to one worker
//! - [`Partitioner`] - Splits a starting point into equal contiguous packets
//! - [`WorkEvidence`] - Iteration statistics proving a packet was computed
//! - [`WorkAuthenticator`] - Versioned Blake3 digest binding packet, evidence and credentials
//! - [`WorkProgressReport`] - The status message a worker would send back
//!
//! ## Stepper
//!
//! [`iterate`] runs the Collatz transition from a seed until the value drops
//! below the seed or returns to it. See [`stepper`] module.

pub mod canonical;
pub mod crypto;
pub mod decimal;
pub mod error;
pub mod evidence;
pub mod node;
pub mod packet;
pub mod partition;
pub mod report;
pub mod stepper;
pub mod types;
pub mod validation;

pub use canonical::authenticator_message;
pub use crypto::Blake3Digest;
pub use error::{AuthError, PacketError};
pub use evidence::{
    authenticate, EvidenceClaim, UserCredentials, WorkAuthenticator, WorkEvidence,
    AUTHENTICATOR_VERSION_V1, IN_PROGRESS_MARKER,
};
pub use node::{CpuInfo, HostInfo, NodeInfo};
pub use packet::WorkPacket;
pub use partition::{Partitioner, DEFAULT_BLOCK_SIZE, DEFAULT_PACKET_TTL_HOURS};
pub use report::{WorkProgressReport, WorkStatus};
pub use stepper::{iterate, iterate_big, step, StepOutcome, StepperConfig};
pub use types::{Nonce, PacketId};
pub use validation::{validate_seed_range, verify_authenticator};
