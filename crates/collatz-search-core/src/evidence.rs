//! Evidence and authenticators: proof that a work packet was computed.
//!
//! A worker proves it scanned a packet by reporting the total and maximum
//! iteration counts it observed. The authenticator binds those numbers to the
//! packet and to the user's secret, so a coordinator holding the same secret
//! can detect fabricated or altered reports.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::authenticator_message;
use crate::crypto::Blake3Digest;
use crate::packet::WorkPacket;

/// The current authenticator scheme: canonical colon-joined string, Blake3, base64.
pub const AUTHENTICATOR_VERSION_V1: &str = "v1-blake3";

/// Evidence field of the canonical string for work that is not completed.
pub const IN_PROGRESS_MARKER: &str = "in-progress";

/// Iteration statistics for a completed packet.
///
/// Zero for any report whose status is not `completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEvidence {
    /// Sum of the iteration counts of every seed in the packet.
    pub total_iterations: u64,
    /// Largest iteration count of any single seed in the packet.
    pub max_iterations: u64,
}

impl WorkEvidence {
    pub fn new(total_iterations: u64, max_iterations: u64) -> Self {
        Self {
            total_iterations,
            max_iterations,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_iterations == 0 && self.max_iterations == 0
    }
}

/// What an authenticator vouches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceClaim {
    /// Work not yet complete; hashed as [`IN_PROGRESS_MARKER`].
    InProgress,
    /// Final statistics for the packet.
    Completed(WorkEvidence),
}

/// User identity and shared secret used to key authenticators.
///
/// Only `user_secret` is confidential. Rotating it bumps
/// `user_secret_version`, which is echoed in every authenticator so older
/// submissions stay distinguishable.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub user_secret_version: String,
    pub user_secret: String,
}

impl UserCredentials {
    pub fn new(
        user_id: impl Into<String>,
        user_secret_version: impl Into<String>,
        user_secret: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_secret_version: user_secret_version.into(),
            user_secret: user_secret.into(),
        }
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user_id", &self.user_id)
            .field("user_secret_version", &self.user_secret_version)
            .field("user_secret", &"<redacted>")
            .finish()
    }
}

/// A versioned digest over packet, credentials and evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthenticator {
    pub authenticator_version: String,
    pub user_secret_version: String,
    /// Base64 of the digest.
    pub authenticator: String,
}

/// Compute the authenticator for `claim` over `packet`.
///
/// Deterministic: no randomness, no clock.
pub fn authenticate(
    credentials: &UserCredentials,
    packet: &WorkPacket,
    claim: &EvidenceClaim,
) -> WorkAuthenticator {
    let message = authenticator_message(credentials, packet, claim);
    let digest = Blake3Digest::hash(message.as_bytes());
    WorkAuthenticator {
        authenticator_version: AUTHENTICATOR_VERSION_V1.to_string(),
        user_secret_version: credentials.user_secret_version.clone(),
        authenticator: digest.to_base64(),
    }
}
