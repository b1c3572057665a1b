//! Canonical authenticator message.
//!
//! The `v1-blake3` scheme hashes the UTF-8 bytes of a single colon-joined
//! string, in this exact order:
//!
//! ```text
//! id:nonce:start:end:userID:userSecretVersion:userSecret:evidence
//! ```
//!
//! where `start` and `end` are base-10 and `evidence` is either
//! `totalIterations:maxIterations` or the literal `in-progress`.
//!
//! Any change to this layout is a new authenticator version.

use std::fmt::Write;

use crate::evidence::{EvidenceClaim, UserCredentials, IN_PROGRESS_MARKER};
use crate::packet::WorkPacket;

/// Build the canonical string hashed by the `v1-blake3` authenticator.
pub fn authenticator_message(
    credentials: &UserCredentials,
    packet: &WorkPacket,
    claim: &EvidenceClaim,
) -> String {
    let mut msg = String::with_capacity(128);
    // Writing to a String cannot fail.
    let _ = write!(
        msg,
        "{}:{}:{}:{}:{}:{}:{}:",
        packet.id(),
        packet.nonce(),
        packet.starting_value(),
        packet.ending_value(),
        credentials.user_id,
        credentials.user_secret_version,
        credentials.user_secret,
    );
    match claim {
        EvidenceClaim::Completed(evidence) => {
            let _ = write!(
                msg,
                "{}:{}",
                evidence.total_iterations, evidence.max_iterations
            );
        }
        EvidenceClaim::InProgress => msg.push_str(IN_PROGRESS_MARKER),
    }
    msg
}
