//! Golden test vectors.
//!
//! Stopping times and block totals pin the stepper; message vectors pin the
//! canonical authenticator layout byte for byte.

use chrono::{Duration, TimeZone, Utc};
use num_bigint::BigUint;

use collatz_search_core::{
    EvidenceClaim, Nonce, PacketId, UserCredentials, WorkEvidence, WorkPacket,
};

/// Number of steps before a seed's orbit drops below it.
#[derive(Debug, Clone, Copy)]
pub struct StoppingTime {
    pub seed: u64,
    pub iterations: u64,
}

/// Known stopping times.
pub fn stopping_times() -> Vec<StoppingTime> {
    [
        (3, 6),
        (5, 3),
        (7, 11),
        (9, 3),
        (11, 8),
        (15, 11),
        (27, 96),
        (31, 91),
        (97, 3),
        (255, 21),
        (703, 132),
        (871, 57),
        (6171, 94),
    ]
    .into_iter()
    .map(|(seed, iterations)| StoppingTime { seed, iterations })
    .collect()
}

/// Expected evidence for one block.
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    pub name: &'static str,
    pub start: u64,
    pub end: u64,
    pub candidates: u64,
    pub total_iterations: u64,
    pub max_iterations: u64,
}

impl BlockVector {
    pub fn evidence(&self) -> WorkEvidence {
        WorkEvidence::new(self.total_iterations, self.max_iterations)
    }
}

/// The first two 100-wide blocks above 2^40.
pub fn bit40_blocks() -> Vec<BlockVector> {
    vec![
        BlockVector {
            name: "2^40+1, first block",
            start: 1_099_511_627_777,
            end: 1_099_511_627_877,
            candidates: 50,
            total_iterations: 843,
            max_iterations: 132,
        },
        BlockVector {
            name: "2^40+1, second block",
            start: 1_099_511_627_877,
            end: 1_099_511_627_977,
            candidates: 50,
            total_iterations: 542,
            max_iterations: 70,
        },
    ]
}

/// A canonical authenticator message and its inputs.
#[derive(Debug, Clone)]
pub struct MessageVector {
    pub name: &'static str,
    pub packet_id: &'static str,
    pub nonce: &'static str,
    pub start: u64,
    pub end: u64,
    pub user_id: &'static str,
    pub user_secret_version: &'static str,
    pub user_secret: &'static str,
    /// `None` for an in-progress claim.
    pub evidence: Option<(u64, u64)>,
    pub expected_message: &'static str,
}

impl MessageVector {
    pub fn credentials(&self) -> UserCredentials {
        UserCredentials::new(self.user_id, self.user_secret_version, self.user_secret)
    }

    /// Panics if the vector's range is invalid.
    pub fn packet(&self) -> WorkPacket {
        WorkPacket::new(
            PacketId::new(self.packet_id),
            Nonce::new(self.nonce),
            BigUint::from(self.start),
            BigUint::from(self.end),
            Utc.timestamp_opt(0, 0).single().unwrap_or_default(),
            Duration::hours(24),
        )
        .unwrap_or_else(|e| panic!("invalid vector {}: {e}", self.name))
    }

    pub fn claim(&self) -> EvidenceClaim {
        match self.evidence {
            Some((total, max)) => EvidenceClaim::Completed(WorkEvidence::new(total, max)),
            None => EvidenceClaim::InProgress,
        }
    }
}

/// Get all message vectors.
pub fn message_vectors() -> Vec<MessageVector> {
    vec![
        MessageVector {
            name: "completed bit40 block",
            packet_id: "5f0c6a1e",
            nonce: "b7d2",
            start: 1_099_511_627_777,
            end: 1_099_511_627_877,
            user_id: "alice",
            user_secret_version: "v7",
            user_secret: "s3cret",
            evidence: Some((843, 132)),
            expected_message: "5f0c6a1e:b7d2:1099511627777:1099511627877:alice:v7:s3cret:843:132",
        },
        MessageVector {
            name: "running block",
            packet_id: "5f0c6a1e",
            nonce: "b7d2",
            start: 1_099_511_627_777,
            end: 1_099_511_627_877,
            user_id: "alice",
            user_secret_version: "v7",
            user_secret: "s3cret",
            evidence: None,
            expected_message: "5f0c6a1e:b7d2:1099511627777:1099511627877:alice:v7:s3cret:in-progress",
        },
        MessageVector {
            name: "empty secret",
            packet_id: "p",
            nonce: "n",
            start: 1,
            end: 1,
            user_id: "anonymous",
            user_secret_version: "1",
            user_secret: "",
            evidence: Some((0, 0)),
            expected_message: "p:n:1:1:anonymous:1::0:0",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use collatz_search_core::{authenticate, authenticator_message, iterate, verify_authenticator, StepperConfig};

    #[test]
    fn test_stopping_times() {
        let config = StepperConfig::default();
        for vector in stopping_times() {
            let outcome = iterate(&BigUint::from(vector.seed), &config);
            assert_eq!(outcome.iterations, vector.iterations, "seed {}", vector.seed);
            assert!(!outcome.interesting);
        }
    }

    #[test]
    fn test_message_vectors() {
        for vector in message_vectors() {
            let msg = authenticator_message(&vector.credentials(), &vector.packet(), &vector.claim());
            assert_eq!(msg, vector.expected_message, "{}", vector.name);
        }
    }

    #[test]
    fn test_message_vectors_verify() {
        for vector in message_vectors() {
            let credentials = vector.credentials();
            let packet = vector.packet();
            let auth = authenticate(&credentials, &packet, &vector.claim());
            verify_authenticator(&credentials, &packet, &vector.claim(), &auth)
                .unwrap_or_else(|e| panic!("{}: {e}", vector.name));
        }
    }

    #[test]
    fn test_block_vectors_are_contiguous() {
        let blocks = bit40_blocks();
        assert_eq!(blocks[0].end, blocks[1].start);
        for block in &blocks {
            assert_eq!((block.end - block.start) / 2, block.candidates, "{}", block.name);
        }
    }
}
