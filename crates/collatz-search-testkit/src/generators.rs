//! Proptest generators for property-based testing.

use chrono::{Duration, TimeZone, Utc};
use num_bigint::BigUint;
use proptest::prelude::*;

use collatz_search_core::{
    EvidenceClaim, Nonce, PacketId, UserCredentials, WorkEvidence, WorkPacket,
};

/// Odd seed below 2^64.
pub fn odd_seed() -> impl Strategy<Value = BigUint> {
    any::<u64>().prop_map(|n| BigUint::from(n | 1))
}

/// Odd seed of up to `max_bits` bits, spilling past the `u128` fast path when
/// `max_bits > 128`.
pub fn wide_odd_seed(max_bits: usize) -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u32>(), 1..=max_bits.div_ceil(32).max(1)).prop_map(move |digits| {
        let mut seed = BigUint::new(digits);
        if seed.bits() as usize > max_bits {
            seed >>= seed.bits() as usize - max_bits;
        }
        seed.set_bit(0, true);
        seed
    })
}

/// Even, positive block size.
pub fn block_size() -> impl Strategy<Value = u64> {
    (1u64..=50_000).prop_map(|half| half * 2)
}

/// Identifier-like string without colons.
pub fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}".prop_map(String::from)
}

pub fn credentials() -> impl Strategy<Value = UserCredentials> {
    (token(), token(), token()).prop_map(|(id, version, secret)| UserCredentials::new(id, version, secret))
}

pub fn evidence() -> impl Strategy<Value = WorkEvidence> {
    (any::<u64>(), any::<u64>()).prop_map(|(total, max)| WorkEvidence::new(total, max))
}

pub fn claim() -> impl Strategy<Value = EvidenceClaim> {
    prop_oneof![
        Just(EvidenceClaim::InProgress),
        evidence().prop_map(EvidenceClaim::Completed),
    ]
}

/// Valid packet with random identity, odd start and even width.
pub fn packet() -> impl Strategy<Value = WorkPacket> {
    (token(), token(), odd_seed(), 0u64..=1_000_000, 0i64..=4_000_000_000).prop_map(
        |(id, nonce, start, half_width, secs)| {
            let end = &start + BigUint::from(half_width * 2);
            let assigned_on = Utc.timestamp_opt(secs, 0).single().unwrap_or_default();
            WorkPacket::new(
                PacketId::new(id),
                Nonce::new(nonce),
                start,
                end,
                assigned_on,
                Duration::hours(24),
            )
            .unwrap_or_else(|e| panic!("generator produced invalid packet: {e}"))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use collatz_search_core::{authenticate, iterate, iterate_big, verify_authenticator, StepperConfig};

    proptest! {
        #[test]
        fn test_generated_packets_are_valid(p in packet()) {
            prop_assert!(p.starting_value().bit(0));
            prop_assert!(p.ending_value() >= p.starting_value());
        }

        #[test]
        fn test_wide_seed_fast_path_matches(seed in wide_odd_seed(160)) {
            let config = StepperConfig::default();
            prop_assert_eq!(iterate(&seed, &config), iterate_big(&seed, &config));
        }

        #[test]
        fn test_authenticate_then_verify(c in credentials(), p in packet(), claim in claim()) {
            let auth = authenticate(&c, &p, &claim);
            prop_assert!(verify_authenticator(&c, &p, &claim, &auth).is_ok());
        }

        #[test]
        fn test_authenticator_sensitive_to_secret(
            c in credentials(),
            other in token(),
            p in packet(),
            claim in claim(),
        ) {
            prop_assume!(other != c.user_secret);
            let auth = authenticate(&c, &p, &claim);
            let wrong = UserCredentials::new(c.user_id.clone(), c.user_secret_version.clone(), other);
            prop_assert!(verify_authenticator(&wrong, &p, &claim, &auth).is_err());
        }
    }
}
