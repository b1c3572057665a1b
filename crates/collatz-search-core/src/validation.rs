//! Validation: seed-range checks and authenticator verification.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::crypto::Blake3Digest;
use crate::error::{AuthError, PacketError};
use crate::evidence::{
    authenticate, EvidenceClaim, UserCredentials, WorkAuthenticator, AUTHENTICATOR_VERSION_V1,
};
use crate::packet::WorkPacket;

/// Check that `[start, end)` is a valid packet range.
///
/// Rules:
/// - `start` is positive and odd
/// - `end >= start` (an empty range is allowed)
pub fn validate_seed_range(start: &BigUint, end: &BigUint) -> Result<(), PacketError> {
    if start.is_zero() {
        return Err(PacketError::ZeroStart);
    }
    if !start.bit(0) {
        return Err(PacketError::EvenStart(start.to_string()));
    }
    if end < start {
        return Err(PacketError::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// Verify an authenticator against the work it claims to cover.
///
/// This performs:
/// - Version dispatch (only `v1-blake3` is known)
/// - Secret version check against the verifier's credentials
/// - Digest decoding
/// - Constant-time digest comparison
pub fn verify_authenticator(
    credentials: &UserCredentials,
    packet: &WorkPacket,
    claim: &EvidenceClaim,
    authenticator: &WorkAuthenticator,
) -> Result<(), AuthError> {
    // 1. Version dispatch
    if authenticator.authenticator_version != AUTHENTICATOR_VERSION_V1 {
        return Err(AuthError::UnsupportedVersion(
            authenticator.authenticator_version.clone(),
        ));
    }

    // 2. Secret version
    if authenticator.user_secret_version != credentials.user_secret_version {
        return Err(AuthError::SecretVersionMismatch {
            expected: credentials.user_secret_version.clone(),
            got: authenticator.user_secret_version.clone(),
        });
    }

    // 3. Decode and compare
    let presented = Blake3Digest::from_base64(&authenticator.authenticator)?;
    let expected = authenticate(credentials, packet, claim);
    let expected = Blake3Digest::from_base64(&expected.authenticator)?;
    if presented != expected {
        return Err(AuthError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::WorkEvidence;
    use crate::types::{Nonce, PacketId};
    use chrono::{Duration, TimeZone, Utc};

    fn credentials() -> UserCredentials {
        UserCredentials::new("user-1", "1", "secret")
    }

    fn packet_with(id: &str, start: u64, end: u64) -> WorkPacket {
        WorkPacket::new(
            PacketId::from(id),
            Nonce::from("nonce"),
            BigUint::from(start),
            BigUint::from(end),
            Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap(),
            Duration::hours(1),
        )
        .unwrap()
    }

    fn claim() -> EvidenceClaim {
        EvidenceClaim::Completed(WorkEvidence::new(60, 30))
    }

    #[test]
    fn test_seed_range_rules() {
        let b = |n: u64| BigUint::from(n);
        assert!(validate_seed_range(&b(1), &b(1)).is_ok());
        assert!(validate_seed_range(&b(3), &b(103)).is_ok());
        assert_eq!(validate_seed_range(&b(0), &b(10)), Err(PacketError::ZeroStart));
        assert!(matches!(
            validate_seed_range(&b(4), &b(10)),
            Err(PacketError::EvenStart(_))
        ));
        assert!(matches!(
            validate_seed_range(&b(11), &b(9)),
            Err(PacketError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_accepts_own_authenticator() {
        let packet = packet_with("p", 101, 201);
        let auth = authenticate(&credentials(), &packet, &claim());
        assert!(verify_authenticator(&credentials(), &packet, &claim(), &auth).is_ok());
    }

    #[test]
    fn test_rejects_tampered_evidence() {
        let packet = packet_with("p", 101, 201);
        let auth = authenticate(&credentials(), &packet, &claim());
        let inflated = EvidenceClaim::Completed(WorkEvidence::new(61, 30));
        assert_eq!(
            verify_authenticator(&credentials(), &packet, &inflated, &auth),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn test_rejects_other_packet() {
        let packet = packet_with("p", 101, 201);
        let auth = authenticate(&credentials(), &packet, &claim());
        let moved = packet_with("p", 201, 301);
        let renamed = packet_with("q", 101, 201);
        assert_eq!(
            verify_authenticator(&credentials(), &moved, &claim(), &auth),
            Err(AuthError::Mismatch)
        );
        assert_eq!(
            verify_authenticator(&credentials(), &renamed, &claim(), &auth),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn test_rejects_unknown_version() {
        let packet = packet_with("p", 101, 201);
        let mut auth = authenticate(&credentials(), &packet, &claim());
        auth.authenticator_version = "v2-sha3".into();
        assert_eq!(
            verify_authenticator(&credentials(), &packet, &claim(), &auth),
            Err(AuthError::UnsupportedVersion("v2-sha3".into()))
        );
    }

    #[test]
    fn test_rejects_rotated_secret() {
        let packet = packet_with("p", 101, 201);
        let auth = authenticate(&credentials(), &packet, &claim());
        let rotated = UserCredentials::new("user-1", "2", "new-secret");
        assert!(matches!(
            verify_authenticator(&rotated, &packet, &claim(), &auth),
            Err(AuthError::SecretVersionMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let packet = packet_with("p", 101, 201);
        let mut auth = authenticate(&credentials(), &packet, &claim());
        auth.authenticator = "%%%".into();
        assert!(matches!(
            verify_authenticator(&credentials(), &packet, &claim(), &auth),
            Err(AuthError::MalformedDigest(_))
        ));
    }
}
