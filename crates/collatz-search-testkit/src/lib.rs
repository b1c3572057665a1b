//! # Collatz Search Testkit
//!
//! Testing utilities for the Collatz search.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known stopping times and authenticator messages
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A fixed clock, credentials, packet builders and a sink that
//!   records every event
//!
//! ## Golden Vectors
//!
//! ```rust
//! use collatz_search_core::{iterate, StepperConfig};
//! use collatz_search_testkit::vectors::stopping_times;
//! use num_bigint::BigUint;
//!
//! for vector in stopping_times() {
//!     let outcome = iterate(&BigUint::from(vector.seed), &StepperConfig::default());
//!     assert_eq!(outcome.iterations, vector.iterations, "seed {}", vector.seed);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use collatz_search_testkit::generators::odd_seed;
//!
//! proptest! {
//!     #[test]
//!     fn iterate_is_deterministic(seed in odd_seed()) {
//!         let config = StepperConfig::default();
//!         prop_assert_eq!(iterate(&seed, &config), iterate(&seed, &config));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use collatz_search_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let packet = fixture.packet(101, 201);
//! assert_eq!(packet.candidate_count_u64(), Some(50));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{RecordingSink, TestFixture};
