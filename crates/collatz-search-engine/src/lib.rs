//! # Collatz Search Engine
//!
//! Drives the stepper across work packets.
//!
//! ## Overview
//!
//! - [`scan_packet`] walks every odd seed of one packet, accumulating
//!   [`WorkEvidence`](collatz_search_core::WorkEvidence) and the seeds that
//!   cycled back to themselves
//! - [`aggregate`] joins per-worker outcomes into a [`SearchSummary`]
//! - [`ProgressSink`] receives progress and result events; [`TracingSink`]
//!   renders them as log lines
//! - [`NodeDescriber`] describes the host; [`LocalNode`] reads it from the OS
//!
//! Scanning is a plain CPU-bound loop. It never yields, never locks, and shares
//! nothing with other workers; the caller decides how workers are scheduled.
//!
//! ## Usage
//!
//! ```rust
//! use collatz_search_core::{Nonce, PacketId, Partitioner};
//! use collatz_search_engine::{aggregate, scan_packet, NullSink, ScanConfig};
//! use num_bigint::BigUint;
//!
//! let packets = Partitioner::new(BigUint::from(1001u32), 100)
//!     .unwrap()
//!     .split_with(2, chrono::Utc::now(), |k| {
//!         (PacketId::new(format!("p{k}")), Nonce::new("n"))
//!     })
//!     .unwrap();
//!
//! let outcomes: Vec<_> = packets
//!     .iter()
//!     .enumerate()
//!     .map(|(id, p)| scan_packet(id, p, &ScanConfig::default(), &NullSink))
//!     .collect();
//!
//! let summary = aggregate(&outcomes);
//! assert_eq!(summary.candidates, 100);
//! ```

pub mod aggregate;
pub mod error;
pub mod node;
pub mod scan;
pub mod sink;

pub use aggregate::{aggregate, SearchSummary};
pub use error::NodeError;
pub use node::{LocalNode, NodeDescriber, StaticNode};
pub use scan::{scan_packet, throughput, ScanConfig, WorkerOutcome, DEFAULT_PROGRESS_INTERVAL};
pub use sink::{NullSink, ProgressSink, SearchEvent, TracingSink};
