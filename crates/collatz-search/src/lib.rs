//! # Collatz Search
//!
//! Search for a counterexample to the Collatz conjecture by scanning
//! contiguous blocks of odd seeds in parallel.
//!
//! ## Overview
//!
//! - **Partitioning**: the starting point is split into one equal block per
//!   worker; blocks never overlap and leave no gaps
//! - **Scanning**: each worker steps every odd seed of its block until the
//!   orbit drops below the seed or cycles back to it
//! - **Evidence**: per-block iteration totals, bound to the packet and the
//!   user's secret by a Blake3 authenticator
//! - **Aggregation**: workers are joined and their results combined
//!
//! Workers share nothing while running. The only synchronization point is the
//! final join.
//!
//! ## Usage
//!
//! ```rust
//! use collatz_search::{NullSink, Search, SearchConfig, StaticNode};
//! use collatz_search::core::NodeInfo;
//! use num_bigint::BigUint;
//!
//! let config = SearchConfig::default()
//!     .with_initial(BigUint::from(1001u32))
//!     .with_block_size(100)
//!     .with_workers(2);
//! let node = StaticNode(NodeInfo { workers: 2, ..NodeInfo::default() });
//!
//! let report = Search::new(config, node, NullSink).run().unwrap();
//! assert_eq!(report.summary.candidates, 100);
//! assert_eq!(report.reports.len(), 2);
//! ```
//!
//! ## Re-exports
//!
//! - `collatz_search::core` - Stepper, packets, partitioning, authenticators
//! - `collatz_search::engine` - Block scanning, sinks, node description

pub mod config;
pub mod error;
pub mod search;

pub use collatz_search_core as core;
pub use collatz_search_engine as engine;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use search::{Search, SearchPlan, SearchReport};

pub use collatz_search_core::{
    iterate, Partitioner, StepperConfig, UserCredentials, WorkEvidence, WorkPacket,
    WorkProgressReport, WorkStatus,
};
pub use collatz_search_engine::{
    LocalNode, NodeDescriber, NullSink, ProgressSink, SearchEvent, SearchSummary, StaticNode,
    TracingSink,
};
