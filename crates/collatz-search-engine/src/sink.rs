//! Progress sinks: where search events go.
//!
//! Emission is fire-and-forget. A sink never fails the computation and has no
//! effect on results.

use num_bigint::BigUint;
use tracing::{info, warn};

use collatz_search_core::WorkEvidence;

use crate::aggregate::SearchSummary;

/// Something worth telling the operator about.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Periodic observation from a running worker.
    Progress {
        worker_id: usize,
        current: BigUint,
        bit_len: u64,
        total_iterations: u64,
        /// Integers advanced per second since the scan started.
        rate: f64,
    },

    /// A seed whose orbit returned to itself.
    CycleFound { worker_id: usize, seed: BigUint },

    /// A worker finished its packet.
    BlockCompleted {
        worker_id: usize,
        start: BigUint,
        end: BigUint,
        /// Last seed tested, if any.
        last: Option<BigUint>,
        candidates: u64,
        evidence: WorkEvidence,
        rate: f64,
        interesting: Vec<BigUint>,
    },

    /// All workers joined.
    Summary(SearchSummary),
}

/// Receives search events.
///
/// Shared by every worker, so implementations must be thread-safe.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: &SearchEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&SearchEvent) + Send + Sync,
{
    fn emit(&self, event: &SearchEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _event: &SearchEvent) {}
}

/// Renders events as `tracing` lines prefixed by the worker id.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn emit(&self, event: &SearchEvent) {
        match event {
            SearchEvent::Progress {
                worker_id,
                current,
                bit_len,
                total_iterations,
                rate,
            } => {
                info!(
                    "{:04}: bitlen {} testing {}, totalIterations {}, rate {:.5}",
                    worker_id, bit_len, current, total_iterations, rate
                );
            }
            SearchEvent::CycleFound { worker_id, seed } => {
                warn!("{:04}: found a loop back to starting value: {}", worker_id, seed);
            }
            SearchEvent::BlockCompleted {
                worker_id,
                start,
                end,
                last,
                candidates,
                evidence,
                rate,
                interesting,
            } => {
                let last = last.as_ref().map(ToString::to_string).unwrap_or_default();
                info!(
                    "{:04}: block completed [{}, {}) last {} candidates {} totalIterations {} max {} rate {:.5}",
                    worker_id,
                    start,
                    end,
                    last,
                    candidates,
                    evidence.total_iterations,
                    evidence.max_iterations,
                    rate
                );
                if !interesting.is_empty() {
                    warn!("{:04}: interesting: {}", worker_id, join(interesting));
                }
            }
            SearchEvent::Summary(summary) => {
                info!(
                    "search complete: workers {} candidates {} totalIterations {} max {} average {:.6}",
                    summary.workers,
                    summary.candidates,
                    summary.total_iterations,
                    summary.max_iterations,
                    summary.average_iterations()
                );
                info!("interesting: [{}]", join(&summary.interesting));
            }
        }
    }
}

fn join(seeds: &[BigUint]) -> String {
    seeds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |event: &SearchEvent| seen.lock().unwrap().push(event.clone());
        sink.emit(&SearchEvent::CycleFound {
            worker_id: 1,
            seed: BigUint::from(7u32),
        });
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_every_event() {
        let sink = TracingSink;
        sink.emit(&SearchEvent::Progress {
            worker_id: 0,
            current: BigUint::from(101u32),
            bit_len: 7,
            total_iterations: 10,
            rate: 1.5,
        });
        sink.emit(&SearchEvent::BlockCompleted {
            worker_id: 0,
            start: BigUint::from(101u32),
            end: BigUint::from(201u32),
            last: None,
            candidates: 0,
            evidence: WorkEvidence::default(),
            rate: 0.0,
            interesting: vec![BigUint::from(1u32)],
        });
        sink.emit(&SearchEvent::Summary(SearchSummary::default()));
    }

    #[test]
    fn test_join() {
        let seeds = [BigUint::from(1u32), BigUint::from(3u32)];
        assert_eq!(join(&seeds), "1, 3");
        assert_eq!(join(&[]), "");
    }
}
