//! Worker engine: scan every odd seed of one packet.
//!
//! The scan covers `[starting_value, ending_value)` in steps of 2 and stops
//! as soon as `current >= ending_value`. It runs to completion; there is no
//! partial result and no checkpoint.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::time::{Duration, Instant};

use collatz_search_core::{iterate, StepperConfig, WorkEvidence, WorkPacket};

use crate::sink::{ProgressSink, SearchEvent};

/// Seeds between two progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000_000;

/// Per-worker scan settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub stepper: StepperConfig,
    /// Emit a progress event every this many seeds (0 disables).
    pub progress_interval: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            stepper: StepperConfig::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// What one worker found in its packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub worker_id: usize,
    pub evidence: WorkEvidence,
    /// Interesting seeds in discovery (ascending) order.
    pub interesting: Vec<BigUint>,
    /// Number of seeds tested.
    pub candidates: u64,
    /// Last seed tested.
    pub last: Option<BigUint>,
    pub elapsed: Duration,
}

impl WorkerOutcome {
    /// Mean iterations per tested seed (0 for an empty packet).
    pub fn average_iterations(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.evidence.total_iterations as f64 / self.candidates as f64
    }
}

/// Integers advanced past `start` per second.
pub fn throughput(start: &BigUint, current: &BigUint, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 || current <= start {
        return 0.0;
    }
    let advanced = (current - start).to_f64().unwrap_or(f64::MAX);
    advanced / secs
}

/// Scan `packet` on behalf of `worker_id`.
pub fn scan_packet<S>(
    worker_id: usize,
    packet: &WorkPacket,
    config: &ScanConfig,
    sink: &S,
) -> WorkerOutcome
where
    S: ProgressSink + ?Sized,
{
    let started = Instant::now();
    let start = packet.starting_value();
    let end = packet.ending_value();

    let mut current = start.clone();
    let mut evidence = WorkEvidence::default();
    let mut interesting = Vec::new();
    let mut candidates: u64 = 0;
    let mut since_progress: u64 = 0;

    while &current < end {
        let outcome = iterate(&current, &config.stepper);
        evidence.total_iterations = evidence.total_iterations.saturating_add(outcome.iterations);
        evidence.max_iterations = evidence.max_iterations.max(outcome.iterations);

        if outcome.interesting {
            sink.emit(&SearchEvent::CycleFound {
                worker_id,
                seed: current.clone(),
            });
            interesting.push(current.clone());
        }

        candidates += 1;
        since_progress += 1;
        if config.progress_interval > 0 && since_progress == config.progress_interval {
            since_progress = 0;
            sink.emit(&SearchEvent::Progress {
                worker_id,
                current: current.clone(),
                bit_len: current.bits(),
                total_iterations: evidence.total_iterations,
                rate: throughput(start, &current, started.elapsed()),
            });
        }

        current += 2u32;
    }

    let elapsed = started.elapsed();
    let last = (candidates > 0).then(|| current - 2u32);

    sink.emit(&SearchEvent::BlockCompleted {
        worker_id,
        start: start.clone(),
        end: end.clone(),
        last: last.clone(),
        candidates,
        evidence,
        rate: throughput(start, end, elapsed),
        interesting: interesting.clone(),
    });

    WorkerOutcome {
        worker_id,
        evidence,
        interesting,
        candidates,
        last,
        elapsed,
    }
}
