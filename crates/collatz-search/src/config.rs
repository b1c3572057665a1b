//! Search configuration.

use chrono::Duration;
use num_bigint::BigUint;
use num_traits::One;

use collatz_search_core::{
    StepperConfig, UserCredentials, DEFAULT_BLOCK_SIZE, DEFAULT_PACKET_TTL_HOURS,
};
use collatz_search_engine::{ScanConfig, DEFAULT_PROGRESS_INTERVAL};

/// Everything a search needs besides the node and the sink.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// First seed of the first packet. Must be odd.
    pub initial: BigUint,
    /// Width of each packet. Must be positive and even.
    pub block_size: u64,
    /// Worker count override. `None` uses the node's own count.
    pub workers: Option<usize>,
    /// Seeds between progress events (0 disables).
    pub progress_interval: u64,
    /// Lifetime of a packet from assignment.
    pub packet_ttl: Duration,
    pub stepper: StepperConfig,
    pub credentials: UserCredentials,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial: (BigUint::one() << 40usize) + 1u32,
            block_size: DEFAULT_BLOCK_SIZE,
            workers: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            packet_ttl: Duration::hours(DEFAULT_PACKET_TTL_HOURS),
            stepper: StepperConfig::default(),
            credentials: UserCredentials::new("anonymous", "1", ""),
        }
    }
}

impl SearchConfig {
    pub fn with_initial(mut self, initial: BigUint) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_block_size(mut self, block_size: u64) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    pub fn with_packet_ttl(mut self, ttl: Duration) -> Self {
        self.packet_ttl = ttl;
        self
    }

    pub fn with_report_trivial_cycle(mut self, report: bool) -> Self {
        self.stepper.report_trivial_cycle = report;
        self
    }

    pub fn with_credentials(mut self, credentials: UserCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Per-worker scan settings derived from this config.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            stepper: self.stepper,
            progress_interval: self.progress_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.initial, BigUint::from(1_099_511_627_777u64));
        assert_eq!(config.block_size, 100_000_000);
        assert_eq!(config.workers, None);
        assert_eq!(config.progress_interval, 10_000_000);
        assert_eq!(config.packet_ttl, Duration::hours(24));
        assert!(!config.stepper.report_trivial_cycle);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_initial(BigUint::from(101u32))
            .with_block_size(100)
            .with_workers(4)
            .with_progress_interval(5)
            .with_report_trivial_cycle(true)
            .with_credentials(UserCredentials::new("alice", "v7", "s3cret"));

        assert_eq!(config.initial, BigUint::from(101u32));
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.credentials.user_id, "alice");

        let scan = config.scan_config();
        assert_eq!(scan.progress_interval, 5);
        assert!(scan.stepper.report_trivial_cycle);
    }
}
