//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use num_bigint::BigUint;
use std::sync::Mutex;

use collatz_search_core::{
    CpuInfo, HostInfo, NodeInfo, Nonce, PacketId, Partitioner, UserCredentials, WorkPacket,
};
use collatz_search_engine::{ProgressSink, SearchEvent};

/// A test fixture with a fixed clock and fixed credentials.
pub struct TestFixture {
    pub now: DateTime<Utc>,
    pub credentials: UserCredentials,
    pub ttl: Duration,
}

impl TestFixture {
    /// Fixture pinned to 2022-06-01T12:00:00Z.
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).single().unwrap_or_default())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            credentials: UserCredentials::new("alice", "v7", "s3cret"),
            ttl: Duration::hours(24),
        }
    }

    pub fn with_credentials(mut self, credentials: UserCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Packet `[start, end)` with ids derived from the bounds.
    ///
    /// Panics if the bounds are invalid.
    pub fn packet(&self, start: u64, end: u64) -> WorkPacket {
        self.big_packet(BigUint::from(start), BigUint::from(end))
    }

    pub fn big_packet(&self, start: BigUint, end: BigUint) -> WorkPacket {
        WorkPacket::new(
            PacketId::new(format!("packet-{start}")),
            Nonce::new(format!("nonce-{end}")),
            start,
            end,
            self.now,
            self.ttl,
        )
        .unwrap_or_else(|e| panic!("invalid fixture packet: {e}"))
    }

    /// Deterministic partition: packet `k` gets id `packet-k` and nonce `nonce-k`.
    pub fn partition(&self, initial: BigUint, block_size: u64, workers: usize) -> Vec<WorkPacket> {
        Partitioner::new(initial, block_size)
            .and_then(|p| {
                p.with_ttl(self.ttl).split_with(workers, self.now, |k| {
                    (PacketId::new(format!("packet-{k}")), Nonce::new(format!("nonce-{k}")))
                })
            })
            .unwrap_or_else(|e| panic!("invalid fixture partition: {e}"))
    }

    /// A node description with `workers` workers.
    pub fn node_info(&self, workers: usize) -> NodeInfo {
        NodeInfo {
            host_info: HostInfo {
                hostname: "cruncher".into(),
                os: "linux".into(),
                family: "unix".into(),
                arch: "x86_64".into(),
            },
            cpu_info: CpuInfo {
                logical_cores: workers,
                physical_cores: workers,
            },
            workers,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that keeps every event it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SearchEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<SearchEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of progress events emitted by `worker_id`.
    pub fn progress_count(&self, worker_id: usize) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SearchEvent::Progress { worker_id: w, .. } if *w == worker_id))
            .count()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: &SearchEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_packet() {
        let fixture = TestFixture::new();
        let packet = fixture.packet(101, 201);
        assert_eq!(packet.id().as_str(), "packet-101");
        assert_eq!(packet.nonce().as_str(), "nonce-201");
        assert_eq!(packet.assigned_on(), fixture.now);
        assert_eq!(packet.expiry(), fixture.now + Duration::hours(24));
    }

    #[test]
    fn test_fixture_partition() {
        let fixture = TestFixture::new();
        let packets = fixture.partition(BigUint::from(1001u32), 100, 3);
        assert_eq!(packets.len(), 3);
        assert_eq!(packets[1].id().as_str(), "packet-1");
        assert_eq!(packets[2].ending_value(), &BigUint::from(1301u32));
    }

    #[test]
    #[should_panic(expected = "invalid fixture packet")]
    fn test_fixture_rejects_even_start() {
        TestFixture::new().packet(100, 200);
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingSink::new();
        sink.emit(&SearchEvent::Progress {
            worker_id: 2,
            current: BigUint::from(7u32),
            bit_len: 3,
            total_iterations: 0,
            rate: 0.0,
        });
        assert_eq!(sink.events().len(), 1);
        assert_eq!(sink.progress_count(2), 1);
        assert_eq!(sink.progress_count(0), 0);
    }
}
