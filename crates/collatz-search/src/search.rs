//! The search: partition, scan in parallel, join, aggregate.
//!
//! Each worker owns one packet and shares nothing with the others while it
//! runs. Results flow back only through the join handles.

use std::thread;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use collatz_search_core::{
    NodeInfo, Nonce, PacketId, Partitioner, UserCredentials, WorkPacket, WorkProgressReport,
};
use collatz_search_engine::{
    aggregate, scan_packet, NodeDescriber, NodeError, ProgressSink, ScanConfig, SearchEvent,
    SearchSummary, WorkerOutcome,
};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};

/// Packets ready to hand out, one per worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub node_info: NodeInfo,
    pub packets: Vec<WorkPacket>,
}

/// Everything a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub node_info: NodeInfo,
    pub summary: SearchSummary,
    /// Per-worker outcomes, ordered by worker id.
    pub outcomes: Vec<WorkerOutcome>,
    /// One completed report per worker, ordered by worker id.
    pub reports: Vec<WorkProgressReport>,
}

/// A configured search over one node.
pub struct Search<D, P> {
    config: SearchConfig,
    node: D,
    sink: P,
}

impl<D: NodeDescriber, P: ProgressSink> Search<D, P> {
    pub fn new(config: SearchConfig, node: D, sink: P) -> Self {
        Self { config, node, sink }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Describe the node and partition the work with random packet ids.
    pub fn plan(&self, assigned_on: DateTime<Utc>) -> Result<SearchPlan> {
        self.plan_with(assigned_on, |_| (PacketId::generate(), Nonce::generate()))
    }

    /// Like [`plan`](Self::plan), drawing the identity of packet `k` from `identity(k)`.
    pub fn plan_with<F>(&self, assigned_on: DateTime<Utc>, identity: F) -> Result<SearchPlan>
    where
        F: FnMut(usize) -> (PacketId, Nonce),
    {
        let mut node_info = self.node.describe()?;
        if let Some(workers) = self.config.workers {
            if workers == 0 {
                return Err(NodeError::InvalidWorkerCount(workers).into());
            }
            node_info.workers = workers;
        }

        let packets = Partitioner::new(self.config.initial.clone(), self.config.block_size)?
            .with_ttl(self.config.packet_ttl)
            .split_with(node_info.workers, assigned_on, identity)?;

        Ok(SearchPlan { node_info, packets })
    }

    /// Plan with the current time and run to completion.
    pub fn run(&self) -> Result<SearchReport> {
        let plan = self.plan(Utc::now())?;
        self.run_plan(plan)
    }

    /// Run one worker per packet of `plan` and join them all.
    pub fn run_plan(&self, plan: SearchPlan) -> Result<SearchReport> {
        let SearchPlan { node_info, packets } = plan;
        let scan = self.config.scan_config();
        let credentials = &self.config.credentials;
        let sink = &self.sink;

        info!(
            workers = packets.len(),
            initial = %self.config.initial,
            block_size = self.config.block_size,
            "starting search"
        );

        let joined = thread::scope(|s| {
            let handles: Vec<_> = packets
                .iter()
                .enumerate()
                .map(|(worker_id, packet)| {
                    let node_info = &node_info;
                    let scan = &scan;
                    s.spawn(move || {
                        run_worker(worker_id, packet, node_info, scan, credentials, sink)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });

        let mut outcomes = Vec::with_capacity(joined.len());
        let mut reports = Vec::with_capacity(joined.len());
        for (worker_id, result) in joined.into_iter().enumerate() {
            let (outcome, report) = result.map_err(|_| SearchError::WorkerPanicked(worker_id))?;
            outcomes.push(outcome);
            reports.push(report);
        }

        let summary = aggregate(&outcomes);
        self.sink.emit(&SearchEvent::Summary(summary.clone()));

        Ok(SearchReport {
            node_info,
            summary,
            outcomes,
            reports,
        })
    }
}

fn run_worker<S>(
    worker_id: usize,
    packet: &WorkPacket,
    node_info: &NodeInfo,
    scan: &ScanConfig,
    credentials: &UserCredentials,
    sink: &S,
) -> (WorkerOutcome, WorkProgressReport)
where
    S: ProgressSink + ?Sized,
{
    let started_on = Utc::now();
    debug!(
        worker_id,
        start = %packet.starting_value(),
        end = %packet.ending_value(),
        "worker started"
    );

    let outcome = scan_packet(worker_id, packet, scan, sink);
    let report = WorkProgressReport::completed(
        packet.clone(),
        node_info.clone(),
        worker_id,
        started_on,
        Utc::now(),
        outcome.evidence,
        credentials,
    );

    debug!(
        worker_id,
        total_iterations = outcome.evidence.total_iterations,
        max_iterations = outcome.evidence.max_iterations,
        "worker finished"
    );
    (outcome, report)
}
