//! WorkProgressReport: the status message for one packet on one worker.
//!
//! Only `completed` reports carry real evidence. Every other status carries
//! zeroed evidence and an authenticator over the in-progress marker, so a
//! verifier can tell the two apart before any statistics exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthError;
use crate::evidence::{authenticate, EvidenceClaim, UserCredentials, WorkAuthenticator, WorkEvidence};
use crate::node::NodeInfo;
use crate::packet::WorkPacket;
use crate::validation::verify_authenticator;

/// Why a report is being sent.
///
/// A packet with no report at all is treated as `pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// In the work list, not yet started.
    #[default]
    Pending,
    /// Currently running on a worker.
    Running,
    /// The worker no longer intends to finish it.
    Abandoned,
    /// Finished; evidence is final.
    Completed,
}

impl WorkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::Pending => "pending",
            WorkStatus::Running => "running",
            WorkStatus::Abandoned => "abandoned",
            WorkStatus::Completed => "completed",
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, WorkStatus::Completed)
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A progress or completion report for one packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProgressReport {
    pub work: WorkPacket,

    /// The node on which the work was performed.
    pub node_info: NodeInfo,

    /// The worker that owns the packet.
    #[serde(rename = "workerID")]
    pub worker_id: usize,

    pub status: WorkStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,

    pub evidence: WorkEvidence,
    pub authenticator: WorkAuthenticator,
}

impl WorkProgressReport {
    fn in_progress(
        status: WorkStatus,
        work: WorkPacket,
        node_info: NodeInfo,
        worker_id: usize,
        started_on: Option<DateTime<Utc>>,
        credentials: &UserCredentials,
    ) -> Self {
        let authenticator = authenticate(credentials, &work, &EvidenceClaim::InProgress);
        Self {
            work,
            node_info,
            worker_id,
            status,
            started_on,
            completed_on: None,
            evidence: WorkEvidence::default(),
            authenticator,
        }
    }

    /// Report for a packet that has been received but not started.
    pub fn pending(
        work: WorkPacket,
        node_info: NodeInfo,
        worker_id: usize,
        credentials: &UserCredentials,
    ) -> Self {
        Self::in_progress(WorkStatus::Pending, work, node_info, worker_id, None, credentials)
    }

    /// Report for a packet a worker has started on.
    pub fn running(
        work: WorkPacket,
        node_info: NodeInfo,
        worker_id: usize,
        started_on: DateTime<Utc>,
        credentials: &UserCredentials,
    ) -> Self {
        Self::in_progress(
            WorkStatus::Running,
            work,
            node_info,
            worker_id,
            Some(started_on),
            credentials,
        )
    }

    /// Report for a packet the worker gave up on.
    pub fn abandoned(
        work: WorkPacket,
        node_info: NodeInfo,
        worker_id: usize,
        started_on: Option<DateTime<Utc>>,
        credentials: &UserCredentials,
    ) -> Self {
        Self::in_progress(
            WorkStatus::Abandoned,
            work,
            node_info,
            worker_id,
            started_on,
            credentials,
        )
    }

    /// Report for a fully scanned packet.
    pub fn completed(
        work: WorkPacket,
        node_info: NodeInfo,
        worker_id: usize,
        started_on: DateTime<Utc>,
        completed_on: DateTime<Utc>,
        evidence: WorkEvidence,
        credentials: &UserCredentials,
    ) -> Self {
        let authenticator = authenticate(credentials, &work, &EvidenceClaim::Completed(evidence));
        Self {
            work,
            node_info,
            worker_id,
            status: WorkStatus::Completed,
            started_on: Some(started_on),
            completed_on: Some(completed_on),
            evidence,
            authenticator,
        }
    }

    /// The claim this report's authenticator should cover.
    pub fn claim(&self) -> EvidenceClaim {
        if self.status.is_completed() {
            EvidenceClaim::Completed(self.evidence)
        } else {
            EvidenceClaim::InProgress
        }
    }

    /// Verify the report's authenticator with the submitter's credentials.
    pub fn verify(&self, credentials: &UserCredentials) -> Result<(), AuthError> {
        if !self.status.is_completed() && !self.evidence.is_zero() {
            return Err(AuthError::UnexpectedEvidence {
                status: self.status.to_string(),
            });
        }
        verify_authenticator(credentials, &self.work, &self.claim(), &self.authenticator)
    }
}
