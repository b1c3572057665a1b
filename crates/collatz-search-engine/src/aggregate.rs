//! Result aggregation across workers.

use num_bigint::BigUint;

use collatz_search_core::WorkEvidence;

use crate::scan::WorkerOutcome;

/// Combined result of all workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub workers: usize,
    pub candidates: u64,
    pub total_iterations: u64,
    pub max_iterations: u64,
    /// Interesting seeds, ordered by worker id then discovery order.
    pub interesting: Vec<BigUint>,
}

impl SearchSummary {
    pub fn average_iterations(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.total_iterations as f64 / self.candidates as f64
    }

    pub fn evidence(&self) -> WorkEvidence {
        WorkEvidence::new(self.total_iterations, self.max_iterations)
    }
}

/// Combine worker outcomes.
///
/// Totals are summed (saturating), the max is the max of maxima, and the
/// interesting lists are concatenated in ascending worker id. The outcomes
/// may arrive in any order.
pub fn aggregate<'a, I>(outcomes: I) -> SearchSummary
where
    I: IntoIterator<Item = &'a WorkerOutcome>,
{
    let mut sorted: Vec<&WorkerOutcome> = outcomes.into_iter().collect();
    sorted.sort_by_key(|o| o.worker_id);

    let mut summary = SearchSummary {
        workers: sorted.len(),
        ..SearchSummary::default()
    };
    for outcome in sorted {
        summary.candidates = summary.candidates.saturating_add(outcome.candidates);
        summary.total_iterations = summary
            .total_iterations
            .saturating_add(outcome.evidence.total_iterations);
        summary.max_iterations = summary.max_iterations.max(outcome.evidence.max_iterations);
        summary.interesting.extend(outcome.interesting.iter().cloned());
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn outcome(worker_id: usize, total: u64, max: u64, interesting: &[u32]) -> WorkerOutcome {
        WorkerOutcome {
            worker_id,
            evidence: WorkEvidence::new(total, max),
            interesting: interesting.iter().map(|&s| BigUint::from(s)).collect(),
            candidates: 10,
            last: None,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_sums_and_maxima() {
        let outcomes = [
            outcome(0, 100, 10, &[]),
            outcome(1, 200, 30, &[]),
            outcome(2, 300, 20, &[]),
        ];
        let summary = aggregate(&outcomes);
        assert_eq!(summary.workers, 3);
        assert_eq!(summary.candidates, 30);
        assert_eq!(summary.total_iterations, 600);
        assert_eq!(summary.max_iterations, 30);
        assert_eq!(summary.evidence(), WorkEvidence::new(600, 30));
        assert_eq!(summary.average_iterations(), 20.0);
    }

    #[test]
    fn test_interesting_ordered_by_worker() {
        let outcomes = [
            outcome(2, 0, 0, &[9]),
            outcome(0, 0, 0, &[5, 1]),
            outcome(1, 0, 0, &[]),
        ];
        let summary = aggregate(&outcomes);
        let expected: Vec<BigUint> = [5u32, 1, 9].iter().map(|&s| BigUint::from(s)).collect();
        assert_eq!(summary.interesting, expected);
    }

    #[test]
    fn test_total_saturates() {
        let outcomes = [outcome(0, u64::MAX, 1, &[]), outcome(1, 5, 2, &[])];
        assert_eq!(aggregate(&outcomes).total_iterations, u64::MAX);
    }

    #[test]
    fn test_empty() {
        let summary = aggregate(Vec::<WorkerOutcome>::new().iter());
        assert_eq!(summary, SearchSummary::default());
        assert_eq!(summary.average_iterations(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_order_independent(
            stats in prop::collection::vec((0u64..1_000_000, 0u64..1_000), 1..8),
            rotate in 0usize..8,
        ) {
            let outcomes: Vec<WorkerOutcome> = stats
                .iter()
                .enumerate()
                .map(|(id, &(total, max))| outcome(id, total, max, &[id as u32]))
                .collect();
            let mut shuffled = outcomes.clone();
            let len = shuffled.len();
            shuffled.rotate_left(rotate % len);

            prop_assert_eq!(aggregate(&outcomes), aggregate(&shuffled));
            prop_assert_eq!(
                aggregate(&outcomes).max_iterations,
                stats.iter().map(|&(_, m)| m).max().unwrap_or(0)
            );
        }
    }
}
