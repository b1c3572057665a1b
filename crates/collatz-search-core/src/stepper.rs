//! Stepper: iterated Collatz transitions for a single seed.
//!
//! Starting from `n = seed`, apply `n / 2` (even) or `3n + 1` (odd) until
//! either:
//! - `n == seed`: the orbit cycled back to the seed (interesting), or
//! - `n < seed`: the seed descends below itself (not interesting).
//!
//! The iteration count is the number of transitions applied, so it is
//! always at least 1.
//!
//! All values are arbitrary precision. [`iterate`] runs on `u128` while the
//! orbit fits and promotes to [`BigUint`] on the first overflowing `3n + 1`,
//! so it always agrees with [`iterate_big`].

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use std::cmp::Ordering;

/// Options that change how the stepper classifies a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperConfig {
    /// Report the trivial 1 → 4 → 2 → 1 cycle as interesting.
    ///
    /// Among odd seeds only `1` can reach itself through the trivial cycle.
    pub report_trivial_cycle: bool,
}

/// Result of iterating one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The orbit returned exactly to the seed.
    pub interesting: bool,
    /// Number of transitions applied before stopping.
    pub iterations: u64,
}

impl StepOutcome {
    fn descended(iterations: u64) -> Self {
        Self {
            interesting: false,
            iterations,
        }
    }

    fn cycled(seed_is_one: bool, iterations: u64, config: &StepperConfig) -> Self {
        Self {
            interesting: !seed_is_one || config.report_trivial_cycle,
            iterations,
        }
    }
}

/// Apply one Collatz transition.
pub fn step(n: &BigUint) -> BigUint {
    let mut next = n.clone();
    step_in_place(&mut next);
    next
}

fn step_in_place(n: &mut BigUint) {
    if n.bit(0) {
        *n *= 3u32;
        *n += 1u32;
    } else {
        *n >>= 1usize;
    }
}

/// Iterate a seed, using native integers until the orbit outgrows them.
///
/// `seed` should be odd and positive; even seeds descend after one step.
pub fn iterate(seed: &BigUint, config: &StepperConfig) -> StepOutcome {
    match seed.to_u128() {
        Some(s) => iterate_u128(seed, s, config),
        None => iterate_big(seed, config),
    }
}

/// Iterate a seed using [`BigUint`] for every intermediate value.
pub fn iterate_big(seed: &BigUint, config: &StepperConfig) -> StepOutcome {
    descend_big(seed, step(seed), 1, config)
}

fn iterate_u128(seed: &BigUint, s: u128, config: &StepperConfig) -> StepOutcome {
    let mut n = s;
    let mut iterations: u64 = 0;

    loop {
        iterations += 1;
        if n & 1 == 0 {
            n >>= 1;
        } else {
            match n.checked_mul(3).and_then(|m| m.checked_add(1)) {
                Some(next) => n = next,
                None => {
                    let promoted = BigUint::from(n) * 3u32 + 1u32;
                    return descend_big(seed, promoted, iterations, config);
                }
            }
        }

        match n.cmp(&s) {
            Ordering::Equal => return StepOutcome::cycled(s == 1, iterations, config),
            Ordering::Less => return StepOutcome::descended(iterations),
            Ordering::Greater => {}
        }
    }
}

/// Continue from `n`, which is already `iterations` transitions past the seed.
fn descend_big(
    seed: &BigUint,
    mut n: BigUint,
    mut iterations: u64,
    config: &StepperConfig,
) -> StepOutcome {
    loop {
        match n.cmp(seed) {
            Ordering::Equal => return StepOutcome::cycled(seed.is_one(), iterations, config),
            Ordering::Less => return StepOutcome::descended(iterations),
            Ordering::Greater => {}
        }
        step_in_place(&mut n);
        iterations += 1;
    }
}
