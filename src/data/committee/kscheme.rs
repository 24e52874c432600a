// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The k-scheme assigns voting power by rank: seats are split into `k`
//! contiguous tiers and the tier with value `kk` gives each of its seats `kk`
//! votes. The top tier holds the lowest seat indices, and the bottom half of
//! the committee always sits in the bottom tier with a single vote each.

use std::ops::Range;

use tracing::trace;

use super::WeightVector;
use crate::errors::{Error, Result};

/// A contiguous run of seats sharing the same voting power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tier {
    pub value: u64,
    pub seats: Range<usize>,
}

/// Generates the voting power of `n` seats under the k-scheme.
///
/// Tiers are laid out top first:
///
/// - `kk = k` covers `[0, ⌊n/k⌋)`,
/// - `1 < kk < k` covers `[⌈n/(kk+1)⌉, ⌊n/kk⌋)`,
/// - `kk = 1` covers `[⌈n/2⌉, n)`.
///
/// A seat left between two tiers by a non-integral boundary belongs to the lower
/// of the two. With `k = n` every seat forms its own tier, giving `n, n-1, …, 1`.
pub fn generate_weights(n: usize, k: usize) -> Result<WeightVector> {
    if n == 0 {
        return Err(Error::invalid("n", "number of seats must be positive"));
    }
    if k < 1 || k > n {
        return Err(Error::invalid(
            "k",
            format!("must lie in [1, {}], got {}", n, k),
        ));
    }

    let vp = if k == n {
        (1..=n as u64).rev().collect()
    } else {
        partition(n, k)
    };

    check_weights(&vp)?;
    Ok(WeightVector(vp))
}

/// Splits the weights of `generate_weights(n, k)` into tiers, highest first.
pub fn tier_ranges(n: usize, k: usize) -> Result<Vec<Tier>> {
    let weights = generate_weights(n, k)?;
    let mut tiers: Vec<Tier> = Vec::with_capacity(k);
    for (i, &w) in weights.iter().enumerate() {
        match tiers.last_mut() {
            Some(t) if t.value == w => t.seats.end = i + 1,
            _ => tiers.push(Tier {
                value: w,
                seats: i..i + 1,
            }),
        }
    }
    Ok(tiers)
}

fn partition(n: usize, k: usize) -> Vec<u64> {
    let mut vp = vec![0; n];

    for kk in (1..=k).rev() {
        let seats = if kk == k {
            0..n / k
        } else if kk == 1 {
            div_ceil(n, 2)..n
        } else {
            div_ceil(n, kk + 1)..n / kk
        };
        if seats.is_empty() {
            trace!(kk, "k-scheme tier is empty");
            continue;
        }
        trace!(kk, start = seats.start, end = seats.end, "k-scheme tier");
        for w in &mut vp[seats] {
            *w = kk as u64;
        }
    }

    // Close rounding seams. Seat i lies below the floor boundary of every tier
    // above ⌊n/(i+1)⌋, so that is the lower tier adjacent to the seam.
    for (i, w) in vp.iter_mut().enumerate() {
        if *w == 0 {
            *w = (n / (i + 1)).clamp(1, k) as u64;
        }
    }
    vp
}

/// Every seat holds voting power and no seat outranks the one before it.
pub(super) fn check_weights(vp: &[u64]) -> Result<()> {
    if let Some(i) = vp.iter().position(|&w| w == 0) {
        return Err(Error::InvariantViolation(format!(
            "seat {} received no voting power",
            i
        )));
    }
    if let Some(i) = vp.windows(2).position(|w| w[0] < w[1]) {
        return Err(Error::InvariantViolation(format!(
            "voting power increases from seat {} ({}) to seat {} ({})",
            i,
            vp[i],
            i + 1,
            vp[i + 1]
        )));
    }
    Ok(())
}

fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}
