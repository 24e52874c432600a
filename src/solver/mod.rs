// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Minimum-cost threshold covering: choose the cheapest set of seats whose
//! voting power reaches a fraction `α` of the committee's total.

mod bitset;
mod knapsack;
pub mod mip;

use std::convert::TryFrom;

use num::integer::gcd;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::basics::{SeatIndex, Threshold};
use crate::errors::{Error, Result};
pub use mip::{MipOutcome, MipSolver, MipStatus, VariableDomain};

/// Largest amount of memory, in bytes, the exact DP may allocate (1 GiB).
pub const MAX_DP_BYTES: usize = 1 << 30;

/// Largest real weight that is still treated as an exact integer.
const MAX_EXACT_F64: f64 = (1u64 << 53) as f64;

/// Relative slack when checking a real-valued covering constraint.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// The seats an adversary acquires and what they are worth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection<W> {
    /// Chosen seats in ascending order.
    pub seats: Vec<SeatIndex>,
    pub total_weight: W,
    pub total_cost: f64,
    /// Weight the selection had to reach.
    pub required_weight: W,
}

impl<W> Selection<W> {
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, seat: SeatIndex) -> bool {
        self.seats.binary_search(&seat).is_ok()
    }
}

/// Solves the covering knapsack exactly for integral voting power.
///
/// Returns the minimum-cost set of seats whose weights sum to at least
/// `⌈alpha · Σweights⌉`. Ties are broken towards the lexicographically smallest
/// index set, so the result is reproducible.
pub fn solve(costs: &[f64], weights: &[u64], alpha: Threshold) -> Result<Selection<u64>> {
    check_shape(costs, weights.len())?;
    if let Some(i) = weights.iter().position(|&w| w == 0) {
        return Err(Error::invalid(
            "weights",
            format!("seat {} has zero voting power", i),
        ));
    }

    let n = costs.len();
    let total = weights
        .iter()
        .try_fold(0u64, |acc, &w| acc.checked_add(w))
        .ok_or_else(|| Error::invalid("weights", "total voting power overflows"))?;
    let required = alpha.required_weight(total);

    // Dividing every weight by their gcd keeps the feasible sets unchanged:
    // g·Σw' >= α·g·T' holds iff Σw' >= ⌈α·T'⌉.
    let g = weights.iter().fold(0u64, |acc, &w| gcd(acc, w));
    let reduced: Vec<u64> = weights.iter().map(|&w| w / g).collect();
    let reduced_required = alpha.required_weight(total / g);

    let need = usize::try_from(reduced_required)
        .ok()
        .filter(|need| {
            need.checked_add(1)
                .and_then(|width| knapsack::memory_bytes(n, width))
                .map_or(false, |bytes| bytes <= MAX_DP_BYTES)
        })
        .ok_or_else(|| {
            Error::invalid(
                "weights",
                format!(
                    "required weight {} (after dividing by the common factor {}) over {} seats \
                     is too large for the exact solver",
                    reduced_required, g, n
                ),
            )
        })?;

    debug!(n, total, required, gcd = g, need, alpha = %alpha, "solving covering knapsack");
    let seats = knapsack::min_cost_cover(costs, &reduced, need).ok_or(Error::Infeasible {
        required: required as f64,
        reachable: total as f64,
    })?;

    let total_weight: u64 = seats.iter().map(|&i| weights[i]).sum();
    let total_cost: f64 = seats.iter().map(|&i| costs[i]).sum();
    if total_weight < required {
        return Err(Error::InvariantViolation(format!(
            "selected weight {} is below the required {}",
            total_weight, required
        )));
    }

    Ok(Selection {
        seats,
        total_weight,
        total_cost,
        required_weight: required,
    })
}

/// Solves the covering knapsack for real-valued voting power.
///
/// Integral weights are routed to the exact DP of [`solve`]. Anything else is
/// delegated to the external `mip` solver, whose statuses map to
/// [`Error::Infeasible`] and [`Error::SolverError`].
pub fn solve_fractional(
    costs: &[f64],
    weights: &[f64],
    alpha: Threshold,
    mip: &dyn MipSolver,
) -> Result<Selection<f64>> {
    check_shape(costs, weights.len())?;
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w <= 0.0)
    {
        return Err(Error::invalid(
            "weights",
            format!("seat {} has voting power {}", i, w),
        ));
    }

    let n = costs.len();
    let total: f64 = weights.iter().sum();
    let required = alpha.required_weight_f64(total);

    if let Some(integral) = as_integral(weights) {
        debug!(n, "voting power is integral, using the exact solver");
        let selection = solve(costs, &integral, alpha)?;
        return Ok(Selection {
            seats: selection.seats,
            total_weight: selection.total_weight as f64,
            total_cost: selection.total_cost,
            required_weight: required,
        });
    }

    info!(solver = mip.name(), n, required, "delegating to MIP solver");
    let outcome = mip.minimize(costs, weights, required, VariableDomain::Binary);
    match outcome.status {
        MipStatus::Optimal => {}
        MipStatus::Infeasible => {
            return Err(Error::Infeasible {
                required,
                reachable: total,
            })
        }
        MipStatus::Error => {
            return Err(Error::SolverError(format!(
                "{}: {}",
                mip.name(),
                outcome.message.unwrap_or_else(|| "unknown error".to_owned())
            )))
        }
    }

    if outcome.assignment.len() != n {
        return Err(Error::SolverError(format!(
            "{} returned {} variables for {} seats",
            mip.name(),
            outcome.assignment.len(),
            n
        )));
    }
    let seats: Vec<SeatIndex> = outcome
        .assignment
        .iter()
        .enumerate()
        .filter(|(_, x)| **x)
        .map(|(i, _)| i)
        .collect();
    let total_weight: f64 = seats.iter().map(|&i| weights[i]).sum();
    let total_cost: f64 = seats.iter().map(|&i| costs[i]).sum();
    if total_weight < required - WEIGHT_TOLERANCE * total {
        return Err(Error::SolverError(format!(
            "{} returned weight {} below the required {}",
            mip.name(),
            total_weight,
            required
        )));
    }

    Ok(Selection {
        seats,
        total_weight,
        total_cost,
        required_weight: required,
    })
}

fn check_shape(costs: &[f64], n_weights: usize) -> Result<()> {
    if costs.is_empty() {
        return Err(Error::invalid("costs", "at least one seat is required"));
    }
    if costs.len() != n_weights {
        return Err(Error::invalid(
            "weights",
            format!("got {} weights for {} costs", n_weights, costs.len()),
        ));
    }
    if let Some((i, c)) = costs
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite() || **c < 0.0)
    {
        return Err(Error::invalid(
            "costs",
            format!("cost of seat {} is {}", i, c),
        ));
    }
    Ok(())
}

fn as_integral(weights: &[f64]) -> Option<Vec<u64>> {
    weights
        .iter()
        .map(|&w| {
            if w.fract() == 0.0 && w <= MAX_EXACT_F64 {
                Some(w as u64)
            } else {
                None
            }
        })
        .collect()
}
