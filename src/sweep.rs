// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Attacker cost as a function of the Zipf exponent and of `k`.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::basics::Mode;
use crate::data::committee::generate_weights;
use crate::data::cost::{generate_costs, ZipfExponents};
use crate::errors::{Error, Result};
use crate::solver;

/// Slack that lets a range end on `max` despite accumulated rounding in `step`.
const RANGE_EPSILON: f64 = 1e-9;

/// Largest number of exponents a single range may produce.
pub const MAX_RANGE_POINTS: usize = 1_000_000;

/// Shape of the network and committee under attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepParams {
    /// Number of nodes in the network. Costs are drawn over all nodes.
    pub n_nodes: usize,
    /// Number of committee seats, held by the top-ranked nodes.
    pub n_seats: usize,
    pub mode: Mode,
}

impl SweepParams {
    pub fn validate(&self) -> Result<()> {
        if self.n_nodes == 0 {
            return Err(Error::invalid("n_nodes", "must be positive"));
        }
        if self.n_seats == 0 || self.n_seats > self.n_nodes {
            return Err(Error::invalid(
                "n_seats",
                format!("must lie in [1, {}], got {}", self.n_nodes, self.n_seats),
            ));
        }
        Ok(())
    }
}

/// Cheapest attack for one Zipf exponent and one k-scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub zipf_exponent: f64,
    pub k: usize,
    pub attacker_cost: f64,
    pub attacker_weight: u64,
    pub required_weight: u64,
    pub seats: usize,
}

/// All points of a sweep for a fixed `k`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KCurve {
    pub k: usize,
    pub points: Vec<SweepPoint>,
}

/// Returns `min, min + step, …` up to and including `max`.
pub fn zipf_range(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    for (param, v) in [("zipfc_min", min), ("zipfc_max", max), ("zipfc_step", step)] {
        if !v.is_finite() || v <= 0.0 {
            return Err(Error::invalid(param, format!("must be > 0, got {}", v)));
        }
    }
    if min > max {
        return Err(Error::invalid(
            "zipfc_max",
            format!("{} is below zipfc_min {}", max, min),
        ));
    }

    let steps = ((max - min) / step + RANGE_EPSILON).floor();
    if !(steps < MAX_RANGE_POINTS as f64) {
        return Err(Error::invalid(
            "zipfc_step",
            format!(
                "{} yields more than {} points between {} and {}",
                step, MAX_RANGE_POINTS, min, max
            ),
        ));
    }
    let steps = steps as usize;
    Ok((0..=steps).map(|i| min + i as f64 * step).collect())
}

/// Computes the attacker cost for every exponent under the `k`-scheme.
///
/// Points are evaluated in parallel and returned in the order of `exponents`.
pub fn attacker_cost_curve(
    params: &SweepParams,
    k: usize,
    exponents: &[f64],
) -> Result<Vec<SweepPoint>> {
    params.validate()?;
    let weights = generate_weights(params.n_seats, k)?;
    let alpha = params.mode.threshold();
    debug!(k, points = exponents.len(), mode = %params.mode, "sweeping Zipf exponents");

    exponents
        .par_iter()
        .map(|&s| -> Result<SweepPoint> {
            let costs = generate_costs(params.n_nodes, &ZipfExponents::Scalar(s))?
                .truncated(params.n_seats);
            let selection = solver::solve(&costs, &weights, alpha)?;
            debug!(k, s, cost = selection.total_cost, "solved sweep point");
            Ok(SweepPoint {
                zipf_exponent: s,
                k,
                attacker_cost: selection.total_cost,
                attacker_weight: selection.total_weight,
                required_weight: selection.required_weight,
                seats: selection.len(),
            })
        })
        .collect()
}

/// Computes [`attacker_cost_curve`] for every `k` in `1..=k_max`.
pub fn attacker_cost_grid(
    params: &SweepParams,
    k_max: usize,
    exponents: &[f64],
) -> Result<Vec<KCurve>> {
    if k_max < 1 || k_max > params.n_seats {
        return Err(Error::invalid(
            "k_max",
            format!("must lie in [1, {}], got {}", params.n_seats, k_max),
        ));
    }

    (1..=k_max)
        .map(|k| {
            info!(k, k_max, "computing attacker cost curve");
            attacker_cost_curve(params, k, exponents).map(|points| KCurve { k, points })
        })
        .collect()
}
