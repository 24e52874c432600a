// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use rayon::prelude::*;
use tracing::trace;

use super::bitset::DecisionTable;
use crate::data::basics::SeatIndex;

/// Rows narrower than this are filled on the calling thread.
const PAR_MIN_LEN: usize = 4096;

/// Bytes used by [`min_cost_cover`] for `rows` seats and `width` weight states:
/// the decision bits plus the rolling cost row and the row being built.
pub(super) fn memory_bytes(rows: usize, width: usize) -> Option<usize> {
    let decisions = DecisionTable::bits_for(rows, width)? / 8;
    // previous row, next row and the take flags of the next row
    let row = width.checked_mul(2 * std::mem::size_of::<f64>() + std::mem::size_of::<bool>())?;
    decisions.checked_add(row)
}

/// Finds the cheapest set of seats whose weights sum to at least `need`.
///
/// Runs a suffix DP over the seats: after processing seat `i`, `best[r]` is the
/// minimum cost to collect at least `r` weight from seats `i..n`. Weight totals
/// are clamped at `need`, so the table is `n × (need + 1)`. Among all optimal
/// sets the lexicographically smallest ascending index sequence is returned.
///
/// Returns `None` if `need` cannot be reached.
pub(super) fn min_cost_cover(costs: &[f64], weights: &[u64], need: usize) -> Option<Vec<SeatIndex>> {
    let n = costs.len();
    let width = need + 1;
    let mut decisions = DecisionTable::new(n, width);
    let mut best = vec![f64::INFINITY; width];
    best[0] = 0.0;

    for i in (0..n).rev() {
        let c = costs[i];
        let w = weights[i].min(need as u64) as usize;
        let prev = &best;
        let (row, take): (Vec<f64>, Vec<bool>) = (0..width)
            .into_par_iter()
            .with_min_len(PAR_MIN_LEN)
            .map(|r| {
                if r == 0 {
                    return (0.0, false);
                }
                let skip = prev[r];
                let with = c + prev[r.saturating_sub(w)];
                // taking the seat on a tie yields the lexicographically smallest set
                if with <= skip {
                    (with, true)
                } else {
                    (skip, false)
                }
            })
            .unzip();
        decisions.set_row(i, &take);
        best = row;
        trace!(seat = i, cost = best[need], "processed seat");
    }

    if !best[need].is_finite() {
        return None;
    }

    let mut seats = Vec::new();
    let mut r = need;
    for (i, &w) in weights.iter().enumerate() {
        if r == 0 {
            break;
        }
        if decisions.bit(i, r) {
            seats.push(i);
            r = r.saturating_sub(w.min(need as u64) as usize);
        }
    }
    debug_assert_eq!(r, 0);
    Some(seats)
}
