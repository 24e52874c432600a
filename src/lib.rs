// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Cost of capturing a weighted committee.
//!
//! Seat costs follow a generalized Zipf law ([`data::cost`]), voting power follows
//! the k-scheme ([`data::committee`]), and [`solver`] finds the cheapest set of
//! seats that reaches a given fraction of the voting power.

pub mod config;
pub mod data;
pub mod errors;
pub mod solver;
pub mod sweep;

pub use data::basics::{Mode, SeatIndex, Threshold};
pub use data::committee::{generate_weights, WeightVector};
pub use data::cost::{generate_costs, CostVector, ZipfExponents};
pub use errors::{Error, Result};
pub use solver::{solve, solve_fractional, MipSolver, Selection};
