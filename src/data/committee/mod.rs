// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

pub mod kscheme;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

pub use kscheme::{generate_weights, tier_ranges, Tier};

/// Voting power of every committee seat, one positive integer per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<u64>);

impl WeightVector {
    /// Wraps externally supplied voting power. Every seat must hold a positive weight.
    pub fn new(weights: Vec<u64>) -> Result<Self> {
        if let Some(i) = weights.iter().position(|&w| w == 0) {
            return Err(Error::invalid(
                "weights",
                format!("seat {} has zero voting power", i),
            ));
        }
        Ok(Self(weights))
    }

    /// Sum of the voting power of all seats.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }
}

impl Deref for WeightVector {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}
