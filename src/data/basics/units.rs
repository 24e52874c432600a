// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use std::fmt;
use std::str::FromStr;

use num::rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Zero-based identity of a committee seat.
pub type SeatIndex = usize;

/// Fraction of the total voting power an adversary must reach or exceed.
///
/// Stored as an exact rational so that the required weight `⌈α·Σw⌉` is computed
/// without floating-point rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(Ratio<u64>);

impl Threshold {
    /// Creates the threshold `numer / denom`, which must lie in `(0, 1]`.
    pub fn new(numer: u64, denom: u64) -> Result<Self> {
        if denom == 0 {
            return Err(Error::invalid("alpha", "denominator must not be zero"));
        }
        if numer == 0 || numer > denom {
            return Err(Error::invalid(
                "alpha",
                format!("{}/{} is outside (0, 1]", numer, denom),
            ));
        }
        Ok(Self(Ratio::new(numer, denom)))
    }

    /// Approximates `alpha` by a rational and checks that it lies in `(0, 1]`.
    pub fn from_f64(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(Error::invalid(
                "alpha",
                format!("{} is outside (0, 1]", alpha),
            ));
        }
        let approx = Ratio::<i64>::approximate_float(alpha)
            .ok_or_else(|| Error::invalid("alpha", format!("{} has no rational form", alpha)))?;
        Self::new(*approx.numer() as u64, *approx.denom() as u64)
    }

    /// The threshold to stop (block) the committee, 1/3.
    pub fn stop() -> Self {
        Self(Ratio::new_raw(1, 3))
    }

    /// The threshold to overtake (control) the committee, 2/3.
    pub fn overtake() -> Self {
        Self(Ratio::new_raw(2, 3))
    }

    pub fn numer(&self) -> u64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> u64 {
        *self.0.denom()
    }

    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    /// Returns `⌈α·total⌉`, the smallest integer weight that satisfies the threshold.
    pub fn required_weight(&self, total: u64) -> u64 {
        let n = self.numer() as u128 * total as u128;
        let d = self.denom() as u128;
        // α <= 1, so the quotient never exceeds `total`
        ((n + d - 1) / d) as u64
    }

    /// Returns `α·total` for real-valued weights.
    pub fn required_weight_f64(&self, total: f64) -> f64 {
        self.numer() as f64 * total / self.denom() as f64
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

/// What the adversary tries to achieve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Block the committee: reach a third of the voting power.
    Stop,
    /// Control the committee: reach two thirds of the voting power.
    Overtake,
}

impl Mode {
    pub fn threshold(&self) -> Threshold {
        match self {
            Mode::Stop => Threshold::stop(),
            Mode::Overtake => Threshold::overtake(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stop => write!(f, "stop"),
            Mode::Overtake => write!(f, "overtake"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stop" => Ok(Mode::Stop),
            "overtake" => Ok(Mode::Overtake),
            _ => Err(Error::invalid(
                "mode",
                format!("expected `stop` or `overtake`, got `{}`", s),
            )),
        }
    }
}
