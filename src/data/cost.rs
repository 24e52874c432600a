// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Seat costs under a generalized Zipf law: the cost of the seat with rank `r`
//! is proportional to `r^-s`, normalized so that all costs sum to one.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use statrs::function::harmonic::gen_harmonic;
use tracing::debug;

use crate::errors::{Error, Result};

/// Maximum deviation of a generated cost vector's sum from 1.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Zipf exponents, either one for all seats or one per seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZipfExponents {
    Scalar(f64),
    PerSeat(Vec<f64>),
}

impl From<f64> for ZipfExponents {
    fn from(s: f64) -> Self {
        ZipfExponents::Scalar(s)
    }
}

impl From<Vec<f64>> for ZipfExponents {
    fn from(v: Vec<f64>) -> Self {
        ZipfExponents::PerSeat(v)
    }
}

/// Per-seat costs, one non-negative real per seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostVector(Vec<f64>);

impl CostVector {
    /// Wraps externally supplied costs. They need not be normalized or monotone,
    /// but every entry must be finite and non-negative.
    pub fn new(costs: Vec<f64>) -> Result<Self> {
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
        Ok(Self(costs))
    }

    /// Keeps the costs of the first `len` seats only.
    ///
    /// Used when costs are drawn for every node of the network but only the
    /// top-ranked nodes hold committee seats. The result is not renormalized.
    pub fn truncated(&self, len: usize) -> Self {
        Self(self.0.iter().take(len).copied().collect())
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for CostVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Produces the normalized Zipf cost vector for `n` seats.
///
/// Seat `i` gets `1 / (i+1)^s_i` before normalization. A scalar exponent (or a
/// per-seat sequence of length one) is broadcast to all seats.
pub fn generate_costs(n: usize, exponents: &ZipfExponents) -> Result<CostVector> {
    if n == 0 {
        return Err(Error::invalid("n", "number of seats must be positive"));
    }

    let costs = match exponents {
        ZipfExponents::Scalar(s) => scalar_costs(n, *s)?,
        ZipfExponents::PerSeat(v) if v.len() == 1 => scalar_costs(n, v[0])?,
        ZipfExponents::PerSeat(v) => {
            if v.len() != n {
                return Err(Error::invalid(
                    "exponents",
                    format!("expected 1 or {} exponents, got {}", n, v.len()),
                ));
            }
            for &s in v {
                check_exponent(s)?;
            }
            let raw: Vec<f64> = v
                .iter()
                .enumerate()
                .map(|(i, s)| 1.0 / ((i + 1) as f64).powf(*s))
                .collect();
            let total: f64 = raw.iter().sum();
            raw.into_iter().map(|c| c / total).collect()
        }
    };

    check_normalized(&costs).map_err(|e| match e {
        Error::InvariantViolation(msg) => Error::InvariantViolation(format!(
            "{}; the Zipf {} is too extreme for {} seats",
            msg,
            describe(exponents),
            n
        )),
        e => e,
    })?;
    debug!(n, "generated Zipf costs");
    Ok(CostVector(costs))
}

fn scalar_costs(n: usize, s: f64) -> Result<Vec<f64>> {
    check_exponent(s)?;
    let h = gen_harmonic(n as u64, s);
    Ok((1..=n)
        .map(|rank| 1.0 / ((rank as f64).powf(s) * h))
        .collect())
}

fn check_exponent(s: f64) -> Result<()> {
    if !s.is_finite() || s <= 0.0 {
        return Err(Error::invalid(
            "exponents",
            format!("Zipf exponent must be positive, got {}", s),
        ));
    }
    Ok(())
}

fn describe(exponents: &ZipfExponents) -> String {
    match exponents {
        ZipfExponents::Scalar(s) => format!("exponent {}", s),
        ZipfExponents::PerSeat(v) if v.len() == 1 => format!("exponent {}", v[0]),
        ZipfExponents::PerSeat(v) => format!(
            "exponents (largest {})",
            v.iter().cloned().fold(f64::MIN, f64::max)
        ),
    }
}

fn check_normalized(costs: &[f64]) -> Result<()> {
    if let Some(i) = costs.iter().position(|c| !(*c > 0.0)) {
        return Err(Error::InvariantViolation(format!(
            "cost of seat {} is {}, expected a positive value",
            i, costs[i]
        )));
    }
    let sum: f64 = costs.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(Error::InvariantViolation(format!(
            "costs sum to {}, expected 1",
            sum
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn normalized() {
        for n in [1, 2, 3, 10, 100, 1000] {
            for s in [0.1, 0.5, 1.0, 1.5, 3.0] {
                let costs = generate_costs(n, &ZipfExponents::Scalar(s)).unwrap();
                assert_eq!(costs.len(), n);
                assert!((costs.sum() - 1.0).abs() <= SUM_TOLERANCE);
                assert!(costs.iter().all(|&c| c > 0.0));
                assert!(costs.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn harmonic_values() {
        let costs = generate_costs(2, &ZipfExponents::Scalar(1.0)).unwrap();
        assert_close(costs[0], 2.0 / 3.0);
        assert_close(costs[1], 1.0 / 3.0);

        let costs = generate_costs(3, &ZipfExponents::Scalar(2.0)).unwrap();
        let h = 1.0 + 0.25 + 1.0 / 9.0;
        assert_close(costs[0], 1.0 / h);
        assert_close(costs[1], 0.25 / h);
        assert_close(costs[2], 1.0 / 9.0 / h);
    }

    #[test]
    fn single_seat() {
        let costs = generate_costs(1, &ZipfExponents::Scalar(0.7)).unwrap();
        assert_eq!(&costs[..], &[1.0]);
    }

    #[test]
    fn per_seat_exponents() {
        let costs = generate_costs(3, &ZipfExponents::PerSeat(vec![1.0, 2.0, 0.5])).unwrap();
        let raw = [1.0, 0.25, 1.0 / 3f64.sqrt()];
        let total: f64 = raw.iter().sum();
        for (c, r) in costs.iter().zip(raw.iter()) {
            assert_close(*c, r / total);
        }
        assert!((costs.sum() - 1.0).abs() <= SUM_TOLERANCE);
    }

    #[test]
    fn broadcast_single_exponent() {
        let a = generate_costs(5, &ZipfExponents::PerSeat(vec![1.2])).unwrap();
        let b = generate_costs(5, &ZipfExponents::Scalar(1.2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_arguments() {
        assert!(matches!(
            generate_costs(0, &ZipfExponents::Scalar(1.0)),
            Err(Error::InvalidArgument { param: "n", .. })
        ));
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_costs(4, &ZipfExponents::Scalar(s)),
                Err(Error::InvalidArgument { param: "exponents", .. })
            ));
        }
        assert!(matches!(
            generate_costs(4, &ZipfExponents::PerSeat(vec![1.0, 1.0])),
            Err(Error::InvalidArgument { param: "exponents", .. })
        ));
        assert!(generate_costs(3, &ZipfExponents::PerSeat(vec![1.0, 0.0, 1.0])).is_err());
    }

    #[test]
    fn postconditions() {
        assert!(check_normalized(&[0.5, 0.25, 0.25]).is_ok());
        assert!(check_normalized(&[0.5, 0.5 + 1e-12]).is_ok());
        for costs in [
            &[0.5, 0.5, 0.0][..],
            &[0.75, 0.5, -0.25][..],
            &[0.5, f64::NAN][..],
            &[0.5, 0.4][..],
            &[0.5, 0.5 + 1e-8][..],
        ] {
            assert!(
                matches!(check_normalized(costs), Err(Error::InvariantViolation(_))),
                "{:?}",
                costs
            );
        }
    }

    #[test]
    fn underflow_names_exponent() {
        match generate_costs(3, &ZipfExponents::Scalar(1000.0)) {
            Err(Error::InvariantViolation(msg)) => {
                assert!(msg.contains("seat 2"), "{}", msg);
                assert!(msg.contains("exponent 1000"), "{}", msg);
            }
            other => panic!("unexpected result {:?}", other),
        }
        match generate_costs(3, &ZipfExponents::PerSeat(vec![1.0, 1.0, 1000.0])) {
            Err(Error::InvariantViolation(msg)) => assert!(msg.contains("largest 1000"), "{}", msg),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn truncated() {
        let costs = generate_costs(10, &ZipfExponents::Scalar(1.0)).unwrap();
        let top = costs.truncated(4);
        assert_eq!(&top[..], &costs[..4]);
        assert!(top.sum() < 1.0);
    }

    #[test]
    fn external_costs() {
        assert!(CostVector::new(vec![0.0, 3.5, 1.0]).is_ok());
        assert!(CostVector::new(vec![0.1, -0.1]).is_err());
        assert!(CostVector::new(vec![f64::NAN]).is_err());
    }
}
