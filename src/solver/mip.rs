// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Interface to an external mixed-integer solver, used when voting power is not integral.

use serde::{Deserialize, Serialize};

/// Domain of the decision variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableDomain {
    Binary,
}

/// Termination status reported by the external solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MipStatus {
    Optimal,
    Infeasible,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MipOutcome {
    pub status: MipStatus,
    /// Value of every decision variable. Only meaningful when `status` is `Optimal`.
    pub assignment: Vec<bool>,
    /// Free-form diagnostics from the solver.
    pub message: Option<String>,
}

impl MipOutcome {
    pub fn optimal(assignment: Vec<bool>) -> Self {
        Self {
            status: MipStatus::Optimal,
            assignment,
            message: None,
        }
    }

    pub fn failed(status: MipStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            assignment: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Common interface for binary integer program solvers.
///
/// The program is `minimize objective·x` subject to `constraint·x >= bound`,
/// `x` in the given domain.
pub trait MipSolver: Send + Sync {
    fn minimize(
        &self,
        objective: &[f64],
        constraint: &[f64],
        bound: f64,
        domain: VariableDomain,
    ) -> MipOutcome;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
