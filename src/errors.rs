// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use thiserror::Error;

/// Errors returned by the cost model, the k-scheme generator and the selection solver.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Malformed input shape or range. `param` names the offending argument.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },
    /// A generated vector failed its own postcondition.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("covering constraint cannot be met: need weight {required}, at most {reachable} reachable")]
    Infeasible { required: f64, reachable: f64 },
    /// The external MIP solver returned a non-optimal or error status.
    #[error("external solver failed: {0}")]
    SolverError(String),
}

impl Error {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
