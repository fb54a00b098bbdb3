// Domain error type
use thiserror::Error;

use super::refresh::RefreshPhase;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("illegal refresh transition from {from:?} to {to:?}")]
    InvalidTransition { from: RefreshPhase, to: RefreshPhase },

    #[error("unknown refresh trigger: {0}")]
    UnknownTrigger(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
