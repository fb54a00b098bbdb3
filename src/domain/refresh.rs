// Refresh cycle phases
use serde::Serialize;

use super::error::{DashboardError, DashboardResult};

/// Idle → Generating → Building → Rendered → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPhase {
    Idle,
    Generating,
    Building,
    Rendered,
}

impl RefreshPhase {
    pub fn next(self) -> RefreshPhase {
        match self {
            RefreshPhase::Idle => RefreshPhase::Generating,
            RefreshPhase::Generating => RefreshPhase::Building,
            RefreshPhase::Building => RefreshPhase::Rendered,
            RefreshPhase::Rendered => RefreshPhase::Idle,
        }
    }

    pub fn transition(self, to: RefreshPhase) -> DashboardResult<RefreshPhase> {
        if self.next() == to {
            Ok(to)
        } else {
            Err(DashboardError::InvalidTransition { from: self, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut phase = RefreshPhase::Idle;
        for to in [
            RefreshPhase::Generating,
            RefreshPhase::Building,
            RefreshPhase::Rendered,
            RefreshPhase::Idle,
        ] {
            phase = phase.transition(to).unwrap();
        }
        assert_eq!(phase, RefreshPhase::Idle);
    }

    #[test]
    fn test_skipping_a_phase_is_rejected() {
        let err = RefreshPhase::Idle.transition(RefreshPhase::Building).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidTransition {
                from: RefreshPhase::Idle,
                to: RefreshPhase::Building,
            }
        );
        assert!(RefreshPhase::Rendered.transition(RefreshPhase::Generating).is_err());
    }
}
