//! Load state machine for views that fetch once on mount
//!
//! `Idle -> Loading -> Success | Failure`. Both outcomes are terminal: there is
//! no retry edge, a failed view stays failed for the lifetime of its mount.

use crate::entities::CategoryStatistic;
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    /// Single user-visible message
    Failure(String),
}

/// State of the statistics dashboard.
pub type DashboardState = LoadState<Vec<CategoryStatistic>>;

// Manual impl: a derive would require `T: Default`.
impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// `Idle -> Loading`
    pub fn start(self) -> Result<Self, DomainError> {
        match self {
            Self::Idle => Ok(Self::Loading),
            other => Err(DomainError::invalid_transition(format!(
                "cannot start loading from {}",
                other.label()
            ))),
        }
    }

    /// `Loading -> Success`
    pub fn succeed(self, data: T) -> Result<Self, DomainError> {
        match self {
            Self::Loading => Ok(Self::Success(data)),
            other => Err(DomainError::invalid_transition(format!(
                "cannot succeed from {}",
                other.label()
            ))),
        }
    }

    /// `Loading -> Failure`
    pub fn fail(self, message: impl Into<String>) -> Result<Self, DomainError> {
        match self {
            Self::Loading => Ok(Self::Failure(message.into())),
            other => Err(DomainError::invalid_transition(format!(
                "cannot fail from {}",
                other.label()
            ))),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_success() {
        let state = DashboardState::default().start().unwrap();
        assert!(state.is_loading());

        let state = state.succeed(Vec::new()).unwrap();
        assert!(state.is_terminal());
        assert_eq!(state.data(), Some(&Vec::new()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_carries_single_message_and_no_data() {
        let state = DashboardState::Idle
            .start()
            .and_then(|s| s.fail("Failed to fetch Pokémon types"))
            .unwrap();
        assert_eq!(state.error(), Some("Failed to fetch Pokémon types"));
        assert!(state.data().is_none());
    }

    #[test]
    fn terminal_states_reject_further_transitions() {
        let failed = LoadState::<u8>::Loading.fail("boom").unwrap();
        assert!(matches!(
            failed.clone().start(),
            Err(DomainError::InvalidStateTransition(_))
        ));
        assert!(failed.succeed(1).is_err());

        let done = LoadState::Loading.succeed(1u8).unwrap();
        assert!(done.fail("late").is_err());
    }

    #[test]
    fn cannot_resolve_without_starting() {
        assert!(LoadState::<u8>::Idle.succeed(1).is_err());
        assert!(LoadState::<u8>::Idle.fail("x").is_err());
    }
}
