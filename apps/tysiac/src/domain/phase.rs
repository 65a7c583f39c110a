//! Phase controller: the legal transition table and the guards every
//! mutator runs before touching state.

use tracing::debug;

use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

impl Phase {
    /// The only phase reachable from `self`, or `None` for `HandEnd`.
    pub const fn successor(self) -> Option<Phase> {
        match self {
            Phase::Init => Some(Phase::Deal),
            Phase::Deal => Some(Phase::Auction),
            Phase::Auction => Some(Phase::TalonExchange),
            Phase::TalonExchange => Some(Phase::Play),
            Phase::Play => Some(Phase::Scoring),
            Phase::Scoring => Some(Phase::HandEnd),
            Phase::HandEnd => None,
        }
    }

    pub fn can_transition_to(self, next: Phase) -> bool {
        self.successor() == Some(next)
    }
}

pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::wrong_phase(expected, state.phase));
    }
    Ok(())
}

pub fn require_actor(player: &PlayerId, expected: &PlayerId) -> Result<(), DomainError> {
    if player != expected {
        return Err(DomainError::out_of_turn(player, expected));
    }
    Ok(())
}

/// Move to `next`. Callers only request transitions from the table above.
pub(crate) fn advance(state: &mut GameState, next: Phase) {
    debug_assert!(
        state.phase.can_transition_to(next),
        "illegal phase transition {} -> {}",
        state.phase,
        next
    );
    debug!(from = %state.phase, to = %next, "phase transition");
    state.phase = next;
}
