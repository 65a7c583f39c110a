use tracing::debug;

use crate::domain::bidding::highest_bid;
use crate::domain::phase::{advance, require_phase};
use crate::domain::state::{require_declarer, GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

/// Settle the hand into cumulative scores and transition to `HandEnd`.
///
/// The declarer gains the bid when their deal points reach it and loses the
/// bid otherwise. Defenders always add their own deal points.
pub fn finalize_scoring(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::Scoring)?;
    let declarer = require_declarer(state)?.clone();
    let bid = highest_bid(state);

    for player in state.params.players.clone() {
        let earned = state.deal_points(&player);
        let delta = if player == declarer {
            if earned >= bid {
                bid
            } else {
                -bid
            }
        } else {
            earned
        };
        let total = state.scores.cumulative.entry(player.clone()).or_insert(0);
        *total = total.saturating_add(delta);
        debug!(player = %player, earned, delta, "hand settled");
    }
    advance(state, Phase::HandEnd);
    Ok(())
}

/// The game winner, if anyone has reached the target.
///
/// Among several players over the target the highest score wins; equal scores
/// go to the earlier seat.
pub fn is_winning_game(state: &GameState) -> Option<PlayerId> {
    let target = state.params.max_game_points;
    let mut winner: Option<(&PlayerId, i32)> = None;
    for player in &state.params.players {
        let score = state.cumulative(player);
        if score < target {
            continue;
        }
        match winner {
            Some((_, best)) if best >= score => {}
            _ => winner = Some((player, score)),
        }
    }
    winner.map(|(p, _)| p.clone())
}
