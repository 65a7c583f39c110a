//! Whole-state consistency checks used by tests and drivers after each step.

use std::collections::HashSet;

use crate::domain::rules::DECK_SIZE;
use crate::domain::state::{GameState, Phase};
use crate::domain::Card;

/// Every card placed in this hand: hands, musiks, table pile and tricks.
pub fn all_cards(state: &GameState) -> Vec<Card> {
    let mut cards: Vec<Card> = state.deal.hands.values().flatten().copied().collect();
    cards.extend(state.deal.musiks.iter().flatten().copied());
    cards.extend(state.deal.table_cards.iter().copied());
    for trick in state
        .play
        .completed_tricks
        .iter()
        .chain(state.play.current_trick.iter())
    {
        cards.extend(trick.cards());
    }
    cards
}

/// Describe the first broken invariant, if any.
pub fn check(state: &GameState) -> Result<(), String> {
    if state.phase != Phase::Deal {
        let cards = all_cards(state);
        if cards.len() != DECK_SIZE {
            return Err(format!("{} cards in play, expected {DECK_SIZE}", cards.len()));
        }
        let unique: HashSet<Card> = cards.iter().copied().collect();
        if unique.len() != DECK_SIZE {
            return Err(format!("{} distinct cards, expected {DECK_SIZE}", unique.len()));
        }
    }

    let declarer_expected = !matches!(state.phase, Phase::Init | Phase::Deal | Phase::Auction);
    if declarer_expected != state.declarer.is_some() {
        return Err(format!(
            "declarer {:?} inconsistent with phase {}",
            state.declarer, state.phase
        ));
    }

    for player in &state.params.players {
        if !state.deal.hands.contains_key(player)
            || !state.scores.deal_points.contains_key(player)
            || !state.scores.cumulative.contains_key(player)
        {
            return Err(format!("player {player} missing from per-player maps"));
        }
    }

    if state.phase == Phase::Play {
        let in_hands: usize = state.deal.hands.values().map(Vec::len).sum();
        let in_trick = state
            .play
            .current_trick
            .as_ref()
            .map_or(0, |t| t.plays.len());
        if in_hands + in_trick != state.play.remaining_cards {
            return Err(format!(
                "remaining_cards {} but {in_hands} in hands and {in_trick} on the trick",
                state.play.remaining_cards
            ));
        }
    }
    Ok(())
}
