//! Talon exchange: the declarer takes one musik and discards two cards.

use tracing::{debug, trace};

use crate::domain::phase::{advance, require_actor, require_phase};
use crate::domain::rules::DISCARD_COUNT;
use crate::domain::state::{require_declarer, GameState, Phase, PlayState, PlayerId, Trick};
use crate::domain::Card;
use crate::errors::domain::{DomainError, LegalityKind, ValidationKind};

/// Whether the declarer still has to pick a musik.
pub fn musik_pending(state: &GameState) -> bool {
    !state.deal.musiks.is_empty()
}

pub fn choose_musik(state: &mut GameState, who: &PlayerId, index: usize) -> Result<(), DomainError> {
    require_phase(state, Phase::TalonExchange)?;
    let declarer = require_declarer(state)?.clone();
    require_actor(who, &declarer)?;
    if !musik_pending(state) {
        return Err(DomainError::illegal(LegalityKind::MusikAlreadyChosen));
    }
    let available = state.deal.musiks.len();
    if index >= available {
        return Err(DomainError::validation(ValidationKind::InvalidMusikIndex {
            index,
            available,
        }));
    }

    let musiks = std::mem::take(&mut state.deal.musiks);
    for (i, musik) in musiks.into_iter().enumerate() {
        if i == index {
            state
                .deal
                .hands
                .entry(declarer.clone())
                .or_default()
                .extend(musik);
        } else {
            state.deal.table_cards.extend(musik);
        }
    }
    trace!(player = %who, index, "musik taken");
    Ok(())
}

/// Move exactly two cards from the declarer's hand to the table and start play.
pub fn discard(state: &mut GameState, who: &PlayerId, cards: &[Card]) -> Result<(), DomainError> {
    require_phase(state, Phase::TalonExchange)?;
    let declarer = require_declarer(state)?.clone();
    require_actor(who, &declarer)?;
    if musik_pending(state) {
        return Err(DomainError::illegal(LegalityKind::MusikNotChosen));
    }
    if cards.len() != DISCARD_COUNT {
        return Err(DomainError::validation(ValidationKind::DiscardCount {
            expected: DISCARD_COUNT,
            actual: cards.len(),
        }));
    }

    // Work on a copy so a missing second card leaves the hand untouched.
    let mut hand = state.hand(&declarer).to_vec();
    for card in cards {
        let pos = hand
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| DomainError::illegal(LegalityKind::CardNotInHand(*card)))?;
        hand.remove(pos);
    }
    state.deal.hands.insert(declarer.clone(), hand);
    state.deal.table_cards.extend_from_slice(cards);

    state.play = PlayState {
        current_trick: Some(Trick::led_by(declarer.clone())),
        remaining_cards: state.params.hand_cards * state.params.player_count(),
        ..PlayState::default()
    };
    debug!(declarer = %declarer, table = state.deal.table_cards.len(), "exchange complete");
    advance(state, Phase::Play);
    Ok(())
}
