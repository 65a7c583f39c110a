//! Deal validation, plus the deterministic shuffle used by drivers.
//!
//! The state machine never shuffles: `set_dealt_cards` only accepts a deal
//! produced elsewhere. `shuffled_deal` is that "elsewhere" for simulations.

use std::collections::{BTreeMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::params::GameParams;
use crate::domain::phase::{advance, require_phase};
use crate::domain::rules::{full_deck, DECK_SIZE, PLAYERS};
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards for one hand before they are handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hands: BTreeMap<PlayerId, Vec<Card>>,
    pub musiks: Vec<Vec<Card>>,
}

/// Install hands and musiks, then open the auction.
///
/// Every check runs before anything is written, so a rejected deal leaves the
/// state in `Deal`.
pub fn set_dealt_cards(
    state: &mut GameState,
    hands: BTreeMap<PlayerId, Vec<Card>>,
    musiks: Vec<Vec<Card>>,
) -> Result<(), DomainError> {
    require_phase(state, Phase::Deal)?;
    validate_deal(&state.params, &hands, &musiks)?;

    state.deal.hands = hands;
    state.deal.musiks = musiks;
    state.deal.table_cards.clear();
    trace!(musiks = state.deal.musiks.len(), "cards dealt");
    advance(state, Phase::Auction);
    Ok(())
}

/// Shape and uniqueness checks for a proposed deal.
pub fn validate_deal(
    params: &GameParams,
    hands: &BTreeMap<PlayerId, Vec<Card>>,
    musiks: &[Vec<Card>],
) -> Result<(), DomainError> {
    if params.player_count() != PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::UnsupportedPlayerCount {
                supported: PLAYERS,
                actual: params.player_count(),
            },
        ));
    }
    if let Some(stranger) = hands.keys().find(|p| !params.is_player(p)) {
        return Err(DomainError::validation(ValidationKind::UnknownPlayer(
            stranger.clone(),
        )));
    }
    for player in &params.players {
        let hand = hands
            .get(player)
            .ok_or_else(|| DomainError::validation(ValidationKind::MissingHand(player.clone())))?;
        if hand.len() != params.hand_cards {
            return Err(DomainError::validation(ValidationKind::HandSize {
                player: player.clone(),
                expected: params.hand_cards,
                actual: hand.len(),
            }));
        }
    }
    if musiks.len() != params.musiks_count {
        return Err(DomainError::validation(ValidationKind::MusikCount {
            expected: params.musiks_count,
            actual: musiks.len(),
        }));
    }
    for (index, musik) in musiks.iter().enumerate() {
        if musik.len() != params.musik_size {
            return Err(DomainError::validation(ValidationKind::MusikSize {
                index,
                expected: params.musik_size,
                actual: musik.len(),
            }));
        }
    }

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in hands.values().flatten().chain(musiks.iter().flatten()) {
        if !seen.insert(*card) {
            return Err(DomainError::validation(ValidationKind::DuplicateCard(*card)));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(DomainError::validation(ValidationKind::DeckSize {
            expected: DECK_SIZE,
            actual: seen.len(),
        }));
    }
    Ok(())
}

/// Split an ordered deck: hands in seat order, then the musiks.
///
/// Hands are sorted for readability; musik order is kept.
pub fn deal_from_deck(params: &GameParams, deck: &[Card]) -> Result<Deal, DomainError> {
    let needed = params.dealt_cards().ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidParams("card layout overflows".into()))
    })?;
    if deck.len() != needed {
        return Err(DomainError::validation(ValidationKind::DeckSize {
            expected: needed,
            actual: deck.len(),
        }));
    }

    let mut cards = deck.iter().copied();
    let mut hands = BTreeMap::new();
    for player in &params.players {
        let mut hand: Vec<Card> = cards.by_ref().take(params.hand_cards).collect();
        hand.sort();
        hands.insert(player.clone(), hand);
    }
    let musiks = (0..params.musiks_count)
        .map(|_| cards.by_ref().take(params.musik_size).collect())
        .collect();
    Ok(Deal { hands, musiks })
}

/// Shuffle the 24-card deck with a seeded `StdRng` and split it.
pub fn shuffled_deal(params: &GameParams, seed: u64) -> Result<Deal, DomainError> {
    let mut deck = full_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deal_from_deck(params, &deck)
}

/// Per-hand seed derived from a game seed (SplitMix64 finaliser).
///
/// Same game seed and hand number always give the same deal; neighbouring
/// hand numbers land far apart.
pub fn derive_hand_seed(game_seed: u64, hand_no: u32) -> u64 {
    let mut z = game_seed.wrapping_add((hand_no as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
