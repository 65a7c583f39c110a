//! Game flow orchestration: bridges the pure engine with decision providers.
//!
//! The loop is always the same: ask the engine who acts and what is legal,
//! ask that seat's provider, feed the answer back to the engine.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::ai::{DecisionProvider, ProviderError};
use crate::domain::rules::{Points, DISCARD_COUNT};
use crate::domain::state::{current_turn_player, GameState, Phase, PlayerId};
use crate::domain::{
    bidding, derive_hand_seed, is_winning_game, set_dealt_cards, shuffled_deal, talon, tricks,
    Deal, GameParams, Suit,
};
use crate::errors::DomainError;

/// One provider per participant.
pub type Seats<'a> = BTreeMap<PlayerId, &'a dyn DecisionProvider>;

/// Upper bound on engine calls per hand; a hand needs about 30.
const MAX_ACTIONS_PER_HAND: usize = 1_000;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("provider for {player} failed: {source}")]
    Provider {
        player: PlayerId,
        #[source]
        source: ProviderError,
    },
    #[error("no provider seated for {0}")]
    NoProvider(PlayerId),
    #[error("nobody can act in phase {0}")]
    Stalled(Phase),
    #[error("hand did not finish within {0} actions")]
    ActionLimit(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSummary {
    pub hand_no: u32,
    pub dealer: PlayerId,
    pub declarer: PlayerId,
    pub bid: Points,
    /// Whether the declarer reached the bid.
    pub made: bool,
    pub marriages: Vec<(PlayerId, Suit)>,
    pub deal_points: BTreeMap<PlayerId, Points>,
    pub cumulative: BTreeMap<PlayerId, Points>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub hands: Vec<HandSummary>,
    pub winner: Option<PlayerId>,
    pub final_scores: BTreeMap<PlayerId, Points>,
}

fn provider_for<'a>(
    seats: &Seats<'a>,
    who: &PlayerId,
) -> Result<&'a dyn DecisionProvider, FlowError> {
    seats
        .get(who)
        .copied()
        .ok_or_else(|| FlowError::NoProvider(who.clone()))
}

fn provider_err(player: &PlayerId) -> impl FnOnce(ProviderError) -> FlowError + '_ {
    move |source| FlowError::Provider {
        player: player.clone(),
        source,
    }
}

/// Deal `deal` into a fresh hand and play it to `HandEnd`.
pub fn play_hand(
    state: &mut GameState,
    deal: Deal,
    seats: &Seats<'_>,
    hand_no: u32,
) -> Result<HandSummary, FlowError> {
    set_dealt_cards(state, deal.hands, deal.musiks)?;

    let mut actions = 0usize;
    while state.phase != Phase::HandEnd {
        actions += 1;
        if actions > MAX_ACTIONS_PER_HAND {
            return Err(FlowError::ActionLimit(MAX_ACTIONS_PER_HAND));
        }
        step(state, seats)?;
    }

    let declarer = state
        .declarer
        .clone()
        .ok_or(FlowError::Stalled(state.phase))?;
    let bid = bidding::highest_bid(state);
    let marriages = state
        .play
        .completed_tricks
        .iter()
        .flat_map(|t| t.plays.iter())
        .filter_map(|p| p.announced_marriage.map(|s| (p.player.clone(), s)))
        .collect();
    let summary = HandSummary {
        hand_no,
        dealer: state.dealer.clone(),
        made: state.deal_points(&declarer) >= bid,
        declarer,
        bid,
        marriages,
        deal_points: state.scores.deal_points.clone(),
        cumulative: state.scores.cumulative.clone(),
    };
    info!(
        hand_no,
        declarer = %summary.declarer,
        bid,
        made = summary.made,
        "hand finished"
    );
    Ok(summary)
}

/// Ask the seat on turn for one decision and apply it.
pub fn step(state: &mut GameState, seats: &Seats<'_>) -> Result<(), FlowError> {
    let who = current_turn_player(state).ok_or(FlowError::Stalled(state.phase))?;
    let provider = provider_for(seats, &who)?;

    match state.phase {
        Phase::Auction => {
            let legal = bidding::legal_bids(state, &who);
            let bid = provider
                .choose_bid(state.hand(&who), &legal)
                .map_err(provider_err(&who))?;
            debug!(player = %who, bid, "provider bid");
            bidding::place_bid(state, &who, bid)?;
        }
        Phase::TalonExchange if talon::musik_pending(state) => {
            let index = provider
                .choose_musik(state.deal.musiks.len())
                .map_err(provider_err(&who))?;
            talon::choose_musik(state, &who, index)?;
        }
        Phase::TalonExchange => {
            let cards = provider
                .choose_discards(state.hand(&who), DISCARD_COUNT)
                .map_err(provider_err(&who))?;
            talon::discard(state, &who, &cards)?;
        }
        Phase::Play => {
            let legal = tricks::legal_plays(state, &who);
            let decision = provider
                .choose_play(state.hand(&who), &legal, &state.play)
                .map_err(provider_err(&who))?;
            tricks::play_card(state, &who, decision.card, decision.announce_marriage)?;
        }
        other => return Err(FlowError::Stalled(other)),
    }
    Ok(())
}

/// Play hands until someone reaches the target or `max_hands` are done.
///
/// The first participant deals first; each hand's deal comes from
/// `derive_hand_seed(game_seed, hand_no)`.
pub fn play_game(
    params: GameParams,
    seats: &Seats<'_>,
    game_seed: u64,
    max_hands: u32,
) -> Result<GameSummary, FlowError> {
    let params = params.normalized();
    params.validate()?;
    for player in &params.players {
        provider_for(seats, player)?;
    }

    let first_dealer = params
        .players
        .first()
        .cloned()
        .ok_or_else(|| FlowError::NoProvider(PlayerId::from("")))?;
    let mut state = GameState::new(params.clone(), first_dealer, None)?;
    let mut hands = Vec::new();
    let mut winner = None;

    for hand_no in 0..max_hands {
        if hand_no > 0 {
            state = state.next_hand()?;
        }
        let deal = shuffled_deal(&params, derive_hand_seed(game_seed, hand_no))?;
        hands.push(play_hand(&mut state, deal, seats, hand_no)?);
        winner = is_winning_game(&state);
        if winner.is_some() {
            break;
        }
    }

    info!(hands = hands.len(), winner = ?winner, "game finished");
    Ok(GameSummary {
        hands,
        winner,
        final_scores: state.scores.cumulative.clone(),
    })
}
