//! Snapshots: full JSON for resuming a hand, and a per-player public view
//! that hides opponents' cards and the face-down musiks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::bidding::{highest_bid, legal_bids};
use crate::domain::invariants;
use crate::domain::rules::Points;
use crate::domain::state::{current_turn_player, AuctionBid, GameState, Phase, PlayerId, Trick};
use crate::domain::tricks::legal_plays;
use crate::domain::{Card, Suit};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

/// Serialize the whole aggregate.
pub fn to_json(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

/// Restore a hand saved with `to_json`, rejecting invalid params and states
/// that break card conservation or the per-player maps.
pub fn from_json(json: &str) -> Result<GameState, SnapshotError> {
    let state: GameState = serde_json::from_str(json)?;
    state
        .params
        .validate()
        .map_err(|e| SnapshotError::Inconsistent(e.to_string()))?;
    invariants::check(&state).map_err(SnapshotError::Inconsistent)?;
    Ok(state)
}

/// What one participant is allowed to see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub phase: Phase,
    pub dealer: PlayerId,
    pub declarer: Option<PlayerId>,
    pub turn: Option<PlayerId>,
    pub hand: Vec<Card>,
    pub hand_sizes: BTreeMap<PlayerId, usize>,
    pub musiks_remaining: usize,
    pub bids: Vec<AuctionBid>,
    pub highest_bid: Points,
    pub trump: Option<Suit>,
    pub current_trick: Option<Trick>,
    pub last_trick: Option<Trick>,
    pub deal_points: BTreeMap<PlayerId, Points>,
    pub cumulative: BTreeMap<PlayerId, Points>,
    pub legal_bids: Vec<Points>,
    pub legal_plays: Vec<Card>,
}

pub fn player_view(state: &GameState, viewer: &PlayerId) -> PlayerView {
    let mut hand = state.hand(viewer).to_vec();
    hand.sort();
    PlayerView {
        viewer: viewer.clone(),
        phase: state.phase,
        dealer: state.dealer.clone(),
        declarer: state.declarer.clone(),
        turn: current_turn_player(state),
        hand,
        hand_sizes: state
            .deal
            .hands
            .iter()
            .map(|(p, h)| (p.clone(), h.len()))
            .collect(),
        musiks_remaining: state.deal.musiks.len(),
        bids: state.auction.bids.clone(),
        highest_bid: highest_bid(state),
        trump: state.play.trump,
        current_trick: state.play.current_trick.clone(),
        last_trick: state.play.completed_tricks.last().cloned(),
        deal_points: state.scores.deal_points.clone(),
        cumulative: state.scores.cumulative.clone(),
        legal_bids: legal_bids(state, viewer),
        legal_plays: legal_plays(state, viewer),
    }
}
