//! Decision provider trait definition.

use std::fmt;

use crate::domain::rules::Points;
use crate::domain::state::PlayState;
use crate::domain::Card;

/// Errors that can occur while a provider makes a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Provider encountered an internal error
    Internal(String),
    /// Provider had no acceptable option to choose from
    InvalidMove(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Internal(msg) => write!(f, "provider internal error: {msg}"),
            ProviderError::InvalidMove(msg) => write!(f, "provider invalid move: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A card choice plus the optional marriage announcement that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayDecision {
    pub card: Card,
    pub announce_marriage: bool,
}

impl PlayDecision {
    pub const fn plain(card: Card) -> Self {
        Self {
            card,
            announce_marriage: false,
        }
    }
}

/// Something that decides for one seat: a bot or a human input layer.
///
/// The engine never calls providers. A driver asks the engine for legal
/// options, passes them here, and feeds the answer back to the engine.
pub trait DecisionProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Pick a bid; `legal_bids` is `[0, next_minimum]`. Zero passes.
    fn choose_bid(&self, hand: &[Card], legal_bids: &[Points]) -> Result<Points, ProviderError>;

    /// Pick a musik index in `0..count`.
    fn choose_musik(&self, count: usize) -> Result<usize, ProviderError>;

    /// Pick exactly `count` cards from `hand` to discard.
    fn choose_discards(&self, hand: &[Card], count: usize) -> Result<Vec<Card>, ProviderError>;

    /// Pick one of `legal_plays`, optionally announcing a marriage when leading.
    fn choose_play(
        &self,
        hand: &[Card],
        legal_plays: &[Card],
        play: &PlayState,
    ) -> Result<PlayDecision, ProviderError>;
}
