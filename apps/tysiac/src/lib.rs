#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for two-player Tysiąc (1000).
//!
//! The state machine lives in [`domain`]: callers construct a [`GameState`],
//! feed it a deal and then apply bids, musik choices, discards and plays one
//! call at a time. Every call either succeeds or returns a [`DomainError`]
//! with the state untouched. [`services::game_flow`] drives whole hands and
//! games with [`ai`] decision providers.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use domain::snapshot::{self, PlayerView, SnapshotError};
pub use domain::{
    choose_musik, current_turn_player, discard, finalize_scoring, highest_bid, is_winning_game,
    legal_bids, legal_plays, place_bid, play_card, set_dealt_cards, Card, Deal, GameParams,
    GameState, Phase, PlayCardResult, PlayerId, Points, Rank, Suit,
};
pub use errors::{DomainError, ErrorCode, LegalityKind, PreconditionKind, ValidationKind};
pub use services::game_flow::{play_game, play_hand, FlowError, GameSummary, HandSummary, Seats};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    tysiac_test_support::test_logging::init();
}
