//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod invariants;
pub mod params;
pub mod phase;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod talon;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use bidding::{highest_bid, legal_bids, place_bid};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{derive_hand_seed, set_dealt_cards, shuffled_deal, Deal};
pub use params::GameParams;
pub use rules::Points;
pub use scoring::{finalize_scoring, is_winning_game};
pub use state::{current_turn_player, GameState, Phase, PlayerId};
pub use talon::{choose_musik, discard};
pub use tricks::{legal_plays, play_card, resolve_trick, PlayCardResult};
