//! Decision providers: automated players that choose bids, musiks, discards
//! and plays for one seat.
//!
//! - `RandomPlayer`: uniform over legal options (seedable for tests)
//! - `GreedyPlayer`: deterministic hand-strength heuristics
//! - `registry`: lookup by stable name

mod config;
mod greedy;
mod random;
pub mod registry;
mod trait_def;

pub use config::ProviderConfig;
pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_providers, ProviderFactory};
pub use trait_def::{DecisionProvider, PlayDecision, ProviderError};
