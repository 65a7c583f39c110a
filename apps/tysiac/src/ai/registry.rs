//! Static registry of decision providers.
//!
//! Names are stable identifiers used by the simulator's command line.
//! Constructors have no side effects; same config ⇒ same behavior.

use crate::ai::{DecisionProvider, GreedyPlayer, ProviderConfig, RandomPlayer};

/// Factory definition for constructing providers.
pub struct ProviderFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &ProviderConfig) -> Box<dyn DecisionProvider>,
}

static PROVIDER_FACTORIES: &[ProviderFactory] = &[
    ProviderFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    ProviderFactory {
        name: GreedyPlayer::NAME,
        version: GreedyPlayer::VERSION,
        make: make_greedy_player,
    },
];

/// Returns the statically registered providers.
pub fn registered_providers() -> &'static [ProviderFactory] {
    PROVIDER_FACTORIES
}

/// Finds a registered provider factory by its name.
pub fn by_name(name: &str) -> Option<&'static ProviderFactory> {
    registered_providers()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random_player(config: &ProviderConfig) -> Box<dyn DecisionProvider> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_greedy_player(config: &ProviderConfig) -> Box<dyn DecisionProvider> {
    let margin = config
        .get_custom("bid_margin")
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok());
    Box::new(GreedyPlayer::new(margin))
}
