//! In-memory game runner.
//!
//! Builds one provider per seat from the registry and hands the game to
//! `tysiac::play_game`. Every seed is derived from the game seed, so a game
//! replays exactly from its seed and the seat names.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::debug;
use tysiac::ai::{by_name, DecisionProvider, ProviderConfig};
use tysiac::domain::derive_hand_seed;
use tysiac::{play_game, FlowError, GameParams, GameSummary, PlayerId, Seats};

#[derive(Debug)]
pub enum SimError {
    UnknownProvider(String),
    SeatCount { seats: usize, players: usize },
    Flow(FlowError),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::UnknownProvider(name) => write!(f, "unknown provider: {name}"),
            SimError::SeatCount { seats, players } => {
                write!(f, "{seats} providers given for {players} players")
            }
            SimError::Flow(e) => write!(f, "game failed: {e}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<FlowError> for SimError {
    fn from(e: FlowError) -> Self {
        SimError::Flow(e)
    }
}

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_seed: u64,
    pub summary: GameSummary,
}

pub struct Simulator {
    params: GameParams,
    providers: Vec<String>,
    max_hands: u32,
}

impl Simulator {
    /// `providers[i]` plays for `params.players[i]`.
    pub fn new(
        params: GameParams,
        providers: Vec<String>,
        max_hands: u32,
    ) -> Result<Self, SimError> {
        if providers.len() != params.players.len() {
            return Err(SimError::SeatCount {
                seats: providers.len(),
                players: params.players.len(),
            });
        }
        if let Some(unknown) = providers.iter().find(|name| by_name(name).is_none()) {
            return Err(SimError::UnknownProvider(unknown.clone()));
        }
        Ok(Self {
            params,
            providers,
            max_hands,
        })
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.params.players
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    fn build_providers(
        &self,
        game_seed: u64,
    ) -> Result<Vec<Box<dyn DecisionProvider>>, SimError> {
        self.providers
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let factory =
                    by_name(name).ok_or_else(|| SimError::UnknownProvider(name.clone()))?;
                // Distinct stream per seat, independent of the deal seeds.
                let seed = derive_hand_seed(!game_seed, seat as u32);
                let config = ProviderConfig::from_json(Some(&json!({ "seed": seed })));
                Ok((factory.make)(&config))
            })
            .collect()
    }

    pub fn simulate_game(&self, game_seed: u64) -> Result<GameResult, SimError> {
        let boxed = self.build_providers(game_seed)?;
        let seats: Seats<'_> = self
            .params
            .players
            .iter()
            .cloned()
            .zip(boxed.iter().map(|p| p.as_ref()))
            .collect::<BTreeMap<_, _>>();

        debug!(game_seed, "simulating game");
        let summary = play_game(self.params.clone(), &seats, game_seed, self.max_hands)?;
        Ok(GameResult { game_seed, summary })
    }
}
