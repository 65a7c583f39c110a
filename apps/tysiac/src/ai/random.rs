//! Random provider - makes random legal choices.
//!
//! [`RandomPlayer`] is the baseline [`DecisionProvider`](super::DecisionProvider)
//! used by tests and the simulator. Seeded instances are reproducible.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::trait_def::{DecisionProvider, PlayDecision, ProviderError};
use crate::domain::cards_logic::can_announce_marriage;
use crate::domain::rules::Points;
use crate::domain::state::PlayState;
use crate::domain::Card;

/// Provider that picks uniformly among legal options.
///
/// It always announces a marriage when it happens to lead half of a held pair
/// before trump is set, so random games exercise trump handling.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, ProviderError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| ProviderError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

impl DecisionProvider for RandomPlayer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose_bid(&self, _hand: &[Card], legal_bids: &[Points]) -> Result<Points, ProviderError> {
        let choice = self.with_rng(|rng| legal_bids.choose(rng).copied())?;
        choice.ok_or_else(|| ProviderError::InvalidMove("no legal bids available".into()))
    }

    fn choose_musik(&self, count: usize) -> Result<usize, ProviderError> {
        if count == 0 {
            return Err(ProviderError::InvalidMove("no musik to choose".into()));
        }
        self.with_rng(|rng| rng.random_range(0..count))
    }

    fn choose_discards(&self, hand: &[Card], count: usize) -> Result<Vec<Card>, ProviderError> {
        if hand.len() < count {
            return Err(ProviderError::InvalidMove(format!(
                "cannot discard {count} from {} cards",
                hand.len()
            )));
        }
        self.with_rng(|rng| hand.choose_multiple(rng, count).copied().collect())
    }

    fn choose_play(
        &self,
        hand: &[Card],
        legal_plays: &[Card],
        play: &PlayState,
    ) -> Result<PlayDecision, ProviderError> {
        let card = self
            .with_rng(|rng| legal_plays.choose(rng).copied())?
            .ok_or_else(|| ProviderError::InvalidMove("no legal plays available".into()))?;
        let leading = play
            .current_trick
            .as_ref()
            .is_some_and(|t| t.plays.is_empty());
        Ok(PlayDecision {
            card,
            announce_marriage: leading
                && play.trump.is_none()
                && can_announce_marriage(hand, card),
        })
    }
}
