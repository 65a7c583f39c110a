//! Greedy provider: deterministic, hand-strength driven play.

use super::trait_def::{DecisionProvider, PlayDecision, ProviderError};
use crate::domain::cards_logic::{card_points, marriage_partner, marriages_in_hand};
use crate::domain::rules::Points;
use crate::domain::state::PlayState;
use crate::domain::{card_beats, Card, Rank};

/// Bid only on strong hands, lead marriages eagerly, win tricks cheaply.
pub struct GreedyPlayer {
    /// Extra points the hand estimate may fall short of the next bid by.
    bid_margin: Points,
}

impl GreedyPlayer {
    pub const NAME: &'static str = "greedy";
    pub const VERSION: &'static str = "1.0.0";
    pub const DEFAULT_BID_MARGIN: Points = 20;

    pub fn new(bid_margin: Option<Points>) -> Self {
        Self {
            bid_margin: bid_margin.unwrap_or(Self::DEFAULT_BID_MARGIN),
        }
    }

    /// Card points plus every marriage the hand could announce.
    pub fn estimate(hand: &[Card]) -> Points {
        let marriages: Points = marriages_in_hand(hand)
            .into_iter()
            .map(|s| s.marriage_value())
            .sum();
        card_points(hand) + marriages
    }

    fn in_marriage(hand: &[Card], card: Card) -> bool {
        marriage_partner(card).is_some_and(|p| hand.contains(&p))
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DecisionProvider for GreedyPlayer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose_bid(&self, hand: &[Card], legal_bids: &[Points]) -> Result<Points, ProviderError> {
        let next = legal_bids
            .iter()
            .copied()
            .filter(|&b| b > 0)
            .min()
            .unwrap_or(0);
        if next > 0 && Self::estimate(hand).saturating_add(self.bid_margin) >= next {
            Ok(next)
        } else {
            Ok(0)
        }
    }

    fn choose_musik(&self, count: usize) -> Result<usize, ProviderError> {
        if count == 0 {
            return Err(ProviderError::InvalidMove("no musik to choose".into()));
        }
        Ok(0)
    }

    fn choose_discards(&self, hand: &[Card], count: usize) -> Result<Vec<Card>, ProviderError> {
        if hand.len() < count {
            return Err(ProviderError::InvalidMove(format!(
                "cannot discard {count} from {} cards",
                hand.len()
            )));
        }
        let mut ranked = hand.to_vec();
        // Marriage halves last, then cheapest first.
        ranked.sort_by_key(|&c| (Self::in_marriage(hand, c), c.points(), c.rank, c.suit));
        ranked.truncate(count);
        Ok(ranked)
    }

    fn choose_play(
        &self,
        hand: &[Card],
        legal_plays: &[Card],
        play: &PlayState,
    ) -> Result<PlayDecision, ProviderError> {
        if legal_plays.is_empty() {
            return Err(ProviderError::InvalidMove("no legal plays available".into()));
        }
        let trick = play.current_trick.as_ref();
        let led = trick.and_then(|t| t.plays.first()).map(|p| p.card);

        let Some(led_card) = led else {
            // Leading: announce the richest marriage while trump is open.
            if play.trump.is_none() {
                let best = marriages_in_hand(hand)
                    .into_iter()
                    .max_by_key(|s| s.marriage_value())
                    .map(|s| Card::new(s, Rank::King))
                    .filter(|c| legal_plays.contains(c));
                if let Some(king) = best {
                    return Ok(PlayDecision {
                        card: king,
                        announce_marriage: true,
                    });
                }
            }
            let card = legal_plays
                .iter()
                .copied()
                .filter(|&c| !Self::in_marriage(hand, c))
                .max_by_key(|c| (c.points(), c.rank))
                .unwrap_or(legal_plays[0]);
            return Ok(PlayDecision::plain(card));
        };

        let winners = legal_plays
            .iter()
            .copied()
            .filter(|&c| card_beats(c, led_card, led_card.suit, play.trump));
        let card = match winners.min_by_key(|c| (c.points(), c.rank)) {
            Some(c) => c,
            None => legal_plays
                .iter()
                .copied()
                .min_by_key(|c| (c.points(), c.rank))
                .unwrap_or(legal_plays[0]),
        };
        Ok(PlayDecision::plain(card))
    }
}
