//! Game rule parameters, immutable for the lifetime of a game.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    Points, DECK_SIZE, DEFAULT_HAND_CARDS, DEFAULT_MAX_GAME_POINTS, DEFAULT_MIN_BID,
    DEFAULT_MIN_RAISE, DEFAULT_MUSIKS_COUNT, DEFAULT_MUSIK_SIZE,
};
use crate::domain::state::{nth_from, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    /// Participants in fixed seat order.
    pub players: Vec<PlayerId>,
    pub min_bid: Points,
    pub min_raise: Points,
    pub hand_cards: usize,
    pub musiks_count: usize,
    pub musik_size: usize,
    /// Cumulative score that wins the game.
    pub max_game_points: Points,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            players: vec![PlayerId::from("P1"), PlayerId::from("P2")],
            min_bid: DEFAULT_MIN_BID,
            min_raise: DEFAULT_MIN_RAISE,
            hand_cards: DEFAULT_HAND_CARDS,
            musiks_count: DEFAULT_MUSIKS_COUNT,
            musik_size: DEFAULT_MUSIK_SIZE,
            max_game_points: DEFAULT_MAX_GAME_POINTS,
        }
    }
}

impl GameParams {
    pub fn for_players<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Replace zero-valued numeric rules with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.min_bid == 0 {
            self.min_bid = DEFAULT_MIN_BID;
        }
        if self.min_raise == 0 {
            self.min_raise = DEFAULT_MIN_RAISE;
        }
        if self.hand_cards == 0 {
            self.hand_cards = DEFAULT_HAND_CARDS;
        }
        if self.musiks_count == 0 {
            self.musiks_count = DEFAULT_MUSIKS_COUNT;
        }
        if self.musik_size == 0 {
            self.musik_size = DEFAULT_MUSIK_SIZE;
        }
        if self.max_game_points == 0 {
            self.max_game_points = DEFAULT_MAX_GAME_POINTS;
        }
        self
    }

    /// Structural checks. The two-player limit is enforced when cards are dealt.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: String| Err(DomainError::validation(ValidationKind::InvalidParams(msg)));

        if self.players.is_empty() {
            return invalid("at least one player is required".into());
        }
        let unique: HashSet<&PlayerId> = self.players.iter().collect();
        if unique.len() != self.players.len() {
            return invalid("player names must be unique".into());
        }
        if self.min_bid <= 0 || self.min_raise <= 0 || self.max_game_points <= 0 {
            return invalid("bid, raise and game target must be positive".into());
        }
        let Some(dealt) = self.dealt_cards() else {
            return invalid("card layout overflows".into());
        };
        if dealt != DECK_SIZE {
            return invalid(format!(
                "{} players x {} cards + {} musiks x {} cards = {dealt}, deck has {DECK_SIZE}",
                self.players.len(),
                self.hand_cards,
                self.musiks_count,
                self.musik_size
            ));
        }
        Ok(())
    }

    /// Cards one deal hands out, `None` when the layout overflows.
    pub fn dealt_cards(&self) -> Option<usize> {
        let hands = self.hand_cards.checked_mul(self.players.len())?;
        let musiks = self.musiks_count.checked_mul(self.musik_size)?;
        hands.checked_add(musiks)
    }

    /// Parse params from JSON; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let params: GameParams = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(ValidationKind::InvalidParams(e.to_string())))?;
        let params = params.normalized();
        params.validate()?;
        Ok(params)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn player_at(&self, seat: usize) -> Option<&PlayerId> {
        self.players.get(seat)
    }

    pub fn is_player(&self, player: &PlayerId) -> bool {
        self.seat_of(player).is_some()
    }

    /// Player `n` seats after `player` in fixed order.
    pub fn nth_after(&self, player: &PlayerId, n: usize) -> Option<&PlayerId> {
        let seat = self.seat_of(player)?;
        self.player_at(nth_from(seat, n, self.players.len()))
    }

    pub fn next_player(&self, player: &PlayerId) -> Option<&PlayerId> {
        self.nth_after(player, 1)
    }
}
