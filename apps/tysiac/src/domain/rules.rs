use crate::domain::{Card, Rank, Suit};

/// Score, bid and card-point values. Cumulative scores may go negative.
pub type Points = i32;

/// Engine limitation: exactly two active players and one shared talon.
pub const PLAYERS: usize = 2;
pub const DECK_SIZE: usize = 24;
pub const DISCARD_COUNT: usize = 2;

pub const DEFAULT_MIN_BID: Points = 100;
pub const DEFAULT_MIN_RAISE: Points = 10;
pub const DEFAULT_HAND_CARDS: usize = 10;
pub const DEFAULT_MUSIKS_COUNT: usize = 2;
pub const DEFAULT_MUSIK_SIZE: usize = 2;
pub const DEFAULT_MAX_GAME_POINTS: Points = 1000;

/// The 24-card deck, suit by suit in `Suit::ALL` order, ranks low to high.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Smallest value the next non-pass bid may take.
pub fn next_minimum_bid(high: Points, min_bid: Points, min_raise: Points) -> Points {
    if high > 0 {
        high.saturating_add(min_raise).max(min_bid)
    } else {
        min_bid
    }
}
