//! Card game logic: checking suits in hands, comparing card strength, marriages

use super::cards_types::{Card, Rank, Suit};
use crate::domain::rules::Points;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats the currently winning `b` in a trick led with `lead`.
///
/// Trump beats everything else; otherwise only lead-suit cards can win.
/// Two cards of the same deciding suit compare by rank.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump && !b_trump {
            return true;
        }
        if b_trump && !a_trump {
            return false;
        }
        if a_trump && b_trump {
            return a.rank > b.rank;
        }
    }
    // Neither is trump: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

/// The other half of a King/Queen pair, or `None` for any other rank.
pub fn marriage_partner(card: Card) -> Option<Card> {
    match card.rank {
        Rank::King => Some(Card::new(card.suit, Rank::Queen)),
        Rank::Queen => Some(Card::new(card.suit, Rank::King)),
        _ => None,
    }
}

/// Whether leading `card` from `hand` may announce a marriage.
pub fn can_announce_marriage(hand: &[Card], card: Card) -> bool {
    marriage_partner(card).is_some_and(|partner| hand.contains(&card) && hand.contains(&partner))
}

/// Suits in which `hand` holds both King and Queen.
pub fn marriages_in_hand(hand: &[Card]) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|&s| {
            hand.contains(&Card::new(s, Rank::King)) && hand.contains(&Card::new(s, Rank::Queen))
        })
        .collect()
}

pub fn card_points(cards: &[Card]) -> Points {
    cards.iter().map(|c| c.points()).sum()
}
