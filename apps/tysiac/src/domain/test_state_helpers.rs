//! Test-only game state builders for domain unit tests.
//!
//! The fixed deal splits the unshuffled deck: P1 holds every Spade plus the
//! low Clubs, P2 holds CT CA, every Diamond and H9 HJ; musik 0 is HQ HK and
//! musik 1 is HT HA. P1 deals, so P2 bids first.

use std::collections::BTreeMap;

use crate::domain::dealing::set_dealt_cards;
use crate::domain::params::GameParams;
use crate::domain::rules::full_deck;
use crate::domain::state::{GameState, Phase, PlayState, PlayerId, Trick};
use crate::domain::{bidding, talon, try_parse_cards, Card};

pub fn p1() -> PlayerId {
    PlayerId::from("P1")
}

pub fn p2() -> PlayerId {
    PlayerId::from("P2")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn fresh_state() -> GameState {
    GameState::new(GameParams::default(), p1(), None).expect("default params are valid")
}

pub fn fixed_deal() -> (BTreeMap<PlayerId, Vec<Card>>, Vec<Vec<Card>>) {
    let deck = full_deck();
    let mut hands = BTreeMap::new();
    hands.insert(p1(), deck[0..10].to_vec());
    hands.insert(p2(), deck[10..20].to_vec());
    let musiks = vec![deck[20..22].to_vec(), deck[22..24].to_vec()];
    (hands, musiks)
}

/// Auction open, P2 to bid.
pub fn dealt_state() -> GameState {
    let mut state = fresh_state();
    let (hands, musiks) = fixed_deal();
    set_dealt_cards(&mut state, hands, musiks).expect("fixed deal is valid");
    state
}

/// P2 bid 110 and P1 passed: P2 declares.
pub fn exchange_state() -> GameState {
    let mut state = dealt_state();
    bidding::place_bid(&mut state, &p2(), 110).expect("P2 opens the raise");
    bidding::place_bid(&mut state, &p1(), 0).expect("P1 passes");
    state
}

/// P2 took musik 0 and discarded H9 HJ; P2 leads the first trick.
pub fn play_state() -> GameState {
    let mut state = exchange_state();
    talon::choose_musik(&mut state, &p2(), 0).expect("musik 0 exists");
    talon::discard(&mut state, &p2(), &cards(&["9H", "JH"])).expect("P2 holds both");
    state
}

/// A `Play` state with hand-picked cards, for trick-level tests.
///
/// `table` receives every card not in the given hands so conservation holds.
pub fn custom_play_state(
    declarer: &PlayerId,
    leader: &PlayerId,
    p1_hand: &[&str],
    p2_hand: &[&str],
    trump: Option<crate::domain::Suit>,
) -> GameState {
    let mut state = fresh_state();
    let h1 = cards(p1_hand);
    let h2 = cards(p2_hand);
    assert_eq!(h1.len(), h2.len(), "hands must be the same size");
    let table: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !h1.contains(c) && !h2.contains(c))
        .collect();
    let remaining = h1.len() + h2.len();

    state.deal.hands.insert(p1(), h1);
    state.deal.hands.insert(p2(), h2);
    state.deal.table_cards = table;
    state.declarer = Some(declarer.clone());
    state.auction.current_bidder = None;
    state.play = PlayState {
        current_trick: Some(Trick::led_by(leader.clone())),
        trump,
        remaining_cards: remaining,
        ..PlayState::default()
    };
    state.phase = Phase::Play;
    state
}
