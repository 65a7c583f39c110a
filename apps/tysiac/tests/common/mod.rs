#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::BTreeMap;

use tysiac::domain::rules::full_deck;
use tysiac::domain::try_parse_cards;
use tysiac::{set_dealt_cards, Card, GameParams, GameState, PlayerId};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    tysiac_test_support::test_logging::init();
}

pub fn p1() -> PlayerId {
    PlayerId::from("P1")
}

pub fn p2() -> PlayerId {
    PlayerId::from("P2")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

/// Unshuffled deck split 10/10 + 2x2: P1 gets the first ten cards.
pub fn fixed_deal() -> (BTreeMap<PlayerId, Vec<Card>>, Vec<Vec<Card>>) {
    let deck = full_deck();
    let hands = BTreeMap::from([(p1(), deck[0..10].to_vec()), (p2(), deck[10..20].to_vec())]);
    (hands, vec![deck[20..22].to_vec(), deck[22..24].to_vec()])
}

/// Fresh two-player game dealt by P1 with the fixed deal applied.
pub fn dealt_game() -> GameState {
    let mut state =
        GameState::new(GameParams::default(), p1(), None).expect("default params are valid");
    let (hands, musiks) = fixed_deal();
    set_dealt_cards(&mut state, hands, musiks).expect("fixed deal is valid");
    state
}

/// Shared proptest config; `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);
    proptest::prelude::ProptestConfig {
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}
