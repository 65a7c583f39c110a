use std::collections::BTreeMap;

use crate::domain::dealing::{deal_from_deck, set_dealt_cards};
use crate::domain::params::GameParams;
use crate::domain::rules::full_deck;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::test_state_helpers::{card, fixed_deal, fresh_state, p1, p2};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn assert_rejected(
    hands: BTreeMap<PlayerId, Vec<Card>>,
    musiks: Vec<Vec<Card>>,
    expected: ValidationKind,
) {
    let mut state = fresh_state();
    let before = state.clone();
    let err = set_dealt_cards(&mut state, hands, musiks).unwrap_err();
    assert_eq!(err, DomainError::validation(expected));
    assert_eq!(state, before, "rejected deal must not touch state");
    assert_eq!(state.phase, Phase::Deal);
}

#[test]
fn valid_deal_opens_auction() {
    let mut state = fresh_state();
    let (hands, musiks) = fixed_deal();
    set_dealt_cards(&mut state, hands, musiks).unwrap();
    assert_eq!(state.phase, Phase::Auction);
    assert_eq!(state.hand(&p1()).len(), 10);
    assert_eq!(state.hand(&p2()).len(), 10);
    assert_eq!(state.deal.musiks.len(), 2);
    assert!(state.deal.table_cards.is_empty());
    assert_eq!(state.card_count(), 24);
}

#[test]
fn second_deal_is_wrong_phase() {
    let mut state = fresh_state();
    let (hands, musiks) = fixed_deal();
    set_dealt_cards(&mut state, hands.clone(), musiks.clone()).unwrap();
    let err = set_dealt_cards(&mut state, hands, musiks).unwrap_err();
    assert_eq!(err, DomainError::wrong_phase(Phase::Deal, Phase::Auction));
}

#[test]
fn rejects_short_hand() {
    let (mut hands, musiks) = fixed_deal();
    hands.get_mut(&p1()).unwrap().pop();
    assert_rejected(
        hands,
        musiks,
        ValidationKind::HandSize {
            player: p1(),
            expected: 10,
            actual: 9,
        },
    );
}

#[test]
fn rejects_missing_hand() {
    let (mut hands, musiks) = fixed_deal();
    hands.remove(&p2());
    assert_rejected(hands, musiks, ValidationKind::MissingHand(p2()));
}

#[test]
fn rejects_hand_for_stranger() {
    let (mut hands, musiks) = fixed_deal();
    let p2_hand = hands.remove(&p2()).unwrap();
    hands.insert(PlayerId::from("Mallory"), p2_hand);
    assert_rejected(
        hands,
        musiks,
        ValidationKind::UnknownPlayer(PlayerId::from("Mallory")),
    );
}

#[test]
fn rejects_wrong_musik_count() {
    let (hands, mut musiks) = fixed_deal();
    musiks.pop();
    assert_rejected(
        hands,
        musiks,
        ValidationKind::MusikCount {
            expected: 2,
            actual: 1,
        },
    );
}

#[test]
fn rejects_wrong_musik_size() {
    let (hands, mut musiks) = fixed_deal();
    let moved = musiks[1].pop().unwrap();
    musiks[0].push(moved);
    assert_rejected(
        hands,
        musiks,
        ValidationKind::MusikSize {
            index: 0,
            expected: 2,
            actual: 3,
        },
    );
}

#[test]
fn rejects_duplicate_card() {
    let (hands, mut musiks) = fixed_deal();
    // AS is already in P1's hand.
    musiks[1][1] = card("AS");
    assert_rejected(
        hands,
        musiks,
        ValidationKind::DuplicateCard(Card::new(Suit::Spades, Rank::Ace)),
    );
}

#[test]
fn rejects_three_player_table() {
    let params = GameParams {
        hand_cards: 6,
        musiks_count: 3,
        ..GameParams::for_players(["A", "B", "C"])
    };
    let mut state = GameState::new(params, PlayerId::from("A"), None).unwrap();
    let err = set_dealt_cards(&mut state, BTreeMap::new(), Vec::new()).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::UnsupportedPlayerCount {
            supported: 2,
            actual: 3
        })
    );
}

#[test]
fn deal_from_deck_rejects_overflowing_layout() {
    let params = GameParams {
        hand_cards: usize::MAX,
        ..GameParams::default()
    };
    let err = deal_from_deck(&params, &full_deck()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidParams(_))
    ));
}
