use crate::domain::bidding::{highest_bid, legal_bids, next_minimum, place_bid};
use crate::domain::state::{current_turn_player, Phase};
use crate::domain::test_state_helpers::{dealt_state, fresh_state, p1, p2};
use crate::errors::domain::{DomainError, LegalityKind};

#[test]
fn dealer_opening_bid_counts_as_high() {
    let state = dealt_state();
    assert_eq!(highest_bid(&state), 100);
    assert_eq!(next_minimum(&state), 110);
    assert_eq!(current_turn_player(&state), Some(p2()));
}

#[test]
fn legal_bids_only_for_player_on_turn() {
    let state = dealt_state();
    assert_eq!(legal_bids(&state, &p2()), vec![0, 110]);
    assert!(legal_bids(&state, &p1()).is_empty());
    assert!(legal_bids(&fresh_state(), &p2()).is_empty());
}

#[test]
fn bid_before_deal_is_wrong_phase() {
    let mut state = fresh_state();
    let err = place_bid(&mut state, &p2(), 110).unwrap_err();
    assert_eq!(err, DomainError::wrong_phase(Phase::Auction, Phase::Deal));
}

#[test]
fn out_of_turn_bid_rejected() {
    let mut state = dealt_state();
    let err = place_bid(&mut state, &p1(), 120).unwrap_err();
    assert_eq!(err, DomainError::out_of_turn(&p1(), &p2()));
}

#[test]
fn matching_the_high_bid_is_illegal() {
    let mut state = dealt_state();
    let before = state.clone();
    let err = place_bid(&mut state, &p2(), 100).unwrap_err();
    assert_eq!(
        err,
        DomainError::illegal(LegalityKind::IllegalBid {
            value: 100,
            minimum: 110
        })
    );
    assert_eq!(state, before);
}

#[test]
fn raise_below_increment_is_illegal() {
    let mut state = dealt_state();
    let err = place_bid(&mut state, &p2(), 105).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Illegal(LegalityKind::IllegalBid { value: 105, .. })
    ));
}

#[test]
fn raise_rotates_turn_back_to_dealer() {
    let mut state = dealt_state();
    place_bid(&mut state, &p2(), 120).unwrap();
    assert_eq!(highest_bid(&state), 120);
    assert_eq!(state.auction.current_bidder, Some(p1()));
    assert_eq!(legal_bids(&state, &p1()), vec![0, 130]);
    assert_eq!(state.phase, Phase::Auction);
}

#[test]
fn pass_leaves_single_bidder_as_declarer() {
    let mut state = dealt_state();
    place_bid(&mut state, &p2(), 110).unwrap();
    place_bid(&mut state, &p1(), 0).unwrap();
    assert_eq!(state.declarer, Some(p2()));
    assert_eq!(state.phase, Phase::TalonExchange);
    assert_eq!(current_turn_player(&state), Some(p2()));
    assert_eq!(highest_bid(&state), 110);
    assert!(state.auction.bids.last().unwrap().pass);
}

#[test]
fn immediate_pass_gives_dealer_the_minimum() {
    let mut state = dealt_state();
    place_bid(&mut state, &p2(), 0).unwrap();
    assert_eq!(state.declarer, Some(p1()));
    assert_eq!(highest_bid(&state), 100);
    assert_eq!(state.phase, Phase::TalonExchange);
}

#[test]
fn bidding_war_keeps_high_monotonic() {
    let mut state = dealt_state();
    let mut last_high = highest_bid(&state);
    let script = [(p2(), 110), (p1(), 130), (p2(), 150), (p1(), 160), (p2(), 0)];
    for (who, value) in script {
        place_bid(&mut state, &who, value).unwrap();
        let high = highest_bid(&state);
        assert!(high >= last_high);
        last_high = high;
    }
    assert_eq!(state.declarer, Some(p1()));
    assert_eq!(last_high, 160);
}

#[test]
fn bids_after_auction_are_wrong_phase() {
    let mut state = dealt_state();
    place_bid(&mut state, &p2(), 0).unwrap();
    let err = place_bid(&mut state, &p1(), 120).unwrap_err();
    assert_eq!(
        err,
        DomainError::wrong_phase(Phase::Auction, Phase::TalonExchange)
    );
}

#[test]
fn maximum_bid_keeps_auction_queries_total() {
    let mut state = dealt_state();
    place_bid(&mut state, &p2(), i32::MAX).unwrap();
    assert_eq!(next_minimum(&state), i32::MAX);
    assert_eq!(legal_bids(&state, &p1()), vec![0, i32::MAX]);

    let before = state.clone();
    let err = place_bid(&mut state, &p1(), i32::MAX).unwrap_err();
    assert_eq!(
        err,
        DomainError::illegal(LegalityKind::IllegalBid {
            value: i32::MAX,
            minimum: i32::MAX
        })
    );
    assert_eq!(state, before);

    place_bid(&mut state, &p1(), 0).unwrap();
    assert_eq!(state.phase, Phase::TalonExchange);
    assert_eq!(highest_bid(&state), i32::MAX);
}
