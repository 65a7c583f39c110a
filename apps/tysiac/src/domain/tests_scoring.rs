use crate::domain::scoring::{finalize_scoring, is_winning_game};
use crate::domain::state::{AuctionBid, GameState, Phase, PlayerId};
use crate::domain::test_state_helpers::{fresh_state, p1, p2};
use crate::errors::domain::{DomainError, PreconditionKind};

/// A state parked in `Scoring` with P2 declaring at `bid`.
fn scoring_state(bid: i32, declarer_points: i32, defender_points: i32) -> GameState {
    let mut state = fresh_state();
    state.auction.bids.push(AuctionBid {
        player: p2(),
        value: bid,
        pass: false,
    });
    state.auction.bids.push(AuctionBid {
        player: p1(),
        value: 0,
        pass: true,
    });
    state.declarer = Some(p2());
    state.scores.deal_points.insert(p2(), declarer_points);
    state.scores.deal_points.insert(p1(), defender_points);
    state.phase = Phase::Scoring;
    state
}

#[test]
fn declarer_making_the_bid_scores_the_bid() {
    let mut state = scoring_state(120, 130, 0);
    finalize_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative(&p2()), 120);
    assert_eq!(state.phase, Phase::HandEnd);
}

#[test]
fn declarer_short_of_bid_loses_the_bid() {
    let mut state = scoring_state(120, 110, 10);
    finalize_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative(&p2()), -120);
    assert_eq!(state.cumulative(&p1()), 10);
}

#[test]
fn exact_bid_counts_as_made() {
    let mut state = scoring_state(120, 120, 0);
    finalize_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative(&p2()), 120);
}

#[test]
fn settlement_adds_to_carried_scores() {
    let mut state = scoring_state(100, 40, 80);
    state.scores.cumulative.insert(p1(), 500);
    state.scores.cumulative.insert(p2(), 300);
    finalize_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative(&p1()), 580);
    assert_eq!(state.cumulative(&p2()), 200);
}

#[test]
fn settlement_runs_once() {
    let mut state = scoring_state(120, 130, 0);
    finalize_scoring(&mut state).unwrap();
    let err = finalize_scoring(&mut state).unwrap_err();
    assert_eq!(err, DomainError::wrong_phase(Phase::Scoring, Phase::HandEnd));
    assert_eq!(state.cumulative(&p2()), 120);
}

#[test]
fn settlement_without_declarer() {
    let mut state = scoring_state(120, 130, 0);
    state.declarer = None;
    let err = finalize_scoring(&mut state).unwrap_err();
    assert_eq!(err, DomainError::precondition(PreconditionKind::NoDeclarer));
    assert_eq!(state.phase, Phase::Scoring);
}

#[test]
fn winner_needs_the_target() {
    let mut state = fresh_state();
    state.scores.cumulative.insert(p1(), 990);
    assert_eq!(is_winning_game(&state), None);
    state.scores.cumulative.insert(p2(), 1000);
    assert_eq!(is_winning_game(&state), Some(p2()));
}

#[test]
fn highest_score_breaks_ties_then_seat_order() {
    let mut state = fresh_state();
    state.scores.cumulative.insert(p1(), 1010);
    state.scores.cumulative.insert(p2(), 1080);
    assert_eq!(is_winning_game(&state), Some(p2()));

    state.scores.cumulative.insert(p2(), 1010);
    assert_eq!(is_winning_game(&state), Some(PlayerId::from("P1")));
}

#[test]
fn settlement_saturates_cumulative_scores() {
    let mut state = scoring_state(i32::MAX, 0, 50);
    state.scores.cumulative.insert(p1(), i32::MAX - 10);
    state.scores.cumulative.insert(p2(), -10);
    finalize_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative(&p1()), i32::MAX);
    assert_eq!(state.cumulative(&p2()), i32::MIN);
}
