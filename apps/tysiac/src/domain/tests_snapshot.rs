use crate::domain::snapshot::{from_json, player_view, to_json, SnapshotError};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{card, dealt_state, p1, p2, play_state};
use crate::domain::tricks::play_card;

#[test]
fn resume_mid_trick() {
    let mut state = play_state();
    play_card(&mut state, &p2(), card("KH"), true).unwrap();

    let json = to_json(&state).unwrap();
    let mut restored = from_json(&json).unwrap();
    assert_eq!(restored, state);

    // The restored hand carries on exactly like the live one.
    let a = play_card(&mut state, &p1(), card("9S"), false).unwrap();
    let b = play_card(&mut restored, &p1(), card("9S"), false).unwrap();
    assert_eq!(a, b);
    assert_eq!(restored, state);
}

#[test]
fn snapshot_uses_compact_tokens() {
    let json = to_json(&dealt_state()).unwrap();
    assert!(json.contains("\"phase\":\"AUCTION\""));
    assert!(json.contains("\"QH\""));
}

#[test]
fn tampered_snapshot_rejected() {
    let state = dealt_state();
    let json = to_json(&state).unwrap().replacen("\"QH\"", "\"AS\"", 1);
    match from_json(&json) {
        Err(SnapshotError::Inconsistent(msg)) => assert!(msg.contains("distinct")),
        other => panic!("expected inconsistency, got {other:?}"),
    }
    assert!(matches!(from_json("{"), Err(SnapshotError::Json(_))));
}

#[test]
fn player_view_hides_opponent_cards() {
    let state = dealt_state();
    let view = player_view(&state, &p1());
    assert_eq!(view.phase, Phase::Auction);
    assert_eq!(view.hand.len(), 10);
    assert_eq!(view.hand_sizes[&p2()], 10);
    assert_eq!(view.musiks_remaining, 2);
    assert_eq!(view.turn, Some(p2()));
    assert!(view.legal_bids.is_empty());

    let view = player_view(&state, &p2());
    assert_eq!(view.legal_bids, vec![0, 110]);
    assert_eq!(view.highest_bid, 100);
    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.contains("\"musiks\""));
}

#[test]
fn snapshot_with_invalid_params_rejected() {
    let state = dealt_state();
    let json = to_json(&state)
        .unwrap()
        .replacen("\"min_raise\":10", "\"min_raise\":0", 1);
    assert!(json.contains("\"min_raise\":0"));
    match from_json(&json) {
        Err(SnapshotError::Inconsistent(msg)) => assert!(msg.contains("positive")),
        other => panic!("expected invalid params, got {other:?}"),
    }
}
