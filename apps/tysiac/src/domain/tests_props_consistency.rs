//! Property tests over whole random hands: conservation, monotonic auction,
//! single trump, and settlement arithmetic.

use proptest::prelude::*;

use crate::domain::bidding::highest_bid;
use crate::domain::cards_logic::card_points;
use crate::domain::invariants;
use crate::domain::state::Phase;
use crate::domain::test_gens;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_invariants_hold_through_a_hand(
        deck in test_gens::shuffled_deck(),
        choices in test_gens::choices(),
    ) {
        let mut state = test_gens::dealt_from(&deck);
        prop_assert!(invariants::check(&state).is_ok());

        let mut last_high = highest_bid(&state);
        let mut trump_seen = None;
        let mut failure = None;
        test_gens::play_random_hand(&mut state, &choices, |s| {
            if failure.is_some() {
                return;
            }
            if let Err(e) = invariants::check(s) {
                failure = Some(e);
                return;
            }
            let high = highest_bid(s);
            if high < last_high {
                failure = Some(format!("high bid fell from {last_high} to {high}"));
            }
            last_high = high;
            match (trump_seen, s.play.trump) {
                (Some(before), Some(now)) if before != now => {
                    failure = Some(format!("trump changed {before} -> {now}"));
                }
                (Some(_), None) if s.phase == Phase::Play => {
                    failure = Some("trump cleared mid-hand".into());
                }
                (_, now) => trump_seen = trump_seen.or(now),
            }
        });
        prop_assert_eq!(failure, None);
        prop_assert_eq!(state.phase, Phase::HandEnd);
        prop_assert_eq!(state.play.completed_tricks.len(), 10);
    }

    #[test]
    fn prop_deal_points_cover_all_card_points(
        deck in test_gens::shuffled_deck(),
        choices in test_gens::choices(),
    ) {
        let mut state = test_gens::dealt_from(&deck);
        test_gens::play_random_hand(&mut state, &choices, |_| {});

        let marriages: i32 = state
            .play
            .completed_tricks
            .iter()
            .flat_map(|t| t.plays.iter())
            .filter_map(|p| p.announced_marriage)
            .map(|s| s.marriage_value())
            .sum();
        let earned: i32 = state.scores.deal_points.values().sum();
        prop_assert_eq!(earned, 120 + marriages);
        prop_assert_eq!(card_points(&crate::domain::rules::full_deck()), 120);
    }

    #[test]
    fn prop_settlement_matches_rule(
        deck in test_gens::shuffled_deck(),
        choices in test_gens::choices(),
    ) {
        let mut state = test_gens::dealt_from(&deck);
        test_gens::play_random_hand(&mut state, &choices, |_| {});

        let declarer = state.declarer.clone().expect("declarer after auction");
        let bid = highest_bid(&state);
        for player in state.params.players.clone() {
            let earned = state.deal_points(&player);
            let expected = if player == declarer {
                if earned >= bid { bid } else { -bid }
            } else {
                earned
            };
            prop_assert_eq!(state.cumulative(&player), expected);
        }
    }
}
