use tracing::{debug, trace};

use crate::domain::cards_logic::{can_announce_marriage, card_points};
use crate::domain::phase::{advance, require_actor, require_phase};
use crate::domain::rules::Points;
use crate::domain::scoring::finalize_scoring;
use crate::domain::state::{expected_actor, require_trick, GameState, Phase, Play, PlayerId, Trick};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, LegalityKind, PreconditionKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Card points of the completed trick (0 otherwise).
    pub trick_points: Points,
    /// Marriage announced with this lead; it is now trump.
    pub marriage: Option<Suit>,
    /// Phase the hand ended up in, if this play left `Play`.
    pub phase_transitioned: Option<Phase>,
}

/// Winner of a resolved trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickOutcome {
    pub winning_play: usize,
    pub winner: PlayerId,
    pub points: Points,
}

/// Cards `who` may play right now; empty unless it is a trick in progress.
pub fn legal_plays(state: &GameState, who: &PlayerId) -> Vec<Card> {
    if state.phase != Phase::Play {
        return Vec::new();
    }
    let hand = state.hand(who);
    let lead = state
        .play
        .current_trick
        .as_ref()
        .and_then(|t| t.led_suit);

    let mut legal: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => hand.to_vec(),
    };
    legal.sort();
    legal
}

/// Play a card into the current trick.
///
/// The leader may ask to announce a marriage with a King or Queen; a
/// follower's request is ignored. Completing the last trick settles the hand
/// in the same call.
pub fn play_card(
    state: &mut GameState,
    who: &PlayerId,
    card: Card,
    announce_marriage: bool,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::Play)?;
    let trick = require_trick(state)?;
    let expected = expected_actor(&state.params, &trick.leader, trick.plays.len())
        .cloned()
        .ok_or_else(|| DomainError::precondition(PreconditionKind::NoTrickInProgress))?;
    require_actor(who, &expected)?;

    let hand = state.hand(who);
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::illegal(LegalityKind::CardNotInHand(card)));
    };

    let leading = trick.plays.is_empty();
    let mut marriage = None;
    if leading {
        if announce_marriage {
            if !can_announce_marriage(hand, card) {
                return Err(DomainError::illegal(LegalityKind::IllegalMarriage(card)));
            }
            if let Some(trump) = state.play.trump {
                return Err(DomainError::illegal(LegalityKind::TrumpAlreadySet { trump }));
            }
            marriage = Some(card.suit);
        }
    } else if let Some(led) = trick.led_suit {
        if card.suit != led && hand_has_suit(hand, led) {
            return Err(DomainError::illegal(LegalityKind::MustFollowSuit { led, card }));
        }
    }

    // All checks passed; mutate.
    if let Some(hand) = state.deal.hands.get_mut(who) {
        hand.remove(pos);
    }
    if let Some(suit) = marriage {
        state.play.trump = Some(suit);
        *state.scores.deal_points.entry(who.clone()).or_insert(0) += suit.marriage_value();
        debug!(player = %who, trump = %suit, bonus = suit.marriage_value(), "marriage announced");
    }

    let count = state.params.player_count();
    let trick = state
        .play
        .current_trick
        .as_mut()
        .ok_or_else(|| DomainError::precondition(PreconditionKind::NoTrickInProgress))?;
    if leading {
        trick.led_suit = Some(card.suit);
    }
    trick.plays.push(Play {
        player: who.clone(),
        card,
        announced_marriage: marriage,
    });
    trace!(player = %who, card = %card, "card played");

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_points: 0,
        marriage,
        phase_transitioned: None,
    };
    if trick.plays.len() < count {
        return Ok(result);
    }

    let Some(outcome) = resolve_trick(trick, state.play.trump) else {
        return Err(DomainError::precondition(PreconditionKind::NoTrickInProgress));
    };
    trick.winning_play = Some(outcome.winning_play);
    let finished = state.play.current_trick.take();
    state.play.completed_tricks.extend(finished);
    *state
        .scores
        .deal_points
        .entry(outcome.winner.clone())
        .or_insert(0) += outcome.points;
    state.play.last_trick_winner = Some(outcome.winner.clone());
    state.play.remaining_cards = state.play.remaining_cards.saturating_sub(count);
    debug!(
        winner = %outcome.winner,
        points = outcome.points,
        remaining = state.play.remaining_cards,
        "trick resolved"
    );

    result.trick_completed = true;
    result.trick_points = outcome.points;
    result.trick_winner = Some(outcome.winner.clone());

    if state.play.remaining_cards > 0 {
        state.play.current_trick = Some(Trick::led_by(outcome.winner));
        return Ok(result);
    }

    let table_points = card_points(&state.deal.table_cards);
    *state.scores.deal_points.entry(outcome.winner).or_insert(0) += table_points;
    advance(state, Phase::Scoring);
    finalize_scoring(state)?;
    result.phase_transitioned = Some(state.phase);
    Ok(result)
}

/// Best play of a trick under trump and led-suit precedence.
///
/// `None` for a trick with no plays.
pub fn resolve_trick(trick: &Trick, trump: Option<Suit>) -> Option<TrickOutcome> {
    let lead = trick.led_suit?;
    let first = trick.plays.first()?;
    let mut best = 0usize;
    let mut best_card = first.card;
    for (i, play) in trick.plays.iter().enumerate().skip(1) {
        if card_beats(play.card, best_card, lead, trump) {
            best = i;
            best_card = play.card;
        }
    }
    Some(TrickOutcome {
        winning_play: best,
        winner: trick.plays[best].player.clone(),
        points: card_points(&trick.cards().collect::<Vec<_>>()),
    })
}
