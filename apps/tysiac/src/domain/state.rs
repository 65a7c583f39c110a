use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::params::GameParams;
use crate::domain::phase;
use crate::domain::rules::Points;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, PreconditionKind, ValidationKind};

/// Participant identity as given in `GameParams::players`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phases of a single hand, in strict forward order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Transient; replaced by `Deal` during construction.
    Init,
    /// Waiting for hands and musiks.
    Deal,
    Auction,
    /// Declarer takes a musik and discards.
    TalonExchange,
    Play,
    /// Settlement in progress.
    Scoring,
    /// Hand complete; build the next one with `GameState::next_hand`.
    HandEnd,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Init => "Init",
            Phase::Deal => "Deal",
            Phase::Auction => "Auction",
            Phase::TalonExchange => "TalonExchange",
            Phase::Play => "Play",
            Phase::Scoring => "Scoring",
            Phase::HandEnd => "HandEnd",
        };
        f.write_str(s)
    }
}

/// Cards held by participants, the face-down musiks and the table pile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealState {
    pub hands: BTreeMap<PlayerId, Vec<Card>>,
    /// Empty once the declarer has chosen.
    pub musiks: Vec<Vec<Card>>,
    /// Unchosen musiks plus the declarer's discards.
    pub table_cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionBid {
    pub player: PlayerId,
    /// Zero for a pass.
    pub value: Points,
    pub pass: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionState {
    /// Ordered log; the dealer's implicit opening bid comes first.
    pub bids: Vec<AuctionBid>,
    /// Players who have not passed, in seat order.
    pub active_players: Vec<PlayerId>,
    pub current_bidder: Option<PlayerId>,
    pub min_raise: Points,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
    /// Suit of the marriage announced with this lead, if any.
    pub announced_marriage: Option<Suit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: PlayerId,
    pub plays: Vec<Play>,
    pub led_suit: Option<Suit>,
    /// Index into `plays` once the trick is resolved.
    pub winning_play: Option<usize>,
}

impl Trick {
    pub fn led_by(leader: PlayerId) -> Self {
        Self {
            leader,
            plays: Vec::new(),
            led_suit: None,
            winning_play: None,
        }
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        self.winning_play
            .and_then(|i| self.plays.get(i))
            .map(|p| &p.player)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|p| p.card)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayState {
    pub current_trick: Option<Trick>,
    pub completed_tricks: Vec<Trick>,
    pub trump: Option<Suit>,
    /// Cards still to be played across all hands.
    pub remaining_cards: usize,
    pub last_trick_winner: Option<PlayerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points taken during this hand (tricks, marriages, table pile).
    pub deal_points: BTreeMap<PlayerId, Points>,
    pub cumulative: BTreeMap<PlayerId, Points>,
}

/// Root aggregate for one hand. Mutated only through the domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub params: GameParams,
    pub dealer: PlayerId,
    /// Set when the auction resolves; fixed for the rest of the hand.
    pub declarer: Option<PlayerId>,
    pub deal: DealState,
    pub auction: AuctionState,
    pub play: PlayState,
    pub scores: ScoreState,
}

impl GameState {
    /// Build a hand ready for `set_dealt_cards`.
    ///
    /// Zero-valued params fall back to defaults. `carried` supplies cumulative
    /// scores from earlier hands; missing entries start at zero.
    pub fn new(
        params: GameParams,
        dealer: PlayerId,
        carried: Option<&BTreeMap<PlayerId, Points>>,
    ) -> Result<Self, DomainError> {
        let params = params.normalized();
        params.validate()?;
        if !params.is_player(&dealer) {
            return Err(DomainError::validation(ValidationKind::UnknownPlayer(
                dealer,
            )));
        }

        let mut hands = BTreeMap::new();
        let mut deal_points = BTreeMap::new();
        let mut cumulative = BTreeMap::new();
        for p in &params.players {
            hands.insert(p.clone(), Vec::new());
            deal_points.insert(p.clone(), 0);
            let carried_score = carried.and_then(|c| c.get(p)).copied().unwrap_or(0);
            cumulative.insert(p.clone(), carried_score);
        }

        let opening = AuctionBid {
            player: dealer.clone(),
            value: params.min_bid,
            pass: false,
        };
        let current_bidder = params.next_player(&dealer).cloned();

        let mut state = Self {
            phase: Phase::Init,
            auction: AuctionState {
                bids: vec![opening],
                active_players: params.players.clone(),
                current_bidder,
                min_raise: params.min_raise,
            },
            params,
            dealer,
            declarer: None,
            deal: DealState {
                hands,
                ..DealState::default()
            },
            play: PlayState::default(),
            scores: ScoreState {
                deal_points,
                cumulative,
            },
        };
        phase::advance(&mut state, Phase::Deal);
        Ok(state)
    }

    /// Successor hand: dealer rotated one seat, cumulative scores carried.
    pub fn next_hand(&self) -> Result<Self, DomainError> {
        if self.phase != Phase::HandEnd {
            return Err(DomainError::precondition(
                PreconditionKind::HandNotFinished { phase: self.phase },
            ));
        }
        let dealer = self
            .params
            .next_player(&self.dealer)
            .cloned()
            .unwrap_or_else(|| self.dealer.clone());
        Self::new(self.params.clone(), dealer, Some(&self.scores.cumulative))
    }

    pub fn hand(&self, player: &PlayerId) -> &[Card] {
        self.deal
            .hands
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn deal_points(&self, player: &PlayerId) -> Points {
        self.scores.deal_points.get(player).copied().unwrap_or(0)
    }

    pub fn cumulative(&self, player: &PlayerId) -> Points {
        self.scores.cumulative.get(player).copied().unwrap_or(0)
    }

    /// Every card currently placed somewhere in this hand.
    pub fn card_count(&self) -> usize {
        let hands: usize = self.deal.hands.values().map(Vec::len).sum();
        let musiks: usize = self.deal.musiks.iter().map(Vec::len).sum();
        let in_tricks: usize = self
            .play
            .completed_tricks
            .iter()
            .chain(self.play.current_trick.iter())
            .map(|t| t.plays.len())
            .sum();
        hands + musiks + self.deal.table_cards.len() + in_tricks
    }
}

/// Seat math over a fixed ring of `count` seats.
#[inline]
pub fn nth_from(start: usize, n: usize, count: usize) -> usize {
    debug_assert!(count > 0, "seat ring must not be empty");
    (start + n) % count
}

/// Expected actor during a trick: the leader advanced by plays so far.
pub fn expected_actor<'a>(
    params: &'a GameParams,
    leader: &PlayerId,
    play_count: usize,
) -> Option<&'a PlayerId> {
    params.nth_after(leader, play_count)
}

/// Whoever must act next in the current phase, if anyone.
pub fn current_turn_player(state: &GameState) -> Option<PlayerId> {
    match state.phase {
        Phase::Auction => state.auction.current_bidder.clone(),
        Phase::TalonExchange => state.declarer.clone(),
        Phase::Play => {
            let trick = state.play.current_trick.as_ref()?;
            expected_actor(&state.params, &trick.leader, trick.plays.len()).cloned()
        }
        _ => None,
    }
}

pub fn require_declarer(state: &GameState) -> Result<&PlayerId, DomainError> {
    state
        .declarer
        .as_ref()
        .ok_or_else(|| DomainError::precondition(PreconditionKind::NoDeclarer))
}

pub fn require_trick(state: &GameState) -> Result<&Trick, DomainError> {
    state
        .play
        .current_trick
        .as_ref()
        .ok_or_else(|| DomainError::precondition(PreconditionKind::NoTrickInProgress))
}
