//! Domain-level error type returned by every engine operation.
//!
//! Errors are synchronous values attached to the call that produced them.
//! An operation that returns `Err` has not changed the game state.

use thiserror::Error;

use crate::domain::rules::Points;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::{Card, Suit};
use crate::errors::error_code::ErrorCode;

/// Malformed input shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationKind {
    #[error("only {supported} players are supported, got {actual}")]
    UnsupportedPlayerCount { supported: usize, actual: usize },
    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),
    #[error("no hand dealt to player {0}")]
    MissingHand(PlayerId),
    #[error("player {player} must have {expected} cards, got {actual}")]
    HandSize {
        player: PlayerId,
        expected: usize,
        actual: usize,
    },
    #[error("expected {expected} musiks, got {actual}")]
    MusikCount { expected: usize, actual: usize },
    #[error("musik {index} must have {expected} cards, got {actual}")]
    MusikSize {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate card detected: {0}")]
    DuplicateCard(Card),
    #[error("expected {expected} unique cards, got {actual}")]
    DeckSize { expected: usize, actual: usize },
    #[error("must discard exactly {expected} cards, got {actual}")]
    DiscardCount { expected: usize, actual: usize },
    #[error("musik index {index} out of range ({available} available)")]
    InvalidMusikIndex { index: usize, available: usize },
    #[error("cannot parse card token {0:?}")]
    ParseCard(String),
    #[error("invalid game params: {0}")]
    InvalidParams(String),
}

/// Domain rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LegalityKind {
    #[error("illegal bid {value}, minimum is {minimum}")]
    IllegalBid { value: Points, minimum: Points },
    #[error("invalid marriage announcement with {0}")]
    IllegalMarriage(Card),
    #[error("trump is already {trump} for this deal")]
    TrumpAlreadySet { trump: Suit },
    #[error("must follow {led}, played {card}")]
    MustFollowSuit { led: Suit, card: Card },
    #[error("card {0} not in hand")]
    CardNotInHand(Card),
    #[error("musik was already taken")]
    MusikAlreadyChosen,
    #[error("musik must be taken before discarding")]
    MusikNotChosen,
}

/// Internal precondition that the state does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PreconditionKind {
    #[error("no declarer set")]
    NoDeclarer,
    #[error("no trick in progress")]
    NoTrickInProgress,
    #[error("hand is not finished (phase {phase})")]
    HandNotFinished { phase: Phase },
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Operation invoked outside its phase
    #[error("wrong phase: expected {expected}, currently {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    /// Operation invoked by someone other than the designated actor
    #[error("not {player}'s turn, waiting on {expected}")]
    OutOfTurn { player: PlayerId, expected: PlayerId },
    #[error("validation error: {0}")]
    Validation(ValidationKind),
    #[error("illegal action: {0}")]
    Illegal(LegalityKind),
    #[error("precondition failed: {0}")]
    Precondition(PreconditionKind),
}

impl DomainError {
    pub fn wrong_phase(expected: Phase, actual: Phase) -> Self {
        Self::WrongPhase { expected, actual }
    }
    pub fn out_of_turn(player: &PlayerId, expected: &PlayerId) -> Self {
        Self::OutOfTurn {
            player: player.clone(),
            expected: expected.clone(),
        }
    }
    pub fn validation(kind: ValidationKind) -> Self {
        Self::Validation(kind)
    }
    pub fn illegal(kind: LegalityKind) -> Self {
        Self::Illegal(kind)
    }
    pub fn precondition(kind: PreconditionKind) -> Self {
        Self::Precondition(kind)
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::WrongPhase { .. } => ErrorCode::WrongPhase,
            DomainError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
            DomainError::Validation(kind) => match kind {
                ValidationKind::UnsupportedPlayerCount { .. } => ErrorCode::UnsupportedPlayerCount,
                ValidationKind::UnknownPlayer(_) => ErrorCode::UnknownPlayer,
                ValidationKind::MissingHand(_) | ValidationKind::HandSize { .. } => {
                    ErrorCode::InvalidHand
                }
                ValidationKind::MusikCount { .. } | ValidationKind::MusikSize { .. } => {
                    ErrorCode::InvalidMusik
                }
                ValidationKind::DuplicateCard(_) => ErrorCode::DuplicateCard,
                ValidationKind::DeckSize { .. } => ErrorCode::InvalidDeck,
                ValidationKind::DiscardCount { .. } => ErrorCode::InvalidDiscard,
                ValidationKind::InvalidMusikIndex { .. } => ErrorCode::InvalidMusikIndex,
                ValidationKind::ParseCard(_) => ErrorCode::ParseCard,
                ValidationKind::InvalidParams(_) => ErrorCode::InvalidParams,
            },
            DomainError::Illegal(kind) => match kind {
                LegalityKind::IllegalBid { .. } => ErrorCode::IllegalBid,
                LegalityKind::IllegalMarriage(_) => ErrorCode::IllegalMarriage,
                LegalityKind::TrumpAlreadySet { .. } => ErrorCode::TrumpAlreadySet,
                LegalityKind::MustFollowSuit { .. } => ErrorCode::MustFollowSuit,
                LegalityKind::CardNotInHand(_) => ErrorCode::CardNotInHand,
                LegalityKind::MusikAlreadyChosen => ErrorCode::MusikAlreadyChosen,
                LegalityKind::MusikNotChosen => ErrorCode::MusikNotChosen,
            },
            DomainError::Precondition(kind) => match kind {
                PreconditionKind::NoDeclarer => ErrorCode::NoDeclarer,
                PreconditionKind::NoTrickInProgress => ErrorCode::NoTrickInProgress,
                PreconditionKind::HandNotFinished { .. } => ErrorCode::HandNotFinished,
            },
        }
    }
}
