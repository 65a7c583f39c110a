//! Error codes for the Tysiąc engine.
//!
//! Every `DomainError` maps to exactly one code. Presentation layers can
//! branch on these without matching the nested error kinds.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Phase / turn guards
    /// Operation invoked outside its phase
    WrongPhase,
    /// Operation invoked by a participant who is not the designated actor
    OutOfTurn,

    // Input validation
    UnsupportedPlayerCount,
    UnknownPlayer,
    InvalidHand,
    InvalidMusik,
    DuplicateCard,
    InvalidDeck,
    InvalidDiscard,
    InvalidMusikIndex,
    ParseCard,
    InvalidParams,

    // Rule violations
    IllegalBid,
    IllegalMarriage,
    TrumpAlreadySet,
    MustFollowSuit,
    CardNotInHand,
    MusikAlreadyChosen,
    MusikNotChosen,

    // Preconditions
    NoDeclarer,
    NoTrickInProgress,
    HandNotFinished,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WrongPhase => "WRONG_PHASE",
            Self::OutOfTurn => "OUT_OF_TURN",

            Self::UnsupportedPlayerCount => "UNSUPPORTED_PLAYER_COUNT",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::InvalidHand => "INVALID_HAND",
            Self::InvalidMusik => "INVALID_MUSIK",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::InvalidDeck => "INVALID_DECK",
            Self::InvalidDiscard => "INVALID_DISCARD",
            Self::InvalidMusikIndex => "INVALID_MUSIK_INDEX",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidParams => "INVALID_PARAMS",

            Self::IllegalBid => "ILLEGAL_BID",
            Self::IllegalMarriage => "ILLEGAL_MARRIAGE",
            Self::TrumpAlreadySet => "TRUMP_ALREADY_SET",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MusikAlreadyChosen => "MUSIK_ALREADY_CHOSEN",
            Self::MusikNotChosen => "MUSIK_NOT_CHOSEN",

            Self::NoDeclarer => "NO_DECLARER",
            Self::NoTrickInProgress => "NO_TRICK_IN_PROGRESS",
            Self::HandNotFinished => "HAND_NOT_FINISHED",
        }
    }

    /// Whether the code reports a rule violation a UI should re-prompt for,
    /// as opposed to a malformed request or a broken precondition.
    pub const fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::IllegalBid
                | Self::IllegalMarriage
                | Self::TrumpAlreadySet
                | Self::MustFollowSuit
                | Self::CardNotInHand
                | Self::MusikAlreadyChosen
                | Self::MusikNotChosen
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
