use tracing::{debug, trace};

use crate::domain::phase::{advance, require_actor, require_phase};
use crate::domain::rules::{next_minimum_bid, Points};
use crate::domain::state::{AuctionBid, GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, LegalityKind, PreconditionKind};

/// Highest non-pass value in the auction log, 0 if nobody has bid.
pub fn highest_bid(state: &GameState) -> Points {
    state
        .auction
        .bids
        .iter()
        .filter(|b| !b.pass)
        .map(|b| b.value)
        .max()
        .unwrap_or(0)
}

/// Smallest raise the current bidder may make.
pub fn next_minimum(state: &GameState) -> Points {
    next_minimum_bid(
        highest_bid(state),
        state.params.min_bid,
        state.auction.min_raise,
    )
}

/// `[0, next_minimum]` for the player on turn, empty for everyone else.
///
/// A hint, not an exhaustive list: any value obeying the raise rule is legal.
pub fn legal_bids(state: &GameState, who: &PlayerId) -> Vec<Points> {
    if state.phase != Phase::Auction || state.auction.current_bidder.as_ref() != Some(who) {
        return Vec::new();
    }
    vec![0, next_minimum(state)]
}

/// Place a bid; `value == 0` passes.
pub fn place_bid(state: &mut GameState, who: &PlayerId, value: Points) -> Result<(), DomainError> {
    require_phase(state, Phase::Auction)?;
    let expected = state
        .auction
        .current_bidder
        .clone()
        .ok_or_else(|| DomainError::precondition(PreconditionKind::NoDeclarer))?;
    require_actor(who, &expected)?;

    if value == 0 {
        state.auction.bids.push(AuctionBid {
            player: who.clone(),
            value: 0,
            pass: true,
        });
        state.auction.active_players.retain(|p| p != who);
        trace!(player = %who, "pass");

        if let [winner] = state.auction.active_players.as_slice() {
            let winner = winner.clone();
            debug!(declarer = %winner, bid = highest_bid(state), "auction won");
            state.declarer = Some(winner);
            state.auction.current_bidder = None;
            advance(state, Phase::TalonExchange);
        } else {
            state.auction.current_bidder = next_active_after(state, who);
        }
        return Ok(());
    }

    let high = highest_bid(state);
    let legal = value >= state.params.min_bid
        && value > high
        && value - high >= state.auction.min_raise;
    if !legal {
        return Err(DomainError::illegal(LegalityKind::IllegalBid {
            value,
            minimum: next_minimum(state),
        }));
    }

    state.auction.bids.push(AuctionBid {
        player: who.clone(),
        value,
        pass: false,
    });
    state.auction.current_bidder = next_active_after(state, who);
    trace!(player = %who, value, "bid");
    Ok(())
}

/// The next participant in seat order after `who` that has not passed.
fn next_active_after(state: &GameState, who: &PlayerId) -> Option<PlayerId> {
    let count = state.params.player_count();
    (1..=count)
        .filter_map(|n| state.params.nth_after(who, n))
        .find(|p| state.auction.active_players.contains(p))
        .cloned()
}
