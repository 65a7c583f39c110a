//! Per-game metrics and run-wide aggregates.

use std::collections::BTreeMap;

use serde::Serialize;
use tysiac::{HandSummary, PlayerId, Points};

use crate::simulator::GameResult;

/// One JSONL record.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub providers: BTreeMap<PlayerId, String>,
    pub winner: Option<PlayerId>,
    pub final_scores: BTreeMap<PlayerId, Points>,
    pub hands_played: usize,
    pub duration_ms: f64,
    pub hands: Vec<HandSummary>,
}

pub fn build_game_metrics(
    game_id: u32,
    players: &[PlayerId],
    providers: &[String],
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    GameMetrics {
        game_id,
        seed: result.game_seed,
        providers: players.iter().cloned().zip(providers.iter().cloned()).collect(),
        winner: result.summary.winner.clone(),
        final_scores: result.summary.final_scores.clone(),
        hands_played: result.summary.hands.len(),
        duration_ms,
        hands: result.summary.hands.clone(),
    }
}

/// Running totals for one seat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatStats {
    pub wins: u32,
    pub total_score: i64,
    pub declared: u32,
    pub made: u32,
    pub marriages: u32,
}

impl SeatStats {
    pub fn made_pct(&self) -> f64 {
        if self.declared == 0 {
            0.0
        } else {
            f64::from(self.made) / f64::from(self.declared) * 100.0
        }
    }
}

#[derive(Debug, Default)]
pub struct RunStats {
    pub games: u32,
    pub undecided: u32,
    pub seats: BTreeMap<PlayerId, SeatStats>,
}

impl RunStats {
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        let summary = &result.summary;
        match &summary.winner {
            Some(w) => self.seats.entry(w.clone()).or_default().wins += 1,
            None => self.undecided += 1,
        }
        for (player, score) in &summary.final_scores {
            self.seats.entry(player.clone()).or_default().total_score += i64::from(*score);
        }
        for hand in &summary.hands {
            let seat = self.seats.entry(hand.declarer.clone()).or_default();
            seat.declared += 1;
            if hand.made {
                seat.made += 1;
            }
            for (player, _) in &hand.marriages {
                self.seats.entry(player.clone()).or_default().marriages += 1;
            }
        }
    }
}
