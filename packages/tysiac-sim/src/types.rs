//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable totals at the end of the run
    Summary,
    /// One JSON object per game
    Jsonl,
}
