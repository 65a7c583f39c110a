//! Drivers that run the engine with decision providers.

pub mod game_flow;
