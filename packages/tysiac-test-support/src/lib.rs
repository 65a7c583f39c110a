//! Test support utilities for the Tysiąc engine.
//!
//! Shared between the engine's unit tests, its integration tests and the
//! simulator so every suite initializes logging the same way.

pub mod test_logging;
