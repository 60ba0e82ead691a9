//! yh-core: Yahtzee game rules, scoring, score sheet, and turn state machine.
//!
//! The engine is the only place with real decision logic; display and input
//! handling live in `yh-cli` and talk to [`engine::Game`] through snapshots
//! and explicit commit outcomes.

pub mod category;
pub mod chance;
pub mod config;
pub mod engine;
pub mod hand;
pub mod scoring;
pub mod sheet;

pub use category::{Category, Section, NUM_CATS};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    ChanceMode, CommitOutcome, Game, GameError, GameSnapshot, RoundState,
};
pub use hand::{DiceHand, HandView, NUM_DICE};
pub use scoring::candidate_scores;
pub use sheet::{ScoreEntry, ScoreSheet, Totals};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod chance_tests;
#[cfg(test)]
mod scoring_tests;
