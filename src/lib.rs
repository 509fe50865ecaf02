//! Elo Engine - Pairwise Elo rating calculations
//!
//! This crate computes updated skill ratings for two competitors after a
//! head-to-head match. It implements the classic Elo update, three policies
//! for deriving a match result from raw point totals, and an optional
//! margin-of-victory bonus (the L-factor). Pure computation: no persistence,
//! no player registry, no I/O beyond returned values.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use config::EloConfig;
pub use error::{RatingError, Result};
pub use rating::{EloRatingCalculator, RatingCalculator};
pub use types::{MatchOutcome, RatingChange, ScorePair, ScorePolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
