//! Rating update calculations
//!
//! This module defines the calculator interface and the Elo implementation
//! with its three point-conversion policies and margin-of-victory bonus.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::EloRatingCalculator;
