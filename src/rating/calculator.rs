//! Rating calculator trait
//!
//! This module defines the interface for pairwise rating updates so that
//! callers can stay agnostic of the concrete rating system.

use crate::types::{MatchOutcome, ScorePolicy};

/// Trait for computing updated ratings after a head-to-head match
pub trait RatingCalculator: Send + Sync {
    /// Calculate new ratings for two players from an explicit match outcome
    ///
    /// # Arguments
    /// * `rating_a` - current rating of player A
    /// * `rating_b` - current rating of player B
    /// * `outcome` - who won, or a draw
    ///
    /// # Returns
    /// New ratings `(new_a, new_b)`. On error the caller's ratings are
    /// untouched and remain current.
    fn update_by_outcome(
        &self,
        rating_a: f64,
        rating_b: f64,
        outcome: MatchOutcome,
    ) -> crate::error::Result<(f64, f64)>;

    /// Calculate new ratings for two players from raw point totals
    ///
    /// Point totals must be finite and non-negative. The policy selects how
    /// the totals are converted into a match result.
    fn update_by_points(
        &self,
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
        policy: ScorePolicy,
    ) -> crate::error::Result<(f64, f64)>;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}
