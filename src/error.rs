//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the library.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid score pair ({score_a}, {score_b}): each score must be in [0, 1] and their sum below 1.1")]
    InvalidScorePair { score_a: f64, score_b: f64 },

    #[error("Invalid point totals ({points_a}, {points_b}): points must be finite and non-negative")]
    InvalidPointTotals { points_a: f64, points_b: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
