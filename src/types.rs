//! Common value types used throughout the rating engine

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the sum of a valid score pair.
///
/// Deliberately looser than 1.0 so that score pairs assembled from floating
/// point arithmetic (e.g. normalized point shares) are never rejected over
/// rounding slack. The bound is strict: a sum of exactly 1.1 is invalid.
pub const MAX_SCORE_SUM: f64 = 1.1;

/// Outcome of a head-to-head match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Draw,
    WinA,
    WinB,
}

impl MatchOutcome {
    /// Realized score pair for this outcome: 1/0 for a win, 0.5/0.5 for a draw.
    pub fn scores(&self) -> ScorePair {
        match self {
            MatchOutcome::Draw => ScorePair::DRAW,
            MatchOutcome::WinA => ScorePair {
                score_a: 1.0,
                score_b: 0.0,
            },
            MatchOutcome::WinB => ScorePair {
                score_a: 0.0,
                score_b: 1.0,
            },
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Draw => write!(f, "Draw"),
            MatchOutcome::WinA => write!(f, "WinA"),
            MatchOutcome::WinB => write!(f, "WinB"),
        }
    }
}

/// Policy for converting raw point totals into a match result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScorePolicy {
    /// Win/draw/loss only; the margin of victory is discarded.
    BinaryOutcome,
    /// Score is each player's share of the total points; blowouts move
    /// ratings further than narrow wins, with no separate bonus term.
    RationalizePoints,
    /// Win/draw/loss for the core update, then an L-factor bonus scaled
    /// by point share.
    #[default]
    BinaryWithBonus,
}

impl std::fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorePolicy::BinaryOutcome => write!(f, "BinaryOutcome"),
            ScorePolicy::RationalizePoints => write!(f, "RationalizePoints"),
            ScorePolicy::BinaryWithBonus => write!(f, "BinaryWithBonus"),
        }
    }
}

/// Realized match result for both players
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub score_a: f64,
    pub score_b: f64,
}

impl ScorePair {
    /// Score pair for a drawn match
    pub const DRAW: ScorePair = ScorePair {
        score_a: 0.5,
        score_b: 0.5,
    };

    /// Create a validated score pair.
    ///
    /// Each score must lie in `[0, 1]` and the pair must sum below
    /// [`MAX_SCORE_SUM`]. Invalid pairs are rejected with
    /// [`RatingError::InvalidScorePair`].
    pub fn new(score_a: f64, score_b: f64) -> Result<Self> {
        let pair = ScorePair { score_a, score_b };
        if pair.is_valid() {
            Ok(pair)
        } else {
            Err(RatingError::InvalidScorePair { score_a, score_b }.into())
        }
    }

    /// Check the bounds and sum invariant
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.score_a)
            && (0.0..=1.0).contains(&self.score_b)
            && self.score_a + self.score_b < MAX_SCORE_SUM
    }
}

/// Rating change information for a single player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: f64,
    pub new_rating: f64,
    pub delta: f64,
}

impl RatingChange {
    /// Build a change record from a rating before and after an update
    pub fn between(old_rating: f64, new_rating: f64) -> Self {
        Self {
            old_rating,
            new_rating,
            delta: new_rating - old_rating,
        }
    }
}
