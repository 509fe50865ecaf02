//! Elo rating calculator implementation
//!
//! This module provides the concrete implementation of the rating calculator
//! using the Elo formula, extended with an optional margin-of-victory bonus
//! (the L-factor) on top of the classic K-factor update.

use crate::config::EloConfig;
use crate::error::{RatingError, Result};
use crate::rating::calculator::RatingCalculator;
use crate::types::{MatchOutcome, RatingChange, ScorePair, ScorePolicy};
use tracing::warn;

/// Elo rating calculator
///
/// Holds only its configuration, which is read-only after construction, so a
/// single instance can be shared across threads without synchronization.
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: EloConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Current configuration
    pub fn elo_config(&self) -> &EloConfig {
        &self.config
    }

    /// Expected score for the first player against the second
    fn expect(&self, rating: f64, opponent_rating: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / self.config.c_value))
    }

    /// Expected scores for both players from the rating gap
    ///
    /// Each side is computed through the logistic formula rather than as
    /// `1 - other`; the two always sum to 1.
    pub fn expected_scores(&self, rating_a: f64, rating_b: f64) -> (f64, f64) {
        (self.expect(rating_a, rating_b), self.expect(rating_b, rating_a))
    }

    /// K-factor update for a single player
    fn apply(&self, rating: f64, score: f64, expected: f64) -> f64 {
        rating + self.config.k_factor * (score - expected)
    }

    /// Calculate new ratings from an explicit realized score pair
    ///
    /// This is the core update every other operation funnels through. The
    /// score pair is validated first; an invalid pair produces
    /// [`RatingError::InvalidScorePair`] and the update is skipped, leaving
    /// the caller's ratings untouched.
    pub fn update_by_scores(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    ) -> Result<(f64, f64)> {
        let scores = match ScorePair::new(score_a, score_b) {
            Ok(scores) => scores,
            Err(e) => {
                warn!(score_a, score_b, "rejected invalid score pair");
                return Err(e);
            }
        };

        let (expected_a, expected_b) = self.expected_scores(rating_a, rating_b);

        Ok((
            self.apply(rating_a, scores.score_a, expected_a),
            self.apply(rating_b, scores.score_b, expected_b),
        ))
    }

    /// Rating change records for an explicit outcome
    pub fn outcome_changes(
        &self,
        rating_a: f64,
        rating_b: f64,
        outcome: MatchOutcome,
    ) -> Result<(RatingChange, RatingChange)> {
        let (new_a, new_b) = self.update_by_outcome(rating_a, rating_b, outcome)?;
        Ok((
            RatingChange::between(rating_a, new_a),
            RatingChange::between(rating_b, new_b),
        ))
    }

    /// Rating change records for raw point totals under the given policy
    pub fn points_changes(
        &self,
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
        policy: ScorePolicy,
    ) -> Result<(RatingChange, RatingChange)> {
        let (new_a, new_b) = self.update_by_points(rating_a, rating_b, points_a, points_b, policy)?;
        Ok((
            RatingChange::between(rating_a, new_a),
            RatingChange::between(rating_b, new_b),
        ))
    }

    /// Reject negative or non-finite point totals
    fn check_points(points_a: f64, points_b: f64) -> Result<()> {
        if points_a.is_finite() && points_b.is_finite() && points_a >= 0.0 && points_b >= 0.0 {
            Ok(())
        } else {
            warn!(points_a, points_b, "rejected invalid point totals");
            Err(RatingError::InvalidPointTotals { points_a, points_b }.into())
        }
    }

    /// Win/draw/loss score pair from point totals, margin discarded
    fn binary_scores(points_a: f64, points_b: f64) -> ScorePair {
        if points_a == points_b {
            ScorePair::DRAW
        } else if points_a > points_b {
            MatchOutcome::WinA.scores()
        } else {
            MatchOutcome::WinB.scores()
        }
    }

    /// Normalized point shares; a 0-0 match counts as a draw
    fn rationalized_scores(points_a: f64, points_b: f64) -> ScorePair {
        if points_a == 0.0 && points_b == 0.0 {
            return ScorePair::DRAW;
        }
        let total = points_a + points_b;
        ScorePair {
            score_a: points_a / total,
            score_b: points_b / total,
        }
    }

    /// Fraction of total points scored by the first argument.
    ///
    /// Equal totals (including 0-0) yield 0, which keeps the bonus out of
    /// drawn matches and avoids a division by zero.
    fn point_share(points: f64, opponent_points: f64) -> f64 {
        if points == opponent_points {
            return 0.0;
        }
        points / (points + opponent_points)
    }

    /// Direction of the surprise: sign of `score - expected`, or 0 when the
    /// outcome exactly matched expectation
    fn direction(score: f64, expected: f64) -> f64 {
        if score == expected {
            0.0
        } else if score > expected {
            1.0
        } else {
            -1.0
        }
    }

    /// Binary-outcome update plus the margin-of-victory bonus.
    ///
    /// The bonus direction always agrees with the core update's surprise and
    /// its magnitude scales with the player's share of the total points, so
    /// it never overrides the primary K-based movement.
    fn update_with_bonus(
        &self,
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
    ) -> Result<(f64, f64)> {
        let scores = Self::binary_scores(points_a, points_b);
        let (new_a, new_b) =
            self.update_by_scores(rating_a, rating_b, scores.score_a, scores.score_b)?;

        // Expectations come from the pre-update ratings
        let (expected_a, expected_b) = self.expected_scores(rating_a, rating_b);
        let l_factor = self.config.l_factor;

        let bonus_a =
            Self::direction(scores.score_a, expected_a) * l_factor * Self::point_share(points_a, points_b);
        let bonus_b =
            Self::direction(scores.score_b, expected_b) * l_factor * Self::point_share(points_b, points_a);

        Ok((new_a + bonus_a, new_b + bonus_b))
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn update_by_outcome(
        &self,
        rating_a: f64,
        rating_b: f64,
        outcome: MatchOutcome,
    ) -> Result<(f64, f64)> {
        let scores = outcome.scores();
        self.update_by_scores(rating_a, rating_b, scores.score_a, scores.score_b)
    }

    fn update_by_points(
        &self,
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
        policy: ScorePolicy,
    ) -> Result<(f64, f64)> {
        Self::check_points(points_a, points_b)?;

        match policy {
            ScorePolicy::BinaryOutcome => {
                let scores = Self::binary_scores(points_a, points_b);
                self.update_by_scores(rating_a, rating_b, scores.score_a, scores.score_b)
            }
            ScorePolicy::RationalizePoints => {
                let scores = Self::rationalized_scores(points_a, points_b);
                self.update_by_scores(rating_a, rating_b, scores.score_a, scores.score_b)
            }
            ScorePolicy::BinaryWithBonus => {
                self.update_with_bonus(rating_a, rating_b, points_a, points_b)
            }
        }
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: EloConfig = serde_json::from_value(config).map_err(|e| {
            RatingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            }
        })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
