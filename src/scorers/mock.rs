/*!
 * Mock scorer implementations for testing.
 *
 * This module provides mock scorers that simulate different behaviors:
 * - `MockScorer::constant(cost)` - Always returns the same cost
 * - `MockScorer::by_distance()` - Returns the positional distance as the cost
 * - `MockScorer::failing()` - Always fails with an error
 * - `MockScorer::shapeless()` - Returns a matrix with no addressable element
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ScorerError;
use crate::scorers::{ComparisonRecord, PairScorer, ScoreMatrix};

/// Behavior mode for the mock scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockScorerBehavior {
    /// Always returns the same cost
    Constant(f64),
    /// Returns the positional distance of the compared pair as the cost
    ByDistance,
    /// Always fails with an error
    Failing,
    /// Returns an empty score matrix, violating the shape contract
    Shapeless,
}

/// Mock scorer for testing alignment behavior
#[derive(Debug)]
pub struct MockScorer {
    /// Behavior mode
    behavior: MockScorerBehavior,
    /// Number of score requests served, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Custom score generator (optional)
    custom_score: Option<fn(&ComparisonRecord<'_>) -> ScoreMatrix>,
}

impl MockScorer {
    /// Create a new mock scorer with the specified behavior
    pub fn new(behavior: MockScorerBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_score: None,
        }
    }

    /// Create a mock scorer that returns the same cost for every pair
    pub fn constant(cost: f64) -> Self {
        Self::new(MockScorerBehavior::Constant(cost))
    }

    /// Create a mock scorer that scores each pair by its positional distance
    pub fn by_distance() -> Self {
        Self::new(MockScorerBehavior::ByDistance)
    }

    /// Create a failing mock scorer that always errors
    pub fn failing() -> Self {
        Self::new(MockScorerBehavior::Failing)
    }

    /// Create a mock scorer that returns an empty score matrix
    pub fn shapeless() -> Self {
        Self::new(MockScorerBehavior::Shapeless)
    }

    /// Set a custom score generator
    pub fn with_custom_score(mut self, generator: fn(&ComparisonRecord<'_>) -> ScoreMatrix) -> Self {
        self.custom_score = Some(generator);
        self
    }

    /// Number of score requests served so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockScorer {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_score: self.custom_score,
        }
    }
}

impl PairScorer for MockScorer {
    fn score(&self, record: &ComparisonRecord<'_>) -> Result<ScoreMatrix, ScorerError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if let Some(generator) = self.custom_score {
            return Ok(generator(record));
        }

        match self.behavior {
            MockScorerBehavior::Constant(cost) => Ok(ScoreMatrix::scalar(cost)),

            MockScorerBehavior::ByDistance => Ok(ScoreMatrix::scalar(record.distance)),

            MockScorerBehavior::Failing => Err(ScorerError::ScoringFailed(
                "Simulated scorer failure".to_string(),
            )),

            MockScorerBehavior::Shapeless => Ok(ScoreMatrix::new(Vec::new())),
        }
    }
}
