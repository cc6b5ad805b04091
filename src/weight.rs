/*!
 * Weight adaptor bridging a pair scorer into the cost function an aligner
 * consumes.
 *
 * The adaptor is the capability-bound callable of the pipeline: it holds an
 * immutable scorer reference and exposes a single two-argument scoring
 * operation over normalized items.
 */

use std::sync::Arc;

use crate::document::NormalizedItem;
use crate::errors::ScorerError;
use crate::scorers::{ComparisonRecord, PairScorer};

/// Pairwise cost function handed to an aligner
///
/// Implementations must be safe to call concurrently when the alignment
/// service is shared across threads.
pub trait PairWeight: Send + Sync {
    /// Cost of pairing one source item with one target item
    fn weight(&self, source: &NormalizedItem, target: &NormalizedItem) -> Result<f64, ScorerError>;
}

/// A [`PairWeight`] backed by a pair scorer.
///
/// For every compared pair it computes the positional distance, builds a
/// fresh [`ComparisonRecord`], queries the scorer and extracts the element at
/// row 0, column 0 of the returned matrix. Nothing is cached; repeated calls
/// re-query the scorer.
#[derive(Debug, Clone)]
pub struct ScorerWeight {
    /// The bound scorer
    scorer: Arc<dyn PairScorer>,
}

impl ScorerWeight {
    /// Bind a scorer into a weight function
    pub fn new(scorer: Arc<dyn PairScorer>) -> Self {
        Self { scorer }
    }
}

impl PairWeight for ScorerWeight {
    fn weight(&self, source: &NormalizedItem, target: &NormalizedItem) -> Result<f64, ScorerError> {
        let distance = (source.position - target.position).abs();
        let record = ComparisonRecord::new(&source.unit, &target.unit, distance);
        let scores = self.scorer.score(&record)?;
        scores.get(0, 0).ok_or(ScorerError::EmptyScore)
    }
}
