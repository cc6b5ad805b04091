/*!
 * Mock aligner implementations for testing.
 *
 * This module provides mock aligners that simulate different behaviors:
 * - `MockAligner::diagonal()` - Pairs items index by index, gaps for the rest
 * - `MockAligner::fixed(entries)` - Returns a canned alignment sequence
 * - `MockAligner::failing()` - Always fails with an error
 *
 * The diagonal aligner is not a real minimum-cost alignment; it exists to
 * exercise the orchestration around it with predictable output.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::aligners::{Aligner, Alignment};
use crate::document::NormalizedItem;
use crate::errors::AlignerError;
use crate::weight::PairWeight;

/// Behavior mode for the mock aligner
#[derive(Debug, Clone, PartialEq)]
pub enum MockAlignerBehavior {
    /// Pair item `i` with item `i`, then emit gaps for the longer side
    Diagonal,
    /// Return the given entries regardless of the inputs
    Fixed(Vec<Alignment>),
    /// Always fail with an error
    Failing,
}

/// Mock aligner for testing orchestration behavior
#[derive(Debug)]
pub struct MockAligner {
    /// Behavior mode
    behavior: MockAlignerBehavior,
    /// Number of align requests served, shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockAligner {
    /// Create a new mock aligner with the specified behavior
    pub fn new(behavior: MockAlignerBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock aligner that pairs items index by index
    pub fn diagonal() -> Self {
        Self::new(MockAlignerBehavior::Diagonal)
    }

    /// Create a mock aligner that returns a canned alignment sequence
    pub fn fixed(entries: Vec<Alignment>) -> Self {
        Self::new(MockAlignerBehavior::Fixed(entries))
    }

    /// Create a failing mock aligner that always errors
    pub fn failing() -> Self {
        Self::new(MockAlignerBehavior::Failing)
    }

    /// Number of align requests served so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockAligner {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

impl Aligner for MockAligner {
    fn align(
        &self,
        source: &[NormalizedItem],
        target: &[NormalizedItem],
        weight: &dyn PairWeight,
        gap_penalty: f64,
    ) -> Result<Vec<Alignment>, AlignerError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockAlignerBehavior::Diagonal => {
                let paired = source.len().min(target.len());
                let mut alignments = Vec::with_capacity(source.len().max(target.len()));

                for idx in 0..paired {
                    let cost = weight.weight(&source[idx], &target[idx])?;
                    alignments.push(Alignment::pair(idx, idx, cost));
                }
                for idx in paired..source.len() {
                    alignments.push(Alignment::new(Some(idx), None, gap_penalty));
                }
                for idx in paired..target.len() {
                    alignments.push(Alignment::new(None, Some(idx), gap_penalty));
                }

                Ok(alignments)
            }

            MockAlignerBehavior::Fixed(entries) => Ok(entries.clone()),

            MockAlignerBehavior::Failing => Err(AlignerError::AlignmentFailed(
                "Simulated aligner failure".to_string(),
            )),
        }
    }
}
