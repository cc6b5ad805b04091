/*!
 * Sequence aligner interface and alignment results.
 *
 * The alignment algorithm itself lives outside this library. Callers supply a
 * cost-minimizing global aligner (Needleman-Wunsch style) behind the
 * [`Aligner`] trait: it pairs items of two ordered sequences monotonically,
 * charging the weight function for each pairing and a constant gap penalty
 * for each skipped item.
 */

use std::fmt::Debug;

use crate::document::NormalizedItem;
use crate::errors::AlignerError;
use crate::weight::PairWeight;

/// One pairing produced by an aligner.
///
/// `source` and `target` index into the respective normalized sequences;
/// `None` marks a gap on that side. `cost` is either the pairwise weight of a
/// matched pair or the gap penalty of an unmatched item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    /// Index into the source sequence, or `None` for a gap
    pub source: Option<usize>,

    /// Index into the target sequence, or `None` for a gap
    pub target: Option<usize>,

    /// Cost of this pairing
    pub cost: f64,
}

impl Alignment {
    /// Create an alignment entry
    pub fn new(source: Option<usize>, target: Option<usize>, cost: f64) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }

    /// Create a matched pair of indexes
    pub fn pair(source: usize, target: usize, cost: f64) -> Self {
        Self::new(Some(source), Some(target), cost)
    }

    /// Whether this entry leaves one side unmatched
    pub fn is_gap(&self) -> bool {
        self.source.is_none() || self.target.is_none()
    }
}

/// Common trait for all sequence aligners
///
/// Implementations compute a minimum-total-cost monotonic matching between
/// the two sequences, permitting skips on either side at `gap_penalty` per
/// skipped item. Weight-function errors must be propagated, not swallowed.
pub trait Aligner: Send + Sync + Debug {
    /// Align two normalized sequences
    ///
    /// # Arguments
    /// * `source` - Normalized items of the source document
    /// * `target` - Normalized items of the target document
    /// * `weight` - Pairwise cost function for matched items
    /// * `gap_penalty` - Cost per unmatched item
    ///
    /// # Returns
    /// * `Result<Vec<Alignment>, AlignerError>` - The alignment entries in
    ///   sequence order, or an error
    fn align(
        &self,
        source: &[NormalizedItem],
        target: &[NormalizedItem],
        weight: &dyn PairWeight,
        gap_penalty: f64,
    ) -> Result<Vec<Alignment>, AlignerError>;
}

pub mod mock;
