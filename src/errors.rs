/*!
 * Error types for the docalign library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur inside a pair scorer implementation
#[derive(Error, Debug)]
pub enum ScorerError {
    /// Error when the scorer itself fails to produce a score
    #[error("Scoring failed: {0}")]
    ScoringFailed(String),

    /// Error when the returned score matrix has no `[0][0]` element
    #[error("Scorer returned a score matrix without a [0][0] element")]
    EmptyScore,
}

/// Errors that can occur inside an aligner implementation
#[derive(Error, Debug)]
pub enum AlignerError {
    /// Error from the weight function evaluated during alignment
    #[error("Scorer error: {0}")]
    Scorer(#[from] ScorerError),

    /// Error when the alignment computation itself fails
    #[error("Alignment failed: {0}")]
    AlignmentFailed(String),
}

/// Main error type for aligning two documents
#[derive(Error, Debug)]
pub enum AlignError {
    /// No gap penalty was supplied at call time or construction time
    #[error("Gap penalty value needed")]
    MissingGapPenalty,

    /// No threshold was supplied at call time or construction time
    #[error("Threshold value needed")]
    MissingThreshold,

    /// A document with zero units cannot be position-normalized
    #[error("Cannot align an empty document")]
    EmptyDocument,

    /// Error from the pair scorer
    #[error("Scorer error: {0}")]
    Scorer(#[from] ScorerError),

    /// Error from the aligner
    #[error("Aligner error: {0}")]
    Aligner(#[from] AlignerError),
}
