/*!
 * # docalign
 *
 * A Rust library for aligning two parallel documents by pairing text units
 * that are likely correspondences of one another.
 *
 * ## Features
 *
 * - Normalize documents into position-aware unit sequences
 * - Bridge any pairwise compatibility scorer into an alignment weight function
 * - Drive a pluggable global sequence aligner with a configurable gap penalty
 * - Filter alignments by a configurable cost threshold
 * - Mock scorer and aligner implementations for testing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `document`: Documents, normalized items and position normalization
 * - `scorers`: The pair scorer interface consumed by the weight adaptor:
 *   - `scorers::mock`: Mock scorer for tests
 * - `aligners`: The sequence aligner interface and alignment results:
 *   - `aligners::mock`: Mock aligner for tests
 * - `weight`: The weight adaptor binding a scorer into a pairwise cost function
 * - `align_config`: Configuration management
 * - `align_service`: The alignment orchestrator
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod align_config;
pub mod align_service;
pub mod aligners;
pub mod document;
pub mod errors;
pub mod scorers;
pub mod weight;

// Re-export main types for easier usage
pub use align_config::AlignConfig;
pub use align_service::{AlignOptions, AlignService};
pub use aligners::{Aligner, Alignment};
pub use document::{Document, NormalizedItem};
pub use errors::{AlignError, AlignerError, ScorerError};
pub use scorers::{ComparisonRecord, PairScorer, ScoreMatrix};
pub use weight::{PairWeight, ScorerWeight};
