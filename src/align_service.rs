/*!
 * The alignment orchestrator.
 *
 * An [`AlignService`] binds a pair scorer, a sequence aligner and optional
 * default configuration at construction, then serves `align` requests: it
 * resolves the effective gap penalty and threshold, normalizes both
 * documents, runs the aligner with the scorer-backed weight function and
 * keeps only the pairings whose cost stays within the threshold.
 */

use std::sync::Arc;

use log::debug;

use crate::align_config::AlignConfig;
use crate::aligners::{Aligner, Alignment};
use crate::document::Document;
use crate::errors::AlignError;
use crate::scorers::PairScorer;
use crate::weight::ScorerWeight;

/// Per-call overrides for the configured gap penalty and threshold
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlignOptions {
    /// Gap penalty for this call; falls back to the configured default
    pub gap_penalty: Option<f64>,

    /// Threshold for this call; falls back to the configured default
    pub threshold: Option<f64>,
}

impl AlignOptions {
    /// Set the gap penalty for this call
    pub fn gap_penalty(mut self, value: f64) -> Self {
        self.gap_penalty = Some(value);
        self
    }

    /// Set the threshold for this call
    pub fn threshold(mut self, value: f64) -> Self {
        self.threshold = Some(value);
        self
    }
}

/// Aligns pairs of documents using a bound scorer and aligner.
///
/// The service holds no mutable state: one instance may serve concurrent
/// `align` calls as long as the bound scorer and aligner are themselves safe
/// for concurrent use.
#[derive(Debug, Clone)]
pub struct AlignService {
    /// Weight function binding the scorer
    weight: ScorerWeight,

    /// The aligner implementation
    aligner: Arc<dyn Aligner>,

    /// Default configuration
    config: AlignConfig,
}

impl AlignService {
    /// Create a new alignment service
    ///
    /// Pure construction: nothing is validated against the collaborators and
    /// no I/O happens until the first `align` call.
    pub fn new(scorer: Arc<dyn PairScorer>, aligner: Arc<dyn Aligner>, config: AlignConfig) -> Self {
        Self {
            weight: ScorerWeight::new(scorer),
            aligner,
            config,
        }
    }

    /// The configured defaults
    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align two documents using the configured defaults
    pub fn align(&self, source: &Document, target: &Document) -> Result<Vec<Alignment>, AlignError> {
        self.align_with(source, target, AlignOptions::default())
    }

    /// Align two documents with per-call overrides
    ///
    /// Configuration is resolved first: a missing gap penalty or threshold
    /// fails the call before any normalization or collaborator work starts.
    /// Collaborator errors are propagated unmodified; a failed call never
    /// returns partial results.
    pub fn align_with(
        &self,
        source: &Document,
        target: &Document,
        options: AlignOptions,
    ) -> Result<Vec<Alignment>, AlignError> {
        let gap_penalty = self.resolve_gap_penalty(options.gap_penalty)?;
        let threshold = self.resolve_threshold(options.threshold)?;

        let source_items = source.normalized_items()?;
        let target_items = target.normalized_items()?;

        debug!(
            "Aligning {} source units against {} target units (gap_penalty={}, threshold={})",
            source_items.len(),
            target_items.len(),
            gap_penalty,
            threshold
        );

        let alignments = self
            .aligner
            .align(&source_items, &target_items, &self.weight, gap_penalty)?;

        Ok(Self::filter_by_threshold(alignments, threshold))
    }

    /// Effective gap penalty: call-time value, else configured default
    fn resolve_gap_penalty(&self, call_value: Option<f64>) -> Result<f64, AlignError> {
        call_value
            .or(self.config.gap_penalty)
            .ok_or(AlignError::MissingGapPenalty)
    }

    /// Effective threshold: call-time value, else configured default
    fn resolve_threshold(&self, call_value: Option<f64>) -> Result<f64, AlignError> {
        call_value
            .or(self.config.threshold)
            .ok_or(AlignError::MissingThreshold)
    }

    /// Keep only alignments whose cost stays within the threshold,
    /// preserving the aligner's output order
    fn filter_by_threshold(alignments: Vec<Alignment>, threshold: f64) -> Vec<Alignment> {
        let total = alignments.len();
        let kept: Vec<Alignment> = alignments
            .into_iter()
            .filter(|alignment| alignment.cost <= threshold)
            .collect();

        debug!("Kept {} of {} alignments at threshold {}", kept.len(), total, threshold);
        kept
    }
}
