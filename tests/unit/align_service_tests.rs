/*!
 * Tests for the alignment service orchestration
 */

use std::sync::Arc;

use docalign::align_config::AlignConfig;
use docalign::align_service::{AlignOptions, AlignService};
use docalign::aligners::Alignment;
use docalign::aligners::mock::MockAligner;
use docalign::document::Document;
use docalign::errors::AlignError;
use docalign::scorers::mock::MockScorer;

use crate::common::{constant_service, document};

#[test]
fn test_alignService_creation_withDefaults_shouldExposeConfig() {
    let service = constant_service(0.1, Some(0.5), Some(0.3));

    assert_eq!(service.config().gap_penalty, Some(0.5));
    assert_eq!(service.config().threshold, Some(0.3));
}

#[test]
fn test_align_withConfiguredDefaults_shouldUseThem() {
    let service = constant_service(0.1, Some(0.5), Some(0.3));
    let alignments = service
        .align(&document(&["a", "b"]), &document(&["x", "y"]))
        .unwrap();

    assert_eq!(alignments.len(), 2);
    assert!(alignments.iter().all(|alignment| alignment.cost == 0.1));
}

#[test]
fn test_align_withCallTimeThreshold_shouldOverrideConfiguredDefault() {
    // Construction supplies gap_penalty=1.0 and threshold=1.0; the call
    // overrides only the threshold, so the gap penalty default persists.
    let service = constant_service(0.1, Some(1.0), Some(1.0));
    let source = document(&["a", "b", "c"]);
    let target = document(&["x", "y"]);

    let alignments = service
        .align_with(&source, &target, AlignOptions::default().threshold(0.2))
        .unwrap();

    // Matched pairs at 0.1 survive the 0.2 threshold; the gap entry costs the
    // configured 1.0 gap penalty and is dropped.
    assert_eq!(alignments.len(), 2);
    assert!(alignments.iter().all(|alignment| !alignment.is_gap()));

    // Without the override the gap entry survives the configured threshold.
    let alignments = service.align(&source, &target).unwrap();
    assert_eq!(alignments.len(), 3);
}

#[test]
fn test_align_withCallTimeGapPenalty_shouldOverrideConfiguredDefault() {
    let service = constant_service(0.1, Some(1.0), Some(0.3));
    let source = document(&["a", "b", "c"]);
    let target = document(&["x", "y"]);

    let alignments = service
        .align_with(&source, &target, AlignOptions::default().gap_penalty(0.25))
        .unwrap();

    // The overridden gap penalty now fits under the threshold.
    assert_eq!(alignments.len(), 3);
    assert_eq!(alignments[2], Alignment::new(Some(2), None, 0.25));
}

#[test]
fn test_align_withMissingGapPenalty_shouldFailWithoutInvokingCollaborators() {
    let scorer = Arc::new(MockScorer::constant(0.1));
    let aligner = Arc::new(MockAligner::diagonal());
    let service = AlignService::new(
        scorer.clone(),
        aligner.clone(),
        AlignConfig::new(None, Some(0.3)),
    );

    let result = service.align(&document(&["a"]), &document(&["x"]));

    assert!(matches!(result, Err(AlignError::MissingGapPenalty)));
    assert_eq!(aligner.request_count(), 0);
    assert_eq!(scorer.request_count(), 0);
}

#[test]
fn test_align_withMissingThreshold_shouldFailBeforeNormalization() {
    let service = constant_service(0.1, Some(0.5), None);

    // Even an empty document does not get normalized: the configuration
    // error wins because it is raised before any alignment work.
    let result = service.align(&Document::default(), &document(&["x"]));

    assert!(matches!(result, Err(AlignError::MissingThreshold)));
}

#[test]
fn test_align_withEmptySourceDocument_shouldFailWithEmptyDocument() {
    let scorer = Arc::new(MockScorer::constant(0.1));
    let aligner = Arc::new(MockAligner::diagonal());
    let service = AlignService::new(
        scorer,
        aligner.clone(),
        AlignConfig::new(Some(0.5), Some(0.3)),
    );

    let result = service.align(&Document::default(), &document(&["x"]));

    assert!(matches!(result, Err(AlignError::EmptyDocument)));
    assert_eq!(aligner.request_count(), 0);
}

#[test]
fn test_align_withEmptyTargetDocument_shouldFailWithEmptyDocument() {
    let service = constant_service(0.1, Some(0.5), Some(0.3));

    let result = service.align(&document(&["a"]), &Document::default());
    assert!(matches!(result, Err(AlignError::EmptyDocument)));
}

#[test]
fn test_align_repeatedCalls_shouldReturnIdenticalResults() {
    let service = constant_service(0.1, Some(0.5), Some(0.3));
    let source = document(&["a", "b", "c"]);
    let target = document(&["x", "y"]);

    let first = service.align(&source, &target).unwrap();
    let second = service.align(&source, &target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_align_filtering_shouldPreserveAlignerOutputOrder() {
    let canned = vec![
        Alignment::pair(0, 0, 0.3),
        Alignment::pair(1, 1, 0.05),
        Alignment::new(Some(2), None, 0.5),
        Alignment::pair(3, 2, 0.2),
    ];
    let service = AlignService::new(
        Arc::new(MockScorer::constant(0.0)),
        Arc::new(MockAligner::fixed(canned)),
        AlignConfig::new(Some(0.5), Some(0.25)),
    );

    let alignments = service
        .align(&document(&["a"]), &document(&["x"]))
        .unwrap();

    assert_eq!(alignments, vec![Alignment::pair(1, 1, 0.05), Alignment::pair(3, 2, 0.2)]);
}

#[test]
fn test_align_filtering_shouldRetainCostEqualToThreshold() {
    let canned = vec![Alignment::pair(0, 0, 0.3), Alignment::pair(1, 1, 0.300001)];
    let service = AlignService::new(
        Arc::new(MockScorer::constant(0.0)),
        Arc::new(MockAligner::fixed(canned)),
        AlignConfig::new(Some(0.5), Some(0.3)),
    );

    let alignments = service
        .align(&document(&["a"]), &document(&["x"]))
        .unwrap();

    assert_eq!(alignments, vec![Alignment::pair(0, 0, 0.3)]);
}

#[test]
fn test_align_withFailingAligner_shouldPropagateAlignerError() {
    let service = AlignService::new(
        Arc::new(MockScorer::constant(0.1)),
        Arc::new(MockAligner::failing()),
        AlignConfig::new(Some(0.5), Some(0.3)),
    );

    let result = service.align(&document(&["a"]), &document(&["x"]));
    assert!(matches!(result, Err(AlignError::Aligner(_))));
}

#[test]
fn test_alignOptions_builders_shouldSetFields() {
    let options = AlignOptions::default().gap_penalty(0.4).threshold(0.9);

    assert_eq!(options.gap_penalty, Some(0.4));
    assert_eq!(options.threshold, Some(0.9));
}
