use serde_json::json;

use atelier_core::models::evaluation::{CategoryScore, NormalizedEvaluation};
use atelier_core::models::image::ImagePayload;
use atelier_rubric::Category;
use atelier_session::{IterationStore, SessionError};

fn payload(byte: u8) -> ImagePayload {
    ImagePayload::new("image/png", vec![byte])
}

fn evaluation(score: u8) -> NormalizedEvaluation {
    NormalizedEvaluation::new(vec![CategoryScore {
        category: Category::OverallImpact,
        score,
        feedback: "fine".to_string(),
    }])
}

#[test]
fn append_assigns_contiguous_one_based_indices() {
    let mut store = IterationStore::new();
    assert_eq!(store.append_placeholder(payload(1), "a.png"), 1);
    assert_eq!(store.append_placeholder(payload(2), "b.png"), 2);
    assert_eq!(store.append_placeholder(payload(3), "c.png"), 3);

    let indices: Vec<u32> = store.all().iter().map(|r| r.sequence_index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn placeholder_has_no_evaluation_until_commit() {
    let mut store = IterationStore::new();
    let index = store.append_placeholder(payload(1), "a.png");
    assert!(!store.last().unwrap().is_evaluated());

    store
        .commit(index, Some(evaluation(7)), "raw".to_string(), Some(json!({})))
        .unwrap();

    let record = store.last().unwrap();
    assert!(record.is_evaluated());
    assert_eq!(record.raw_model_output.as_deref(), Some("raw"));
    assert!(record.structured_model_output.is_some());
}

#[test]
fn commit_without_evaluation_still_preserves_raw_output() {
    let mut store = IterationStore::new();
    let index = store.append_placeholder(payload(1), "a.png");
    store
        .commit(index, None, "unparseable".to_string(), None)
        .unwrap();

    let record = store.last().unwrap();
    assert!(!record.is_evaluated());
    assert_eq!(record.raw_model_output.as_deref(), Some("unparseable"));
}

#[test]
fn commit_unknown_index_fails_with_not_found() {
    let mut store = IterationStore::new();
    store.append_placeholder(payload(1), "a.png");
    assert!(matches!(
        store.commit(2, None, "raw".to_string(), None),
        Err(SessionError::NotFound(2))
    ));
    assert!(matches!(
        store.commit(0, None, "raw".to_string(), None),
        Err(SessionError::NotFound(0))
    ));
}

#[test]
fn discard_removes_only_the_last_record() {
    let mut store = IterationStore::new();
    store.append_placeholder(payload(1), "a.png");
    store.append_placeholder(payload(2), "b.png");

    assert!(matches!(store.discard(1), Err(SessionError::NotLast(1))));
    assert!(matches!(store.discard(3), Err(SessionError::NotFound(3))));

    store.discard(2).unwrap();
    assert_eq!(store.count(), 1);
    assert_eq!(store.last().unwrap().sequence_index, 1);
}

#[test]
fn discard_then_append_reuses_the_index() {
    let mut store = IterationStore::new();
    store.append_placeholder(payload(1), "a.png");
    let rolled_back = store.append_placeholder(payload(2), "b.png");
    store.discard(rolled_back).unwrap();

    assert_eq!(store.append_placeholder(payload(3), "c.png"), 2);
    let indices: Vec<u32> = store.all().iter().map(|r| r.sequence_index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn clear_resets_numbering_to_one() {
    let mut store = IterationStore::new();
    store.append_placeholder(payload(1), "a.png");
    store.append_placeholder(payload(2), "b.png");

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.append_placeholder(payload(3), "c.png"), 1);
}

#[test]
fn first_and_last_accessors() {
    let mut store = IterationStore::new();
    assert!(store.first().is_none());
    assert!(store.last().is_none());

    store.append_placeholder(payload(1), "a.png");
    store.append_placeholder(payload(2), "b.png");
    assert_eq!(store.first().unwrap().image_name, "a.png");
    assert_eq!(store.last().unwrap().image_name, "b.png");
}
