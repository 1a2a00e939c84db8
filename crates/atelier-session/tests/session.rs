use std::collections::VecDeque;
use std::sync::Mutex;

use atelier_core::models::iteration::EvaluationMode;
use atelier_openai::content::ContentBlock;
use atelier_openai::error::OpenAiError;
use atelier_openai::model::{BoxFuture, CritiqueModel, ModelReply};
use atelier_rubric::Category;
use atelier_session::{OutputLanguage, Session, SessionError};

/// A scripted stand-in for the remote model: pops one canned reply per
/// call and records everything it was sent.
struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ModelReply, OpenAiError>>>,
    calls: Mutex<Vec<(String, Vec<ContentBlock>)>>,
}

impl ScriptedModel {
    fn new(replies: Vec<Result<ModelReply, OpenAiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<ContentBlock>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CritiqueModel for ScriptedModel {
    fn evaluate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_content: &'a [ContentBlock],
    ) -> BoxFuture<'a, Result<ModelReply, OpenAiError>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_content.to_vec()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted model ran out of replies")
        })
    }
}

fn good_reply(score: u8) -> Result<ModelReply, OpenAiError> {
    let text = format!(
        "{{\"Composition and Design\": {{\"score\": {score}, \"feedback\": \"nice\"}}, \
          \"Overall Impact\": {{\"current_score\": {score}, \"feedback\": \"solid\"}}}}"
    );
    Ok(ModelReply {
        text,
        usage: Some(atelier_core::models::token_count::TokenCount {
            input: 100,
            output: 50,
        }),
    })
}

fn transport_error() -> Result<ModelReply, OpenAiError> {
    Err(OpenAiError::Transport("connection reset".to_string()))
}

fn text_of(block: &ContentBlock) -> Option<&str> {
    match block {
        ContentBlock::Text { text } => Some(text),
        ContentBlock::ImageUrl { .. } => None,
    }
}

#[tokio::test]
async fn successful_submissions_produce_contiguous_indices() {
    let model = ScriptedModel::new(vec![
        good_reply(5),
        transport_error(),
        good_reply(6),
        good_reply(7),
    ]);
    let mut session = Session::new(model);

    assert_eq!(
        session
            .submit("a.png", None, vec![1])
            .await
            .unwrap()
            .sequence_index,
        1
    );
    assert!(session.submit("b.png", None, vec![2]).await.is_err());
    assert_eq!(
        session
            .submit("b.png", None, vec![2])
            .await
            .unwrap()
            .sequence_index,
        2
    );
    assert_eq!(
        session
            .submit("c.png", None, vec![3])
            .await
            .unwrap()
            .sequence_index,
        3
    );

    let indices: Vec<u32> = session
        .store()
        .all()
        .iter()
        .map(|r| r.sequence_index)
        .collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[tokio::test]
async fn transport_error_rolls_back_to_pre_submission_state() {
    let model = ScriptedModel::new(vec![good_reply(5), good_reply(6), transport_error()]);
    let mut session = Session::new(model);

    session.submit("a.png", None, vec![1]).await.unwrap();
    session.submit("b.png", None, vec![2]).await.unwrap();

    let err = session.submit("c.png", None, vec![3]).await.unwrap_err();
    assert!(matches!(err, SessionError::Model(_)));

    assert_eq!(session.store().count(), 2);
    assert_eq!(session.store().last().unwrap().image_name, "b.png");
}

#[tokio::test]
async fn unparseable_reply_commits_with_raw_output_preserved() {
    let model = ScriptedModel::new(vec![Ok(ModelReply {
        text: "I cannot evaluate this image.".to_string(),
        usage: None,
    })]);
    let mut session = Session::new(model);

    let outcome = session.submit("a.png", None, vec![1]).await.unwrap();
    assert!(outcome.evaluation.is_none());

    let record = session.store().last().unwrap();
    assert!(!record.is_evaluated());
    assert_eq!(
        record.raw_model_output.as_deref(),
        Some("I cannot evaluate this image.")
    );
    assert_eq!(session.store().count(), 1);
}

#[tokio::test]
async fn unsupported_upload_mutates_nothing() {
    let model = ScriptedModel::new(vec![]);
    let mut session = Session::new(model);

    let err = session.submit("clip.gif", None, vec![1]).await.unwrap_err();
    assert!(matches!(err, SessionError::Image(_)));
    assert!(session.store().is_empty());
}

#[tokio::test]
async fn clear_history_resets_numbering() {
    let model = ScriptedModel::new(vec![good_reply(5), good_reply(6)]);
    let mut session = Session::new(model);

    session.submit("a.png", None, vec![1]).await.unwrap();
    session.clear_history();
    assert!(session.store().is_empty());

    let outcome = session.submit("b.png", None, vec![2]).await.unwrap();
    assert_eq!(outcome.sequence_index, 1);
    assert_eq!(outcome.mode, EvaluationMode::Standalone);
}

#[tokio::test]
async fn three_submissions_walk_through_the_modes_and_block_orders() {
    let model = ScriptedModel::new(vec![good_reply(4), good_reply(6), good_reply(8)]);
    let mut session = Session::new(model);

    let first = session.submit("a.png", None, vec![1]).await.unwrap();
    assert_eq!(first.mode, EvaluationMode::Standalone);
    let second = session.submit("b.png", None, vec![2]).await.unwrap();
    assert_eq!(second.mode, EvaluationMode::Comparison);
    let third = session.submit("c.png", None, vec![3]).await.unwrap();
    assert_eq!(third.mode, EvaluationMode::Comparison);

    let calls = session_calls(&session);

    // n=1: standalone template, one text block then one image block.
    let (prompt, blocks) = &calls[0];
    assert!(!prompt.contains("progress_summary"));
    assert_eq!(blocks.len(), 2);

    // n=2: comparison, no previous anchor.
    let (prompt, blocks) = &calls[1];
    assert!(prompt.contains("progress_summary"));
    let texts: Vec<&str> = blocks.iter().filter_map(text_of).collect();
    assert!(texts.iter().any(|t| t.contains("FIRST ITERATION")));
    assert!(texts.iter().any(|t| t.contains("CURRENT ITERATION")));
    assert!(!texts.iter().any(|t| t.contains("PREVIOUS ITERATION")));
    // The first anchor carries the evaluation stored for iteration 1.
    assert!(texts.iter().any(|t| t.contains("\"score\": 4")));

    // n=3: first, previous, current, in that order.
    let (_, blocks) = &calls[2];
    let labels: Vec<&str> = blocks
        .iter()
        .filter_map(text_of)
        .filter(|t| t.contains("ITERATION ("))
        .collect();
    assert_eq!(labels.len(), 3);
    assert!(labels[0].contains("FIRST"));
    assert!(labels[1].contains("PREVIOUS"));
    assert!(labels[2].contains("CURRENT"));
}

#[tokio::test]
async fn output_language_feeds_the_system_prompt() {
    let model = ScriptedModel::new(vec![good_reply(5)]);
    let mut session = Session::new(model);
    session.set_output_language(OutputLanguage::Ukrainian);

    session.submit("a.png", None, vec![1]).await.unwrap();

    let calls = session_calls(&session);
    assert!(calls[0].0.contains("must be written in Ukrainian"));
}

#[tokio::test]
async fn outcome_reports_usage_and_extracted_scores() {
    let model = ScriptedModel::new(vec![good_reply(7)]);
    let mut session = Session::new(model);

    let outcome = session.submit("a.png", None, vec![1]).await.unwrap();
    let evaluation = outcome.evaluation.unwrap();
    assert_eq!(evaluation.score_for(Category::CompositionAndDesign), Some(7));
    assert_eq!(evaluation.score_for(Category::OverallImpact), Some(7));

    let usage = outcome.usage.unwrap();
    assert_eq!(usage.tokens.total(), 150);
    assert!(usage.cost_usd > 0.0);
}

#[tokio::test]
async fn progress_stats_track_first_and_latest_averages() {
    let model = ScriptedModel::new(vec![good_reply(4), good_reply(8)]);
    let mut session = Session::new(model);

    let empty = session.progress();
    assert_eq!(empty.iterations, 0);
    assert!(empty.first_average.is_none());

    session.submit("a.png", None, vec![1]).await.unwrap();
    session.submit("b.png", None, vec![2]).await.unwrap();

    let stats = session.progress();
    assert_eq!(stats.iterations, 2);
    assert_eq!(stats.first_average, Some(4.0));
    assert_eq!(stats.latest_average, Some(8.0));
    assert_eq!(stats.delta, Some(4.0));
}

fn session_calls(session: &Session<ScriptedModel>) -> Vec<(String, Vec<ContentBlock>)> {
    session.model().calls()
}
