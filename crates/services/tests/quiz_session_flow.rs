use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{ItemCatalog, Judgment, Messages, SubmissionOutcome, Verdict};
use quiz_core::time::{fixed_clock, fixed_now};
use reqwest::StatusCode;
use services::{
    BeginSubmit, QuizSession, SubmissionPayload, SubmissionTransport, SubmitError, SubmitStatus,
};

#[derive(Clone, Copy)]
enum Reply {
    Accept,
    Status(StatusCode),
    Unreachable,
}

struct RecordingTransport {
    reply: Reply,
    bodies: Mutex<Vec<serde_json::Value>>,
}

impl RecordingTransport {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            bodies: Mutex::new(Vec::new()),
        })
    }

    fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for RecordingTransport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.bodies
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        match self.reply {
            Reply::Accept => Ok(()),
            Reply::Status(status) => Err(SubmitError::HttpStatus(status)),
            Reply::Unreachable => Err(SubmitError::Transport("connection refused".into())),
        }
    }
}

fn session(labels: &[&str], transport: Arc<RecordingTransport>) -> QuizSession {
    let catalog = ItemCatalog::new(labels.iter().copied()).unwrap();
    QuizSession::new(&catalog, transport).with_clock(fixed_clock())
}

#[tokio::test]
async fn fresh_session_has_no_progress() {
    let transport = RecordingTransport::new(Reply::Accept);
    let quiz = session(&["ア", "イ", "ウ", "エ"], transport);

    assert_eq!(quiz.answered_count(), 0);
    assert_eq!(quiz.progress_fraction(), 0.0);
    assert!(!quiz.is_complete());
    assert!(!quiz.is_submitting());
    assert_eq!(quiz.current_message(), None);
    assert_eq!(quiz.answers().len(), 4);
}

#[tokio::test]
async fn incomplete_submit_sends_nothing() {
    let transport = RecordingTransport::new(Reply::Accept);
    let mut quiz = session(&["A", "B"], Arc::clone(&transport));
    quiz.select_judgment("A", Verdict::Correct).unwrap();

    assert_eq!(quiz.submit().await, SubmitStatus::Rejected);
    assert_eq!(quiz.current_message(), Some(Messages::default().incomplete.as_str()));
    assert!(transport.bodies().is_empty());
    assert!(!quiz.is_submitting());
}

#[tokio::test]
async fn accepted_submission_reports_success() {
    let transport = RecordingTransport::new(Reply::Accept);
    let mut quiz = session(&["A", "B"], Arc::clone(&transport));

    quiz.select_judgment("A", Verdict::Correct).unwrap();
    assert_eq!(quiz.submit().await, SubmitStatus::Rejected);

    quiz.select_judgment("B", Verdict::Incorrect).unwrap();
    assert_eq!(quiz.current_message(), None);
    assert_eq!(quiz.submit().await, SubmitStatus::Sent);

    let bodies = transport.bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        serde_json::json!({"answers": {"A": "correct", "B": "incorrect"}})
    );
    assert_eq!(quiz.current_message(), Some(Messages::default().sent.as_str()));
    assert!(!quiz.is_submitting());
    assert_eq!(quiz.outcome(), &SubmissionOutcome::Succeeded { at: fixed_now() });
}

#[tokio::test]
async fn server_error_reports_failure_and_keeps_answers() {
    let transport = RecordingTransport::new(Reply::Status(StatusCode::SERVICE_UNAVAILABLE));
    let mut quiz = session(&["A", "B"], Arc::clone(&transport));
    quiz.select_judgment("A", Verdict::Correct).unwrap();
    quiz.select_judgment("B", Verdict::Incorrect).unwrap();
    let before = quiz.answers().clone();

    assert_eq!(quiz.submit().await, SubmitStatus::Failed);
    assert_eq!(quiz.current_message(), Some(Messages::default().failed.as_str()));
    assert!(!quiz.is_submitting());
    assert_eq!(quiz.answers(), &before);
    assert!(matches!(quiz.outcome(), SubmissionOutcome::Failed { reason, .. } if reason.contains("503")));

    quiz.select_judgment("A", Verdict::Incorrect).unwrap();
    assert_eq!(quiz.current_message(), None);
}

#[tokio::test]
async fn transport_fault_reports_failure_and_allows_resubmit() {
    let transport = RecordingTransport::new(Reply::Unreachable);
    let mut quiz = session(&["A"], Arc::clone(&transport));
    quiz.select_judgment("A", Verdict::Correct).unwrap();

    assert_eq!(quiz.submit().await, SubmitStatus::Failed);
    assert_eq!(quiz.current_message(), Some(Messages::default().failed.as_str()));
    assert!(!quiz.is_submitting());

    assert_eq!(quiz.submit().await, SubmitStatus::Failed);
    assert_eq!(transport.bodies().len(), 2);
}

#[tokio::test]
async fn overlapping_submit_is_ignored_and_selection_stays_open() {
    let transport = RecordingTransport::new(Reply::Accept);
    let mut quiz = session(&["A", "B"], Arc::clone(&transport));
    quiz.select_judgment("A", Verdict::Correct).unwrap();
    quiz.select_judgment("B", Verdict::Correct).unwrap();

    let BeginSubmit::Pending(pending) = quiz.begin_submit() else {
        panic!("expected a pending submission");
    };
    assert!(quiz.is_submitting());
    assert!(matches!(quiz.begin_submit(), BeginSubmit::AlreadySubmitting));

    // Input stays editable while the request is outstanding.
    quiz.select_judgment("B", Verdict::Incorrect).unwrap();
    assert_eq!(quiz.judgment("B"), Some(Judgment::Incorrect));
    assert!(quiz.is_submitting());

    let result = pending.send().await;
    assert_eq!(quiz.complete_submit(result), SubmitStatus::Sent);
    assert_eq!(quiz.current_message(), Some(Messages::default().sent.as_str()));

    // The request carried the answers as they were at submit time.
    let bodies = transport.bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        serde_json::json!({"answers": {"A": "correct", "B": "correct"}})
    );
}

#[tokio::test]
async fn unknown_item_leaves_state_untouched() {
    let transport = RecordingTransport::new(Reply::Accept);
    let mut quiz = session(&["A"], transport);
    quiz.select_judgment("A", Verdict::Correct).unwrap();
    assert_eq!(quiz.submit().await, SubmitStatus::Sent);

    assert!(quiz.select_judgment("Z", Verdict::Correct).is_err());
    // Feedback only clears on an accepted selection.
    assert_eq!(quiz.current_message(), Some(Messages::default().sent.as_str()));
}

#[tokio::test]
async fn custom_messages_are_used() {
    let transport = RecordingTransport::new(Reply::Accept);
    let messages = Messages {
        incomplete: "incomplete".into(),
        sent: "sent".into(),
        failed: "failed".into(),
    };
    let mut quiz = session(&["A"], transport).with_messages(messages);

    quiz.submit().await;
    assert_eq!(quiz.current_message(), Some("incomplete"));
    quiz.select_judgment("A", Verdict::Correct).unwrap();
    quiz.submit().await;
    assert_eq!(quiz.current_message(), Some("sent"));
}
