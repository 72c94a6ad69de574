//! Upload-and-classify state machine.
//!
//! ```text
//!            select_file              begin_submit
//!   Idle ──────────────▶ Ready ─────────────────────▶ Loading
//!    ▲                    ▲                              │ finish
//!    │ reset              │ select_file          ┌───────┴───────┐
//!    │                    ├──────────────────────┤               │
//!    └────────────────────┴──────────────── Success            Error
//! ```
//!
//! The state machine is DOM-free and generic over the file handle so the
//! browser can drive it with `web_sys::File` while tests use plain bytes.
//! Each submission gets a ticket; an outcome whose ticket is no longer the
//! one being awaited is dropped.

use crate::services::{classify, PredictionBackend};
use crate::types::{PredictionRow, SubmitRejected, WorkflowError};

/// File chosen by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSelection<F> {
    pub name: String,
    pub file: F,
}

impl<F> UploadSelection<F> {
    pub fn new(name: impl Into<String>, file: F) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

/// Where the workflow currently is.
///
/// Predictions and the error message live inside their variants, so at
/// most one of them exists at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Ready,
    Loading,
    Success(Vec<PredictionRow>),
    Error(WorkflowError),
}

/// Handle for one in-flight request.
#[derive(Clone, Debug)]
pub struct SubmitTicket<F> {
    pub id: u64,
    pub file: F,
}

#[derive(Clone, Debug)]
pub struct Workflow<F> {
    selection: Option<UploadSelection<F>>,
    state: WorkflowState,
    next_ticket: u64,
    pending: Option<u64>,
}

impl<F> Default for Workflow<F> {
    fn default() -> Self {
        Self {
            selection: None,
            state: WorkflowState::Idle,
            next_ticket: 0,
            pending: None,
        }
    }
}

impl<F> Workflow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selection(&self) -> Option<&UploadSelection<F>> {
        self.selection.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.name.as_str())
    }

    pub fn predictions(&self) -> Option<&[PredictionRow]> {
        match &self.state {
            WorkflowState::Success(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            WorkflowState::Error(error) => Some(error.message()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Loading)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_loading()
    }

    /// Replace the selection and drop any previous result or error.
    ///
    /// Valid from every state. A request still in flight is orphaned.
    pub fn select_file(&mut self, selection: UploadSelection<F>) {
        log::info!("Selected file {}", selection.name);
        self.selection = Some(selection);
        self.pending = None;
        self.state = WorkflowState::Ready;
    }

    /// Clear the selection and any result or error.
    pub fn reset(&mut self) {
        self.selection = None;
        self.pending = None;
        self.state = WorkflowState::Idle;
    }

    /// Apply the outcome of the request identified by `ticket_id`.
    ///
    /// Returns `false` when the outcome is stale and was discarded.
    pub fn finish(
        &mut self,
        ticket_id: u64,
        outcome: Result<Vec<PredictionRow>, WorkflowError>,
    ) -> bool {
        if self.pending != Some(ticket_id) || !self.is_loading() {
            log::warn!("Discarding result of superseded submission #{}", ticket_id);
            return false;
        }
        self.pending = None;

        self.state = match outcome {
            Ok(rows) => {
                log::info!("Received {} predictions", rows.len());
                WorkflowState::Success(rows)
            }
            Err(error) => {
                log::error!("Error: {}", error);
                WorkflowState::Error(error)
            }
        };
        true
    }
}

impl<F: Clone> Workflow<F> {
    /// Validate and enter `Loading`.
    ///
    /// A rejection leaves the workflow untouched.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<F>, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        let selection = self.selection.as_ref().ok_or(SubmitRejected::NoFileSelected)?;

        self.next_ticket += 1;
        let ticket = SubmitTicket {
            id: self.next_ticket,
            file: selection.file.clone(),
        };
        log::info!("Submitting {} (#{})", selection.name, ticket.id);

        self.pending = Some(ticket.id);
        self.state = WorkflowState::Loading;
        Ok(ticket)
    }

    /// Run one complete submission against `backend`.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<(), SubmitRejected>
    where
        B: PredictionBackend<File = F>,
    {
        let ticket = self.begin_submit()?;
        let outcome = classify(backend, &ticket.file).await;
        self.finish(ticket.id, outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HttpReply;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Canned backend that counts requests and records uploaded bytes.
    struct MockBackend {
        reply: Result<HttpReply, WorkflowError>,
        calls: Cell<usize>,
        uploads: RefCell<Vec<Vec<u8>>>,
    }

    impl MockBackend {
        fn replying(status: u16, body: &str) -> Self {
            Self::with(Ok(HttpReply {
                status,
                body: body.to_string(),
            }))
        }

        fn with(reply: Result<HttpReply, WorkflowError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                uploads: RefCell::new(Vec::new()),
            }
        }
    }

    impl PredictionBackend for MockBackend {
        type File = Vec<u8>;

        async fn post_file(&self, file: &Vec<u8>) -> Result<HttpReply, WorkflowError> {
            self.calls.set(self.calls.get() + 1);
            self.uploads.borrow_mut().push(file.clone());
            self.reply.clone()
        }
    }

    fn csv(name: &str) -> UploadSelection<Vec<u8>> {
        UploadSelection::new(name, b"amount,merchant\n12.5,acme\n".to_vec())
    }

    fn succeeded(probabilities: &str) -> Workflow<Vec<u8>> {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(200, probabilities);
        block_on(workflow.submit(&backend)).unwrap();
        workflow
    }

    #[test]
    fn test_starts_idle() {
        let workflow: Workflow<Vec<u8>> = Workflow::new();
        assert_eq!(workflow.state(), &WorkflowState::Idle);
        assert!(workflow.selection().is_none());
        assert!(!workflow.can_submit());
    }

    #[test]
    fn test_submit_without_file_makes_no_request() {
        let mut workflow: Workflow<Vec<u8>> = Workflow::new();
        let backend = MockBackend::replying(200, r#"{"predictions": [0.4]}"#);

        let result = block_on(workflow.submit(&backend));

        assert_eq!(result, Err(SubmitRejected::NoFileSelected));
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[test]
    fn test_select_file_moves_to_ready() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        assert_eq!(workflow.state(), &WorkflowState::Ready);
        assert_eq!(workflow.file_name(), Some("tx.csv"));
        assert!(workflow.can_submit());
    }

    #[test]
    fn test_successful_submission() {
        let workflow = succeeded(r#"{"predictions": [0.1, 0.9, 0.5]}"#);

        assert_eq!(
            workflow.predictions().unwrap(),
            &[
                PredictionRow { transaction: 1, fraud_probability: 0.1 },
                PredictionRow { transaction: 2, fraud_probability: 0.9 },
                PredictionRow { transaction: 3, fraud_probability: 0.5 },
            ]
        );
        assert!(workflow.error_message().is_none());
        assert!(!workflow.is_loading());
        // The selection survives for the "from <file>" summary line.
        assert_eq!(workflow.file_name(), Some("tx.csv"));
    }

    #[test]
    fn test_upload_sends_selected_bytes() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(200, r#"{"predictions": []}"#);

        block_on(workflow.submit(&backend)).unwrap();

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(
            backend.uploads.borrow()[0],
            b"amount,merchant\n12.5,acme\n".to_vec()
        );
    }

    #[test]
    fn test_http_failure_enters_error_state() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(500, "Internal Server Error");

        block_on(workflow.submit(&backend)).unwrap();

        assert_eq!(workflow.error_message().as_deref(), Some("HTTP error! status: 500"));
        assert!(workflow.predictions().is_none());
        assert!(!workflow.is_loading());
    }

    #[test]
    fn test_backend_error_field_enters_error_state() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(200, r#"{"error": "bad file"}"#);

        block_on(workflow.submit(&backend)).unwrap();

        assert_eq!(workflow.error_message().as_deref(), Some("bad file"));
    }

    #[test]
    fn test_transport_failure_enters_error_state() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::with(Err(WorkflowError::Transport(
            "Failed to fetch".to_string(),
        )));

        block_on(workflow.submit(&backend)).unwrap();

        assert_eq!(workflow.error_message().as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn test_resubmit_after_error_issues_new_request() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(502, "");

        block_on(workflow.submit(&backend)).unwrap();
        block_on(workflow.submit(&backend)).unwrap();

        assert_eq!(backend.calls.get(), 2);
        assert_eq!(workflow.error_message().as_deref(), Some("HTTP error! status: 502"));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut workflow = succeeded(r#"{"predictions": [0.8]}"#);
        workflow.reset();
        assert_eq!(workflow.state(), &WorkflowState::Idle);
        assert!(workflow.selection().is_none());
        assert!(workflow.predictions().is_none());
        assert!(workflow.error_message().is_none());

        let mut failed = Workflow::new();
        failed.select_file(csv("tx.csv"));
        block_on(failed.submit(&MockBackend::replying(404, ""))).unwrap();
        failed.reset();
        assert_eq!(failed.state(), &WorkflowState::Idle);
        assert!(failed.selection().is_none());
    }

    #[test]
    fn test_new_selection_clears_result_without_request() {
        let mut workflow = succeeded(r#"{"predictions": [0.8]}"#);
        workflow.select_file(csv("other.csv"));

        assert_eq!(workflow.state(), &WorkflowState::Ready);
        assert!(workflow.predictions().is_none());
        assert_eq!(workflow.file_name(), Some("other.csv"));
    }

    #[test]
    fn test_new_selection_clears_error_without_request() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let backend = MockBackend::replying(500, "");
        block_on(workflow.submit(&backend)).unwrap();
        assert!(workflow.error_message().is_some());

        workflow.select_file(csv("fixed.csv"));

        assert_eq!(workflow.state(), &WorkflowState::Ready);
        assert!(workflow.error_message().is_none());
        assert!(workflow.predictions().is_none());
        assert_eq!(workflow.file_name(), Some("fixed.csv"));
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_begin_submit_rejects_while_loading() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));

        let ticket = workflow.begin_submit().unwrap();
        assert!(workflow.is_loading());
        assert!(!workflow.can_submit());
        assert_eq!(workflow.begin_submit().unwrap_err(), SubmitRejected::AlreadyLoading);

        assert!(workflow.finish(ticket.id, Ok(Vec::new())));
        assert_eq!(workflow.state(), &WorkflowState::Success(Vec::new()));
    }

    #[test]
    fn test_outcome_after_reset_is_discarded() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("tx.csv"));
        let ticket = workflow.begin_submit().unwrap();

        workflow.reset();
        let applied = workflow.finish(ticket.id, Err(WorkflowError::Http { status: 500 }));

        assert!(!applied);
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[test]
    fn test_outcome_of_superseded_ticket_is_discarded() {
        let mut workflow = Workflow::new();
        workflow.select_file(csv("a.csv"));
        let first = workflow.begin_submit().unwrap();

        workflow.select_file(csv("b.csv"));
        let second = workflow.begin_submit().unwrap();
        assert_ne!(first.id, second.id);

        assert!(!workflow.finish(first.id, Ok(vec![])));
        assert!(workflow.is_loading());
        assert!(workflow.finish(
            second.id,
            Ok(vec![PredictionRow { transaction: 1, fraud_probability: 0.2 }])
        ));
        assert_eq!(workflow.predictions().map(<[PredictionRow]>::len), Some(1));
    }
}
