use crate::app::domain::input::SubmissionInput;
use crate::app::domain::verdict::AnalysisResult;
use crate::app::infrastructure::error::{SubmitError, ValidationError};
use crate::app::services::classifier::Classify;

/// Monotonic id attached to every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub u64);

pub type SubmissionOutcome = Result<AnalysisResult, SubmitError>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(SubmitError),
}

/// Handed out by `begin`; whoever performs the request settles it by id.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub id: SubmissionId,
    pub input: SubmissionInput,
}

/// Owns the single `SubmissionState` and the in-flight id.
#[derive(Debug, Default)]
pub struct SubmissionOrchestrator {
    state: SubmissionState,
    in_flight: Option<SubmissionId>,
    next_id: u64,
}

impl SubmissionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    /// Enter `Submitting` and issue a ticket. Returns `None` while another
    /// submission is outstanding.
    pub fn begin(&mut self, input: SubmissionInput) -> Option<SubmissionTicket> {
        if self.is_submitting() {
            log::debug!("Submit ignored: submission {:?} still in flight", self.in_flight);
            return None;
        }

        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.in_flight = Some(id);
        self.state = SubmissionState::Submitting;
        log::info!("Submitting {:?} claim as #{}", input.mode(), id.0);

        Some(SubmissionTicket { id, input })
    }

    /// Apply the outcome of submission `id`. Outcomes for anything but the
    /// current in-flight id are dropped and `false` is returned.
    pub fn settle(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        if self.in_flight != Some(id) {
            log::warn!("Discarding stale reply for submission #{}", id.0);
            return false;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(result) => {
                log::debug!("Submission #{} settled: {:?}", id.0, result.classification);
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                log::debug!("Submission #{} failed ({}): {}", id.0, err.kind(), err);
                SubmissionState::Failed(err)
            }
        };
        true
    }

    /// Begin, classify and settle in one call.
    pub fn submit<C: Classify + ?Sized>(&mut self, client: &C, input: SubmissionInput) -> bool {
        let Some(ticket) = self.begin(input) else {
            return false;
        };
        let outcome = client.classify(&ticket.input);
        self.settle(ticket.id, outcome)
    }

    /// Back to `Idle`, forgetting any outstanding submission.
    pub fn reset(&mut self) {
        if let Some(id) = self.in_flight.take() {
            log::debug!("Abandoning submission #{}", id.0);
        }
        self.state = SubmissionState::Idle;
    }

    /// Surface a local validation failure. Ignored while a request is in
    /// flight, since `Submitting` must not be overwritten.
    pub fn reject(&mut self, err: ValidationError) {
        if !self.is_submitting() {
            self.state = SubmissionState::Failed(err.into());
        }
    }

    pub fn clear_error(&mut self) {
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::input::InputMode;
    use crate::app::domain::verdict::Classification;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedClassifier {
        outcome: SubmissionOutcome,
        calls: AtomicUsize,
    }

    impl CannedClassifier {
        fn new(outcome: SubmissionOutcome) -> Self {
            Self { outcome, calls: AtomicUsize::new(0) }
        }
    }

    impl Classify for CannedClassifier {
        fn classify(&self, _input: &SubmissionInput) -> Result<AnalysisResult, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn text(s: &str) -> SubmissionInput {
        SubmissionInput::Text(s.to_string())
    }

    fn real() -> AnalysisResult {
        AnalysisResult {
            classification: Classification::Real,
            confidence_real: 0.9,
            confidence_fake: 0.1,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_enters_submitting() {
        let mut orch = SubmissionOrchestrator::new();
        let ticket = orch.begin(text("claim")).unwrap();
        assert_eq!(ticket.id, SubmissionId(1));
        assert_eq!(orch.state(), &SubmissionState::Submitting);
        assert!(orch.is_submitting());
    }

    #[test]
    fn test_reentrant_begin_is_noop() {
        let mut orch = SubmissionOrchestrator::new();
        orch.begin(text("first")).unwrap();
        assert!(orch.begin(text("second")).is_none());
        assert_eq!(orch.in_flight(), Some(SubmissionId(1)));
    }

    #[test]
    fn test_settle_success_clears_in_flight() {
        let mut orch = SubmissionOrchestrator::new();
        let ticket = orch.begin(text("claim")).unwrap();
        assert!(orch.settle(ticket.id, Ok(real())));
        assert!(!orch.is_submitting());
        assert_eq!(orch.state(), &SubmissionState::Succeeded(real()));
    }

    #[test]
    fn test_settle_failure_clears_in_flight() {
        let mut orch = SubmissionOrchestrator::new();
        let ticket = orch.begin(text("claim")).unwrap();
        orch.settle(ticket.id, Err(SubmitError::server_generic(502)));
        assert!(!orch.is_submitting());
        assert!(matches!(orch.state(), SubmissionState::Failed(SubmitError::Server { .. })));
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let mut orch = SubmissionOrchestrator::new();
        let old = orch.begin(text("old")).unwrap();
        orch.reset();
        let fresh = orch.begin(text("fresh")).unwrap();
        assert!(fresh.id > old.id);

        assert!(!orch.settle(old.id, Ok(real())));
        assert_eq!(orch.state(), &SubmissionState::Submitting);

        let err = SubmitError::Network { mode: InputMode::Text, cause: "down".into() };
        assert!(orch.settle(fresh.id, Err(err.clone())));
        assert_eq!(orch.state(), &SubmissionState::Failed(err));
    }

    #[test]
    fn test_double_settle_is_ignored() {
        let mut orch = SubmissionOrchestrator::new();
        let ticket = orch.begin(text("claim")).unwrap();
        assert!(orch.settle(ticket.id, Ok(real())));
        assert!(!orch.settle(ticket.id, Err(SubmitError::PayloadTooLarge)));
        assert_eq!(orch.state(), &SubmissionState::Succeeded(real()));
    }

    #[test]
    fn test_submit_calls_classifier_once() {
        let mut orch = SubmissionOrchestrator::new();
        let classifier = CannedClassifier::new(Ok(real()));
        assert!(orch.submit(&classifier, text("claim")));
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
        assert!(!orch.is_submitting());
    }

    #[test]
    fn test_submit_while_in_flight_does_not_call_classifier() {
        let mut orch = SubmissionOrchestrator::new();
        orch.begin(text("pending")).unwrap();
        let classifier = CannedClassifier::new(Ok(real()));
        assert!(!orch.submit(&classifier, text("again")));
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reject_and_clear_error() {
        let mut orch = SubmissionOrchestrator::new();
        orch.reject(ValidationError::FileTooLarge { size: 2, limit: 1 });
        assert!(matches!(orch.state(), SubmissionState::Failed(SubmitError::Validation(_))));
        orch.clear_error();
        assert_eq!(orch.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_reject_does_not_interrupt_submission() {
        let mut orch = SubmissionOrchestrator::new();
        orch.begin(text("claim")).unwrap();
        orch.reject(ValidationError::FileTooLarge { size: 2, limit: 1 });
        assert_eq!(orch.state(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_clear_error_keeps_result() {
        let mut orch = SubmissionOrchestrator::new();
        let ticket = orch.begin(text("claim")).unwrap();
        orch.settle(ticket.id, Ok(real()));
        orch.clear_error();
        assert_eq!(orch.state(), &SubmissionState::Succeeded(real()));
    }
}
