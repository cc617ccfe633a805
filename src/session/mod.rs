//! Submission handling and the last-result slot
//!
//! `submit` turns one form submission into an immutable `Outcome`.
//! `SessionSlot::record` folds that outcome into the slot by value: only a
//! successful generation replaces the stored syllabus.

mod repl;

use chrono::{DateTime, Local};

use crate::completion::CompletionBackend;
use crate::error::{CompletionError, InputError};
use crate::syllabus::{CourseDuration, Subject, SyllabusRequest, build_prompt};
use crate::utils::debug_log;

pub(crate) use repl::run_session;

/// A successfully generated syllabus
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Syllabus {
    pub(crate) subject: Subject,
    pub(crate) duration: CourseDuration,
    /// Completion text exactly as returned by the service
    pub(crate) content: String,
    pub(crate) generated_at: DateTime<Local>,
}

/// Result of one submission
#[derive(Debug)]
pub(crate) enum Outcome {
    Generated(Syllabus),
    Failed {
        request: SyllabusRequest,
        error: CompletionError,
    },
    Rejected(InputError),
}

impl Outcome {
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }
}

/// Validate the form, build the prompt and make exactly one backend call.
///
/// Input errors are returned before the backend is touched.
pub(crate) fn submit(
    backend: &dyn CompletionBackend,
    subject_input: &str,
    duration: CourseDuration,
) -> Outcome {
    let request = match SyllabusRequest::new(subject_input, duration) {
        Ok(request) => request,
        Err(e) => return Outcome::Rejected(e),
    };

    let prompt = build_prompt(&request);
    debug_log(format_args!(
        "Requesting {} syllabus for '{}' from {}",
        request.duration,
        request.subject,
        backend.name()
    ));

    match backend.complete(&prompt) {
        Ok(content) => Outcome::Generated(Syllabus {
            subject: request.subject,
            duration: request.duration,
            content,
            generated_at: Local::now(),
        }),
        Err(error) => Outcome::Failed { request, error },
    }
}

/// The single retained result of a session
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionSlot {
    last: Option<Syllabus>,
}

impl SessionSlot {
    pub(crate) fn record(self, outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Generated(syllabus) => Self {
                last: Some(syllabus.clone()),
            },
            Outcome::Failed { .. } | Outcome::Rejected(_) => self,
        }
    }

    pub(crate) fn last(&self) -> Option<&Syllabus> {
        self.last.as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedBackend;
    use super::*;

    fn weeks(n: &str) -> CourseDuration {
        n.parse().unwrap()
    }

    #[test]
    fn empty_subject_never_calls_backend() {
        let backend = ScriptedBackend::new(vec![Ok("unused".into())]);
        for input in ["", "   ", "Select a subject..."] {
            let outcome = submit(&backend, input, weeks("8"));
            assert!(matches!(outcome, Outcome::Rejected(InputError::EmptySubject)));
        }
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn success_keeps_text_exactly() {
        let text = "  # Statistics - 6 Weeks Course Syllabus\n\n| not | validated |\n";
        let backend = ScriptedBackend::new(vec![Ok(text.to_string())]);
        let outcome = submit(&backend, "Statistics", weeks("6"));

        let Outcome::Generated(syllabus) = outcome else {
            panic!("expected success");
        };
        assert_eq!(syllabus.content, text);
        assert_eq!(syllabus.subject.as_str(), "Statistics");
        assert_eq!(syllabus.duration, weeks("6"));
        assert_eq!(backend.calls.get(), 1);

        let prompt = backend.last_prompt.borrow().clone().unwrap();
        assert!(prompt.user.contains("Statistics"));
        assert!(prompt.user.contains("6 Weeks"));
    }

    #[test]
    fn failure_carries_request_and_error() {
        let backend = ScriptedBackend::new(vec![Err(CompletionError::Status {
            code: 500,
            detail: None,
        })]);
        let outcome = submit(&backend, "Physics", weeks("4"));
        match outcome {
            Outcome::Failed { request, error } => {
                assert_eq!(request.subject.as_str(), "Physics");
                assert!(error.to_string().contains("500"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn slot_keeps_last_success_across_failures() {
        let backend = ScriptedBackend::new(vec![
            Ok("first syllabus".into()),
            Err(CompletionError::Network("connection reset".into())),
            Ok("second syllabus".into()),
        ]);

        let slot = SessionSlot::default();
        assert!(slot.last().is_none());

        let slot = slot.record(&submit(&backend, "Chemistry", weeks("8")));
        assert_eq!(slot.last().map(|s| s.content.as_str()), Some("first syllabus"));

        let failed = submit(&backend, "Marketing", weeks("4"));
        assert!(!failed.is_success());
        let slot = slot.record(&failed);
        assert_eq!(slot.last().map(|s| s.content.as_str()), Some("first syllabus"));
        assert_eq!(slot.last().map(|s| s.subject.as_str()), Some("Chemistry"));

        let slot = slot.record(&submit(&backend, "", weeks("4")));
        assert_eq!(slot.last().map(|s| s.content.as_str()), Some("first syllabus"));

        let slot = slot.record(&submit(&backend, "Finance", weeks("14")));
        assert_eq!(slot.last().map(|s| s.content.as_str()), Some("second syllabus"));
        assert_eq!(slot.last().map(|s| s.duration), Some(weeks("14")));
        assert_eq!(backend.calls.get(), 3);
    }
}
