//! Search form submission and the answering-service extension point.
//!
//! The landing page ships without a backend. Submitting records the query
//! and, only when a service has been attached to `LandingPage`, hands the
//! query to it.

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// Failure reported by an answering service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("answering service unavailable")]
    Unavailable,
    #[error("answering service failed: {0}")]
    Service(String),
}

/// Opaque answer payload returned by a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

/// Future produced by dispatching a query.
pub type Dispatch = LocalBoxFuture<'static, Result<Answer, SearchError>>;

/// Something that can answer a free-text career question.
///
/// No latency or retry contract is implied; the page fires the request and
/// only logs the outcome.
pub trait AnswerService {
    fn answer(&self, query: String) -> Dispatch;
}

/// Handles a submitted query.
///
/// Never fails, whatever the input. Returns the pending dispatch when a
/// service is attached, `None` otherwise.
pub fn submit(query: &str, service: Option<&dyn AnswerService>) -> Option<Dispatch> {
    tracing::info!("Searching for: {query}");
    let service = service?;
    tracing::debug!(len = query.len(), "dispatching query to answering service");
    Some(service.answer(query.to_owned()))
}

/// Logs how a dispatched query ended.
pub fn report_outcome(outcome: &Result<Answer, SearchError>) {
    match outcome {
        Ok(answer) => tracing::debug!(len = answer.text.len(), "answer received"),
        Err(err) => tracing::warn!("search failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Echo {
        seen: RefCell<Vec<String>>,
    }

    impl AnswerService for Echo {
        fn answer(&self, query: String) -> Dispatch {
            self.seen.borrow_mut().push(query.clone());
            Box::pin(async move { Ok(Answer { text: format!("echo: {query}") }) })
        }
    }

    struct Down;

    impl AnswerService for Down {
        fn answer(&self, _query: String) -> Dispatch {
            Box::pin(async { Err(SearchError::Unavailable) })
        }
    }

    #[test]
    fn no_service_means_no_dispatch() {
        assert!(submit("software engineer salary", None).is_none());
    }

    #[test]
    fn empty_query_is_accepted() {
        assert!(submit("", None).is_none());

        let echo = Echo::default();
        let outcome = block_on(submit("", Some(&echo)).expect("dispatch"));
        assert_eq!(outcome, Ok(Answer { text: "echo: ".into() }));
    }

    #[test]
    fn query_is_forwarded_untrimmed() {
        let echo = Echo::default();
        let dispatch = submit("  nurse  ", Some(&echo)).expect("dispatch");
        assert_eq!(*echo.seen.borrow(), vec!["  nurse  ".to_string()]);

        let outcome = block_on(dispatch);
        assert_eq!(outcome, Ok(Answer { text: "echo:   nurse  ".into() }));
    }

    #[test]
    fn service_failure_is_surfaced() {
        let outcome = block_on(submit("data analyst", Some(&Down)).expect("dispatch"));
        assert_eq!(outcome, Err(SearchError::Unavailable));
        report_outcome(&outcome);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SearchError::Unavailable.to_string(),
            "answering service unavailable"
        );
        assert_eq!(
            SearchError::Service("timeout".into()).to_string(),
            "answering service failed: timeout"
        );
    }
}
