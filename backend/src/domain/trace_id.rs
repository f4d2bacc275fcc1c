//! Correlation identifier for the request being handled.
//!
//! The value sits in a tokio task-local so error constructors can read it
//! without it being passed around. Spawned tasks start without one.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static REQUEST_TRACE: TraceId;
}

/// Random UUID naming one request in logs, headers and error bodies.
///
/// ```
/// use donor_backend::TraceId;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let id = TraceId::generate();
/// assert_eq!(id.run(async { TraceId::current() }).await, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request the current task is serving.
    #[must_use]
    pub fn current() -> Option<Self> {
        REQUEST_TRACE.try_with(|id| *id).ok()
    }

    /// Poll `fut` to completion with `self` as the current identifier.
    pub async fn run<F: Future>(self, fut: F) -> F::Output {
        REQUEST_TRACE.scope(self, fut).await
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[tokio::test]
    async fn nested_runs_restore_the_outer_identifier() {
        let outer = TraceId::generate();
        let inner = TraceId::generate();

        let (during, after) = outer
            .run(async move {
                let during = inner.run(async { TraceId::current() }).await;
                (during, TraceId::current())
            })
            .await;

        assert_eq!(during, Some(inner));
        assert_eq!(after, Some(outer));
    }

    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_it() {
        let seen = TraceId::generate()
            .run(async { tokio::spawn(async { TraceId::current() }).await })
            .await
            .expect("task joined");
        assert_eq!(seen, None);
    }

    #[rstest]
    #[case("6f1d3c2a-4b5e-4f60-8a7b-9c0d1e2f3a4b", true)]
    #[case("not-a-trace", false)]
    #[case("", false)]
    fn parses_hyphenated_uuids(#[case] text: &str, #[case] valid: bool) {
        let parsed = text.parse::<TraceId>();
        assert_eq!(parsed.is_ok(), valid);
        if let Ok(id) = parsed {
            assert_eq!(id.to_string(), text);
            assert_eq!(id.as_uuid().to_string(), text);
        }
    }
}
