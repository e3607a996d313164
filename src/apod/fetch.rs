// SPDX-License-Identifier: MPL-2.0
//! Per-fetcher request state.
//!
//! A [`Fetcher`] tracks the observable state of one fetch operation
//! (today, by date, recent). Every request gets a fresh [`RequestId`]; a
//! response is only applied when its id matches the latest request, so a
//! slow response to a superseded request cannot overwrite fresher data.

use crate::error::Error;

/// Identifies one request issued by a [`Fetcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Observable state of a fetch operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    /// Human-readable failure message.
    Failed(String),
    Loaded(T),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Fetcher<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for Fetcher<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }
}

impl<T> Fetcher<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new request as in flight and returns its id.
    ///
    /// Any previous result is discarded; the state reads `Loading` until the
    /// matching response arrives.
    pub fn begin(&mut self) -> RequestId {
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestId(self.generation)
    }

    /// Applies the response for `id`.
    ///
    /// Returns `false` (and leaves the state untouched) when `id` belongs to
    /// a superseded request.
    pub fn finish(&mut self, id: RequestId, result: Result<T, Error>) -> bool {
        if id.0 != self.generation {
            tracing::debug!(
                stale = id.0,
                current = self.generation,
                "discarding response to superseded request"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                FetchState::Failed(err.user_message())
            }
        };
        true
    }

    /// Records a failure that happened before any request was sent.
    ///
    /// Bumps the generation so a request still in flight cannot replace the
    /// message afterwards.
    pub fn fail_without_request(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.state = FetchState::Failed(message.into());
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// True when nothing usable is loaded and no request is pending.
    #[must_use]
    pub fn needs_load(&self) -> bool {
        matches!(self.state, FetchState::Idle | FetchState::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_needs_load() {
        let fetcher: Fetcher<u32> = Fetcher::new();
        assert_eq!(fetcher.state(), &FetchState::Idle);
        assert!(fetcher.needs_load());
    }

    #[test]
    fn begin_enters_loading() {
        let mut fetcher: Fetcher<u32> = Fetcher::new();
        fetcher.begin();
        assert!(fetcher.state().is_loading());
        assert!(!fetcher.needs_load());
    }

    #[test]
    fn matching_response_is_applied() {
        let mut fetcher = Fetcher::new();
        let id = fetcher.begin();
        assert!(fetcher.finish(id, Ok(7)));
        assert_eq!(fetcher.state().loaded(), Some(&7));
    }

    #[test]
    fn error_response_surfaces_user_message() {
        let mut fetcher: Fetcher<u32> = Fetcher::new();
        let id = fetcher.begin();
        fetcher.finish(id, Err(Error::from_status(500)));
        assert_eq!(
            fetcher.state().error(),
            Some("Failed to fetch: Internal Server Error")
        );
        assert!(fetcher.needs_load());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut fetcher = Fetcher::new();
        let first = fetcher.begin();
        let second = fetcher.begin();

        assert!(fetcher.finish(second, Ok("fresh")));
        assert!(!fetcher.finish(first, Ok("stale")));
        assert_eq!(fetcher.state().loaded(), Some(&"fresh"));
    }

    #[test]
    fn retry_reenters_loading_from_failure() {
        let mut fetcher: Fetcher<u32> = Fetcher::new();
        let id = fetcher.begin();
        fetcher.finish(id, Err(Error::Network("down".into())));
        fetcher.begin();
        assert!(fetcher.state().is_loading());
    }

    #[test]
    fn inline_failure_invalidates_pending_request() {
        let mut fetcher = Fetcher::new();
        let pending = fetcher.begin();
        fetcher.fail_without_request("Please select a date");
        assert!(!fetcher.finish(pending, Ok(1)));
        assert_eq!(fetcher.state().error(), Some("Please select a date"));
    }
}
