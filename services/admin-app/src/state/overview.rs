//! Overview/statistics view state
//!
//! One aggregate snapshot per range selector. Changing the selector issues
//! exactly one new fetch whose result replaces the previous snapshot
//! entirely; nothing is merged. Fetch failures offer a manual retry rather
//! than auto-retrying.

use jokehub_api::models::{OverviewSnapshot, Range};
use jokehub_api::ApiError;

use crate::state::cache::QueryCache;

#[derive(Debug, Clone, PartialEq)]
pub enum OverviewPhase {
    Loading,
    Loaded(OverviewSnapshot),
    Error(String),
}

/// Identifies one issued overview fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewFetch {
    pub range: Range,
    token: u64,
}

#[derive(Debug)]
pub struct OverviewView {
    range: Range,
    phase: OverviewPhase,
    cache: QueryCache<Range, OverviewSnapshot>,
}

impl OverviewView {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            phase: OverviewPhase::Loading,
            cache: QueryCache::new(),
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn phase(&self) -> &OverviewPhase {
        &self.phase
    }

    /// Initial fetch for the current range
    pub fn start(&mut self) -> OverviewFetch {
        self.phase = OverviewPhase::Loading;
        OverviewFetch {
            range: self.range,
            token: self.cache.begin(self.range),
        }
    }

    /// Switch the range selector. Returns the single new fetch to issue,
    /// or None when the selector did not change.
    pub fn set_range(&mut self, next: Range) -> Option<OverviewFetch> {
        if next == self.range {
            return None;
        }
        self.range = next;
        Some(self.start())
    }

    /// Manual retry for the current range after a failure
    pub fn retry(&mut self) -> OverviewFetch {
        self.start()
    }

    /// Apply a completed fetch. Stale completions (an older fetch for this
    /// range, or a range no longer selected) and post-401 completions are
    /// dropped.
    pub fn resolve(
        &mut self,
        fetch: OverviewFetch,
        result: Result<OverviewSnapshot, ApiError>,
    ) -> bool {
        match result {
            Ok(snapshot) => {
                if !self.cache.complete(&fetch.range, fetch.token, snapshot.clone()) {
                    return false;
                }
                if fetch.range != self.range {
                    return false;
                }
                self.phase = OverviewPhase::Loaded(snapshot);
                true
            }
            Err(ApiError::Auth) => false,
            Err(err) => {
                if fetch.range != self.range || !self.cache.is_current(&fetch.range, fetch.token) {
                    return false;
                }
                self.phase = OverviewPhase::Error(err.to_string());
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokehub_api::models::{LabeledCount, OverviewCards};

    fn snapshot(total_users: u64) -> OverviewSnapshot {
        OverviewSnapshot {
            cards: OverviewCards {
                total_users,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn initial_fetch_loads_snapshot() {
        let mut view = OverviewView::new(Range::Daily);
        let fetch = view.start();
        assert_eq!(fetch.range, Range::Daily);
        assert_eq!(view.phase(), &OverviewPhase::Loading);

        assert!(view.resolve(fetch, Ok(snapshot(10))));
        match view.phase() {
            OverviewPhase::Loaded(s) => assert_eq!(s.cards.total_users, 10),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn range_change_issues_exactly_one_fetch() {
        let mut view = OverviewView::new(Range::Daily);
        let first = view.start();
        assert!(view.resolve(first, Ok(snapshot(10))));

        let fetch = view.set_range(Range::Month).expect("selector changed");
        assert_eq!(fetch.range, Range::Month);
        assert_eq!(view.phase(), &OverviewPhase::Loading);

        // Selecting the already-active range fetches nothing.
        assert!(view.set_range(Range::Month).is_none());
    }

    #[test]
    fn new_snapshot_fully_replaces_the_old_one() {
        let mut view = OverviewView::new(Range::Daily);
        let first = view.start();
        let mut daily = snapshot(10);
        daily.quiz_attendance.by_weekday.push(LabeledCount {
            label: "Mon".to_string(),
            count: 3,
        });
        assert!(view.resolve(first, Ok(daily)));

        let fetch = view.set_range(Range::Month).expect("selector changed");
        assert!(view.resolve(fetch, Ok(snapshot(99))));
        match view.phase() {
            OverviewPhase::Loaded(s) => {
                assert_eq!(s.cards.total_users, 99);
                // No stale field retained from the prior range.
                assert!(s.quiz_attendance.by_weekday.is_empty());
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn stale_range_completion_is_dropped() {
        let mut view = OverviewView::new(Range::Daily);
        let daily = view.start();
        let month = view.set_range(Range::Month).expect("selector changed");

        assert!(!view.resolve(daily, Ok(snapshot(1))));
        assert_eq!(view.phase(), &OverviewPhase::Loading);

        assert!(view.resolve(month, Ok(snapshot(2))));
        match view.phase() {
            OverviewPhase::Loaded(s) => assert_eq!(s.cards.total_users, 2),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn failure_offers_manual_retry() {
        let mut view = OverviewView::new(Range::Daily);
        let fetch = view.start();
        assert!(view.resolve(
            fetch,
            Err(ApiError::Network("connection refused".to_string()))
        ));
        assert!(matches!(view.phase(), OverviewPhase::Error(_)));

        let retry = view.retry();
        assert_eq!(view.phase(), &OverviewPhase::Loading);
        assert!(view.resolve(retry, Ok(snapshot(5))));
        assert!(matches!(view.phase(), OverviewPhase::Loaded(_)));
    }

    #[test]
    fn auth_failure_does_not_touch_view_state() {
        let mut view = OverviewView::new(Range::Daily);
        let first = view.start();
        assert!(view.resolve(first, Ok(snapshot(10))));

        let retry = view.retry();
        assert!(!view.resolve(retry, Err(ApiError::Auth)));
        assert_eq!(view.phase(), &OverviewPhase::Loading);
    }
}
