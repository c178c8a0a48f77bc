//! List view state machine
//!
//! Per resource collection: fetch a page, filter it client-side, and
//! reconcile with the server after create/update/delete. Mutations never
//! patch the loaded page locally; they invalidate and re-fetch, so the view
//! always matches server truth at the cost of an extra round trip.
//!
//! The search filter only sees the currently loaded page. It cannot find
//! matches outside it; that is the documented contract, not an oversight.

use jokehub_api::ApiError;

use crate::state::cache::QueryCache;
use crate::state::toast::Toast;

/// Records that can be matched against a search string
pub trait Searchable {
    /// Concatenation of the record's text fields
    fn haystack(&self) -> String;
}

impl Searchable for jokehub_api::models::Joke {
    fn haystack(&self) -> String {
        format!("{} {}", self.text, self.joke_answer)
    }
}

/// Fetch state of the current page
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Loading,
    Loaded { records: Vec<T>, total_pages: u32 },
    Error(String),
}

/// Identifies one issued fetch: the exact request parameters plus a
/// supersession token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchKey {
    pub page: u32,
    token: u64,
}

/// What the caller must do after a mutation completes
#[derive(Debug, Default)]
pub struct MutationOutcome {
    pub toast: Option<Toast>,
    pub refetch: Option<FetchKey>,
}

#[derive(Debug)]
pub struct ListView<T> {
    noun: &'static str,
    page: u32,
    limit: u32,
    search: String,
    phase: Phase<T>,
    revalidating: bool,
    cache: QueryCache<u32, (Vec<T>, u32)>,
    editing: Option<T>,
    dialog_open: bool,
    save_in_flight: bool,
    pending_delete: Option<String>,
    delete_in_flight: bool,
}

impl<T: Clone + Searchable> ListView<T> {
    pub fn new(noun: &'static str, limit: u32) -> Self {
        Self {
            noun,
            page: 1,
            limit,
            search: String::new(),
            phase: Phase::Loading,
            revalidating: false,
            cache: QueryCache::new(),
            editing: None,
            dialog_open: false,
            save_in_flight: false,
            pending_delete: None,
            delete_in_flight: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_revalidating(&self) -> bool {
        self.revalidating
    }

    /// Total pages from the last `Loaded` metadata. Never recomputed
    /// client-side.
    pub fn total_pages(&self) -> u32 {
        match &self.phase {
            Phase::Loaded { total_pages, .. } => *total_pages,
            _ => 1,
        }
    }

    // Fetching

    /// Start loading the current page: initial mount, page change, or
    /// retry. A cached result for this page stays visible while the fresh
    /// fetch is in flight; otherwise the placeholder state shows.
    pub fn load_page(&mut self) -> FetchKey {
        let token = self.cache.begin(self.page);
        match self.cache.get(&self.page) {
            Some((records, total_pages)) => {
                self.phase = Phase::Loaded {
                    records: records.clone(),
                    total_pages: *total_pages,
                };
                self.revalidating = true;
            }
            None => {
                self.phase = Phase::Loading;
                self.revalidating = false;
            }
        }
        FetchKey {
            page: self.page,
            token,
        }
    }

    /// Re-fetch the current page after a mutation, keeping the last good
    /// result visible until the fresh one lands.
    fn refresh(&mut self) -> FetchKey {
        let token = self.cache.begin(self.page);
        if matches!(self.phase, Phase::Loaded { .. }) {
            self.revalidating = true;
        } else {
            self.phase = Phase::Loading;
        }
        FetchKey {
            page: self.page,
            token,
        }
    }

    /// Apply a completed fetch. Returns false when the result was dropped:
    /// superseded by a newer fetch for the same page, for a page no longer
    /// shown, or arriving after the session was terminated.
    pub fn resolve_fetch(
        &mut self,
        key: FetchKey,
        result: Result<(Vec<T>, u32), ApiError>,
    ) -> bool {
        match result {
            Ok((records, total_pages)) => {
                if !self
                    .cache
                    .complete(&key.page, key.token, (records.clone(), total_pages))
                {
                    return false;
                }
                if key.page != self.page {
                    return false;
                }
                self.phase = Phase::Loaded {
                    records,
                    total_pages,
                };
                self.revalidating = false;
                true
            }
            // The session is gone; nothing may update protected view state.
            Err(ApiError::Auth) => false,
            Err(err) => {
                if key.page != self.page || !self.cache.is_current(&key.page, key.token) {
                    return false;
                }
                self.phase = Phase::Error(err.to_string());
                self.revalidating = false;
                true
            }
        }
    }

    // Search

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    /// The loaded page filtered case-insensitively against the search
    /// string. Pure and synchronous; never requests additional pages and
    /// never affects pagination.
    pub fn filtered(&self) -> Vec<T> {
        let Phase::Loaded { records, .. } = &self.phase else {
            return Vec::new();
        };
        if self.search.is_empty() {
            return records.clone();
        }
        let query = self.search.to_lowercase();
        records
            .iter()
            .filter(|record| record.haystack().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    // Pagination

    pub fn can_prev(&self) -> bool {
        matches!(self.phase, Phase::Loaded { .. }) && self.page > 1
    }

    pub fn can_next(&self) -> bool {
        match &self.phase {
            Phase::Loaded { total_pages, .. } => self.page < *total_pages,
            _ => false,
        }
    }

    pub fn prev_page(&mut self) -> Option<FetchKey> {
        if !self.can_prev() {
            return None;
        }
        self.page -= 1;
        Some(self.load_page())
    }

    pub fn next_page(&mut self) -> Option<FetchKey> {
        if !self.can_next() {
            return None;
        }
        self.page += 1;
        Some(self.load_page())
    }

    // Create/edit dialog

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.dialog_open = true;
    }

    pub fn open_edit(&mut self, record: T) {
        self.editing = Some(record);
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        if !self.save_in_flight {
            self.dialog_open = false;
            self.editing = None;
        }
    }

    /// Latch a save. Returns false when one is already in flight.
    pub fn begin_save(&mut self) -> bool {
        if self.save_in_flight || !self.dialog_open {
            return false;
        }
        self.save_in_flight = true;
        true
    }

    /// Complete a create or update. On success the dialog closes and the
    /// list is invalidated and re-fetched; the mutation's success stands
    /// even if that re-fetch later fails.
    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> MutationOutcome {
        self.save_in_flight = false;
        match result {
            Ok(()) => {
                let verb = if self.editing.is_some() {
                    "updated"
                } else {
                    "created"
                };
                self.dialog_open = false;
                self.editing = None;
                self.cache.invalidate_all();
                MutationOutcome {
                    toast: Some(Toast::success(format!(
                        "{} {} successfully",
                        capitalize(self.noun),
                        verb
                    ))),
                    refetch: Some(self.refresh()),
                }
            }
            Err(ApiError::Auth) => MutationOutcome::default(),
            Err(err) => MutationOutcome {
                toast: Some(Toast::error(format!(
                    "Failed to save {}: {}",
                    self.noun, err
                ))),
                refetch: None,
            },
        }
    }

    // Two-step delete

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn is_deleting(&self) -> bool {
        self.delete_in_flight
    }

    pub fn request_delete(&mut self, id: String) {
        if !self.delete_in_flight {
            self.pending_delete = Some(id);
        }
    }

    /// Close the confirmation without any network call.
    pub fn cancel_delete(&mut self) {
        if !self.delete_in_flight {
            self.pending_delete = None;
        }
    }

    /// Hand out the confirmed identifier, at most once per confirmation.
    /// While the request is in flight the confirm action stays disabled.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.delete_in_flight {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.delete_in_flight = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> MutationOutcome {
        self.delete_in_flight = false;
        match result {
            Ok(()) => {
                self.pending_delete = None;
                self.cache.invalidate_all();
                MutationOutcome {
                    toast: Some(Toast::success(format!(
                        "{} deleted successfully",
                        capitalize(self.noun)
                    ))),
                    refetch: Some(self.refresh()),
                }
            }
            Err(ApiError::Auth) => MutationOutcome::default(),
            Err(err) => MutationOutcome {
                toast: Some(Toast::error(format!(
                    "Failed to delete {}: {}",
                    self.noun, err
                ))),
                refetch: None,
            },
        }
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::toast::ToastKind;
    use jokehub_api::models::Joke;
    use proptest::prelude::*;

    fn joke(id: &str, text: &str, answer: &str) -> Joke {
        Joke {
            id: id.to_string(),
            text: text.to_string(),
            joke_answer: answer.to_string(),
            image_url: None,
        }
    }

    fn sample_jokes() -> Vec<Joke> {
        vec![
            joke("j1", "Why did the chicken cross the road?", "To get to the other side"),
            joke("j2", "What do you call a fish with no eyes?", "A fsh"),
            joke("j3", "Knock knock", "Who's there?"),
            joke("j4", "Why don't scientists trust atoms?", "They make up everything"),
            joke("j5", "What's brown and sticky?", "A stick"),
        ]
    }

    fn loaded_view(jokes: Vec<Joke>, total_pages: u32) -> ListView<Joke> {
        let mut view = ListView::new("joke", 12);
        let key = view.load_page();
        assert!(view.resolve_fetch(key, Ok((jokes, total_pages))));
        view
    }

    #[test]
    fn initial_mount_shows_placeholder_then_loads() {
        let mut view: ListView<Joke> = ListView::new("joke", 12);
        assert_eq!(view.phase(), &Phase::Loading);

        let key = view.load_page();
        assert_eq!(key.page, 1);
        assert!(view.resolve_fetch(key, Ok((sample_jokes(), 1))));
        assert!(matches!(view.phase(), Phase::Loaded { .. }));
    }

    #[test]
    fn single_page_of_five_jokes() {
        let view = loaded_view(sample_jokes(), 1);
        assert!(!view.can_prev());
        assert!(!view.can_next());
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn initial_fetch_failure_enters_error_state() {
        let mut view: ListView<Joke> = ListView::new("joke", 12);
        let key = view.load_page();
        assert!(view.resolve_fetch(
            key,
            Err(ApiError::Network("connection refused".to_string()))
        ));
        assert!(matches!(view.phase(), Phase::Error(_)));

        // Manual retry re-enters the loading state.
        let retry = view.load_page();
        assert_eq!(view.phase(), &Phase::Loading);
        assert!(view.resolve_fetch(retry, Ok((sample_jokes(), 1))));
        assert!(matches!(view.phase(), Phase::Loaded { .. }));
    }

    #[test]
    fn search_filters_current_page_case_insensitively() {
        let mut view = loaded_view(sample_jokes(), 1);

        view.set_search("CHICKEN".to_string());
        let matches = view.filtered();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "j1");

        // Matches in the answer field too.
        view.set_search("stick".to_string());
        assert_eq!(view.filtered().len(), 1);

        view.set_search("zzz".to_string());
        assert!(view.filtered().is_empty());

        // Clearing the search restores the full page.
        view.set_search(String::new());
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn search_does_not_affect_pagination() {
        let mut view = loaded_view(sample_jokes(), 3);
        view.set_search("zzz".to_string());
        assert!(view.can_next());
        assert_eq!(view.total_pages(), 3);
    }

    proptest! {
        #[test]
        fn filtered_is_exactly_the_matching_subset(query in ".{0,12}") {
            let mut view = loaded_view(sample_jokes(), 1);
            view.set_search(query.clone());
            let filtered = view.filtered();
            let needle = query.to_lowercase();

            for record in &filtered {
                prop_assert!(record.haystack().to_lowercase().contains(&needle));
            }
            let expected = sample_jokes()
                .into_iter()
                .filter(|j| j.haystack().to_lowercase().contains(&needle))
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn pagination_guards_follow_server_metadata() {
        let mut view = loaded_view(sample_jokes(), 3);
        assert!(!view.can_prev());
        assert!(view.can_next());

        let key = view.next_page().expect("next enabled on page 1 of 3");
        assert_eq!(view.page(), 2);
        assert_eq!(key.page, 2);
        assert!(view.resolve_fetch(key, Ok((sample_jokes(), 3))));
        assert!(view.can_prev());
        assert!(view.can_next());

        let key = view.next_page().expect("next enabled on page 2 of 3");
        assert!(view.resolve_fetch(key, Ok((vec![], 3))));
        assert_eq!(view.page(), 3);
        assert!(view.can_prev());
        assert!(!view.can_next());
        assert!(view.next_page().is_none());
    }

    #[test]
    fn prev_unreachable_on_first_page() {
        let mut view = loaded_view(sample_jokes(), 3);
        assert!(view.prev_page().is_none());
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn superseded_page_fetch_is_dropped() {
        let mut view = loaded_view(sample_jokes(), 3);

        let page2 = view.next_page().expect("next enabled");
        let page3_jokes = vec![joke("j9", "late", "later")];
        assert!(view.resolve_fetch(page2, Ok((vec![joke("j6", "p2", "a")], 3))));

        let page3 = view.next_page().expect("next enabled");
        // The page-2 fetch from before completes again late; it must not
        // clobber page 3.
        assert!(!view.resolve_fetch(page2, Ok((vec![joke("j0", "stale", "x")], 3))));
        assert!(view.resolve_fetch(page3, Ok((page3_jokes, 3))));
        let shown = view.filtered();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "j9");
    }

    #[test]
    fn rapid_refetch_of_same_page_keeps_only_newest() {
        let mut view: ListView<Joke> = ListView::new("joke", 12);
        let stale = view.load_page();
        let fresh = view.load_page();

        assert!(view.resolve_fetch(fresh, Ok((sample_jokes(), 1))));
        assert!(!view.resolve_fetch(stale, Ok((vec![], 1))));
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn returning_to_cached_page_shows_it_while_revalidating() {
        let mut view = loaded_view(sample_jokes(), 2);
        let key = view.next_page().expect("next enabled");
        assert!(view.resolve_fetch(key, Ok((vec![joke("j6", "p2", "a")], 2))));

        let _key = view.prev_page().expect("prev enabled");
        // Page 1 is cached from the first load: stale-while-revalidate.
        assert!(matches!(view.phase(), Phase::Loaded { .. }));
        assert!(view.is_revalidating());
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn cancel_at_confirmation_performs_no_network_call() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.request_delete("abc".to_string());
        assert_eq!(view.pending_delete(), Some("abc"));

        view.cancel_delete();
        assert_eq!(view.pending_delete(), None);
        assert!(view.begin_delete().is_none());
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn delete_id_is_handed_out_exactly_once() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.request_delete("abc".to_string());

        assert_eq!(view.begin_delete(), Some("abc".to_string()));
        assert!(view.is_deleting());
        // Confirm is disabled while the request is in flight.
        assert_eq!(view.begin_delete(), None);
    }

    #[test]
    fn successful_delete_toasts_once_and_refetches_same_page() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.request_delete("j1".to_string());
        view.begin_delete().expect("confirmed");

        let outcome = view.finish_delete(Ok(()));
        let toast = outcome.toast.expect("success toast");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Joke deleted successfully");

        let refetch = outcome.refetch.expect("refetch issued");
        assert_eq!(refetch.page, 1);
        assert_eq!(view.pending_delete(), None);
        assert!(!view.is_deleting());

        // Stale data stays visible until the refetch lands without j1.
        assert!(view.is_revalidating());
        let without_j1: Vec<Joke> = sample_jokes().into_iter().filter(|j| j.id != "j1").collect();
        assert!(view.resolve_fetch(refetch, Ok((without_j1, 1))));
        assert!(view.filtered().iter().all(|j| j.id != "j1"));
    }

    #[test]
    fn failed_delete_toasts_error_and_keeps_loaded_state() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.request_delete("j1".to_string());
        view.begin_delete().expect("confirmed");

        let outcome = view.finish_delete(Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        }));
        let toast = outcome.toast.expect("error toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("Failed to delete joke"));
        assert!(outcome.refetch.is_none());
        assert!(matches!(view.phase(), Phase::Loaded { .. }));
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn successful_save_closes_dialog_and_refetches() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.open_create();
        assert!(view.dialog_open());
        assert!(view.begin_save());
        assert!(!view.begin_save());

        let outcome = view.finish_save(Ok(()));
        assert!(!view.dialog_open());
        let toast = outcome.toast.expect("success toast");
        assert_eq!(toast.message, "Joke created successfully");
        assert!(outcome.refetch.is_some());
    }

    #[test]
    fn successful_update_names_the_action() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.open_edit(joke("j1", "t", "a"));
        assert!(view.begin_save());

        let outcome = view.finish_save(Ok(()));
        assert_eq!(
            outcome.toast.expect("toast").message,
            "Joke updated successfully"
        );
        assert_eq!(view.editing().map(|j| j.id.as_str()), None);
    }

    #[test]
    fn failed_save_keeps_dialog_open() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.open_edit(joke("j1", "t", "a"));
        assert!(view.begin_save());

        let outcome = view.finish_save(Err(ApiError::Network("down".to_string())));
        assert!(view.dialog_open());
        assert!(view.editing().is_some());
        assert_eq!(outcome.toast.expect("toast").kind, ToastKind::Error);
        assert!(outcome.refetch.is_none());
    }

    #[test]
    fn save_success_with_failed_refetch_surfaces_both() {
        let mut view = loaded_view(sample_jokes(), 1);
        view.open_create();
        view.begin_save();

        let outcome = view.finish_save(Ok(()));
        assert_eq!(outcome.toast.expect("toast").kind, ToastKind::Success);

        let refetch = outcome.refetch.expect("refetch issued");
        assert!(view.resolve_fetch(
            refetch,
            Err(ApiError::Server {
                status: 502,
                message: "bad gateway".to_string()
            })
        ));
        assert!(matches!(view.phase(), Phase::Error(_)));
    }

    #[test]
    fn auth_failures_never_update_protected_view_state() {
        let mut view = loaded_view(sample_jokes(), 1);

        let key = view.load_page();
        assert!(!view.resolve_fetch(key, Err(ApiError::Auth)));
        assert!(matches!(view.phase(), Phase::Loaded { .. }));

        view.request_delete("j1".to_string());
        view.begin_delete().expect("confirmed");
        let outcome = view.finish_delete(Err(ApiError::Auth));
        assert!(outcome.toast.is_none());
        assert!(outcome.refetch.is_none());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let view = loaded_view(vec![], 1);
        assert!(matches!(view.phase(), Phase::Loaded { .. }));
        assert!(view.filtered().is_empty());
    }
}
