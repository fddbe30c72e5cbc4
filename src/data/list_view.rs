//! List view state controller
//!
//! Owns one screen's fetched collection together with its search, filter,
//! sort and page state. The visible page is never stored: `view()` derives it
//! from scratch on every call by running the collection through
//! search + filters, then the comparator, then the paginator.

use tracing::{debug, warn};

use crate::data::comparator::{Comparator, SortDirection, SortState};
use crate::data::fetch::{FetchOutcome, FetchStatus, FetchTicket, FetchTracker};
use crate::data::filter_set::FilterSet;
use crate::data::paginator::Paginator;
use crate::data::schema::ListSchema;
use crate::data::search_filter::{SearchMode, SearchPredicate};
use crate::error::{ConfigError, FetchError};

/// The rows to render plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a, T> {
    pub items: Vec<&'a T>,
    /// 1-indexed, always within `[1, total_pages]`
    pub page: usize,
    pub page_size: usize,
    /// Size of the filtered collection, independent of pagination
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> DerivedView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// `"6-10 of 12"`, or `"0 of 0"` for an empty result
    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            return "0 of 0".to_string();
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} of {}", first, last, self.total_items)
    }
}

pub struct ListViewController<T> {
    schema: ListSchema<T>,
    paginator: Paginator,
    search_mode: SearchMode,

    /// Replaced wholesale on every applied fetch, never edited in place
    collection: Vec<T>,

    search: String,
    filters: FilterSet,
    sort: Option<SortState>,
    page: usize,

    fetch: FetchTracker,
}

impl<T> ListViewController<T> {
    /// Build a controller with an empty collection. Fails on a zero page size
    /// or a schema that references unregistered fields.
    pub fn new(schema: ListSchema<T>, page_size: usize) -> Result<Self, ConfigError> {
        let paginator = Paginator::new(page_size)?;
        schema.validate()?;

        let sort = schema
            .default_sort_key()
            .map(|(key, direction)| SortState::new(key, *direction));

        Ok(Self {
            schema,
            paginator,
            search_mode: SearchMode::default(),
            collection: Vec::new(),
            search: String::new(),
            filters: FilterSet::new(),
            sort,
            page: 1,
            fetch: FetchTracker::new(),
        })
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    pub fn with_collection(mut self, items: Vec<T>) -> Self {
        self.replace_collection(items);
        self
    }

    pub fn schema(&self) -> &ListSchema<T> {
        &self.schema
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn set_search(&mut self, term: &str) {
        debug!(target: "list_view", "search: {:?} -> {:?}", self.search, term);
        self.search = term.to_string();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Constrain `field` to `value`; an empty value removes the constraint.
    /// Fields outside the filterable set are ignored.
    pub fn set_filter(&mut self, field: &str, value: &str) {
        if !self.schema.is_filterable(field) {
            warn!(target: "list_view", "ignoring filter on non-filterable field '{}'", field);
            return;
        }
        debug!(target: "list_view", "filter: {} = {:?}", field, value);
        self.filters.set(field, value);
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        debug!(target: "list_view", "clearing {} filter(s)", self.filters.len());
        self.filters.clear();
        self.page = 1;
    }

    /// Sort by `key` in an explicit direction. Keys outside the sortable set
    /// are ignored.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        if !self.schema.is_sortable(key) {
            warn!(target: "list_view", "ignoring sort on non-sortable field '{}'", key);
            return;
        }
        debug!(target: "list_view", "sort: {} {:?}", key, direction);
        self.sort = Some(SortState::new(key, direction));
        self.page = 1;
    }

    /// Back to collection order
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        let clamped = self.paginator.clamp(page, self.filtered_count());
        if clamped != page {
            debug!(target: "list_view", "page {} clamped to {}", page, clamped);
        }
        self.page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(usize::MAX);
    }

    /// Swap in a freshly fetched collection. The current page is kept when
    /// it is still valid and clamped otherwise.
    pub fn replace_collection(&mut self, items: Vec<T>) {
        debug!(
            target: "list_view",
            "collection replaced: {} -> {} records",
            self.collection.len(),
            items.len()
        );
        self.collection = items;
        self.page = self.paginator.clamp(self.page, self.filtered_count());
    }

    /// Start a fetch; any fetch still in flight becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch.begin()
    }

    /// Apply the result of the fetch identified by `ticket`. Stale results are
    /// dropped and failures leave the current collection untouched.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, FetchError>,
    ) -> FetchOutcome {
        if !self.fetch.is_current(ticket) {
            debug!(target: "fetch", "discarding stale result for fetch #{}", ticket.id());
            return FetchOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.fetch.settle(ticket, None);
                let count = items.len();
                self.replace_collection(items);
                FetchOutcome::Applied { items: count }
            }
            Err(err) => {
                warn!(target: "fetch", "fetch #{} failed: {}", ticket.id(), err);
                self.fetch.settle(ticket, Some(&err));
                FetchOutcome::Failed(err)
            }
        }
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        self.fetch.status()
    }

    /// The ticket whose result is still awaited, if any
    pub fn fetch_in_flight(&self) -> Option<FetchTicket> {
        self.fetch.in_flight()
    }

    /// Records passing both the search predicate and every filter, in
    /// collection order
    fn filtered(&self) -> Vec<&T> {
        let predicate = SearchPredicate::build(
            &self.search,
            self.schema.search_extractors(),
            self.search_mode,
        );
        let filters_active = !self.filters.is_empty();

        self.collection
            .iter()
            .filter(|record| predicate.matches(*record))
            .filter(|record| !filters_active || self.filters.matches(&self.schema, *record))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered_count())
    }

    /// Derive the visible page from the current state
    pub fn view(&self) -> DerivedView<'_, T> {
        let mut rows = self.filtered();

        if let Some(sort) = &self.sort {
            if let Some(field) = self.schema.get(&sort.key) {
                Comparator::new(field, sort.direction).sort(&mut rows);
            }
        }

        let page = self.paginator.clamp(self.page, rows.len());
        let slice = self.paginator.paginate(&rows, page);

        DerivedView {
            items: slice.items.to_vec(),
            page,
            page_size: self.paginator.page_size(),
            total_items: slice.total_items,
            total_pages: slice.total_pages,
        }
    }
}
