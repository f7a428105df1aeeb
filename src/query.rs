//! List-side query engine: search, status filtering and offset pagination
//! over a snapshot of the store.
//!
//! Page tokens are the decimal text of an offset into the filtered result set.
//! Malformed input never fails a query: an unparseable token restarts at
//! offset 0 and out-of-range page sizes are normalized.

use crate::domain::{Roundtable, StatusFilter};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Normalizes a requested page size: non-positive becomes the default, larger
/// than the maximum is clamped.
pub fn normalize_page_size(requested: i32) -> usize {
    match usize::try_from(requested) {
        Ok(0) | Err(_) => DEFAULT_PAGE_SIZE,
        Ok(size) => size.min(MAX_PAGE_SIZE),
    }
}

/// Offset encoded in a continuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageToken {
    offset: usize,
}

impl PageToken {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Absent, blank or non-numeric tokens resolve to offset 0.
    pub fn parse(raw: Option<&str>) -> Self {
        let offset = raw
            .map(str::trim)
            .and_then(|token| token.parse::<usize>().ok())
            .unwrap_or(0);
        Self { offset }
    }

    pub fn offset(self) -> usize {
        self.offset
    }

    pub fn encode(self) -> String {
        self.offset.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundtableQuery {
    pub search_query: Option<String>,
    pub status_filter: StatusFilter,
    pub page_size: i32,
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundtablePage {
    pub roundtables: Vec<Roundtable>,
    /// Size of the filtered set before pagination.
    pub total_size: usize,
    pub next_page_token: Option<String>,
}

/// Case-insensitive substring search over a roundtable's text fields.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Returns `None` for an absent or empty query, which disables search.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        raw.filter(|query| !query.is_empty()).map(|query| Self {
            needle: query.to_lowercase(),
        })
    }

    pub fn matches(&self, roundtable: &Roundtable) -> bool {
        self.contains(&roundtable.name)
            || self.contains(&roundtable.abbreviation)
            || self.contains(&roundtable.description)
            || self.contains(&roundtable.director.name)
            || roundtable
                .associates
                .iter()
                .any(|associate| self.contains(&associate.name))
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Applies search, status filter and pagination to `roundtables`, preserving
/// their order.
pub fn execute(roundtables: Vec<Roundtable>, query: &RoundtableQuery) -> RoundtablePage {
    let search = SearchTerm::new(query.search_query.as_deref());
    let filtered: Vec<Roundtable> = roundtables
        .into_iter()
        .filter(|roundtable| search.as_ref().is_none_or(|term| term.matches(roundtable)))
        .filter(|roundtable| query.status_filter.matches(roundtable.status))
        .collect();

    paginate(
        filtered,
        normalize_page_size(query.page_size),
        PageToken::parse(query.page_token.as_deref()),
    )
}

/// Slices `[offset, offset + page_size)` out of an already filtered set.
pub fn paginate(filtered: Vec<Roundtable>, page_size: usize, token: PageToken) -> RoundtablePage {
    let total_size = filtered.len();
    let offset = token.offset();

    let roundtables: Vec<Roundtable> = filtered.into_iter().skip(offset).take(page_size).collect();

    let consumed = offset.saturating_add(roundtables.len());
    let next_page_token = (consumed < total_size)
        .then(|| PageToken::new(offset.saturating_add(page_size)).encode());

    RoundtablePage {
        roundtables,
        total_size,
        next_page_token,
    }
}
