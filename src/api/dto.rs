use serde::{Deserialize, Serialize};

use crate::{
    domain::{Roundtable, RoundtableStatus, StatusFilter},
    query::{RoundtablePage, RoundtableQuery},
};

/// Wire form of the list status filter. `Unspecified` and `All` both mean
/// "no status restriction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilterParam {
    #[default]
    Unspecified,
    Active,
    Inactive,
    All,
}

impl StatusFilterParam {
    /// Case-insensitive; anything unrecognized reads as `Unspecified`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "all" => Self::All,
            _ => Self::Unspecified,
        }
    }
}

impl From<StatusFilterParam> for StatusFilter {
    fn from(value: StatusFilterParam) -> Self {
        match value {
            StatusFilterParam::Unspecified | StatusFilterParam::All => StatusFilter::NoFilter,
            StatusFilterParam::Active => StatusFilter::ByStatus(RoundtableStatus::Active),
            StatusFilterParam::Inactive => StatusFilter::ByStatus(RoundtableStatus::Inactive),
        }
    }
}

/// Raw list parameters. Every field is kept as text so that no value can
/// make the listing fail; interpretation happens in [`Self::into_query`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRoundtablesParams {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub status_filter: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
    #[serde(default)]
    pub page_token: Option<String>,
}

impl ListRoundtablesParams {
    pub fn into_query(self) -> RoundtableQuery {
        let status_filter = self
            .status_filter
            .as_deref()
            .map(StatusFilterParam::parse)
            .unwrap_or_default();

        RoundtableQuery {
            search_query: self.search_query,
            status_filter: status_filter.into(),
            page_size: self.page_size.as_deref().map(parse_page_size).unwrap_or(0),
            page_token: self.page_token,
        }
    }
}

/// Out-of-range sizes saturate to the `i32` bounds, non-numeric text reads as 0.
fn parse_page_size(raw: &str) -> i32 {
    let raw = raw.trim();
    if let Ok(size) = raw.parse::<i32>() {
        return size;
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    if negative { i32::MIN } else { i32::MAX }
}

#[derive(Debug, Serialize)]
pub struct ListRoundtablesResponse {
    pub roundtables: Vec<Roundtable>,
    pub total_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl From<RoundtablePage> for ListRoundtablesResponse {
    fn from(page: RoundtablePage) -> Self {
        Self {
            roundtables: page.roundtables,
            total_size: page.total_size,
            next_page_token: page.next_page_token,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoundtableResponse {
    pub roundtable: Roundtable,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_filters_map_to_no_filter() {
        assert_eq!(
            StatusFilter::from(StatusFilterParam::Unspecified),
            StatusFilter::NoFilter
        );
        assert_eq!(StatusFilter::from(StatusFilterParam::All), StatusFilter::NoFilter);
        assert_eq!(
            StatusFilter::from(StatusFilterParam::Inactive),
            StatusFilter::ByStatus(RoundtableStatus::Inactive)
        );
    }

    #[test]
    fn list_params_default_when_absent() {
        let params: ListRoundtablesParams =
            serde_json::from_str("{}").expect("empty params should deserialize");
        let query = params.into_query();
        assert_eq!(query, RoundtableQuery::default());
    }

    #[test]
    fn status_filter_ignores_case_and_unknown_values() {
        assert_eq!(StatusFilterParam::parse("ACTIVE"), StatusFilterParam::Active);
        assert_eq!(StatusFilterParam::parse(" Inactive "), StatusFilterParam::Inactive);
        assert_eq!(StatusFilterParam::parse("archived"), StatusFilterParam::Unspecified);
    }

    #[test]
    fn page_size_saturates_and_tolerates_text() {
        assert_eq!(parse_page_size("25"), 25);
        assert_eq!(parse_page_size("3000000000"), i32::MAX);
        assert_eq!(parse_page_size("-3000000000"), i32::MIN);
        assert_eq!(parse_page_size("99999999999999999999"), i32::MAX);
        assert_eq!(parse_page_size("-"), 0);
        assert_eq!(parse_page_size("abc"), 0);
    }
}
