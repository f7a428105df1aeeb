use serde::{Deserialize, Serialize};

/// Lifecycle state of a stored roundtable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundtableStatus {
    Active,
    Inactive,
}

impl RoundtableStatus {
    pub fn from_active_flag(is_active: bool) -> Self {
        if is_active { Self::Active } else { Self::Inactive }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Status restriction applied by list queries.
///
/// Kept apart from [`RoundtableStatus`] so that a stored entity can never
/// carry a filter-only value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    NoFilter,
    ByStatus(RoundtableStatus),
}

impl StatusFilter {
    pub fn matches(self, status: RoundtableStatus) -> bool {
        match self {
            Self::NoFilter => true,
            Self::ByStatus(expected) => expected == status,
        }
    }
}

/// A user referenced by a roundtable, with the display name already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub user_id: String,
    pub name: String,
    pub is_primary: bool,
}

impl UserDetails {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, is_primary: bool) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            is_primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roundtable {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub description: String,
    pub status: RoundtableStatus,
    pub director: UserDetails,
    pub associates: Vec<UserDetails>,
    pub client_ids: Vec<String>,
    pub clients_with_access_count: usize,
}

impl Roundtable {
    /// Key used to enforce case-insensitive abbreviation uniqueness.
    pub fn abbreviation_key(&self) -> String {
        abbreviation_key(&self.abbreviation)
    }

    pub fn primary_associate(&self) -> Option<&UserDetails> {
        self.associates.iter().find(|associate| associate.is_primary)
    }
}

pub fn abbreviation_key(abbreviation: &str) -> String {
    abbreviation.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_matches_every_status() {
        assert!(StatusFilter::NoFilter.matches(RoundtableStatus::Active));
        assert!(StatusFilter::NoFilter.matches(RoundtableStatus::Inactive));
    }

    #[test]
    fn status_filter_matches_only_requested_status() {
        let filter = StatusFilter::ByStatus(RoundtableStatus::Inactive);
        assert!(filter.matches(RoundtableStatus::Inactive));
        assert!(!filter.matches(RoundtableStatus::Active));
    }

    #[test]
    fn abbreviation_key_ignores_case() {
        assert_eq!(abbreviation_key("DuP"), abbreviation_key("dup"));
    }
}
