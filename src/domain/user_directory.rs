use std::collections::HashMap;

/// Resolves user ids to display names for roundtable member references.
pub trait UserDirectory: Send + Sync {
    fn display_name(&self, user_id: &str) -> String;
}

/// Derives `User_<first five characters>` from the id itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderUserDirectory;

impl PlaceholderUserDirectory {
    pub fn placeholder_name(user_id: &str) -> String {
        let prefix: String = user_id.chars().take(5).collect();
        format!("User_{prefix}")
    }
}

impl UserDirectory for PlaceholderUserDirectory {
    fn display_name(&self, user_id: &str) -> String {
        Self::placeholder_name(user_id)
    }
}

/// Fixed id-to-name table. Unknown ids fall back to the placeholder name.
#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    names: HashMap<String, String>,
}

impl StaticUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(user_id.into(), name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for StaticUserDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl UserDirectory for StaticUserDirectory {
    fn display_name(&self, user_id: &str) -> String {
        self.names
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| PlaceholderUserDirectory::placeholder_name(user_id))
    }
}
