use serde::Deserialize;

use crate::error::{DirectoryError, DirectoryResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoundtableRequest {
    pub name: String,
    pub abbreviation: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub client_ids: Vec<String>,
    pub director_user_ids: Vec<String>,
    pub primary_director_user_id: String,
    pub associate_user_ids: Vec<String>,
    pub primary_associate_user_id: Option<String>,
}

impl CreateRoundtableRequest {
    /// Checks request shape. Rules run in a fixed order and the first failure wins.
    ///
    /// Abbreviation uniqueness needs the store and is checked on insert.
    pub fn validate(&self) -> DirectoryResult<()> {
        if is_blank(&self.name) {
            return Err(DirectoryError::invalid_argument("roundtable name is required"));
        }
        if is_blank(&self.abbreviation) {
            return Err(DirectoryError::invalid_argument(
                "roundtable abbreviation is required",
            ));
        }
        if self.director_user_ids.is_empty() {
            return Err(DirectoryError::invalid_argument(
                "at least one director user id must be provided",
            ));
        }
        if is_blank(&self.primary_director_user_id) {
            return Err(DirectoryError::invalid_argument(
                "primary director user id is required",
            ));
        }
        if !self
            .director_user_ids
            .iter()
            .any(|id| *id == self.primary_director_user_id)
        {
            return Err(DirectoryError::invalid_argument(
                "primary director must be one of the selected director user ids",
            ));
        }
        if let Some(primary_associate) = self.primary_associate()
            && !self.associate_user_ids.iter().any(|id| id == primary_associate)
        {
            return Err(DirectoryError::invalid_argument(
                "primary associate must be one of the selected associate user ids",
            ));
        }

        Ok(())
    }

    /// Primary associate id, treating a blank value as absent.
    pub fn primary_associate(&self) -> Option<&str> {
        self.primary_associate_user_id
            .as_deref()
            .filter(|id| !is_blank(id))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateRoundtableRequest {
        CreateRoundtableRequest {
            name: "Alpha Roundtable".to_string(),
            abbreviation: "ALPHA".to_string(),
            description: None,
            is_active: true,
            client_ids: vec!["client-1".to_string()],
            director_user_ids: vec!["dir-1".to_string(), "dir-2".to_string()],
            primary_director_user_id: "dir-2".to_string(),
            associate_user_ids: vec!["assoc-1".to_string()],
            primary_associate_user_id: Some("assoc-1".to_string()),
        }
    }

    fn rejection(request: &CreateRoundtableRequest) -> String {
        match request.validate() {
            Err(DirectoryError::InvalidArgument(message)) => message,
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_whitespace_name() {
        let mut request = valid_request();
        request.name = "   ".to_string();
        assert_eq!(rejection(&request), "roundtable name is required");
    }

    #[test]
    fn rejects_blank_abbreviation() {
        let mut request = valid_request();
        request.abbreviation = String::new();
        assert_eq!(rejection(&request), "roundtable abbreviation is required");
    }

    #[test]
    fn rejects_missing_directors() {
        let mut request = valid_request();
        request.director_user_ids.clear();
        assert_eq!(
            rejection(&request),
            "at least one director user id must be provided"
        );
    }

    #[test]
    fn rejects_missing_primary_director() {
        let mut request = valid_request();
        request.primary_director_user_id = " ".to_string();
        assert_eq!(rejection(&request), "primary director user id is required");
    }

    #[test]
    fn rejects_primary_director_outside_candidates() {
        let mut request = valid_request();
        request.primary_director_user_id = "dir-9".to_string();
        assert_eq!(
            rejection(&request),
            "primary director must be one of the selected director user ids"
        );
    }

    #[test]
    fn rejects_primary_associate_outside_candidates() {
        let mut request = valid_request();
        request.associate_user_ids.clear();
        assert_eq!(
            rejection(&request),
            "primary associate must be one of the selected associate user ids"
        );
    }

    #[test]
    fn blank_primary_associate_counts_as_absent() {
        let mut request = valid_request();
        request.associate_user_ids.clear();
        request.primary_associate_user_id = Some("  ".to_string());
        assert!(request.validate().is_ok());
        assert_eq!(request.primary_associate(), None);
    }

    #[test]
    fn first_failing_rule_wins() {
        let request = CreateRoundtableRequest::default();
        assert_eq!(rejection(&request), "roundtable name is required");

        let request = CreateRoundtableRequest {
            name: "Named".to_string(),
            ..CreateRoundtableRequest::default()
        };
        assert_eq!(rejection(&request), "roundtable abbreviation is required");
    }
}
