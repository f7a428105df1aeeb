//! Sample roundtables loaded into a fresh store at start-up.

use crate::domain::{Roundtable, RoundtableStatus, StaticUserDirectory, UserDetails};

const DIRECTORS: [(&str, &str); 2] = [
    ("user-dir-1", "Dr. Alice Director"),
    ("user-dir-2", "Mr. Bob Overseer"),
];

const ASSOCIATES: [(&str, &str); 3] = [
    ("user-assoc-1", "Charlie Associate"),
    ("user-assoc-2", "Diana Helper"),
    ("user-assoc-3", "Edward Contributor"),
];

/// Display names for every user referenced by the sample data.
pub fn sample_user_directory() -> StaticUserDirectory {
    DIRECTORS
        .iter()
        .chain(ASSOCIATES.iter())
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

pub fn sample_roundtables() -> Vec<Roundtable> {
    vec![
        sample(
            "rt-sample-1",
            "Alpha Roundtable",
            "ALPHA",
            "The first roundtable in the directory.",
            RoundtableStatus::Active,
            0,
            &[(0, true), (1, false)],
            &["client-1", "client-2"],
        ),
        sample(
            "rt-sample-2",
            "Beta Roundtable",
            "BETA",
            "Technology focus group.",
            RoundtableStatus::Active,
            1,
            &[(2, true)],
            &["client-3"],
        ),
        sample(
            "rt-sample-3",
            "Gamma Roundtable",
            "GAMMA",
            "Paused until next quarter.",
            RoundtableStatus::Inactive,
            0,
            &[(0, true)],
            &["client-1", "client-4"],
        ),
        sample(
            "rt-sample-4",
            "Delta Roundtable",
            "DELTA",
            "Regional operations forum.",
            RoundtableStatus::Active,
            1,
            &[(1, false), (2, false)],
            &[],
        ),
        sample(
            "rt-sample-5",
            "Epsilon Roundtable",
            "EPS",
            "Finance and procurement.",
            RoundtableStatus::Active,
            0,
            &[],
            &["client-2", "client-5", "client-6"],
        ),
        sample(
            "rt-sample-6",
            "Zeta Roundtable",
            "ZETA",
            "Customer experience council.",
            RoundtableStatus::Active,
            1,
            &[(0, false), (2, true)],
            &["client-7"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    abbreviation: &str,
    description: &str,
    status: RoundtableStatus,
    director: usize,
    associates: &[(usize, bool)],
    client_ids: &[&str],
) -> Roundtable {
    let (director_id, director_name) = DIRECTORS[director];
    Roundtable {
        id: id.to_string(),
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        description: description.to_string(),
        status,
        director: UserDetails::new(director_id, director_name, true),
        associates: associates
            .iter()
            .map(|(index, is_primary)| {
                let (user_id, user_name) = ASSOCIATES[*index];
                UserDetails::new(user_id, user_name, *is_primary)
            })
            .collect(),
        client_ids: client_ids.iter().map(|id| id.to_string()).collect(),
        clients_with_access_count: client_ids.len(),
    }
}
