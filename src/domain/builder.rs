use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    roundtable::{Roundtable, RoundtableStatus, UserDetails},
    user_directory::UserDirectory,
    validation::CreateRoundtableRequest,
};

/// Turns a validated [`CreateRoundtableRequest`] into a [`Roundtable`] ready to insert.
#[derive(Clone)]
pub struct RoundtableBuilder {
    users: Arc<dyn UserDirectory>,
}

impl RoundtableBuilder {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    pub fn build(&self, request: CreateRoundtableRequest) -> Roundtable {
        let director = UserDetails::new(
            request.primary_director_user_id.clone(),
            self.users.display_name(&request.primary_director_user_id),
            true,
        );

        let primary_associate = request.primary_associate().map(str::to_string);
        let mut primary_taken = false;
        let associates = request
            .associate_user_ids
            .iter()
            .map(|user_id| {
                let is_primary =
                    !primary_taken && primary_associate.as_deref() == Some(user_id.as_str());
                primary_taken |= is_primary;
                UserDetails::new(user_id.clone(), self.users.display_name(user_id), is_primary)
            })
            .collect();

        let clients_with_access_count = request.client_ids.len();

        Roundtable {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            abbreviation: request.abbreviation,
            description: request.description.unwrap_or_default(),
            status: RoundtableStatus::from_active_flag(request.is_active),
            director,
            associates,
            client_ids: request.client_ids,
            clients_with_access_count,
        }
    }
}
