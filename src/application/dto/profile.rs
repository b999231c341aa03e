use crate::domain::{user::User, venue::Venue};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedVenueDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Venue> for ManagedVenueDto {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id.into(),
            name: venue.name,
        }
    }
}

/// Full profile of the current user, returned by every `/me` operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub roles: Vec<String>,
    pub managed_venues: Vec<ManagedVenueDto>,
}

impl ProfileDto {
    #[must_use]
    pub fn from_parts(user: User, mut roles: Vec<String>, venues: Vec<Venue>) -> Self {
        roles.sort();
        roles.dedup();

        let mut managed_venues: Vec<ManagedVenueDto> =
            venues.into_iter().map(ManagedVenueDto::from).collect();
        managed_venues.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        Self {
            id: user.id.into(),
            email: user.email.into(),
            display_name: user.display_name,
            address: user.address.map(Into::into),
            phone_number: user.phone_number.map(Into::into),
            roles,
            managed_venues,
        }
    }
}
