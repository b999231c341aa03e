use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{ContactInfoUpdate, User},
    value_objects::UserId,
};
use crate::domain::venue::Venue;
use async_trait::async_trait;

/// The user directory: user records, role assignments and managed venues.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn role_names(&self, id: UserId) -> DomainResult<Vec<String>>;

    async fn managed_venues(&self, id: UserId) -> DomainResult<Vec<Venue>>;

    /// Writes both contact fields atomically. Fails with `NotFound` when the
    /// user does not exist.
    async fn update_contact_info(&self, update: ContactInfoUpdate) -> DomainResult<User>;
}
