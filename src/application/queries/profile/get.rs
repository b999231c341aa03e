use super::{ProfileQueryService, assemble_profile};
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl ProfileQueryService {
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` when the caller has no stored
    /// record, or the underlying storage error.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let user = self.user_repo.find_by_id(actor.id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %actor.id, "authenticated user missing from directory");
            ApplicationError::not_found("user not found")
        })?;

        assemble_profile(self.user_repo.as_ref(), user).await
    }
}
