use crate::{
    application::{dto::ProfileDto, error::ApplicationResult},
    domain::user::{User, UserRepository},
};

/// Load roles and managed venues for `user` and build the response.
///
/// Always hits the directory; callers on the write path rely on this to see
/// the state that was just persisted.
pub async fn assemble_profile(
    user_repo: &dyn UserRepository,
    user: User,
) -> ApplicationResult<ProfileDto> {
    let roles = user_repo.role_names(user.id).await?;
    let venues = user_repo.managed_venues(user.id).await?;

    Ok(ProfileDto::from_parts(user, roles, venues))
}
