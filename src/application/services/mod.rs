// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::profile::ProfileCommandService,
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{security::CurrentUserResolver, time::Clock},
        queries::profile::ProfileQueryService,
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub profile_queries: Arc<ProfileQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    current_user_resolver: Arc<dyn CurrentUserResolver>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        current_user_resolver: Arc<dyn CurrentUserResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&user_repo)));
        let profile_commands = Arc::new(ProfileCommandService::new(user_repo, clock));

        Self {
            profile_queries,
            profile_commands,
            current_user_resolver,
        }
    }

    /// Resolve a raw bearer token to the caller.
    ///
    /// Presentation-layer guards delegate here so the resolution rules live in
    /// one place.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unauthorized` for an empty or rejected token.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token.trim().is_empty() {
            return Err(ApplicationError::unauthorized("empty bearer token"));
        }

        self.current_user_resolver.resolve(token).await
    }
}
