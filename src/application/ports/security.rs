// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait CurrentUserResolver: Send + Sync {
    /// Resolve a raw bearer token to the caller identity. Any failure is
    /// reported as `ApplicationError::Unauthorized`.
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
