use crate::domain::user::UserId;

/// The caller identity attached to a request once its bearer token checks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
}
