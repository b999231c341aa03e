// tests/support/mocks/security.rs
use async_trait::async_trait;
use tickets_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
};
use tickets_core::domain::user::UserId;
use uuid::Uuid;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const TEST_TOKEN: &str = "test-token";
pub const MANAGER_TOKEN: &str = "manager-token";
/// 認証は通るがディレクトリに存在しないユーザー
pub const GHOST_TOKEN: &str = "ghost-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn test_user_id() -> UserId {
    UserId::new(Uuid::from_u128(0x1111_1111_1111_4111_8111_1111_1111_1111))
        .expect("invalid user id")
}

pub fn manager_user_id() -> UserId {
    UserId::new(Uuid::from_u128(0x2222_2222_2222_4222_8222_2222_2222_2222))
        .expect("invalid user id")
}

pub fn ghost_user_id() -> UserId {
    UserId::new(Uuid::from_u128(0x9999_9999_9999_4999_8999_9999_9999_9999))
        .expect("invalid user id")
}

/* -------------------------------- CurrentUserResolver -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyResolver;

#[async_trait]
impl tickets_core::application::ports::security::CurrentUserResolver for DummyResolver {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(AuthenticatedUser { id: test_user_id() }),
            MANAGER_TOKEN => Ok(AuthenticatedUser { id: manager_user_id() }),
            GHOST_TOKEN => Ok(AuthenticatedUser { id: ghost_user_id() }),
            // 期限切れトークンは認証時に拒否する
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
