// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod user_repo;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// セキュリティ関連
pub use security::{
    DummyResolver, EXPIRED_TOKEN, GHOST_TOKEN, MANAGER_TOKEN, TEST_TOKEN, ghost_user_id,
    manager_user_id, test_user_id,
};

// ユーザーディレクトリ
pub use user_repo::InMemoryUserDirectory;
