// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tickets_core::domain::errors::{DomainError, DomainResult};
use tickets_core::domain::user::{ContactInfoUpdate, User, UserId, UserRepository};
use tickets_core::domain::venue::Venue;

#[derive(Debug, Clone)]
struct Record {
    user: User,
    roles: Vec<String>,
    venues: Vec<Venue>,
}

/// インメモリのユーザーディレクトリ（呼び出し回数を記録する）
#[derive(Default)]
pub struct InMemoryUserDirectory {
    records: Mutex<HashMap<UserId, Record>>,
    calls: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User, roles: &[&str], venues: Vec<Venue>) -> Self {
        self.insert(user, roles, venues);
        self
    }

    pub fn insert(&self, user: User, roles: &[&str], venues: Vec<Venue>) {
        let record = Record {
            user,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            venues,
        };
        self.records
            .lock()
            .unwrap()
            .insert(record.user.id, record);
    }

    /// 別経路でのロール変更をシミュレートする
    pub fn set_roles(&self, id: UserId, roles: &[&str]) {
        if let Some(record) = self.records.lock().unwrap().get_mut(&id) {
            record.roles = roles.iter().map(|r| r.to_string()).collect();
        }
    }

    pub fn set_venues(&self, id: UserId, venues: Vec<Venue>) {
        if let Some(record) = self.records.lock().unwrap().get_mut(&id) {
            record.venues = venues;
        }
    }

    pub fn snapshot(&self, id: UserId) -> Option<User> {
        self.records
            .lock()
            .unwrap()
            .get(&id)
            .map(|record| record.user.clone())
    }

    /// 全メソッドの呼び出し回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.touch();
        Ok(self.snapshot(id))
    }

    async fn role_names(&self, id: UserId) -> DomainResult<Vec<String>> {
        self.touch();
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&id)
            .map(|record| record.roles.clone())
            .unwrap_or_default())
    }

    async fn managed_venues(&self, id: UserId) -> DomainResult<Vec<Venue>> {
        self.touch();
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&id)
            .map(|record| record.venues.clone())
            .unwrap_or_default())
    }

    async fn update_contact_info(&self, update: ContactInfoUpdate) -> DomainResult<User> {
        self.touch();
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        record.user.address = update.address;
        record.user.phone_number = update.phone_number;
        record.user.updated_at = update.updated_at;
        self.writes.fetch_add(1, Ordering::SeqCst);

        Ok(record.user.clone())
    }
}
