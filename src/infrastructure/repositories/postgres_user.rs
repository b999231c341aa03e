// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Address, ContactInfoUpdate, Email, PhoneNumber, User, UserId, UserRepository,
};
use crate::domain::venue::{Venue, VenueId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, display_name, address, phone_number, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    display_name: String,
    address: Option<String>,
    phone_number: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id).map_err(corrupt_row)?,
            email: Email::new(row.email).map_err(corrupt_row)?,
            display_name: row.display_name,
            address: Address::parse(row.address.as_deref()).map_err(corrupt_row)?,
            phone_number: PhoneNumber::parse(row.phone_number.as_deref()).map_err(corrupt_row)?,
            updated_at: row.updated_at,
        })
    }
}

/// Stored rows that fail domain checks surface as storage faults.
fn corrupt_row(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => DomainError::Persistence(format!("corrupt row: {msg}")),
        other => other,
    }
}

#[derive(Debug, FromRow)]
struct VenueRow {
    id: Uuid,
    name: String,
}

impl TryFrom<VenueRow> for Venue {
    type Error = DomainError;

    fn try_from(row: VenueRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VenueId::new(row.id).map_err(corrupt_row)?,
            name: row.name,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn role_names(&self, id: UserId) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT r.name
             FROM user_roles ur
             JOIN roles r ON r.id = ur.role_id
             WHERE ur.user_id = $1
             ORDER BY r.name",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn managed_venues(&self, id: UserId) -> DomainResult<Vec<Venue>> {
        let rows = sqlx::query_as::<_, VenueRow>(
            "SELECT v.id, v.name
             FROM venue_managers vm
             JOIN venues v ON v.id = vm.venue_id
             WHERE vm.user_id = $1
             ORDER BY v.name, v.id",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Venue::try_from).collect()
    }

    async fn update_contact_info(&self, update: ContactInfoUpdate) -> DomainResult<User> {
        let ContactInfoUpdate {
            id,
            address,
            phone_number,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET address = $2, phone_number = $3, updated_at = $4
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(address.map(String::from))
        .bind(phone_number.map(String::from))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
