// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Address, Email, PhoneNumber, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub display_name: String,
    pub address: Option<Address>,
    pub phone_number: Option<PhoneNumber>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement contact fields for a single user. Both fields are always
/// written; `None` clears the stored value.
#[derive(Debug, Clone)]
pub struct ContactInfoUpdate {
    pub id: UserId,
    pub address: Option<Address>,
    pub phone_number: Option<PhoneNumber>,
    pub updated_at: DateTime<Utc>,
}

impl ContactInfoUpdate {
    #[must_use]
    pub const fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            address: None,
            phone_number: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: Option<Address>) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: Option<PhoneNumber>) -> Self {
        self.phone_number = phone_number;
        self
    }
}
