// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const ADDRESS_MAX_CHARS: usize = 512;
pub const PHONE_NUMBER_MAX_CHARS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for the nil UUID.
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::Validation("user id must not be nil".into()))
        } else {
            Ok(Self(id))
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `value` is not a non-nil UUID.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let id = Uuid::parse_str(value)
            .map_err(|_| DomainError::Validation(format!("invalid user id '{value}'")))?;
        Self::new(id)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims `raw` and collapses an empty result to `None`.
///
/// Every contact field goes through this before it reaches a value object, so
/// stored values are never blank and the operation is idempotent.
#[must_use]
pub fn normalize_optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn bounded_field(
    raw: Option<&str>,
    max_chars: usize,
    field: &str,
) -> DomainResult<Option<String>> {
    match normalize_optional(raw) {
        Some(value) if value.chars().count() > max_chars => Err(DomainError::Validation(
            format!("{field} must be at most {max_chars} characters"),
        )),
        Some(value) => Ok(Some(value.to_string())),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Builds an address from optional raw input. Blank input yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the trimmed value exceeds
    /// [`ADDRESS_MAX_CHARS`].
    pub fn parse(raw: Option<&str>) -> DomainResult<Option<Self>> {
        Ok(bounded_field(raw, ADDRESS_MAX_CHARS, "address")?.map(Self))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Builds a phone number from optional raw input. Blank input yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the trimmed value exceeds
    /// [`PHONE_NUMBER_MAX_CHARS`].
    pub fn parse(raw: Option<&str>) -> DomainResult<Option<Self>> {
        Ok(bounded_field(raw, PHONE_NUMBER_MAX_CHARS, "phoneNumber")?.map(Self))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
