// src/domain/venue/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VenueId(Uuid);

impl VenueId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for the nil UUID.
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::Validation("venue id must not be nil".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VenueId> for Uuid {
    fn from(value: VenueId) -> Self {
        value.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A venue a user has administrative rights over. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}
