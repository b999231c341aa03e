// tests/support/builders.rs
use chrono::{DateTime, Utc};
use tickets_core::domain::user::{Address, Email, PhoneNumber, User, UserId};
use tickets_core::domain::venue::{Venue, VenueId};
use uuid::Uuid;

pub struct UserBuilder {
    id: UserId,
    email: String,
    display_name: String,
    address: Option<String>,
    phone_number: Option<String>,
    updated_at: DateTime<Utc>,
}

impl UserBuilder {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: "fan@example.com".into(),
            display_name: "Test Fan".into(),
            address: None,
            phone_number: None,
            updated_at: DateTime::parse_from_rfc3339("2024-12-31T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            email: Email::new(self.email).unwrap(),
            display_name: self.display_name,
            address: Address::parse(self.address.as_deref()).unwrap(),
            phone_number: PhoneNumber::parse(self.phone_number.as_deref()).unwrap(),
            updated_at: self.updated_at,
        }
    }
}

pub fn venue(name: &str) -> Venue {
    Venue {
        id: VenueId::new(Uuid::new_v4()).unwrap(),
        name: name.into(),
    }
}
