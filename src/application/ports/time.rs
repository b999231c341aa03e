// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `updated_at` stamps for contact-info writes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
