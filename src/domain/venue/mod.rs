// src/domain/venue/mod.rs
pub mod entity;

pub use entity::{Venue, VenueId};
