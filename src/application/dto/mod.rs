pub mod auth;
pub mod profile;

pub use auth::AuthenticatedUser;
pub use profile::{ManagedVenueDto, ProfileDto};
