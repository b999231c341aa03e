pub mod authenticate;
pub mod rate_limit;

pub use authenticate::require_authentication;
