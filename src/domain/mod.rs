pub mod errors;
pub mod user;
pub mod venue;
