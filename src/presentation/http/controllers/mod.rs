// src/presentation/http/controllers/mod.rs
pub mod profile;
pub mod profile_requests;
