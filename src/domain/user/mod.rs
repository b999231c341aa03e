// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContactInfoUpdate, User};
pub use repository::UserRepository;
pub use value_objects::{
    ADDRESS_MAX_CHARS, Address, Email, PHONE_NUMBER_MAX_CHARS, PhoneNumber, UserId,
    normalize_optional,
};
