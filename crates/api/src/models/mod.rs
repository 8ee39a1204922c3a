//! Domain models for the users API.

pub mod user;

pub use user::{NewUser, User};
