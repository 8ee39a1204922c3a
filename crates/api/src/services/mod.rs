//! Service layer for the users API.

pub mod users;

pub use users::UserService;
