//! In-memory storage for the users API.
//!
//! There is deliberately no persistence here: the store lives for the
//! process lifetime and is owned by [`crate::state::AppState`]. Mutation is
//! guarded by an `RwLock` so concurrent requests cannot tear the backing
//! `Vec`.

use thiserror::Error;

use roster_core::UserId;

pub mod users;

pub use users::UserStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No user with the given id exists.
    ///
    /// The message format matches the original service's not-found payload.
    #[error("ID[{0}] not found")]
    NotFound(UserId),
}
