//! User service: the seam between HTTP handlers and the store.
//!
//! Handlers never touch [`UserStore`] directly; they go through this facade
//! so store-level policy (id assignment, partial-update semantics) has a
//! single home.

use roster_core::UserId;

use crate::models::{NewUser, User};
use crate::store::{StoreError, UserStore};

/// Facade over [`UserStore`] used by route handlers.
pub struct UserService<'a> {
    store: &'a UserStore,
}

impl<'a> UserService<'a> {
    /// Create a new user service.
    #[must_use]
    pub const fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// All users in insertion order.
    #[must_use]
    pub fn find_all(&self) -> Vec<User> {
        self.store.find_all()
    }

    /// A single user by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn find_one(&self, id: UserId) -> Result<User, StoreError> {
        self.store.find_one(id)
    }

    /// Create a user; the store assigns id and join date.
    pub fn save(&self, new_user: NewUser) -> User {
        self.store.save(new_user)
    }

    /// Partial update: replaces `name` only, by design. Any other field a
    /// caller sends is ignored at the request-parsing boundary.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn update_name(&self, id: UserId, name: &str) -> Result<User, StoreError> {
        self.store.update_name(id, name)
    }
}
