//! In-memory user store.

use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;

use roster_core::UserId;

use super::StoreError;
use crate::models::{NewUser, User};

/// In-memory store for user records.
///
/// Records are kept in insertion order; `find_all` returns them in that
/// order. Identity is store-owned: `save` assigns the next id, so two
/// records can never share one.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicI32,
}

impl UserStore {
    /// Create an empty store. The first assigned id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(0),
        }
    }

    /// Create a store pre-populated with the demo roster.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        store.save(NewUser {
            name: "Kenneth".to_string(),
            password: "pass1".to_string(),
            ssn: "701010-1111111".to_string(),
        });
        store.save(NewUser {
            name: "Alice".to_string(),
            password: "pass2".to_string(),
            ssn: "801010-2222222".to_string(),
        });
        store.save(NewUser {
            name: "Elena".to_string(),
            password: "pass3".to_string(),
            ssn: "901010-1111111".to_string(),
        });
        store
    }

    /// Return all users in insertion order.
    ///
    /// Takes a snapshot under the read guard; the caller sees a consistent
    /// view even if a write lands afterwards.
    #[must_use]
    pub fn find_all(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Look up a single user by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches.
    pub fn find_one(&self, id: UserId) -> Result<User, StoreError> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new user, assigning the next id and the join date.
    pub fn save(&self, new_user: NewUser) -> User {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let user = User {
            id,
            name: new_user.name,
            password: new_user.password,
            ssn: new_user.ssn,
            join_date: Utc::now(),
        };

        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user.clone());

        user
    }

    /// Replace the `name` of an existing user, leaving every other field
    /// untouched. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches.
    pub fn update_name(&self, id: UserId, name: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        user.name = name.to_owned();
        Ok(user.clone())
    }
}
