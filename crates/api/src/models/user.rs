//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::UserId;

/// A stored user record.
///
/// This is the full record as held by the store. It is never serialized to a
/// client directly: every response passes through a version's allow list
/// first (see [`crate::views`]), which is what keeps `password` and `ssn`
/// out of the shapes that do not include them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID, assigned by the store on creation.
    pub id: UserId,
    /// Display name. The only field mutable after creation.
    pub name: String,
    /// Login password (plaintext - this is a teaching API, not a real one).
    pub password: String,
    /// Social security number.
    pub ssn: String,
    /// When the user joined.
    pub join_date: DateTime<Utc>,
}

/// Input for creating a user.
///
/// The store owns identity: `id` and `join_date` are assigned at insert
/// time, so callers cannot present a colliding id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub ssn: String,
}
