//! Versioned response views.
//!
//! One request gets exactly one version resolution: the `Accept` header is
//! classified once into an [`ApiVersion`], which fixes both the projection
//! (raw [`User`] vs the augmented [`UserV2`]) and the allow list applied to
//! it. Versions form a closed set - adding V3 means adding an enum variant
//! and an explicit projection, not a reflective field copy.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use roster_core::shape::{self, ShapeError};

use crate::models::User;

/// Media type selecting the V1 user representation.
pub const MEDIA_TYPE_V1: &str = "application/vnd.company.appv1+json";

/// Media type selecting the V2 user representation.
pub const MEDIA_TYPE_V2: &str = "application/vnd.company.appv2+json";

/// Fields exposed by the V1 single-user shape.
const V1_FIELDS: &[&str] = &["id", "name", "password", "ssn"];

/// Fields exposed by the V2 single-user shape.
const V2_FIELDS: &[&str] = &["id", "name", "joinDate", "grade"];

/// Fields exposed per element by the admin listing.
const ADMIN_SUMMARY_FIELDS: &[&str] = &["id", "name", "joinDate", "ssn"];

/// Errors that can occur while building a versioned view.
///
/// Either variant means the view configuration disagrees with the model
/// definition - a bug, surfaced as a server error, never client input.
#[derive(Debug, Error)]
pub enum ViewError {
    /// An allow list no longer matches the record's fields.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The record could not be serialized for shaping.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The V2 user representation: shared fields plus a computed `grade`.
///
/// A presentation-layer projection, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserV2 {
    pub id: roster_core::UserId,
    pub name: String,
    pub join_date: chrono::DateTime<chrono::Utc>,
    pub grade: String,
}

impl From<&User> for UserV2 {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            join_date: user.join_date,
            grade: "VIP".to_string(),
        }
    }
}

/// API version for the single-user endpoint, selected by media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// Classify an `Accept` header value into a version.
    ///
    /// Entries are considered in the order the client listed them; media
    /// type parameters (`;q=0.9`) are ignored. A missing header, plain
    /// `application/json`, or a wildcard selects V1 so unversioned clients
    /// keep working. Returns `None` when the client only asked for media
    /// types this API cannot produce.
    #[must_use]
    pub fn negotiate(accept: Option<&str>) -> Option<Self> {
        let Some(accept) = accept else {
            return Some(Self::V1);
        };

        for entry in accept.split(',') {
            let media_type = entry.split(';').next().unwrap_or("").trim();
            match media_type {
                MEDIA_TYPE_V2 => return Some(Self::V2),
                MEDIA_TYPE_V1 | "application/json" | "application/*" | "*/*" => {
                    return Some(Self::V1);
                }
                _ => {}
            }
        }

        None
    }

    /// The media type this version answers with.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::V1 => MEDIA_TYPE_V1,
            Self::V2 => MEDIA_TYPE_V2,
        }
    }

    /// Allow list applied to this version's projection.
    #[must_use]
    pub const fn allow_list(self) -> &'static [&'static str] {
        match self {
            Self::V1 => V1_FIELDS,
            Self::V2 => V2_FIELDS,
        }
    }

    /// Project a user into this version's shape.
    ///
    /// V1 shapes the raw record; V2 first derives [`UserV2`] (copying the
    /// shared fields and synthesizing `grade`), then shapes that.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if the allow list disagrees with the record.
    pub fn shape_user(self, user: &User) -> Result<Map<String, Value>, ViewError> {
        let record = match self {
            Self::V1 => serde_json::to_value(user)?,
            Self::V2 => serde_json::to_value(UserV2::from(user))?,
        };

        Ok(shape::shape(&record, self.allow_list())?)
    }
}

/// Shape a user for the admin listing endpoint.
///
/// # Errors
///
/// Returns [`ViewError`] if the allow list disagrees with the record.
pub fn admin_summary(user: &User) -> Result<Map<String, Value>, ViewError> {
    let record = serde_json::to_value(user)?;
    Ok(shape::shape(&record, ADMIN_SUMMARY_FIELDS)?)
}
