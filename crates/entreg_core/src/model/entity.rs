//! Entity domain model.
//!
//! # Responsibility
//! - Define the single persisted record managed by the console loop.
//! - Own the fixed console rendering used by every command response.
//!
//! # Invariants
//! - `id` is storage-assigned: `None` until first save, `Some` afterwards.
//! - A persisted `id` is immutable and is never reused for another entity.
//! - `name` carries no uniqueness or length constraint; empty is allowed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned surrogate key for persisted entities.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i64;

/// Canonical record of the registry: a surrogate key plus a mutable name.
///
/// The model intentionally keeps `id` optional, so one shape covers both
/// the not-yet-saved state handed to `save` and the persisted state read
/// back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityModel {
    /// Surrogate key assigned by the storage engine on insert.
    pub id: Option<EntityId>,
    /// Free-form display name, mutable over the record's lifetime.
    pub name: String,
}

impl EntityModel {
    /// Creates an unsaved entity with no id.
    ///
    /// # Invariants
    /// - `id` starts as `None`; only the repository assigns one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates an entity with a known storage id.
    ///
    /// Used by read paths that materialize persisted rows.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns whether this entity has been assigned a storage id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Fixed console rendering: `EntityModel{id=1, name='Alice'}`.
///
/// Unsaved entities render `id=null`; every command response and list line
/// goes through this form.
impl Display for EntityModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "EntityModel{{id={id}, name='{}'}}", self.name),
            None => write!(f, "EntityModel{{id=null, name='{}'}}", self.name),
        }
    }
}
