//! Base entity contract.
//!
//! Everything stored in the marketplace shares the same identity and audit
//! trail: a random [`EntityId`] plus creation and last-modification
//! timestamps, all stamped by the constructor.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::EntityId;

/// Common surface of every domain entity.
pub trait Entity {
    /// Identifier assigned at construction, never reused across entities.
    fn id(&self) -> EntityId;

    /// When the entity was constructed.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the entity last changed. Equals `created_at` until the first
    /// mutation, and never runs backwards.
    fn updated_at(&self) -> DateTime<Utc>;
}
