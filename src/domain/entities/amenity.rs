//! Amenity entity and the set container places use for it.
//!
//! Amenities are immutable once built, so places hold them by value.
//! [`AmenitySet`] preserves insertion order while deduplicating by id.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::base::Entity;
use crate::domain::value_objects::EntityId;
use crate::shared::error::ValidationError;
use crate::shared::validation::require_max_len;

/// Maximum amenity name length in characters.
pub const MAX_AMENITY_NAME_LEN: usize = 50;

/// A feature a place can offer, like "Wi-Fi" or "Parking".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amenity {
    id: EntityId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Amenity {
    /// Create a new amenity with a validated name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_max_len("name", &name, MAX_AMENITY_NAME_LEN)?;

        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Amenity name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Amenity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Insertion-ordered set of amenities, deduplicated by entity id.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AmenitySet {
    items: Vec<Amenity>,
}

impl AmenitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amenity unless one with the same id is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, amenity: &Amenity) -> bool {
        if self.contains(amenity.id()) {
            return false;
        }
        self.items.push(amenity.clone());
        true
    }

    /// Check whether an amenity with this id is in the set.
    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate amenities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Amenity> {
        self.items.iter()
    }

    /// View the amenities as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Amenity] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a AmenitySet {
    type Item = &'a Amenity;
    type IntoIter = std::slice::Iter<'a, Amenity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
