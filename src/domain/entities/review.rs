//! Review entity.
//!
//! A terminal leaf of the graph: it points back at one place and one user
//! by id and is only ever appended into a place's review list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::base::Entity;
use crate::domain::entities::place::Place;
use crate::domain::entities::user::User;
use crate::domain::value_objects::EntityId;
use crate::shared::error::ValidationError;

/// Lowest rating a review can carry.
pub const MIN_RATING: u8 = 1;
/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A guest's rated write-up of a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    id: EntityId,
    text: String,
    rating: u8,
    place_id: EntityId,
    user_id: EntityId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    /// Write a review of `place` by `user`.
    ///
    /// The rating must lie within `[MIN_RATING, MAX_RATING]`; the text is
    /// free-form. Both referenced entities are captured by id.
    pub fn new(
        text: impl Into<String>,
        rating: u8,
        place: &Place,
        user: &User,
    ) -> Result<Self, ValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                min: f64::from(MIN_RATING),
                max: f64::from(MAX_RATING),
                value: f64::from(rating),
            });
        }

        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            text: text.into(),
            rating,
            place_id: place.id(),
            user_id: user.id(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Review body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Star rating, within `[MIN_RATING, MAX_RATING]`.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Id of the reviewed place.
    pub fn place_id(&self) -> EntityId {
        self.place_id
    }

    /// Id of the reviewing user.
    pub fn user_id(&self) -> EntityId {
        self.user_id
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

impl Entity for Review {
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
