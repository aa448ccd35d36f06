//! Place entity.
//!
//! The hub of the marketplace graph: a place references its owner by id
//! and carries its reviews and amenities by value, which keeps the whole
//! graph a tree.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::amenity::{Amenity, AmenitySet};
use crate::domain::entities::base::Entity;
use crate::domain::entities::review::Review;
use crate::domain::entities::user::User;
use crate::domain::value_objects::EntityId;
use crate::shared::error::ValidationError;
use crate::shared::validation::{require_in_range, require_max_len};

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// A lodging listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    id: EntityId,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: EntityId,
    reviews: Vec<Review>,
    amenities: AmenitySet,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Place {
    /// List a new place owned by `owner`.
    ///
    /// Checks run in order: title length, then price positivity, then
    /// latitude, then longitude. The description is free-form and never
    /// validated.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner: &User,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();

        require_max_len("title", &title, MAX_TITLE_LEN)?;
        // NaN compares false here, so a NaN price is not rejected.
        if price <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "price",
                value: price,
            });
        }
        require_in_range("latitude", latitude, -90.0, 90.0)?;
        require_in_range("longitude", longitude, -180.0, 180.0)?;

        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id: owner.id(),
            reviews: Vec::new(),
            amenities: AmenitySet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Append a review.
    ///
    /// Reviews are stored by value and never deduplicated; appending the
    /// same review twice lists it twice.
    pub fn add_review(&mut self, review: &Review) {
        self.reviews.push(review.clone());
        self.touch();
        tracing::trace!(place_id = %self.id, review_id = %review.id(), "review added");
    }

    /// Attach an amenity unless one with the same id is already attached.
    ///
    /// Returns `true` if the place changed; `updated_at` moves only then.
    pub fn add_amenity(&mut self, amenity: &Amenity) -> bool {
        if !self.amenities.insert(amenity) {
            return false;
        }
        self.touch();
        tracing::trace!(place_id = %self.id, amenity_id = %amenity.id(), "amenity attached");
        true
    }

    /// Check whether `user` owns this place.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner_id == user.id()
    }

    /// Listing title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Nightly price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Latitude in degrees, within [-90, 90].
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, within [-180, 180].
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Id of the owning user.
    pub fn owner_id(&self) -> EntityId {
        self.owner_id
    }

    /// Reviews in the order they were added.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Attached amenities.
    pub fn amenities(&self) -> &AmenitySet {
        &self.amenities
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

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for Place {
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
