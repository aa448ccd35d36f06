//! User entity.
//!
//! A user is the owner side of the marketplace: places reference their
//! owner by id, and the owner keeps an append-only list of place ids.
//! Construction claims the email address in an [`EmailRegistry`], so two
//! live users can never share an address.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::base::Entity;
use crate::domain::entities::place::Place;
use crate::domain::services::EmailRegistry;
use crate::domain::value_objects::EntityId;
use crate::shared::error::ValidationError;
use crate::shared::validation::{is_valid_email, require_max_len};

/// Maximum first and last name length in characters.
pub const MAX_NAME_LEN: usize = 50;

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: EntityId,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
    places: Vec<EntityId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Register a regular user.
    ///
    /// Validates first name, last name, then email format, and finally
    /// claims the address in `registry`. The first failing check wins, and
    /// a failed construction leaves the registry untouched.
    pub fn new(
        registry: &EmailRegistry,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_role(registry, first_name, last_name, email, false)
    }

    /// Register an administrator.
    pub fn new_admin(
        registry: &EmailRegistry,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_role(registry, first_name, last_name, email, true)
    }

    fn with_role(
        registry: &EmailRegistry,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        is_admin: bool,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        require_max_len("first_name", &first_name, MAX_NAME_LEN)?;
        require_max_len("last_name", &last_name, MAX_NAME_LEN)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        // Claim last, so a construction that fails any earlier check never
        // occupies the address.
        registry.claim(&email)?;

        let now = Utc::now();
        let id = EntityId::generate();
        tracing::debug!(user_id = %id, is_admin, "user registered");

        Ok(Self {
            id,
            first_name,
            last_name,
            email,
            is_admin,
            places: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Record that this user owns `place`.
    ///
    /// Stores the place id only; the place itself lives with the caller.
    pub fn add_place(&mut self, place: &Place) {
        self.places.push(place.id());
        self.touch();
        tracing::trace!(user_id = %self.id, place_id = %place.id(), "place linked to owner");
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last" convenience form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Claimed email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the user holds the administrator role.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Ids of the places this user owns, in the order they were added.
    pub fn places(&self) -> &[EntityId] {
        &self.places
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

impl Entity for User {
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
