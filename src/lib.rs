//! # Stayhub Domain Library
//!
//! This crate provides the in-memory domain model for a lodging
//! marketplace:
//! - Entity construction with field-level validation
//! - Process-wide email uniqueness for user registration
//! - Append-only relationships between users, places, reviews and amenities
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, value objects, and domain services
//! - **Shared**: Error types and validation primitives
//!
//! ## Module Structure
//!
//! ```text
//! stayhub_domain/
//! +-- domain/        Domain entities, value objects, and services
//! +-- shared/        Common utilities (errors, validation)
//! ```
//!
//! ## Example
//!
//! ```
//! use stayhub_domain::domain::{EmailRegistry, Place, Review, User};
//!
//! # fn main() -> Result<(), stayhub_domain::shared::error::ValidationError> {
//! let registry = EmailRegistry::new();
//!
//! let mut alice = User::new(&registry, "Alice", "Smith", "alice@example.com")?;
//! let mut loft = Place::new("Loft", "nice", 100.0, 37.7, -122.4, &alice)?;
//! alice.add_place(&loft);
//!
//! let review = Review::new("Great", 5, &loft, &alice)?;
//! loft.add_review(&review);
//!
//! assert_eq!(loft.reviews(), &[review]);
//! assert_eq!(alice.places(), &[loft.id()]);
//! # Ok(())
//! # }
//! ```

// Domain layer - Core business logic
pub mod domain;

// Shared utilities
pub mod shared;
