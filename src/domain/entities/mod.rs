//! # Domain Entities
//!
//! Core domain entities representing the main business objects in the
//! lodging marketplace. Every entity is fully validated at construction;
//! the only mutation afterwards is appending to a relationship collection.
//!
//! ## Core Entities
//!
//! - **User**: Registered account with a globally unique email
//! - **Place**: A lodging listed by an owning user
//! - **Review**: A rated write-up linking one place and one user
//! - **Amenity**: A named feature attachable to places
//!
//! ## Base Contract
//!
//! The [`Entity`] trait exposes the identity and audit timestamps every
//! entity stamps at construction.

mod amenity;
mod base;
mod place;
mod review;
mod user;

// Re-export the base entity contract
pub use base::Entity;

// Re-export User entity and related types
pub use user::{User, MAX_NAME_LEN};

// Re-export Place entity and related types
pub use place::{Place, MAX_TITLE_LEN};

// Re-export Review entity and related types
pub use review::{Review, MAX_RATING, MIN_RATING};

// Re-export Amenity entity and related types
pub use amenity::{Amenity, AmenitySet, MAX_AMENITY_NAME_LEN};
