//! # Domain Layer
//!
//! The domain layer contains the core business logic of the marketplace
//! model. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Place, Review, Amenity)
//! - **value_objects**: Immutable value types (EntityId)
//! - **services**: Domain services (EmailRegistry)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Pure business logic and domain rules
//! - Entities validated at construction, append-only afterwards
//! - Cross-entity references held by id, keeping the graph acyclic

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
