//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **EntityId**: UUID-backed identifier shared by every entity

mod entity_id;

pub use entity_id::*;
