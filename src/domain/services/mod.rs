//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally belong
//! to a single entity. These services operate on domain entities and
//! implement core business rules.
//!
//! ## Services
//!
//! - **EmailRegistry**: Process-wide email uniqueness for user registration

mod email_registry;

pub use email_registry::*;
