//! Entity Graph Tests
//!
//! Cross-entity behavior of the marketplace graph: ownership links, review
//! and amenity accumulation, and the serialized shape.

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use stayhub_domain::domain::{Amenity, EmailRegistry, Entity, Place, Review, User};

use crate::common::{init_tracing, sample_place, sample_user};

/// Test the full walkthrough from registration to a listed review
#[test]
fn test_graph_walkthrough_registration_to_review() {
    init_tracing();

    // Arrange
    let registry = EmailRegistry::new();
    let mut alice = User::new(&registry, "Alice", "Smith", "alice@example.com").unwrap();

    // Act
    let mut loft = Place::new("Loft", "nice", 100.0, 37.7, -122.4, &alice).unwrap();
    alice.add_place(&loft);
    let review = Review::new("Great", 5, &loft, &alice).unwrap();
    loft.add_review(&review);

    // Assert
    assert_eq!(review.rating(), 5);
    assert_eq!(alice.places(), &[loft.id()]);
    assert_eq!(loft.reviews(), &[review]);
}

/// Test ownership is recorded on both sides of the user-place link
#[test]
fn test_add_place_links_user_and_place() {
    // Arrange
    let registry = EmailRegistry::new();
    let mut alice = sample_user(&registry);
    let bob = sample_user(&registry);
    let place = sample_place(&alice);

    // Act
    alice.add_place(&place);

    // Assert
    assert_eq!(alice.places(), &[place.id()]);
    assert_eq!(place.owner_id(), alice.id());
    assert!(place.is_owned_by(&alice));
    assert!(!place.is_owned_by(&bob));
}

/// Test a review captures the reviewed place and its author by id
#[test]
fn test_review_links_place_and_user() {
    // Arrange
    let registry = EmailRegistry::new();
    let alice = sample_user(&registry);
    let bob = sample_user(&registry);
    let place = sample_place(&alice);

    // Act
    let review = Review::new("Would stay again", 4, &place, &bob).unwrap();

    // Assert
    assert_eq!(review.place_id(), place.id());
    assert_eq!(review.user_id(), bob.id());
}

/// Test reviews accumulate in call order across several reviewers
#[test]
fn test_reviews_accumulate_in_call_order() {
    // Arrange
    let registry = EmailRegistry::new();
    let alice = sample_user(&registry);
    let bob = sample_user(&registry);
    let carol = sample_user(&registry);
    let mut place = sample_place(&alice);

    // Act
    let first = Review::new("Spotless", 5, &place, &bob).unwrap();
    let second = Review::new("A bit noisy", 3, &place, &carol).unwrap();
    let third = Review::new("Came back, still spotless", 5, &place, &bob).unwrap();
    place.add_review(&first);
    place.add_review(&second);
    place.add_review(&third);

    // Assert
    let ratings: Vec<u8> = place.reviews().iter().map(|r| r.rating()).collect();
    assert_eq!(ratings, [5, 3, 5]);
    assert_eq!(place.reviews(), &[first, second, third]);
}

/// Test one amenity can be attached to several places but only once each
#[test]
fn test_amenity_shared_across_places_deduped_per_place() {
    // Arrange
    let registry = EmailRegistry::new();
    let alice = sample_user(&registry);
    let mut first = sample_place(&alice);
    let mut second = sample_place(&alice);
    let wifi = Amenity::new("Wi-Fi").unwrap();

    // Act
    assert!(first.add_amenity(&wifi));
    assert!(!first.add_amenity(&wifi));
    assert!(second.add_amenity(&wifi));

    // Assert
    assert_eq!(first.amenities().len(), 1);
    assert_eq!(second.amenities().len(), 1);
    assert!(first.amenities().contains(wifi.id()));
}

/// Test every entity kind draws from the same id space without collisions
#[test]
fn test_entities_receive_distinct_ids() {
    // Arrange
    let registry = EmailRegistry::new();
    let alice = sample_user(&registry);
    let place = sample_place(&alice);
    let review = Review::new("Great", 5, &place, &alice).unwrap();
    let wifi = Amenity::new("Wi-Fi").unwrap();

    // Act
    let ids = [
        Entity::id(&alice),
        Entity::id(&place),
        Entity::id(&review),
        Entity::id(&wifi),
    ];

    // Assert
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

/// Test audit timestamps start equal and only move on appends
#[test]
fn test_audit_timestamps_follow_appends() {
    fn stamps<E: Entity>(entity: &E) -> (DateTime<Utc>, DateTime<Utc>) {
        (entity.created_at(), entity.updated_at())
    }

    // Arrange
    let registry = EmailRegistry::new();
    let alice = sample_user(&registry);
    let mut place = sample_place(&alice);
    let (created, updated) = stamps(&place);
    assert_eq!(created, updated);

    // Act
    let review = Review::new("Great", 5, &place, &alice).unwrap();
    place.add_review(&review);

    // Assert
    assert_eq!(place.created_at(), created);
    assert!(place.updated_at() >= updated);
}

/// Test the serialized graph exposes ids and nested collections
#[test]
fn test_graph_serializes_with_ids_and_collections() {
    // Arrange
    let registry = EmailRegistry::new();
    let mut alice = User::new(&registry, "Alice", "Smith", "alice@example.com").unwrap();
    let mut place = Place::new("Loft", "nice", 100.0, 37.7, -122.4, &alice).unwrap();
    alice.add_place(&place);
    let review = Review::new("Great", 5, &place, &alice).unwrap();
    place.add_review(&review);
    let wifi = Amenity::new("Wi-Fi").unwrap();
    place.add_amenity(&wifi);

    // Act
    let user_json = serde_json::to_value(&alice).unwrap();
    let place_json = serde_json::to_value(&place).unwrap();

    // Assert
    assert_eq!(user_json["first_name"], "Alice");
    assert_eq!(user_json["is_admin"], false);
    assert_eq!(user_json["places"][0], place.id().to_string());
    assert_eq!(place_json["owner_id"], alice.id().to_string());
    assert_eq!(place_json["reviews"][0]["rating"], 5);
    assert_eq!(place_json["amenities"][0]["name"], "Wi-Fi");
}
