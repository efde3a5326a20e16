//! Facade crate for the storefront engine.
//!
//! Re-exports the deterministic core: geo-distance utilities, delivery
//! estimation, personalised catalogue ranking, and the typed session
//! context. Vendor integrations (auth, payments, geocoding, email) remain
//! external collaborators of the embedding application.

#![forbid(unsafe_code)]

pub use storefront_core::{
    Coordinate, DeliveryEstimate, DistanceKm, Distanced, EARTH_RADIUS_KM, InvalidCoordinate,
    InvalidDistance, InvalidSpeed, Locatable, PREPARATION_MINUTES, ProductRecord, ProductScorer, Role, Session,
    SessionError, SignalScorer, UserPreferences, Vehicle, delivery_charge, distance_km,
    is_within_radius, rank, rank_with, sort_by_distance,
};
