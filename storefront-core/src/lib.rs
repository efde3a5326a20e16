//! Deterministic core for a multi-tenant storefront.
//!
//! Everything here is a pure, synchronous transform over data owned by
//! external collaborators: the catalogue store supplies
//! [`ProductRecord`]s, geolocation supplies raw coordinates, and the
//! profile store supplies [`UserPreferences`]. Constructors return
//! `Result` to surface invalid input early; the kernels themselves are
//! total and side-effect free, so they are safe to call concurrently
//! without coordination.
//!
//! - [`distance_km`] and its helpers cover shop discovery: radius checks,
//!   display formatting, and stable distance-ordered listings.
//! - [`DeliveryEstimate`] and [`delivery_charge`] back the checkout view.
//! - [`rank`] reorders a catalogue copy against the shopper's latest
//!   search and category signals.
//! - [`Session`] carries a typed role so consumers gate on
//!   [`Role`] values instead of re-parsing ad-hoc session blobs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod delivery;
pub mod distance;
pub mod prefs;
pub mod product;
pub mod rank;
pub mod session;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use delivery::{DeliveryEstimate, InvalidSpeed, PREPARATION_MINUTES, Vehicle, delivery_charge};
pub use distance::{
    DistanceKm, Distanced, EARTH_RADIUS_KM, InvalidDistance, Locatable, distance_km,
    is_within_radius, sort_by_distance,
};
pub use prefs::UserPreferences;
pub use product::ProductRecord;
pub use rank::{ProductScorer, SignalScorer, rank, rank_with};
pub use session::{Role, Session, SessionError};
