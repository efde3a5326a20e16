//! Great-circle distances and distance-ordered listings.
//!
//! The Haversine kernel returns full precision; display rounding lives in
//! the [`DistanceKm`] `Display` implementation so callers choose when to
//! round.

use std::fmt;

use thiserror::Error;

use crate::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A non-negative great-circle distance in kilometres.
///
/// Produced by [`distance_km`]; derived, never persisted. `Display`
/// renders metres below one kilometre and kilometres to one decimal place
/// otherwise.
///
/// # Examples
/// ```
/// use storefront_core::DistanceKm;
///
/// # fn main() -> Result<(), storefront_core::InvalidDistance> {
/// assert_eq!(DistanceKm::new(0.5)?.to_string(), "500 m");
/// assert_eq!(DistanceKm::new(2.345)?.to_string(), "2.3 km");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceKm(f64);

/// Errors returned by [`DistanceKm::new`].
#[derive(Debug, Error, PartialEq)]
pub enum InvalidDistance {
    /// The supplied value was negative.
    #[error("distance {value} km is negative")]
    Negative {
        /// The rejected value in kilometres.
        value: f64,
    },
    /// The supplied value was `NaN` or infinite.
    #[error("distance must be finite, got {value}")]
    NonFinite {
        /// The rejected value in kilometres.
        value: f64,
    },
}

impl DistanceKm {
    /// Validate and wrap a raw kilometre value supplied by a caller.
    ///
    /// # Errors
    /// Returns [`InvalidDistance`] for negative or non-finite input.
    pub fn new(value: f64) -> Result<Self, InvalidDistance> {
        if !value.is_finite() {
            return Err(InvalidDistance::NonFinite { value });
        }
        if value < 0.0 {
            return Err(InvalidDistance::Negative { value });
        }
        Ok(Self(value))
    }

    /// Full-precision kilometres.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1.0 {
            write!(f, "{:.0} m", self.0 * 1000.0)
        } else {
            write!(f, "{:.1} km", self.0)
        }
    }
}

/// Compute the great-circle distance between two coordinates.
///
/// Haversine formula over a sphere of radius [`EARTH_RADIUS_KM`].
/// Symmetric in its arguments; identical coordinates yield exactly zero.
///
/// # Examples
/// ```
/// use storefront_core::{Coordinate, distance_km};
///
/// # fn main() -> Result<(), storefront_core::InvalidCoordinate> {
/// let hyderabad = Coordinate::new(17.385_044, 78.486_671)?;
/// let mumbai = Coordinate::new(19.076_09, 72.877_426)?;
/// let distance = distance_km(hyderabad, mumbai);
/// assert!((617.0..=625.0).contains(&distance.value()));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> DistanceKm {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude().to_radians().cos()
            * b.latitude().to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // Floating-point overshoot near antipodal points would push sqrt out of
    // domain; the clamp keeps atan2 well defined.
    let clamped = h.clamp(0.0, 1.0);
    DistanceKm(2.0 * EARTH_RADIUS_KM * clamped.sqrt().atan2((1.0 - clamped).sqrt()))
}

/// Whether `target` lies within `radius_km` of `user`.
#[must_use]
pub fn is_within_radius(user: Coordinate, target: Coordinate, radius_km: f64) -> bool {
    distance_km(user, target).value() <= radius_km
}

/// Expose a position for distance ordering.
///
/// Implemented by shop and listing rows so [`sort_by_distance`] can order
/// them without knowing their shape.
pub trait Locatable {
    /// The item's position.
    fn coordinate(&self) -> Coordinate;
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Self {
        *self
    }
}

/// An item paired with its computed distance from a reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distanced<T> {
    /// The original item, unchanged.
    pub item: T,
    /// Great-circle distance from the reference point.
    pub distance: DistanceKm,
}

/// Order items by distance from `reference`, nearest first.
///
/// Attaches the computed distance to every element. The sort is stable:
/// equidistant items keep their original relative order.
#[must_use]
pub fn sort_by_distance<T: Locatable>(
    items: Vec<T>,
    reference: Coordinate,
) -> Vec<Distanced<T>> {
    let mut ordered: Vec<Distanced<T>> = items
        .into_iter()
        .map(|item| Distanced {
            distance: distance_km(reference, item.coordinate()),
            item,
        })
        .collect();
    ordered.sort_by(|a, b| a.distance.value().total_cmp(&b.distance.value()));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid test coordinate")
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(17.385_044, 78.486_671)]
    #[case(-89.9, 179.9)]
    fn identical_coordinates_are_zero(#[case] latitude: f64, #[case] longitude: f64) {
        let point = coordinate(latitude, longitude);
        assert_eq!(distance_km(point, point).value(), 0.0);
    }

    #[rstest]
    fn antipodal_points_stay_finite() {
        let a = coordinate(0.0, 0.0);
        let b = coordinate(0.0, 180.0);
        let distance = distance_km(a, b).value();
        assert!(distance.is_finite());
        // Half the Earth's circumference at R = 6371 km.
        assert!((20_014.0..=20_016.0).contains(&distance));
    }

    #[rstest]
    fn rejects_negative_distance() {
        let result = DistanceKm::new(-0.1);
        assert!(matches!(result, Err(InvalidDistance::Negative { .. })));
    }

    #[rstest]
    fn rejects_non_finite_distance() {
        let result = DistanceKm::new(f64::NAN);
        assert!(matches!(result, Err(InvalidDistance::NonFinite { .. })));
    }
}
