//! Delivery-time and delivery-charge estimation.
//!
//! Estimates are heuristics for checkout display, not routing: travel time
//! assumes a straight-line trip at the vehicle's average speed plus a fixed
//! preparation buffer, and charges grow linearly beyond a base radius.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::DistanceKm;

/// Minutes added to every estimate for order preparation.
pub const PREPARATION_MINUTES: u32 = 15;

/// Distance covered by the base delivery charge, in kilometres.
const BASE_RADIUS_KM: f64 = 2.0;

/// Courier vehicle with an assumed average speed.
///
/// # Examples
/// ```
/// use storefront_core::Vehicle;
///
/// assert_eq!(Vehicle::default(), Vehicle::Bike);
/// assert_eq!(Vehicle::Car.speed_kmh(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vehicle {
    /// Bicycle courier, 25 km/h.
    #[default]
    Bike,
    /// Scooter courier, 30 km/h.
    Scooter,
    /// Car courier, 40 km/h.
    Car,
}

impl Vehicle {
    /// Average speed in km/h used for estimates.
    #[must_use]
    pub const fn speed_kmh(self) -> f64 {
        match self {
            Self::Bike => 25.0,
            Self::Scooter => 30.0,
            Self::Car => 40.0,
        }
    }

    /// Return the vehicle as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Scooter => "scooter",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vehicle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bike" => Ok(Self::Bike),
            "scooter" => Ok(Self::Scooter),
            "car" => Ok(Self::Car),
            _ => Err(format!("unknown vehicle '{s}'")),
        }
    }
}

/// Errors returned by [`DeliveryEstimate::with_speed_kmh`].
#[derive(Debug, Error, PartialEq)]
#[error("speed {value} km/h must be a positive finite number")]
pub struct InvalidSpeed {
    /// The rejected speed in km/h.
    pub value: f64,
}

/// Estimated time from order placement to delivery.
///
/// Travel minutes are `ceil(km / speed * 60)` with [`PREPARATION_MINUTES`]
/// added on top. `Display` renders `"N minutes"` below one hour and
/// `"H hour(s) M minutes"` otherwise.
///
/// # Examples
/// ```
/// use storefront_core::{DeliveryEstimate, DistanceKm, Vehicle};
///
/// # fn main() -> Result<(), storefront_core::InvalidDistance> {
/// let estimate = DeliveryEstimate::new(DistanceKm::new(10.0)?, Vehicle::Bike);
/// assert_eq!(estimate.total_minutes(), 39);
/// assert_eq!(estimate.to_string(), "39 minutes");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryEstimate {
    total_minutes: u32,
}

impl DeliveryEstimate {
    /// Estimate the delivery time for a trip of the given distance.
    #[must_use]
    pub fn new(distance: DistanceKm, vehicle: Vehicle) -> Self {
        Self::from_speed(distance, vehicle.speed_kmh())
    }

    /// Estimate using an explicit average speed instead of a [`Vehicle`].
    ///
    /// # Errors
    /// Returns [`InvalidSpeed`] when `speed_kmh` is not a positive finite
    /// number.
    pub fn with_speed_kmh(distance: DistanceKm, speed_kmh: f64) -> Result<Self, InvalidSpeed> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(InvalidSpeed { value: speed_kmh });
        }
        Ok(Self::from_speed(distance, speed_kmh))
    }

    fn from_speed(distance: DistanceKm, speed_kmh: f64) -> Self {
        // The cast saturates at u32::MAX for absurd distance/speed ratios;
        // the buffer addition must saturate with it.
        let travel_minutes = (distance.value() / speed_kmh * 60.0).ceil() as u32;
        Self {
            total_minutes: travel_minutes.saturating_add(PREPARATION_MINUTES),
        }
    }

    /// Total minutes including the preparation buffer.
    #[must_use]
    pub const fn total_minutes(self) -> u32 {
        self.total_minutes
    }
}

impl fmt::Display for DeliveryEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_minutes < 60 {
            return write!(f, "{} minutes", self.total_minutes);
        }
        let hours = self.total_minutes / 60;
        let minutes = self.total_minutes % 60;
        let plural = if hours > 1 { "s" } else { "" };
        write!(f, "{hours} hour{plural} {minutes} minutes")
    }
}

/// Delivery charge for a trip of the given distance.
///
/// A base charge of 20 currency units covers trips up to 2 km; beyond that
/// each additional kilometre adds 5 units. The result is rounded to two
/// decimal places.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use storefront_core::{DistanceKm, delivery_charge};
///
/// # fn main() -> Result<(), storefront_core::InvalidDistance> {
/// assert_eq!(delivery_charge(DistanceKm::new(1.0)?), Decimal::new(20, 0));
/// assert_eq!(delivery_charge(DistanceKm::new(5.0)?), Decimal::new(35, 0));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn delivery_charge(distance: DistanceKm) -> Decimal {
    let base = Decimal::new(20, 0);
    if distance.value() <= BASE_RADIUS_KM {
        return base;
    }
    let per_km = Decimal::new(5, 0);
    // Distances beyond Decimal's range saturate the charge rather than
    // silently falling back to the base rate.
    let excess = Decimal::from_f64_retain(distance.value() - BASE_RADIUS_KM).unwrap_or(Decimal::MAX);
    base.saturating_add(excess.saturating_mul(per_km)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn km(value: f64) -> DistanceKm {
        DistanceKm::new(value).expect("valid test distance")
    }

    #[rstest]
    #[case(10.0, Vehicle::Bike, 39)]
    #[case(25.0, Vehicle::Bike, 75)]
    #[case(0.0, Vehicle::Bike, 15)]
    #[case(50.0, Vehicle::Car, 90)]
    fn estimates_total_minutes(
        #[case] distance: f64,
        #[case] vehicle: Vehicle,
        #[case] expected: u32,
    ) {
        let estimate = DeliveryEstimate::new(km(distance), vehicle);
        assert_eq!(estimate.total_minutes(), expected);
    }

    #[rstest]
    #[case(10.0, Vehicle::Bike, "39 minutes")]
    #[case(25.0, Vehicle::Bike, "1 hour 15 minutes")]
    #[case(100.0, Vehicle::Bike, "4 hours 15 minutes")]
    fn formats_estimates(#[case] distance: f64, #[case] vehicle: Vehicle, #[case] expected: &str) {
        let estimate = DeliveryEstimate::new(km(distance), vehicle);
        assert_eq!(estimate.to_string(), expected);
    }

    #[rstest]
    #[case(1.0, Decimal::new(20, 0))]
    #[case(2.0, Decimal::new(20, 0))]
    #[case(5.0, Decimal::new(35, 0))]
    #[case(2.5, Decimal::new(225, 1))]
    fn charges_by_distance(#[case] distance: f64, #[case] expected: Decimal) {
        assert_eq!(delivery_charge(km(distance)), expected);
    }

    #[rstest]
    fn extreme_distances_saturate_the_estimate() {
        let estimate = DeliveryEstimate::new(km(1.0e18), Vehicle::Bike);
        assert_eq!(estimate.total_minutes(), u32::MAX);

        let crawl = DeliveryEstimate::with_speed_kmh(km(10.0), 1.0e-300).expect("positive speed");
        assert_eq!(crawl.total_minutes(), u32::MAX);
    }

    #[rstest]
    fn extreme_distances_saturate_the_charge() {
        assert_eq!(delivery_charge(km(1.0e30)), Decimal::MAX);
    }

    #[rstest]
    fn explicit_speed_matches_the_vehicle_table() {
        let distance = km(10.0);
        let explicit =
            DeliveryEstimate::with_speed_kmh(distance, 25.0).expect("positive speed");
        assert_eq!(explicit, DeliveryEstimate::new(distance, Vehicle::Bike));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    fn rejects_unusable_speeds(#[case] speed_kmh: f64) {
        let result = DeliveryEstimate::with_speed_kmh(km(10.0), speed_kmh);
        assert!(matches!(result, Err(InvalidSpeed { .. })));
    }

    #[rstest]
    fn parsing_rejects_unknown_vehicle() {
        let err = Vehicle::from_str("hovercraft").expect_err("unknown vehicle");
        assert!(err.contains("unknown vehicle"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Vehicle::Scooter.to_string(), Vehicle::Scooter.as_str());
    }
}
