//! Validated WGS84 coordinates.
//!
//! The storefront receives raw latitude/longitude pairs from device
//! geolocation and map widgets. `Coordinate` validates at the boundary so
//! the distance kernels never compute on out-of-range input.

use geo::Coord;
use thiserror::Error;

/// A validated WGS84 coordinate.
///
/// Wraps [`geo::Coord`] with the crate-wide convention of `x = longitude`
/// and `y = latitude`.
///
/// # Examples
/// ```
/// use storefront_core::Coordinate;
///
/// # fn main() -> Result<(), storefront_core::InvalidCoordinate> {
/// let shop = Coordinate::new(17.385_044, 78.486_671)?;
/// assert_eq!(shop.latitude(), 17.385_044);
/// assert_eq!(shop.longitude(), 78.486_671);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate(Coord<f64>);

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Error, PartialEq)]
pub enum InvalidCoordinate {
    /// Latitude was non-finite or outside `[-90, 90]` degrees.
    #[error("latitude {value} is outside [-90, 90]")]
    Latitude {
        /// The rejected latitude in degrees.
        value: f64,
    },
    /// Longitude was non-finite or outside `[-180, 180]` degrees.
    #[error("longitude {value} is outside [-180, 180]")]
    Longitude {
        /// The rejected longitude in degrees.
        value: f64,
    },
}

impl Coordinate {
    /// Validate and construct a coordinate from degrees.
    ///
    /// # Errors
    /// Returns [`InvalidCoordinate`] when either component is non-finite or
    /// outside its valid range. Range checks reject `NaN` as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::Latitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::Longitude { value: longitude });
        }
        Ok(Self(Coord {
            x: longitude,
            y: latitude,
        }))
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.0.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.0.x
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.0
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}
