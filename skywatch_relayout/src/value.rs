// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relayout property values.

use alloc::string::String;
use core::fmt;

/// A geographic coordinate in degrees.
///
/// Mirrors the `{lat, lon}` objects map hosts use for view centers. Values
/// are plain degrees; this type does no wrapping or validation because the
/// host owns the coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl LatLon {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Converts into a [`kurbo::Point`] with `x = lon`, `y = lat`.
    ///
    /// This is the conventional planar embedding for degree-space geometry
    /// (longitude on the horizontal axis).
    #[cfg(feature = "kurbo")]
    #[must_use]
    pub fn to_point(self) -> kurbo::Point {
        kurbo::Point::new(self.lon, self.lat)
    }

    /// Converts from a [`kurbo::Point`] with `x = lon`, `y = lat`.
    #[cfg(feature = "kurbo")]
    #[must_use]
    pub fn from_point(pt: kurbo::Point) -> Self {
        Self {
            lat: pt.y,
            lon: pt.x,
        }
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// The value of a single relayout property.
///
/// Relayout payloads carry a small, fixed vocabulary of value shapes; this
/// enum covers the ones the Skywatch widgets emit. Consumers that only care
/// about one shape use the `as_*` accessors and treat every other variant as
/// "not our concern" — notably, zoom policies treat a non-numeric zoom value
/// as passthrough rather than as an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PropValue {
    /// A numeric property (zoom level, bearing, pitch).
    Number(f64),
    /// A boolean property (for example `dragmode` toggles).
    Bool(bool),
    /// A textual property (for example `"auto"` range markers).
    Text(String),
    /// A geographic view center.
    LatLon(LatLon),
}

impl PropValue {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the coordinate, if this is a geographic center.
    #[must_use]
    pub fn as_lat_lon(&self) -> Option<LatLon> {
        match self {
            Self::LatLon(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the text, if this is a textual value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<LatLon> for PropValue {
    fn from(value: LatLon) -> Self {
        Self::LatLon(value)
    }
}
