//! Tagged coordinate types
//!
//! The grid helpers hand coordinates around in two axis orders: polygons going
//! into the H3 tiler are (latitude, longitude) while cell outlines and mock
//! points coming out are (longitude, latitude). Each order gets its own type so
//! the two can never be mixed up silently. Both serialize as a bare 2-element
//! array in their own order.

use serde::{Deserialize, Serialize};

/// Anything that can report a position in degrees.
pub trait Positioned {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A position in (latitude, longitude) order, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Same position, (longitude, latitude) order.
    pub fn swap(self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

/// A position in (longitude, latitude) order, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Same position, (latitude, longitude) order.
    pub fn swap(self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(value: LngLat) -> Self {
        [value.lng, value.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LatLng> for LngLat {
    fn from(value: LatLng) -> Self {
        value.swap()
    }
}

impl From<LngLat> for LatLng {
    fn from(value: LngLat) -> Self {
        value.swap()
    }
}

impl From<h3o::LatLng> for LatLng {
    fn from(value: h3o::LatLng) -> Self {
        Self::new(value.lat(), value.lng())
    }
}

impl From<h3o::LatLng> for LngLat {
    fn from(value: h3o::LatLng) -> Self {
        Self::new(value.lng(), value.lat())
    }
}

impl Positioned for LatLng {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }
}

impl Positioned for LngLat {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }
}

impl Positioned for h3o::LatLng {
    fn latitude(&self) -> f64 {
        self.lat()
    }

    fn longitude(&self) -> f64 {
        self.lng()
    }
}

// geo uses x = longitude, y = latitude
impl Positioned for geo::Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }

    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}
