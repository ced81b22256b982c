//! Mock occupant data for H3 cells
//!
//! Scatters fake "people" around a cell center so map layers have something
//! to draw before real data exists.

use std::f64::consts::TAU;

use h3o::CellIndex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{MOCK_COUNT_SPAN, MOCK_MAX_COUNT, MOCK_MIN_COUNT, MOCK_RADIUS_KM};
use crate::coord::LngLat;
use crate::error::{MapError, Result};
use crate::h3_utils::H3Utils;
use crate::math_utils::offset_degrees;
use crate::serialize_cell_index::{deserialize_cell_index, serialize_cell_index};

/// Settings for mock occupant generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockDataConfig {
    /// Scatter radius around the center, km
    pub radius_km: f64,
    /// Smallest occupant count
    pub min_count: usize,
    /// Number of distinct counts; draws fall in `[min_count, min_count + count_span)`
    pub count_span: usize,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            radius_km: MOCK_RADIUS_KM,
            min_count: MOCK_MIN_COUNT,
            count_span: MOCK_COUNT_SPAN,
        }
    }
}

impl MockDataConfig {
    /// Parse from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_radius(self.radius_km)?;
        if self.count_span == 0 {
            return Err(MapError::InvalidArgument("count_span must be at least 1".into()));
        }
        // largest draw is min_count + count_span - 1
        match self.min_count.checked_add(self.count_span - 1) {
            Some(max) if max <= MOCK_MAX_COUNT => Ok(()),
            _ => Err(MapError::InvalidArgument(format!(
                "min_count {} + count_span {} exceeds {} points",
                self.min_count, self.count_span, MOCK_MAX_COUNT
            ))),
        }
    }
}

/// Mock occupants of one cell.
///
/// Serializes as `{"cellId": "...", "count": n, "points": [[lng, lat], ...], "selected": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPointSet {
    #[serde(serialize_with = "serialize_cell_index", deserialize_with = "deserialize_cell_index")]
    pub cell_id: CellIndex,
    pub count: usize,
    pub points: Vec<LngLat>,
    /// Selection state owned by the caller; always `false` when built here.
    pub selected: bool,
}

/// `count` points scattered around `center` within `radius_km`.
///
/// Angle and distance are drawn independently and uniformly, so points bunch
/// up toward the center rather than covering the disc evenly. Offsets use a
/// flat-earth scale (111.32 km per degree, longitude scaled by cos(lat)), which
/// blows up near the poles.
///
/// Fails only for a negative or NaN radius.
pub fn generate_random_points<R: Rng + ?Sized>(
    rng: &mut R,
    center: LngLat,
    radius_km: f64,
    count: usize,
) -> Result<Vec<LngLat>> {
    check_radius(radius_km)?;
    Ok(sample_points(rng, center, radius_km, count))
}

/// Mock occupants for `cell_id` using the thread-local RNG and default settings.
pub fn build_mock_point_set(cell_id: CellIndex, center: LngLat) -> MockPointSet {
    let mut rng = rand::rng();
    let count = draw_count(&mut rng, &MockDataConfig::default());
    let points = sample_points(&mut rng, center, MOCK_RADIUS_KM, count);
    finish(cell_id, points)
}

/// Mock occupants for `cell_id` drawn from `rng` with the given settings.
pub fn build_mock_point_set_with<R: Rng + ?Sized>(
    rng: &mut R,
    cell_id: CellIndex,
    center: LngLat,
    config: &MockDataConfig,
) -> Result<MockPointSet> {
    config.validate()?;
    let count = draw_count(rng, config);
    let points = generate_random_points(rng, center, config.radius_km, count)?;
    Ok(finish(cell_id, points))
}

/// One point set per cell, each centered on its cell's centroid.
pub fn mock_viewport<R: Rng + ?Sized>(
    rng: &mut R,
    cells: &[CellIndex],
    config: &MockDataConfig,
) -> Result<Vec<MockPointSet>> {
    cells
        .iter()
        .map(|&cell| build_mock_point_set_with(rng, cell, H3Utils::cell_center(cell), config))
        .collect()
}

fn check_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_nan() || radius_km < 0.0 {
        return Err(MapError::InvalidArgument(format!(
            "radius_km must be a non-negative number, got {radius_km}"
        )));
    }
    Ok(())
}

// min + floor(U[0,1) * span); config must already be validated
fn draw_count<R: Rng + ?Sized>(rng: &mut R, config: &MockDataConfig) -> usize {
    config.min_count + (rng.random::<f64>() * config.count_span as f64).floor() as usize
}

fn sample_points<R: Rng + ?Sized>(rng: &mut R, center: LngLat, radius_km: f64, count: usize) -> Vec<LngLat> {
    (0..count)
        .map(|_| {
            let angle = rng.random::<f64>() * TAU;
            let distance = rng.random::<f64>() * radius_km;
            let (d_lng, d_lat) = offset_degrees(center.lat, distance, angle);
            LngLat::new(center.lng + d_lng, center.lat + d_lat)
        })
        .collect()
}

fn finish(cell_id: CellIndex, points: Vec<LngLat>) -> MockPointSet {
    trace!(cell = %cell_id, count = points.len(), "built mock point set");
    MockPointSet {
        cell_id,
        count: points.len(),
        points,
        selected: false,
    }
}
