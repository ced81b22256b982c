//! H3 grid geometry helpers
//!
//! Thin adapter between the map layer's coordinate conventions and h3o:
//! edge-length display values, viewport rectangles, polygon coverage and
//! cell outlines. Everything here is stateless; h3o errors pass through
//! untouched inside [`MapError`](crate::error::MapError).

use std::str::FromStr;

use geo::{LineString, Polygon};
use h3o::geom::{ContainmentMode, TilerBuilder};
use h3o::{CellIndex, Resolution};
use tracing::debug;

use crate::constants::{EDGE_LENGTH_DECIMALS, METERS_PER_KM};
use crate::coord::{LatLng, LngLat, Positioned};
use crate::error::Result;

pub struct H3Utils;

impl H3Utils {
    /// Average hexagon edge length at `resolution`, in km, formatted with two
    /// decimals (e.g. resolution 7 gives `"1.41"`).
    ///
    /// The value is a display string; rounding is Rust's `{:.2}` formatting,
    /// i.e. nearest on the exact binary value with ties to even.
    pub fn compute_edge_length(resolution: u8) -> Result<String> {
        let resolution = Resolution::try_from(resolution)?;
        let edge_km = resolution.edge_length_m() / METERS_PER_KM;
        Ok(format!("{:.*}", EDGE_LENGTH_DECIMALS, edge_km))
    }

    /// Rectangle from two opposite corners, starting at the northeast corner:
    /// NE, (NE.lat, SW.lng), SW, (SW.lat, NE.lng).
    ///
    /// Corners are not checked; a swapped or degenerate pair produces the
    /// matching garbage rectangle and it is up to the tiler to reject it.
    pub fn build_boundary_polygon<P: Positioned>(northeast: &P, southwest: &P) -> [LatLng; 4] {
        let (ne_lat, ne_lng) = (northeast.latitude(), northeast.longitude());
        let (sw_lat, sw_lng) = (southwest.latitude(), southwest.longitude());

        [
            LatLng::new(ne_lat, ne_lng),
            LatLng::new(ne_lat, sw_lng),
            LatLng::new(sw_lat, sw_lng),
            LatLng::new(sw_lat, ne_lng),
        ]
    }

    /// Cells at `resolution` whose centroid lies inside `polygon`.
    ///
    /// Order of the returned cells is whatever h3o yields and carries no meaning.
    pub fn resolve_cells_for_polygon(polygon: &[LatLng], resolution: u8) -> Result<Vec<CellIndex>> {
        Self::resolve_cells_with_mode(polygon, resolution, ContainmentMode::ContainsCentroid)
    }

    /// Same as [`resolve_cells_for_polygon`](Self::resolve_cells_for_polygon)
    /// with an explicit containment rule.
    pub fn resolve_cells_with_mode(
        polygon: &[LatLng],
        resolution: u8,
        mode: ContainmentMode,
    ) -> Result<Vec<CellIndex>> {
        let resolution = Resolution::try_from(resolution)?;

        let mut tiler = TilerBuilder::new(resolution)
            .containment_mode(mode)
            .build();
        tiler.add(to_geo_polygon(polygon))?;

        let cells: Vec<CellIndex> = tiler.into_coverage().collect();
        debug!(
            resolution = u8::from(resolution),
            vertices = polygon.len(),
            cells = cells.len(),
            "resolved polygon coverage"
        );
        Ok(cells)
    }

    /// Cells covering the viewport spanned by two corners.
    pub fn viewport_cells<P: Positioned>(
        northeast: &P,
        southwest: &P,
        resolution: u8,
    ) -> Result<Vec<CellIndex>> {
        let boundary = Self::build_boundary_polygon(northeast, southwest);
        Self::resolve_cells_for_polygon(&boundary, resolution)
    }

    /// Cell outline as (lng, lat) pairs, in h3o's vertex order.
    pub fn cell_boundary(cell: CellIndex) -> Vec<LngLat> {
        cell.boundary().iter().map(|&vertex| LngLat::from(vertex)).collect()
    }

    /// [`cell_boundary`](Self::cell_boundary) for a hex string id such as
    /// `"87283472bffffff"`.
    pub fn cell_boundary_for_id(cell_id: &str) -> Result<Vec<LngLat>> {
        let cell = CellIndex::from_str(cell_id)?;
        Ok(Self::cell_boundary(cell))
    }

    /// Cell centroid as (lng, lat), ready to hand to the mock point generator.
    pub fn cell_center(cell: CellIndex) -> LngLat {
        LngLat::from(h3o::LatLng::from(cell))
    }
}

// geo works in x = longitude, y = latitude
fn to_geo_polygon(polygon: &[LatLng]) -> Polygon<f64> {
    let ring: LineString<f64> = polygon
        .iter()
        .map(|vertex| (vertex.lng, vertex.lat))
        .collect::<Vec<_>>()
        .into();
    Polygon::new(ring, Vec::new())
}
