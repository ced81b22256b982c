// Integration tests for the H3 grid adapter against live h3o results

use std::str::FromStr;

use approx::assert_abs_diff_eq;
use h3o::{CellIndex, Resolution};
use hex_map_utils::{H3Utils, LatLng, MapError, Positioned};
use more_asserts::{assert_ge, assert_le};

/// Stand-in for a map SDK bounds corner that only exposes accessors.
struct SdkCorner {
    lat: f64,
    lng: f64,
}

impl Positioned for SdkCorner {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }
}

fn beijing_box() -> [LatLng; 4] {
    H3Utils::build_boundary_polygon(&LatLng::new(40.0, 117.0), &LatLng::new(39.0, 116.0))
}

#[test]
fn test_edge_length_format_and_monotonic() {
    let mut previous = f64::INFINITY;

    for res in 0..=15u8 {
        let edge = H3Utils::compute_edge_length(res).unwrap();
        println!("res {res:>2}: {edge} km");

        let (whole, frac) = edge.split_once('.').expect("decimal point");
        assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()), "{edge}");
        assert!(frac.len() == 2 && frac.chars().all(|c| c.is_ascii_digit()), "{edge}");

        let value: f64 = edge.parse().unwrap();
        assert_le!(value, previous, "edge length grew at resolution {}", res);
        previous = value;
    }
}

#[test]
fn test_edge_length_tracks_h3o_average() {
    for res in [0u8, 3, 7, 10] {
        let edge: f64 = H3Utils::compute_edge_length(res).unwrap().parse().unwrap();
        let expected = Resolution::try_from(res).unwrap().edge_length_km();
        assert_abs_diff_eq!(edge, expected, epsilon = 0.005);
    }
}

#[test]
fn test_boundary_polygon_from_sdk_corners() {
    let ne = SdkCorner { lat: 40.0, lng: 117.0 };
    let sw = SdkCorner { lat: 39.0, lng: 116.0 };

    let polygon = H3Utils::build_boundary_polygon(&ne, &sw);

    let as_pairs: Vec<[f64; 2]> = polygon.iter().map(|&p| p.into()).collect();
    assert_eq!(
        as_pairs,
        vec![[40.0, 117.0], [40.0, 116.0], [39.0, 116.0], [39.0, 117.0]]
    );
    assert_eq!(polygon[1].lat, polygon[0].lat);
    assert_eq!(polygon[3].lat, polygon[2].lat);
    assert_eq!(polygon[1].lng, polygon[2].lng);
    assert_eq!(polygon[3].lng, polygon[0].lng);
}

#[test]
fn test_resolve_cells_inside_box() {
    let cells = H3Utils::resolve_cells_for_polygon(&beijing_box(), 5).unwrap();
    println!("{} cells cover the box at res 5", cells.len());

    assert!(!cells.is_empty());
    for cell in &cells {
        assert_eq!(cell.resolution(), Resolution::Five);

        // centroid containment, small slack for edge handling
        let center = H3Utils::cell_center(*cell);
        assert_ge!(center.lat, 39.0 - 0.05);
        assert_le!(center.lat, 40.0 + 0.05);
        assert_ge!(center.lng, 116.0 - 0.05);
        assert_le!(center.lng, 117.0 + 0.05);
    }
}

#[test]
fn test_finer_resolution_needs_more_cells() {
    let coarse = H3Utils::resolve_cells_for_polygon(&beijing_box(), 5).unwrap();
    let fine = H3Utils::resolve_cells_for_polygon(&beijing_box(), 6).unwrap();
    assert!(fine.len() > coarse.len());
}

#[test]
fn test_viewport_cells_matches_two_step_lookup() {
    let ne = LatLng::new(40.0, 117.0);
    let sw = LatLng::new(39.0, 116.0);

    let mut direct = H3Utils::viewport_cells(&ne, &sw, 4).unwrap();
    let mut two_step = H3Utils::resolve_cells_for_polygon(&beijing_box(), 4).unwrap();
    direct.sort();
    two_step.sort();
    assert_eq!(direct, two_step);
}

#[test]
fn test_resolve_cells_rejects_bad_resolution() {
    let err = H3Utils::resolve_cells_for_polygon(&beijing_box(), 16).unwrap_err();
    assert!(matches!(err, MapError::InvalidResolution(_)));
}

#[test]
fn test_cell_boundary_is_swapped_native_boundary() {
    let cell = CellIndex::from_str("87283472bffffff").unwrap();

    let ours = H3Utils::cell_boundary_for_id("87283472bffffff").unwrap();
    let native = cell.boundary();

    assert_eq!(ours.len(), native.len());
    for (vertex, native_vertex) in ours.iter().zip(native.iter()) {
        let back = vertex.swap();
        assert_eq!(back.lat, native_vertex.lat());
        assert_eq!(back.lng, native_vertex.lng());
    }
}

#[test]
fn test_cell_boundary_surrounds_center() {
    let cell = CellIndex::from_str("87283472bffffff").unwrap();
    let center = H3Utils::cell_center(cell);
    let outline = H3Utils::cell_boundary(cell);

    // resolution 7 hexagon: every corner within a few km of the centroid
    for vertex in &outline {
        assert_abs_diff_eq!(vertex.lat, center.lat, epsilon = 0.05);
        assert_abs_diff_eq!(vertex.lng, center.lng, epsilon = 0.05);
    }
}
