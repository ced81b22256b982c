/// Viewport to mock occupants, end to end
///
/// Covers a rectangle around central Beijing with H3 cells, prints the edge
/// length for the chosen resolution, then builds seeded mock occupants for
/// every cell and dumps the first few as JSON.
///
/// RUST_LOG=hex_map_utils=trace cargo run --example viewport_mock
use hex_map_utils::mock_data::mock_viewport;
use hex_map_utils::{H3Utils, LatLng, MockDataConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const RESOLUTION: u8 = 7;

fn run_viewport_mock() -> Result<(), Box<dyn std::error::Error>> {
    let northeast = LatLng::new(39.95, 116.45);
    let southwest = LatLng::new(39.90, 116.35);

    println!(
        "Resolution {} hexagons have an average edge of {} km",
        RESOLUTION,
        H3Utils::compute_edge_length(RESOLUTION)?
    );

    let cells = H3Utils::viewport_cells(&northeast, &southwest, RESOLUTION)?;
    println!("Viewport covered by {} cells", cells.len());

    if let Some(&first) = cells.first() {
        let outline = H3Utils::cell_boundary(first);
        println!("Outline of {}: {}", first, serde_json::to_string(&outline)?);
    }

    let config = MockDataConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let sets = mock_viewport(&mut rng, &cells, &config)?;

    let total: usize = sets.iter().map(|set| set.count).sum();
    println!("Generated {} mock occupants", total);
    println!("{}", serde_json::to_string_pretty(&sets.iter().take(2).collect::<Vec<_>>())?);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run_viewport_mock()
}
