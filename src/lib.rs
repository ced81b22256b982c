pub mod constants;
pub mod coord;
pub mod error;
pub mod h3_utils;
pub mod math_utils;
pub mod mock_data;
pub mod serialize_cell_index;

pub use coord::{LatLng, LngLat, Positioned};
pub use error::{MapError, Result};
pub use h3_utils::H3Utils;
pub use mock_data::{MockDataConfig, MockPointSet};
