pub const METERS_PER_KM: f64 = 1000.0;

// flat-earth approximation used by the mock point generator
pub const KM_PER_DEGREE_LAT: f64 = 111.32; // km per degree of latitude
pub const KM_PER_DEGREE_LNG_EQUATOR: f64 = KM_PER_DEGREE_LAT; // scaled by cos(lat) away from the equator

// default mock occupant settings:
pub const MOCK_RADIUS_KM: f64 = 0.5; // scatter radius around the cell center
pub const MOCK_MIN_COUNT: usize = 5;
pub const MOCK_COUNT_SPAN: usize = 20; // counts fall in [MIN, MIN + SPAN)
pub const MOCK_MAX_COUNT: usize = 10_000; // largest count a config may produce

pub const EDGE_LENGTH_DECIMALS: usize = 2;
