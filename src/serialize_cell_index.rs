use std::str::FromStr;

use h3o::CellIndex;
use serde::Deserialize;

/// Serialize a cell as its canonical hex string (e.g. `"87283472bffffff"`).
pub fn serialize_cell_index<S>(cell: &CellIndex, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(cell)
}

pub fn deserialize_cell_index<'de, D>(deserializer: D) -> Result<CellIndex, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    CellIndex::from_str(&raw).map_err(serde::de::Error::custom)
}
