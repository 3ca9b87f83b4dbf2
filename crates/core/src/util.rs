/// Calculate the number of tiles in a hexagon-shaped region based on its
/// radius. Radius 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
pub fn hex_region_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Serialize a [TileMap](crate::TileMap) as a list instead of a map. Most
/// formats (JSON included) don't support complex map keys, and every tile
/// already knows its own coordinate anyway. Use with
/// `#[serde(with = "hexmap::util::serde_tile_map_to_vec")]`.
pub mod serde_tile_map_to_vec {
    use crate::{HasCoordinate, TileMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a tile map as a list
    pub fn serialize<T, S>(
        map: &TileMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for tile in map.tiles() {
            seq.serialize_element(tile)?;
        }
        seq.end()
    }

    /// Deserialize a list of values into a map. The deserialized type must
    /// implement [HasCoordinate] so that we can derive a key for each element.
    /// If two elements share a coordinate, the last one wins.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<TileMap<T>, D::Error>
    where
        T: Deserialize<'de> + HasCoordinate,
        D: Deserializer<'de>,
    {
        let vec: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(vec
            .into_iter()
            .map(|element| (element.coordinate(), element))
            .collect())
    }
}
