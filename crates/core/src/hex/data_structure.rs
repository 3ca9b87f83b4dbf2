use crate::{util::hex_region_len, Coordinate, Direction, HexError};
use fnv::FnvBuildHasher;
use log::debug;
use std::{
    collections::{hash_map, HashMap, HashSet},
    fmt::Debug,
    ops::Deref,
};

/// A set of coordinates
pub type CoordinateSet = HashSet<Coordinate, FnvBuildHasher>;
/// A map of coordinates to some `T`
pub type CoordinateMap<T> = HashMap<Coordinate, T, FnvBuildHasher>;

/// A map of tiles keyed by coordinate. The map can have any shape, including
/// holes, and tiles are added one at a time with [TileMap::set]. There is no
/// way to remove a tile; grids grow by insertion only.
///
/// Iteration order is unspecified and can change between insertions, so don't
/// rely on it.
///
/// Tiles don't hold a reference to their own map. To walk from a tile to its
/// neighbours, grab a [TileRef] handle with [TileMap::tile], or implement
/// [HexTile] for your own handle type.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap<T> {
    tiles: CoordinateMap<T>,
}

impl<T> TileMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for at least `capacity` tiles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: CoordinateMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
        }
    }

    /// Build a map in a hexagon pattern around [Coordinate::ZERO]. For a
    /// radius of `r`, the furthest tiles are all `r` steps from the center.
    ///
    /// ## Arguments
    ///
    /// - `radius`: Distance from the center to the edge, in all directions. 0
    ///   means a map of 1 tile, 1 is 7 tiles, 2 => 19, etc.
    /// - `initializer`: Function called to initialize each tile, based on its
    ///   coordinate
    pub fn hexagon(radius: u32, initializer: impl Fn(Coordinate) -> T) -> Self {
        let capacity = hex_region_len(radius);
        let mut map = Self::with_capacity(capacity);
        for coordinate in Coordinate::ZERO.within_radius(radius) {
            map.set(coordinate, initializer(coordinate));
        }
        debug_assert_eq!(map.len(), capacity, "expected 3r²+3r+1 tiles");
        debug!("Built hexagon of radius {} with {} tiles", radius, map.len());
        map
    }

    /// Store a tile at the given coordinate, replacing whatever was there.
    /// Returns the replaced tile, if any.
    pub fn set(&mut self, coordinate: Coordinate, tile: T) -> Option<T> {
        self.tiles.insert(coordinate, tile)
    }

    /// Get the tile at a coordinate, or `None` if there isn't one
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.tiles.get(&coordinate)
    }

    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut T> {
        self.tiles.get_mut(&coordinate)
    }

    /// Is there a tile at this coordinate?
    pub fn has(&self, coordinate: Coordinate) -> bool {
        self.tiles.contains_key(&coordinate)
    }

    /// Get the tile at a coordinate and narrow it to a more specific type.
    /// Returns `None` if there is no tile there, or if the conversion fails.
    /// Conversion errors are discarded, this never fails loudly.
    ///
    /// ```
    /// use hexmap::{Coordinate, TileMap};
    ///
    /// enum Tile {
    ///     Water,
    ///     Land { elevation: u32 },
    /// }
    ///
    /// struct Elevation(u32);
    ///
    /// impl TryFrom<&Tile> for Elevation {
    ///     type Error = ();
    ///
    ///     fn try_from(tile: &Tile) -> Result<Self, ()> {
    ///         match tile {
    ///             Tile::Land { elevation } => Ok(Elevation(*elevation)),
    ///             Tile::Water => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// let mut map = TileMap::new();
    /// map.set(Coordinate::ZERO, Tile::Land { elevation: 12 });
    /// map.set(Coordinate::new(1, 0), Tile::Water);
    ///
    /// let elevation = map.try_get::<Elevation>(Coordinate::ZERO);
    /// assert_eq!(elevation.map(|e| e.0), Some(12));
    /// assert!(map.try_get::<Elevation>(Coordinate::new(1, 0)).is_none());
    /// assert!(map.try_get::<Elevation>(Coordinate::new(5, 5)).is_none());
    /// ```
    pub fn try_get<'a, U>(&'a self, coordinate: Coordinate) -> Option<U>
    where
        U: TryFrom<&'a T>,
    {
        self.try_get_with(coordinate, |tile| U::try_from(tile).ok())
    }

    /// Same as [Self::try_get], but with the narrowing function passed
    /// directly. Useful when the conversion doesn't warrant a `TryFrom` impl.
    pub fn try_get_with<'a, U>(
        &'a self,
        coordinate: Coordinate,
        narrow: impl FnOnce(&'a T) -> Option<U>,
    ) -> Option<U> {
        self.get(coordinate).and_then(narrow)
    }

    /// Get a handle to the tile at a coordinate, which can be used to look up
    /// neighbouring tiles. `None` if there is no tile there.
    pub fn tile(&self, coordinate: Coordinate) -> Option<TileRef<'_, T>> {
        self.tiles.get_key_value(&coordinate).map(|(coordinate, value)| {
            TileRef {
                map: self,
                coordinate: *coordinate,
                value,
            }
        })
    }

    /// All tiles in the map, in no particular order
    pub fn tiles(&self) -> impl Iterator<Item = &T> {
        self.tiles.values()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.tiles.values_mut()
    }

    /// All coordinates that have a tile, in no particular order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.tiles.keys().copied()
    }

    /// All tiles along with their coordinates, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.tiles.iter().map(|(coordinate, tile)| (*coordinate, tile))
    }

    /// Handles for all tiles, in no particular order
    pub fn tile_refs(&self) -> impl Iterator<Item = TileRef<'_, T>> {
        self.tiles.iter().map(move |(coordinate, value)| TileRef {
            map: self,
            coordinate: *coordinate,
            value,
        })
    }

    /// Map this collection into a new collection by applying the given mapping
    /// function over each tile. Coordinates are unchanged.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> TileMap<U> {
        self.tiles
            .into_iter()
            .map(|(coordinate, tile)| (coordinate, f(tile)))
            .collect()
    }

    /// Get the number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl<T: HasCoordinate> TileMap<T> {
    /// Store a tile at its own coordinate, replacing whatever was there.
    /// Returns the replaced tile, if any.
    pub fn insert_tile(&mut self, tile: T) -> Option<T> {
        self.set(tile.coordinate(), tile)
    }
}

impl<T> Default for TileMap<T> {
    fn default() -> Self {
        Self {
            tiles: CoordinateMap::default(),
        }
    }
}

impl<T> FromIterator<(Coordinate, T)> for TileMap<T> {
    fn from_iter<I: IntoIterator<Item = (Coordinate, T)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(Coordinate, T)> for TileMap<T> {
    fn extend<I: IntoIterator<Item = (Coordinate, T)>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl<T> IntoIterator for TileMap<T> {
    type Item = (Coordinate, T);
    type IntoIter = hash_map::IntoIter<Coordinate, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TileMap<T> {
    type Item = (&'a Coordinate, &'a T);
    type IntoIter = hash_map::Iter<'a, Coordinate, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// A trait that denotes any data type that has a singular assigned coordinate
/// in the hex world.
pub trait HasCoordinate {
    fn coordinate(&self) -> Coordinate;
}

/// Anything that can stand in for a tile within a map: it knows its own
/// coordinate and can reach the map it lives in. Implementors get neighbour,
/// distance and direction lookups for free.
///
/// The map reference is shared and non-owning, so a handle can never keep a
/// map alive or observe it mid-write. [TileRef] is the stock implementation;
/// callers can write their own handle types as well.
pub trait HexTile<'m> {
    /// The type of tile stored in the map
    type Value: 'm;

    fn coordinate(&self) -> Coordinate;

    fn map(&self) -> &'m TileMap<Self::Value>;

    /// Get the tile one step away in the given direction, if there is one
    fn neighbour(
        &self,
        direction: Direction,
    ) -> Option<TileRef<'m, Self::Value>> {
        self.map().tile(self.coordinate() + direction)
    }

    /// Get all tiles adjacent to this one, clockwise from north. Coordinates
    /// without a tile (map edges or holes) are skipped, so this yields
    /// anywhere from 0 to 6 tiles.
    fn all_neighbours(
        &self,
    ) -> impl Iterator<Item = TileRef<'m, Self::Value>> {
        let map = self.map();
        let coordinate = self.coordinate();
        Direction::N
            .loop_from()
            .filter_map(move |direction| map.tile(coordinate + direction))
    }

    /// Number of steps between this tile and another one
    fn distance_to<'o>(&self, other: &impl HexTile<'o>) -> usize {
        self.coordinate().distance_to(other.coordinate())
    }

    /// Get the direction from this tile to an adjacent one. Fails if the two
    /// tiles aren't adjacent.
    fn direction_to<'o>(
        &self,
        other: &impl HexTile<'o>,
    ) -> Result<Direction, HexError> {
        (other.coordinate() - self.coordinate()).to_direction()
    }
}

/// A handle to a single tile within a [TileMap]. The handle borrows the map,
/// and derefs to the tile's value.
pub struct TileRef<'m, T> {
    map: &'m TileMap<T>,
    coordinate: Coordinate,
    value: &'m T,
}

impl<'m, T> TileRef<'m, T> {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn value(&self) -> &'m T {
        self.value
    }
}

impl<'m, T> HexTile<'m> for TileRef<'m, T> {
    type Value = T;

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn map(&self) -> &'m TileMap<T> {
        self.map
    }
}

impl<'m, T> Deref for TileRef<'m, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

// Manual impls so that T doesn't need to be Clone/Copy
impl<'m, T> Clone for TileRef<'m, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'m, T> Copy for TileRef<'m, T> {}

impl<'m, T: Debug> Debug for TileRef<'m, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Skip the map, it would print every tile
        f.debug_struct("TileRef")
            .field("coordinate", &self.coordinate)
            .field("value", self.value)
            .finish()
    }
}
