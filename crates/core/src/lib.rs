//! Hexmap is a library for hexagon-tiled grids. It contains the coordinate
//! algebra (axial/cube coordinates, directions, distances), conversion between
//! world-space points and tiles, and a coordinate-keyed map for storing your
//! own tile data.
//!
//! ```
//! use hexmap::{Coordinate, Direction, HexTile, TileMap};
//!
//! // A hexagon of radius 3 around the origin
//! let map = TileMap::hexagon(3, |coordinate| coordinate.magnitude());
//! assert_eq!(map.len(), 37);
//!
//! let tile = map.tile(Coordinate::new(3, 0)).unwrap();
//! assert_eq!(*tile, 3);
//! assert!(tile.neighbour(Direction::NE).is_none()); // Off the edge
//! assert_eq!(tile.all_neighbours().count(), 3);
//! ```
//!
//! See the [hex] module for a description of the coordinate systems.

mod config;
mod error;
pub mod hex;
pub mod util;

pub use crate::{
    config::GridConfig,
    error::HexError,
    hex::{
        point_to_coordinate, point_to_fractional_position,
        round_to_coordinate, Coordinate, CoordinateMap, CoordinateSet,
        Direction, FractionalPosition, HasCoordinate, HexLayout, HexTile,
        TileMap, TileRef, IN_TO_OUT_RADIUS, OUT_TO_IN_RADIUS,
    },
};
