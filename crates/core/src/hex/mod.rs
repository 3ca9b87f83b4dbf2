//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play: hex coordinates and world
//! coordinates.
//!
//! ### Hex Coordinates
//!
//! Hex coordinates define space within a hexagon-tiled grid. The system we use
//! is the [axial/cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube),
//! with **flat topped** tiles.
//!
//! Each coordinate has three components (`x`, `y`, and `z`), and **for any
//! tile, all three components are integers and `x + y + z = 0`.** Since the
//! third component can always be derived from the other two, [Coordinate]
//! only stores `x` and `y`. That makes it impossible to construct a coordinate
//! that violates the invariant, no matter what arithmetic gets done on it.
//!
//! Moving one tile in any of the six [Direction]s changes exactly two of the
//! three components, one up and one down:
//!
//! ```text
//!            N (0, 1)
//!   NW (-1, 1)     NE (1, 0)
//!            (0, 0)
//!   SW (-1, 0)     SE (1, -1)
//!            S (0, -1)
//! ```
//!
//! Positions that aren't tile centers (e.g. a point in world space that falls
//! somewhere inside a tile) are [FractionalPosition]s, the same system but with
//! float components. Snapping one to a tile is done with
//! [round_to_coordinate].
//!
//! ### World Coordinates
//!
//! World coordinates are 3D Euclidean coordinates, used by whatever renders
//! the grid. The grid lies flat on the `x`/`z` plane, `y` is height and is
//! ignored by every conversion. North is `+z`. [Direction::vector3] gives the
//! world-space unit vector for each direction, and the world position of a
//! tile center is `NE * x + N * y`, scaled by the grid scale. The grid scale is
//! the distance between the centers of two adjacent tiles.
//!
//! See [point_to_coordinate] and [Coordinate::to_point] (or a [HexLayout]) to
//! move between the two systems.

mod conversion;
mod data_structure;
mod unit;

pub use self::{conversion::*, data_structure::*, unit::*};
