//! This sub-module contains the basic unit types of the hex coordinate system:
//! whole-tile coordinates, fractional positions, and the six tile directions.
//! See the parent module documentation for more info on the coordinate system.

use crate::HexError;
use derive_more::{
    Add, AddAssign, Display, Div, Mul, MulAssign, Neg, Sub, SubAssign,
};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{cmp, ops};
use strum::{EnumIter, IntoEnumIterator};

/// √3, which shows up in every conversion between hex space and world space.
/// `f64::consts` doesn't have it on stable.
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A tile in the hex coordinate system, in axial form. See
/// https://www.redblobgames.com/grids/hexagons/#coordinates-axial
///
/// **In this page's vernacular, we use "flat topped" tiles.**
///
/// Only `x` and `y` are stored. The cube component `z` is always derived, so
/// `x + y + z = 0` holds for every value of this type, including the result of
/// any arithmetic on it. Two coordinates are equal iff their `x` and `y` are.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const ZERO: Self = Self::new(0, 0);

    /// Construct a new coordinate with the given x and y. Since x+y+z=0 for
    /// all coordinates, we can derive z from x & y.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new coordinate with the given x and z. Since x+y+z=0 for
    /// all coordinates, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new(x, -x - z)
    }

    /// Construct a new coordinate with the given y and z. Since x+y+z=0 for
    /// all coordinates, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new(-y - z, y)
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    pub fn z(self) -> i32 {
        -(self.x + self.y)
    }

    /// Get the coordinate one step away in the given direction
    pub fn neighbour(self, direction: Direction) -> Coordinate {
        self + direction
    }

    /// Get an iterator of all the coordinates directly adjacent to this one.
    /// The iterator will always contain exactly 6 values, in the clockwise
    /// order of [Direction], starting at [Direction::N].
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the tiles are adjacent, 2 if there is 1 tile between them,
    /// etc.
    pub fn distance_to(self, other: Coordinate) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let delta = self - other;
        (delta.x().unsigned_abs()
            + delta.y().unsigned_abs()
            + delta.z().unsigned_abs()) as usize
            // Every step changes two of the three components by one, so the
            // sum is always even
            / 2
    }

    /// Distance from this coordinate to [Self::ZERO]
    pub fn magnitude(self) -> usize {
        self.distance_to(Self::ZERO)
    }

    /// Interpret this coordinate as a single step, and get the direction of
    /// that step. Fails unless this is exactly one of the six unit offsets.
    pub fn to_direction(self) -> Result<Direction, HexError> {
        Direction::try_from(self)
    }

    /// Get every coordinate within `radius` steps of this one, including
    /// itself. The coordinates form a larger hexagon, and there are always
    /// `3r²+3r+1` of them. See [crate::util::hex_region_len].
    pub fn within_radius(self, radius: u32) -> impl Iterator<Item = Coordinate> {
        let r = radius as i32;
        (-r..=r).flat_map(move |x| {
            // If we just do [-r,r] for y as well, then we end up with a diamond
            // pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let y_min = cmp::max(-r, -x - r);
            let y_max = cmp::min(r, -x + r);
            (y_min..=y_max).map(move |y| self + Coordinate::new(x, y))
        })
    }
}

impl ops::Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.offset()
    }
}

impl ops::Add<Coordinate> for Direction {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        rhs + self.offset()
    }
}

impl ops::Sub<Direction> for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Direction) -> Self::Output {
        self - rhs.offset()
    }
}

impl ops::Mul<Coordinate> for i32 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Self::Output {
        rhs * self
    }
}

/// A position anywhere on the hex plane, not just a tile center. This is the
/// float counterpart of [Coordinate]: `z` is derived the same way, so the
/// components always sum to zero. These are an intermediate value when
/// converting world-space points to tiles, see [crate::hex::round_to_coordinate].
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Display, Add, Sub, Mul, Div,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct FractionalPosition {
    x: f64,
    y: f64,
}

impl FractionalPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn z(self) -> f64 {
        -self.x - self.y
    }

    /// Snap this position to the tile that contains it
    pub fn round(self) -> Coordinate {
        super::round_to_coordinate(self)
    }
}

impl From<Coordinate> for FractionalPosition {
    fn from(other: Coordinate) -> Self {
        Self::new(other.x().into(), other.y().into())
    }
}

/// The 6 directions in which hexes can line up side-to-side. For any given
/// tile, a direction can represent two useful things:
///
/// - Direction from center point to the midpoint of a single side of that tile
/// - Direction to a neighboring tile's center point
///
/// Variants are declared in clockwise order starting at north, and every
/// iteration over directions in this crate uses that order.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    /// North
    N,
    /// Northeast
    NE,
    /// Southeast
    SE,
    /// South
    S,
    /// Southwest
    SW,
    /// Northwest
    NW,
}

impl Direction {
    /// All directions, clockwise, starting at north
    pub const CLOCKWISE: [Self; 6] =
        [Self::N, Self::NE, Self::SE, Self::S, Self::SW, Self::NW];

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn clockwise_index(self) -> usize {
        self as usize
    }

    /// Get the coordinate offset that would move a tile one step in this
    /// direction. Opposite directions have negated offsets, so all six sum to
    /// [Coordinate::ZERO].
    pub fn offset(self) -> Coordinate {
        match self {
            Self::N => Coordinate::new(0, 1),
            Self::NE => Coordinate::new(1, 0),
            Self::SE => Coordinate::new(1, -1),
            Self::S => Coordinate::new(0, -1),
            Self::SW => Coordinate::new(-1, 0),
            Self::NW => Coordinate::new(-1, 1),
        }
    }

    /// Get the unit vector that points this way in world space. Tiles lie on
    /// the horizontal x/z plane, so `y` is always zero. North is `+z`.
    pub fn vector3(self) -> Vector3<f64> {
        let half_sqrt_3 = SQRT_3 / 2.0;
        match self {
            Self::N => Vector3::new(0.0, 0.0, 1.0),
            Self::NE => Vector3::new(half_sqrt_3, 0.0, 0.5),
            Self::SE => Vector3::new(half_sqrt_3, 0.0, -0.5),
            Self::S => Vector3::new(0.0, 0.0, -1.0),
            Self::SW => Vector3::new(-half_sqrt_3, 0.0, -0.5),
            Self::NW => Vector3::new(-half_sqrt_3, 0.0, 0.5),
        }
    }

    /// Rotate this direction by some number of 60° steps. Positive steps go
    /// clockwise, negative go counter-clockwise.
    pub fn rotate(self, steps: isize) -> Self {
        let len = Self::CLOCKWISE.len() as isize;
        // rem_euclid instead of % so that negative steps wrap around to the
        // end of the list
        let index = (self.clockwise_index() as isize + steps).rem_euclid(len);
        Self::CLOCKWISE[index as usize]
    }

    /// The next direction clockwise from this one
    pub fn clockwise(self) -> Self {
        self.rotate(1)
    }

    /// The next direction counter-clockwise from this one
    pub fn counter_clockwise(self) -> Self {
        self.rotate(-1)
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotate(Self::CLOCKWISE.len() as isize / 2)
    }

    /// Get all six directions, going clockwise and starting with this one.
    /// Each direction appears exactly once.
    pub fn loop_from(self) -> impl Iterator<Item = Direction> {
        (0..Self::CLOCKWISE.len() as isize).map(move |steps| self.rotate(steps))
    }
}

impl TryFrom<Coordinate> for Direction {
    type Error = HexError;

    fn try_from(offset: Coordinate) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|direction| direction.offset() == offset)
            .ok_or(HexError::InvalidDirection { offset })
    }
}
