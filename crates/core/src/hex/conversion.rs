//! Conversions between world space and hex space. World space is a 3D
//! Euclidean space where tiles lie flat on the x/z plane and `y` is height,
//! which is ignored here. A grid scale of `s` means adjacent tile centers are
//! `s` world units apart.

use crate::{
    hex::unit::SQRT_3, Coordinate, Direction, FractionalPosition, GridConfig,
};
use anyhow::Context;
use log::debug;
use nalgebra::Point3;
use validator::Validate;

/// Ratio of a tile's inner radius (center to side midpoint) to its outer
/// radius (center to vertex)
pub const OUT_TO_IN_RADIUS: f64 = SQRT_3 / 2.0;
/// Ratio of a tile's outer radius (center to vertex) to its inner radius
/// (center to side midpoint)
pub const IN_TO_OUT_RADIUS: f64 = 2.0 / SQRT_3;

// Projection coefficients for world x onto the hex axes. These are the inverse
// of the NE and N world vectors, see [Direction::vector3]
const A: f64 = -SQRT_3 / 3.0;
const B: f64 = 2.0 * SQRT_3 / 3.0;

/// Project a world-space point onto the hex plane, without snapping it to a
/// tile. The point's height (`y`) is ignored.
pub fn point_to_fractional_position(
    point: &Point3<f64>,
    grid_scale: f64,
) -> FractionalPosition {
    let x = B * point.x;
    let y = A * point.x + point.z;
    FractionalPosition::new(x / grid_scale, y / grid_scale)
}

/// Snap a fractional position to the nearest tile, using cube rounding:
/// https://www.redblobgames.com/grids/hexagons/#rounding
///
/// Each of x, y and z gets rounded on its own, which can break `x+y+z=0`.
/// Whichever component moved the most during rounding is then thrown out and
/// rederived from the other two. When residuals tie, x is preferred over y
/// and y over z, so that positions on tile boundaries always resolve to the
/// same tile. Halfway values round to the even integer.
pub fn round_to_coordinate(position: FractionalPosition) -> Coordinate {
    let (x, y, z) = (position.x(), position.y(), position.z());
    let rounded_x = x.round_ties_even();
    let rounded_y = y.round_ties_even();
    let rounded_z = z.round_ties_even();

    let diff_x = (x - rounded_x).abs();
    let diff_y = (y - rounded_y).abs();
    let diff_z = (z - rounded_z).abs();

    let mut xr = rounded_x as i32;
    let mut yr = rounded_y as i32;
    let zr = rounded_z as i32;
    if diff_x > diff_y && diff_x > diff_z {
        xr = -yr - zr;
    } else if diff_y > diff_z {
        yr = -xr - zr;
    }
    // Otherwise z is the one that's off, and it's derived anyway

    Coordinate::new(xr, yr)
}

/// Get the tile that contains a world-space point. The point's height (`y`)
/// is ignored.
pub fn point_to_coordinate(point: &Point3<f64>, grid_scale: f64) -> Coordinate {
    round_to_coordinate(point_to_fractional_position(point, grid_scale))
}

impl Coordinate {
    /// Get the world-space position of this tile's center. The result always
    /// has a height of 0. This is the inverse of [point_to_coordinate] for
    /// tile centers.
    pub fn to_point(self, grid_scale: f64) -> Point3<f64> {
        let offset = Direction::NE.vector3() * f64::from(self.x())
            + Direction::N.vector3() * f64::from(self.y());
        Point3::from(offset * grid_scale)
    }
}

/// A validated grid layout, which carries the grid scale so that callers don't
/// have to pass it around for every conversion. Use [HexLayout::new] to
/// construct one from a [GridConfig].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    config: GridConfig,
}

impl HexLayout {
    /// Create a new layout. Returns an error if the config is invalid, with
    /// the [validator::ValidationErrors] as the root cause.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        debug!("Creating hex layout with config {:?}", config);
        config.validate().context("invalid grid config")?;
        Ok(Self { config })
    }

    /// Get a reference to the config that defines this layout
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid_scale(&self) -> f64 {
        self.config.grid_scale
    }

    /// See [point_to_fractional_position]
    pub fn point_to_fractional_position(
        &self,
        point: &Point3<f64>,
    ) -> FractionalPosition {
        point_to_fractional_position(point, self.grid_scale())
    }

    /// See [point_to_coordinate]
    pub fn point_to_coordinate(&self, point: &Point3<f64>) -> Coordinate {
        point_to_coordinate(point, self.grid_scale())
    }

    /// See [Coordinate::to_point]
    pub fn coordinate_to_point(&self, coordinate: Coordinate) -> Point3<f64> {
        coordinate.to_point(self.grid_scale())
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        // The default config is always valid, so skip validation
        Self {
            config: GridConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_round_integers() {
        for coordinate in Coordinate::new(-2, 7).within_radius(5) {
            let position = FractionalPosition::from(coordinate);
            assert_eq!(round_to_coordinate(position), coordinate);
        }
    }

    #[test]
    fn test_round_nearby() {
        assert_eq!(
            FractionalPosition::new(0.2, 0.1).round(),
            Coordinate::ZERO
        );
        assert_eq!(
            FractionalPosition::new(2.9, -1.1).round(),
            Coordinate::new(3, -1)
        );
        // Rounding each component independently gives (1, 1, -1), which is
        // off the plane. x moved the most, so it gets rederived
        assert_eq!(
            FractionalPosition::new(0.6, 0.7).round(),
            Coordinate::new(0, 1)
        );
        // Same thing but y moved the most
        assert_eq!(
            FractionalPosition::new(0.8, 0.45).round(),
            Coordinate::new(1, 0)
        );
        // And z
        assert_eq!(
            FractionalPosition::new(0.3, 0.3).round(),
            Coordinate::ZERO
        );
    }

    #[test]
    fn test_round_ties() {
        // Halfway between (0, 0) and (1, 0). x and z tie for the largest
        // residual, which isn't strictly larger, so neither x nor y get
        // rederived. x rounds to even, so we land on the origin
        assert_eq!(
            FractionalPosition::new(0.5, 0.0).round(),
            Coordinate::ZERO
        );
        assert_eq!(
            FractionalPosition::new(1.5, 0.0).round(),
            Coordinate::new(2, 0)
        );
        // Halfway between (0, 0) and (0, 1). Ties between y and z fall through
        // to z as well
        assert_eq!(
            FractionalPosition::new(0.0, 0.5).round(),
            Coordinate::ZERO
        );
        // x and y tie for the largest residual, so x is kept and y gets
        // rederived
        assert_eq!(
            FractionalPosition::new(0.45, 0.45).round(),
            Coordinate::new(0, 1)
        );
        // Tile corner shared by (0, 0), (1, 0) and (0, 1). The residuals are
        // all equal up to float error, and the result is the same every time
        let corner = FractionalPosition::new(1.0 / 3.0, 1.0 / 3.0);
        assert_eq!(corner.round(), corner.round());
        assert_eq!(corner.round(), Coordinate::ZERO);
    }

    #[test]
    fn test_point_to_coordinate() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(point_to_coordinate(&origin, 1.0), Coordinate::ZERO);

        // Height is ignored
        let high = Point3::new(0.0, 50.0, 1.0);
        assert_eq!(point_to_coordinate(&high, 1.0), Coordinate::new(0, 1));

        let northeast = Point3::from(Direction::NE.vector3() * 2.0);
        assert_eq!(point_to_coordinate(&northeast, 2.0), Coordinate::new(1, 0));
        assert_eq!(point_to_coordinate(&northeast, 1.0), Coordinate::new(2, 0));

        // Slightly off center still lands in the same tile
        let nudged = Point3::new(0.1, 0.0, -0.95);
        assert_eq!(point_to_coordinate(&nudged, 1.0), Coordinate::new(0, -1));
    }

    #[test]
    fn test_point_to_fractional_position() {
        let position =
            point_to_fractional_position(&Point3::new(SQRT_3, 3.0, 1.0), 2.0);
        assert_approx_eq!(position.x(), 1.0);
        assert_approx_eq!(position.y(), 0.0);
        assert_approx_eq!(position.z(), -1.0);
    }

    #[test]
    fn test_to_point_round_trip() {
        for grid_scale in [0.5, 1.0, 3.7] {
            for coordinate in Coordinate::ZERO.within_radius(6) {
                let point = coordinate.to_point(grid_scale);
                assert_approx_eq!(point.y, 0.0);
                assert_eq!(point_to_coordinate(&point, grid_scale), coordinate);
            }
        }
    }

    #[test]
    fn test_to_point_spacing() {
        // Adjacent centers are exactly one grid scale apart
        let center = Coordinate::new(3, -2).to_point(2.5);
        for neighbour in Coordinate::new(3, -2).neighbours() {
            let distance = (neighbour.to_point(2.5) - center).norm();
            assert_approx_eq!(distance, 2.5);
        }
    }

    #[test]
    fn test_radius_constants() {
        assert_approx_eq!(OUT_TO_IN_RADIUS * IN_TO_OUT_RADIUS, 1.0);
        assert_approx_eq!(OUT_TO_IN_RADIUS, 0.866_025_404);
    }

    #[test]
    fn test_layout() {
        let layout = HexLayout::new(GridConfig { grid_scale: 2.0 }).unwrap();
        let coordinate = Coordinate::new(-4, 1);
        let point = layout.coordinate_to_point(coordinate);
        assert_eq!(layout.point_to_coordinate(&point), coordinate);
        assert_eq!(HexLayout::default().grid_scale(), 1.0);
        assert!(HexLayout::new(GridConfig { grid_scale: 0.0 }).is_err());
    }
}
