use hexmap::{
    point_to_coordinate, point_to_fractional_position, Coordinate, Direction,
    HexLayout,
};
use nalgebra::Point3;

/// Points anywhere inside a tile's inscribed circle have to snap to that tile
#[test]
fn test_points_inside_tiles() {
    let layout = HexLayout::default();
    for coordinate in Coordinate::new(2, -7).within_radius(4) {
        let center = layout.coordinate_to_point(coordinate);
        for direction in Direction::CLOCKWISE {
            // Just shy of the side midpoint, which is half a step away
            let point = center + direction.vector3() * 0.49;
            assert_eq!(
                layout.point_to_coordinate(&point),
                coordinate,
                "point {} should be in tile {}",
                point,
                coordinate
            );
        }
    }
}

#[test]
fn test_grid_scale() {
    let point = Point3::new(0.0, 0.0, 10.0);
    assert_eq!(point_to_coordinate(&point, 1.0), Coordinate::new(0, 10));
    assert_eq!(point_to_coordinate(&point, 2.0), Coordinate::new(0, 5));
    assert_eq!(point_to_coordinate(&point, 10.0), Coordinate::new(0, 1));

    let position = point_to_fractional_position(&point, 4.0);
    assert_eq!(position.round(), Coordinate::new(0, 2));
}

/// Crossing a boundary between two tiles always lands on the same side of it,
/// no matter how many times we ask
#[test]
fn test_boundary_is_deterministic() {
    // Midpoint of the side between (0, 0) and (0, 1)
    let boundary = Point3::new(0.0, 0.0, 0.5);
    let first = point_to_coordinate(&boundary, 1.0);
    for _ in 0..10 {
        assert_eq!(point_to_coordinate(&boundary, 1.0), first);
    }
    assert!(first == Coordinate::ZERO || first == Coordinate::new(0, 1));
}
