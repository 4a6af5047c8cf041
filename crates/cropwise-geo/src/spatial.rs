use cropwise_core::models::{Coordinate, Zone};
use geo::{coord, Coord, Intersects, Rect};

/// Bounding rectangle of a zone, with longitude on x and latitude on y
pub fn zone_rect(zone: &Zone) -> Rect<f64> {
    Rect::new(
        coord! { x: zone.lon_range.min, y: zone.lat_range.min },
        coord! { x: zone.lon_range.max, y: zone.lat_range.max },
    )
}

pub fn to_coord(coordinate: &Coordinate) -> Coord<f64> {
    coord! { x: coordinate.lon, y: coordinate.lat }
}

/// Check if a rectangle contains a coordinate, boundary included
pub fn rect_contains(rect: &Rect<f64>, coordinate: &Coordinate) -> bool {
    // Rect/Coord intersection is closed on every edge, unlike `Contains`
    rect.intersects(&to_coord(coordinate))
}

/// Check if a zone contains a coordinate, boundary included
pub fn zone_contains(zone: &Zone, coordinate: &Coordinate) -> bool {
    rect_contains(&zone_rect(zone), coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropwise_core::models::Interval;

    fn zone(lat: [f64; 2], lon: [f64; 2]) -> Zone {
        Zone::new(Interval::from(lat), Interval::from(lon), Vec::new())
    }

    fn at(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn test_axes_are_not_swapped() {
        let india_west = zone([8.0, 20.0], [70.0, 80.0]);

        assert!(zone_contains(&india_west, &at(15.0, 75.0)));
        // Same numbers with lat/lon swapped fall outside
        assert!(!zone_contains(&india_west, &at(75.0, 15.0)));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let z = zone([8.0, 20.0], [70.0, 80.0]);

        assert!(zone_contains(&z, &at(8.0, 70.0)));
        assert!(zone_contains(&z, &at(20.0, 80.0)));
        assert!(zone_contains(&z, &at(8.0, 80.0)));
        assert!(zone_contains(&z, &at(20.0, 75.0)));
        assert!(!zone_contains(&z, &at(20.0001, 75.0)));
        assert!(!zone_contains(&z, &at(15.0, 69.9999)));
    }

    #[test]
    fn test_degenerate_zone() {
        let line = zone([10.0, 10.0], [70.0, 80.0]);
        assert!(zone_contains(&line, &at(10.0, 72.5)));
        assert!(!zone_contains(&line, &at(10.5, 72.5)));
    }

    #[test]
    fn test_negative_coordinates() {
        let bali = zone([-9.0, -8.0], [114.4, 115.7]);
        assert!(zone_contains(&bali, &at(-8.5, 115.0)));
        assert!(!zone_contains(&bali, &at(8.5, 115.0)));
    }
}
