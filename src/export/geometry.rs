//! Layer geometry to KML geometry.

use log::debug;

use crate::kml::{Coordinate, KmlGeometry};
use crate::model::{Geometry, MapPoint};

/// Convert a geometry to its KML form.
///
/// Polylines and polygons are flattened into a single `LineString`: all
/// parts are concatenated in part order, so multi-part boundaries are lost
/// and rings are neither closed nor classified. Shapes without a KML
/// rendition return `None`.
pub fn encode_geometry(geometry: &Geometry) -> Option<KmlGeometry> {
    match geometry {
        Geometry::Point(p) => Some(KmlGeometry::Point(to_coordinate(p))),
        Geometry::Polyline { paths } => Some(flatten(paths)),
        Geometry::Polygon { rings } => Some(flatten(rings)),
        Geometry::MultiPoint { .. } | Geometry::Envelope { .. } => {
            debug!("No KML geometry for {}; placemark left empty", geometry.kind());
            None
        }
    }
}

fn flatten(parts: &[Vec<MapPoint>]) -> KmlGeometry {
    KmlGeometry::LineString(parts.iter().flatten().map(to_coordinate).collect())
}

fn to_coordinate(p: &MapPoint) -> Coordinate {
    Coordinate::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_maps_x_to_longitude() {
        let encoded = encode_geometry(&Geometry::point(12.5, -7.25));
        assert_eq!(
            encoded,
            Some(KmlGeometry::Point(Coordinate {
                lon: 12.5,
                lat: -7.25
            }))
        );
    }

    #[test]
    fn test_polygon_rings_flattened_in_order() {
        let polygon = Geometry::polygon([
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)],
        ]);

        let Some(KmlGeometry::LineString(coords)) = encode_geometry(&polygon) else {
            panic!("Expected line string");
        };
        assert_eq!(coords.len(), 6);
        let lons: Vec<f64> = coords.iter().map(|c| c.lon).collect();
        assert_eq!(lons, [0.0, 1.0, 1.0, 5.0, 6.0, 6.0]);
    }

    #[test]
    fn test_polyline_paths_flattened_in_order() {
        let line = Geometry::polyline([vec![(0.0, 1.0), (2.0, 3.0)], vec![(4.0, 5.0)]]);

        let Some(KmlGeometry::LineString(coords)) = encode_geometry(&line) else {
            panic!("Expected line string");
        };
        assert_eq!(
            coords,
            [
                Coordinate::new(0.0, 1.0),
                Coordinate::new(2.0, 3.0),
                Coordinate::new(4.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_empty_polyline_is_empty_line_string() {
        let line = Geometry::Polyline { paths: Vec::new() };
        assert_eq!(encode_geometry(&line), Some(KmlGeometry::LineString(Vec::new())));
    }

    #[test]
    fn test_unsupported_shapes_have_no_geometry() {
        let multi = Geometry::MultiPoint {
            points: vec![MapPoint::new(1.0, 1.0)],
        };
        let envelope = Geometry::Envelope {
            min: MapPoint::new(0.0, 0.0),
            max: MapPoint::new(1.0, 1.0),
        };
        assert_eq!(encode_geometry(&multi), None);
        assert_eq!(encode_geometry(&envelope), None);
    }
}
