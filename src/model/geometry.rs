//! Feature geometry in decimal degrees (x = longitude, y = latitude).

/// A single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Shapes a map layer can hold.
///
/// Only `Point`, `Polyline` and `Polygon` have a KML rendition; the other
/// shapes export as placemarks without geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(MapPoint),
    Polyline { paths: Vec<Vec<MapPoint>> },
    Polygon { rings: Vec<Vec<MapPoint>> },
    MultiPoint { points: Vec<MapPoint> },
    Envelope { min: MapPoint, max: MapPoint },
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(MapPoint::new(x, y))
    }

    pub fn polyline<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = (f64, f64)>,
    {
        Geometry::Polyline {
            paths: collect_parts(paths),
        }
    }

    pub fn polygon<I, P>(rings: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = (f64, f64)>,
    {
        Geometry::Polygon {
            rings: collect_parts(rings),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::Polyline { .. } => "polyline",
            Geometry::Polygon { .. } => "polygon",
            Geometry::MultiPoint { .. } => "multipoint",
            Geometry::Envelope { .. } => "envelope",
        }
    }
}

fn collect_parts<I, P>(parts: I) -> Vec<Vec<MapPoint>>
where
    I: IntoIterator<Item = P>,
    P: IntoIterator<Item = (f64, f64)>,
{
    parts
        .into_iter()
        .map(|part| part.into_iter().map(MapPoint::from).collect())
        .collect()
}
