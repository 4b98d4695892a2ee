//! Outline of the reachable area
//!
//! Points are planar `geo::Point`s with `x = longitude` and `y = latitude`.
//! [`build_boundary`] always tries the convex hull first and only falls back
//! to the angular ring when the hull is degenerate (collinear input).
//! [`synthetic_boundary`] draws a circle-like ring when there are no points
//! at all, e.g. for mock data.
//!
//! Every non-empty [`Boundary`] is an explicitly closed ring of at least
//! four points.

mod angular;
mod hull;
mod synthetic;

use geo::{LineString, Point, Polygon};
use geojson::{Geometry, GeometryValue};
use hashbrown::HashSet;
use log::debug;
use serde::Serialize;
use wkt::ToWkt;

pub use synthetic::{SYNTHETIC_VERTEX_COUNT, WALKING_METERS_PER_MINUTE, synthetic_boundary};

/// How a boundary ring was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMethod {
    /// Fewer than three distinct points, nothing to draw
    Empty,
    ConvexHull,
    /// Points ordered by angle around their centroid. Not a true hull,
    /// interior points stay in the ring.
    AngularSort,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    ring: Vec<Point<f64>>,
    method: BoundaryMethod,
}

impl Boundary {
    pub fn empty() -> Self {
        Self {
            ring: Vec::new(),
            method: BoundaryMethod::Empty,
        }
    }

    /// Closes `vertices` by repeating the first one.
    /// Fewer than three vertices give an empty boundary.
    fn closed(mut vertices: Vec<Point<f64>>, method: BoundaryMethod) -> Self {
        if vertices.len() < 3 {
            return Self::empty();
        }
        vertices.push(vertices[0]);
        Self {
            ring: vertices,
            method,
        }
    }

    pub fn ring(&self) -> &[Point<f64>] {
        &self.ring
    }

    pub fn method(&self) -> BoundaryMethod {
        self.method
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Number of points in the ring, closing point included
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Ring as `[lat, lon]` pairs, the order map widgets usually expect
    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.ring.iter().map(|p| [p.y(), p.x()]).collect()
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.ring.clone()), vec![])
    }

    pub fn to_geojson_geometry(&self) -> Geometry {
        Geometry::new(GeometryValue::from(&self.to_polygon()))
    }

    /// `None` for an empty boundary, which has no meaningful WKT
    pub fn to_wkt_string(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_polygon().to_wkt().to_string())
    }
}

/// Closed polygon approximating the extent of `points`.
///
/// Non-finite points and duplicates are ignored. Returns an empty boundary
/// when fewer than three distinct points remain.
pub fn build_boundary(points: &[Point<f64>]) -> Boundary {
    let points = distinct_points(points);
    if points.len() < 3 {
        debug!("Only {} distinct points, no boundary", points.len());
        return Boundary::empty();
    }

    if let Some(hull) = hull::convex_hull(&points) {
        return Boundary::closed(hull, BoundaryMethod::ConvexHull);
    }

    debug!(
        "Convex hull of {} points is degenerate, ordering by angle instead",
        points.len()
    );
    Boundary::closed(angular::angular_ring(&points), BoundaryMethod::AngularSort)
}

/// Finite points with duplicates removed, first occurrence wins
fn distinct_points(points: &[Point<f64>]) -> Vec<Point<f64>> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|p| p.x().is_finite() && p.y().is_finite())
        // +0.0 and -0.0 are the same place
        .filter(|p| seen.insert(((p.x() + 0.0).to_bits(), (p.y() + 0.0).to_bits())))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Contains, Intersects, point};

    fn pt(lat: f64, lon: f64) -> Point<f64> {
        Point::new(lon, lat)
    }

    fn assert_closed(boundary: &Boundary) {
        let ring = boundary.ring();
        assert!(ring.len() >= 4, "ring too short: {ring:?}");
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn fewer_than_three_distinct_points_is_empty() {
        assert!(build_boundary(&[]).is_empty());
        assert!(build_boundary(&[pt(35.0, 139.0)]).is_empty());
        assert!(build_boundary(&[pt(35.0, 139.0), pt(35.1, 139.1)]).is_empty());

        let repeated = [pt(35.0, 139.0), pt(35.1, 139.1), pt(35.0, 139.0), pt(35.1, 139.1)];
        let boundary = build_boundary(&repeated);
        assert!(boundary.is_empty());
        assert_eq!(boundary.method(), BoundaryMethod::Empty);
        assert!(boundary.to_wkt_string().is_none());
    }

    #[test]
    fn triangle_is_its_own_hull() {
        let boundary = build_boundary(&[pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 0.0)]);
        assert_eq!(boundary.method(), BoundaryMethod::ConvexHull);
        assert_eq!(boundary.len(), 4);
        assert_closed(&boundary);
    }

    #[test]
    fn hull_drops_interior_points() {
        let points = [
            pt(0.0, 0.0),
            pt(0.0, 2.0),
            pt(2.0, 2.0),
            pt(2.0, 0.0),
            pt(1.0, 1.0),
            pt(0.5, 1.5),
        ];
        let boundary = build_boundary(&points);
        assert_eq!(boundary.method(), BoundaryMethod::ConvexHull);
        assert_eq!(boundary.len(), 5);
        assert!(!boundary.ring().contains(&pt(1.0, 1.0)));
        assert!((boundary.to_polygon().unsigned_area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let points = [pt(0.0, 0.0), pt(0.0, 2.0), pt(2.0, 2.0), pt(2.0, 0.0), pt(1.0, 1.0)];
        let polygon = build_boundary(&points).to_polygon();
        assert!(polygon.signed_area() > 0.0);
    }

    #[test]
    fn every_input_point_is_covered_by_the_hull() {
        // deterministic scatter around Tokyo station
        let points: Vec<Point<f64>> = (0..60u32)
            .map(|i| {
                let a = f64::from(i) * 2.399_963;
                let r = 0.001 * f64::from(i % 13 + 1);
                pt(35.68 + r * a.sin(), 139.77 + r * a.cos())
            })
            .collect();

        let boundary = build_boundary(&points);
        assert_eq!(boundary.method(), BoundaryMethod::ConvexHull);
        assert_closed(&boundary);

        let polygon = boundary.to_polygon();
        for p in &points {
            assert!(
                polygon.contains(p) || polygon.exterior().intersects(p),
                "{p:?} outside hull"
            );
        }
    }

    #[test]
    fn collinear_points_fall_back_to_angular_ring() {
        let points = [pt(35.0, 139.0), pt(35.5, 139.25), pt(36.0, 139.5), pt(36.5, 139.75)];
        let boundary = build_boundary(&points);
        assert_eq!(boundary.method(), BoundaryMethod::AngularSort);
        assert_eq!(boundary.len(), 5);
        assert_closed(&boundary);

        let three = [pt(0.0, 0.0), pt(0.5, 0.5), pt(1.0, 1.0)];
        let boundary = build_boundary(&three);
        assert_eq!(boundary.method(), BoundaryMethod::AngularSort);
        assert_eq!(boundary.len(), 4);
    }

    #[test]
    fn non_finite_points_are_ignored() {
        let points = [
            pt(f64::NAN, 139.0),
            pt(35.0, f64::INFINITY),
            pt(0.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 0.0),
        ];
        let boundary = build_boundary(&points);
        assert_eq!(boundary.len(), 4);
        assert!(boundary.ring().iter().all(|p| p.x().is_finite() && p.y().is_finite()));
    }

    #[test]
    fn signed_zero_is_one_point() {
        let points = [point!(x: 0.0, y: 0.0), point!(x: -0.0, y: -0.0), point!(x: 1.0, y: 0.0)];
        assert!(build_boundary(&points).is_empty());
    }

    #[test]
    fn exports_lat_lon_and_wkt() {
        let boundary = build_boundary(&[pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 0.0)]);
        let pairs = boundary.lat_lon_pairs();
        assert_eq!(pairs.first(), pairs.last());
        assert_eq!(pairs[0], [0.0, 0.0]);

        let wkt = boundary.to_wkt_string().unwrap();
        assert!(wkt.starts_with("POLYGON"));

        let geometry = serde_json::to_value(boundary.to_geojson_geometry()).unwrap();
        assert_eq!(geometry["type"], "Polygon");
    }
}
