use geo::Point;

use super::{Boundary, BoundaryMethod};
use crate::{Coordinate, Minutes};

/// Walking pace used to turn a time budget into a radius
pub const WALKING_METERS_PER_MINUTE: f64 = 80.0;

/// Vertices of the synthetic ring, one every 10 degrees
pub const SYNTHETIC_VERTEX_COUNT: usize = 36;

const KM_PER_DEGREE_LAT: f64 = 111.0;

const MAX_LON_SPAN: f64 = 180.0;

/// Regular polygon around `center` with the radius one could walk in
/// `minutes`, for when there is no point cloud to outline.
///
/// A zero budget gives an empty boundary. Near the poles the longitude span
/// is capped at 180 degrees and every vertex stays within WGS84 range.
pub fn synthetic_boundary(center: Coordinate, minutes: Minutes) -> Boundary {
    if minutes == 0 {
        return Boundary::empty();
    }

    let radius_km = f64::from(minutes) * WALKING_METERS_PER_MINUTE / 1000.0;
    let lat_span = radius_km / KM_PER_DEGREE_LAT;
    // longitude degrees shrink towards the poles
    let km_per_degree_lon = KM_PER_DEGREE_LAT * center.latitude().to_radians().cos();
    let lon_span = (radius_km / km_per_degree_lon.max(f64::EPSILON)).min(MAX_LON_SPAN);

    #[allow(clippy::cast_precision_loss)]
    let vertices = (0..SYNTHETIC_VERTEX_COUNT)
        .map(|i| {
            let angle = (i as f64 * 360.0 / SYNTHETIC_VERTEX_COUNT as f64).to_radians();
            Point::new(
                (center.longitude() + lon_span * angle.cos()).clamp(-180.0, 180.0),
                (center.latitude() + lat_span * angle.sin()).clamp(-90.0, 90.0),
            )
        })
        .collect();

    Boundary::closed(vertices, BoundaryMethod::Synthetic)
}
