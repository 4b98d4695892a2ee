use geo::{Centroid, MultiPoint, Point};

/// Points ordered by their angle around the centroid.
///
/// This is an approximation of an outline, not a hull: every input point
/// ends up in the ring, interior ones included. The angle is
/// `atan2(lon - centroid_lon, lat - centroid_lat)`, sorted ascending; points
/// at equal angles keep their input order.
pub(super) fn angular_ring(points: &[Point<f64>]) -> Vec<Point<f64>> {
    let Some(centre) = MultiPoint::from(points.to_vec()).centroid() else {
        return Vec::new();
    };
    let (centre_lon, centre_lat) = (centre.x(), centre.y());

    let mut ring = points.to_vec();
    ring.sort_by(|a, b| {
        let angle_a = (a.x() - centre_lon).atan2(a.y() - centre_lat);
        let angle_b = (b.x() - centre_lon).atan2(b.y() - centre_lat);
        angle_a.total_cmp(&angle_b)
    });
    ring
}
