use geo::{Area, ConvexHull, MultiPoint, Point};

/// Convex hull vertices of `points`, without the closing point.
///
/// Vertices come counter-clockwise (x = longitude, y = latitude), starting
/// at the smallest longitude. Returns `None` when the hull has no area,
/// i.e. the input is collinear or has fewer than three distinct points.
pub(super) fn convex_hull(points: &[Point<f64>]) -> Option<Vec<Point<f64>>> {
    let hull = MultiPoint::from(points.to_vec()).convex_hull();
    if hull.unsigned_area() <= 0.0 {
        return None;
    }

    let mut vertices: Vec<Point<f64>> = hull.exterior().points().collect();
    // exterior rings are closed
    vertices.pop();
    if vertices.len() < 3 {
        return None;
    }

    let start = vertices
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.x().total_cmp(&b.x()).then_with(|| a.y().total_cmp(&b.y())))
        .map_or(0, |(idx, _)| idx);
    vertices.rotate_left(start);
    Some(vertices)
}
