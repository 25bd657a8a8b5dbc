//! Drawing-space polygon area

use crate::segment::Point;

/// Unsigned area of a simple polygon (shoelace formula)
///
/// The polygon is implicitly closed; a trailing copy of the first vertex adds
/// a zero-length edge and does not change the result. Winding order does not
/// matter. Self-intersecting input yields a number without geometric meaning.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }
    (area / 2.0).abs()
}
