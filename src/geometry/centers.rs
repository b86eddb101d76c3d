// SPDX-License-Identifier: MPL-2.0
//! Closed-form constructions for the four classical triangle centers.
//!
//! Each function is a pure, O(1) map from three vertices to one point.
//! None of them guards against collinear input: the centroid and incenter
//! are defined for any non-coincident vertices, while the circumcenter and
//! orthocenter divide by a quantity that vanishes for a flat triangle and
//! then return infinite or NaN coordinates.

use super::Triangle;
use iced::Point;

/// Arithmetic mean of the three vertices. Always defined.
#[must_use]
pub fn centroid(triangle: &Triangle) -> Point {
    let [a, b, c] = *triangle.vertices();
    Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Intersection of the perpendicular bisectors, via the standard
/// determinant formula. Non-finite when the vertices are collinear
/// (the denominator vanishes with the signed area).
#[must_use]
pub fn circumcenter(triangle: &Triangle) -> Point {
    let [a, b, c] = *triangle.vertices();

    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    let a_sq = a.x * a.x + a.y * a.y;
    let b_sq = b.x * b.x + b.y * b.y;
    let c_sq = c.x * c.x + c.y * c.y;

    let x = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
    let y = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

    Point::new(x, y)
}

/// Average of the vertices weighted by the length of the opposite side.
/// Defined for every triangle whose vertices do not all coincide.
#[must_use]
pub fn incenter(triangle: &Triangle) -> Point {
    let [a, b, c] = *triangle.vertices();

    // Side lengths named after the opposite vertex.
    let side_a = b.distance(c);
    let side_b = c.distance(a);
    let side_c = a.distance(b);
    let perimeter = side_a + side_b + side_c;

    Point::new(
        (side_a * a.x + side_b * b.x + side_c * c.x) / perimeter,
        (side_a * a.y + side_b * b.y + side_c * c.y) / perimeter,
    )
}

/// Intersection of the altitudes from A and B, via the slopes of the sides
/// they are perpendicular to. Non-finite when side BC or CA is vertical or
/// horizontal, or when the two altitudes are parallel (collinear vertices).
#[must_use]
pub fn orthocenter(triangle: &Triangle) -> Point {
    let [a, b, c] = *triangle.vertices();

    let m1 = (b.y - c.y) / (b.x - c.x);
    let m2 = (c.y - a.y) / (c.x - a.x);

    // Altitude slopes: perpendicular to BC through A, to CA through B.
    let p1 = -1.0 / m1;
    let p2 = -1.0 / m2;

    let x = (p1 * a.x - p2 * b.x + b.y - a.y) / (p1 - p2);
    let y = p1 * (x - a.x) + a.y;

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CenterKind;

    fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    fn assert_close(actual: Point, expected: Point, tolerance: f32) {
        assert!(
            (actual.x - expected.x).abs() < tolerance
                && (actual.y - expected.y).abs() < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    /// Unsigned distance from `point` to the infinite line through `from`/`to`.
    fn distance_to_line(point: Point, from: Point, to: Point) -> f32 {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let cross = dx * (point.y - from.y) - dy * (point.x - from.x);
        cross.abs() / from.distance(to)
    }

    #[test]
    fn centroid_is_the_vertex_mean() {
        let t = triangle((0.0, 0.0), (6.0, 0.0), (3.0, 9.0));
        assert_close(centroid(&t), Point::new(3.0, 3.0), 1e-6);
    }

    #[test]
    fn all_centers_coincide_for_an_equilateral_triangle() {
        let height = 3.0 * 3.0_f32.sqrt();
        let t = triangle((0.0, 0.0), (6.0, 0.0), (3.0, height));
        let reference = centroid(&t);

        for kind in CenterKind::ALL {
            assert_close(kind.position(&t), reference, 1e-3);
        }
    }

    #[test]
    fn circumcenter_is_equidistant_from_the_vertices() {
        let t = triangle((10.0, 20.0), (250.0, 60.0), (120.0, 310.0));
        let center = circumcenter(&t);
        let [a, b, c] = *t.vertices();

        let ra = center.distance(a);
        let rb = center.distance(b);
        let rc = center.distance(c);

        assert!((ra - rb).abs() < ra * 1e-3, "r_a={ra}, r_b={rb}");
        assert!((ra - rc).abs() < ra * 1e-3, "r_a={ra}, r_c={rc}");
    }

    #[test]
    fn incenter_is_equidistant_from_the_sides() {
        let t = triangle((30.0, 350.0), (370.0, 330.0), (180.0, 40.0));
        let center = incenter(&t);
        let [a, b, c] = *t.vertices();

        let d_ab = distance_to_line(center, a, b);
        let d_bc = distance_to_line(center, b, c);
        let d_ca = distance_to_line(center, c, a);

        assert!((d_ab - d_bc).abs() < d_ab * 1e-3, "d_ab={d_ab}, d_bc={d_bc}");
        assert!((d_ab - d_ca).abs() < d_ab * 1e-3, "d_ab={d_ab}, d_ca={d_ca}");
    }

    #[test]
    fn orthocenter_of_a_known_triangle() {
        // Altitude from A has slope 1 through the origin, altitude from B
        // has slope -1/3 through (4, 0); they meet at (1, 1).
        let t = triangle((0.0, 0.0), (4.0, 0.0), (1.0, 3.0));
        assert_close(orthocenter(&t), Point::new(1.0, 1.0), 1e-4);
    }

    #[test]
    fn orthocenter_lies_on_both_constructed_altitudes() {
        let t = triangle((50.0, 320.0), (330.0, 280.0), (140.0, 60.0));
        let h = orthocenter(&t);
        let [a, b, c] = *t.vertices();

        // (H - A) ⟂ (C - B) and (H - B) ⟂ (A - C), up to rounding.
        let cos_a = ((h.x - a.x) * (c.x - b.x) + (h.y - a.y) * (c.y - b.y))
            / (h.distance(a) * b.distance(c));
        let cos_b = ((h.x - b.x) * (a.x - c.x) + (h.y - b.y) * (a.y - c.y))
            / (h.distance(b) * c.distance(a));

        assert!(cos_a.abs() < 1e-3, "altitude from A is skewed: {cos_a}");
        assert!(cos_b.abs() < 1e-3, "altitude from B is skewed: {cos_b}");
    }

    #[test]
    fn collinear_vertices_break_the_circumcenter() {
        let t = triangle((0.0, 0.0), (100.0, 100.0), (200.0, 200.0));
        let center = circumcenter(&t);
        assert!(!center.x.is_finite() || !center.y.is_finite());
    }

    #[test]
    fn collinear_vertices_break_the_orthocenter() {
        let t = triangle((0.0, 0.0), (100.0, 100.0), (200.0, 200.0));
        let center = orthocenter(&t);
        assert!(!center.x.is_finite() || !center.y.is_finite());
    }

    #[test]
    fn horizontal_base_breaks_the_orthocenter_slope_form() {
        // Side BC is horizontal, so the altitude from A has no finite slope.
        let t = triangle((200.0, 100.0), (100.0, 300.0), (300.0, 300.0));
        let center = orthocenter(&t);
        assert!(!center.x.is_finite() || !center.y.is_finite());
    }
}
