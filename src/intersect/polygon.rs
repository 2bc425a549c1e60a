use crate::algebra::{Axis, Vec2, Vec3};
use crate::scalar::{Scalar, Sign};

/// Classification of a query point against a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygon {
    /// Strictly interior.
    Interior,
    /// Strictly exterior.
    Exterior,
    /// On an edge, but not on an endpoint.
    OnEdge,
    /// Coincident with a vertex.
    OnVertex,
}

/// Ray-crossing point-in-polygon test.
///
/// Shifts the polygon so the query point is the origin, then counts edge
/// crossings of the rays leaving the origin to the right and to the left.
/// The side of each crossing is the sign product of the edge determinant
/// and its y-span, so no division happens and boundary cases stay exact.
#[must_use]
pub fn point_in_polygon_2d<S: Scalar>(
    q: &Vec2<S>,
    polygon_vertices: &[Vec2<S>],
) -> PointInPolygon {
    let n = polygon_vertices.len();
    let shifted: Vec<Vec2<S>> = polygon_vertices.iter().map(|v| v - q).collect();

    let mut right_crossings = 0_usize;
    let mut left_crossings = 0_usize;
    for i in 0..n {
        let vertex = &shifted[i];
        if vertex.x.sign().is_zero() && vertex.y.sign().is_zero() {
            return PointInPolygon::OnVertex;
        }
        let prev = &shifted[(i + n - 1) % n];

        let right_straddle = vertex.y.sign().is_positive() != prev.y.sign().is_positive();
        let left_straddle = vertex.y.sign().is_negative() != prev.y.sign().is_negative();
        if right_straddle || left_straddle {
            // sign of the x coordinate where the edge meets the ray
            let numerator =
                vertex.x.clone() * prev.y.clone() - prev.x.clone() * vertex.y.clone();
            let denominator = prev.y.clone() - vertex.y.clone();
            let crossing = numerator.sign() * denominator.sign();
            if right_straddle && crossing == Sign::Positive {
                right_crossings += 1;
            }
            if left_straddle && crossing == Sign::Negative {
                left_crossings += 1;
            }
        }
    }

    if right_crossings % 2 != left_crossings % 2 {
        return PointInPolygon::OnEdge;
    }
    if right_crossings % 2 == 1 {
        PointInPolygon::Interior
    } else {
        PointInPolygon::Exterior
    }
}

/// Projects a 3D point to 2D by dropping `largest_component`, keeping the
/// two remaining axes in cyclic order. Nothing is renormalized: only the
/// relative orientation matters to the crossing test, and that survives the
/// projection along the dominant normal axis.
#[must_use]
pub fn project_point_to_2d<S: Scalar>(p: &Vec3<S>, largest_component: Axis) -> Vec2<S> {
    let (u, v) = largest_component.complement();
    Vec2::new(p[u].clone(), p[v].clone())
}

/// Projects every vertex of a polygon via [`project_point_to_2d`].
#[must_use]
pub fn project_polygon_to_2d<S: Scalar>(
    polygon_vertices: &[Vec3<S>],
    largest_component: Axis,
) -> Vec<Vec2<S>> {
    polygon_vertices
        .iter()
        .map(|p| project_point_to_2d(p, largest_component))
        .collect()
}

/// 3D point-in-polygon test for a point coplanar with the polygon: projects
/// both along the polygon's dominant normal axis and defers to the 2D
/// crossing test.
#[must_use]
pub fn point_in_polygon_3d<S: Scalar>(
    p: &Vec3<S>,
    polygon_vertices: &[Vec3<S>],
    largest_component: Axis,
) -> PointInPolygon {
    let projected = project_polygon_to_2d(polygon_vertices, largest_component);
    point_in_polygon_2d(&project_point_to_2d(p, largest_component), &projected)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::predicates::polygon_plane_coefficients;
    use crate::scalar::Rational;

    fn p2(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }

    fn p3(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z)
    }

    fn unit_square() -> Vec<Vec2<f64>> {
        vec![p2(0.0, 0.0), p2(1.0, 0.0), p2(1.0, 1.0), p2(0.0, 1.0)]
    }

    #[test]
    fn unit_square_classification() {
        let square = unit_square();
        assert_eq!(
            point_in_polygon_2d(&p2(0.5, 0.5), &square),
            PointInPolygon::Interior
        );
        assert_eq!(
            point_in_polygon_2d(&p2(2.0, 2.0), &square),
            PointInPolygon::Exterior
        );
        assert_eq!(
            point_in_polygon_2d(&p2(0.5, 0.0), &square),
            PointInPolygon::OnEdge
        );
        assert_eq!(
            point_in_polygon_2d(&p2(0.0, 0.0), &square),
            PointInPolygon::OnVertex
        );
    }

    #[test]
    fn edges_other_than_the_bottom_are_detected() {
        let square = unit_square();
        assert_eq!(
            point_in_polygon_2d(&p2(1.0, 0.5), &square),
            PointInPolygon::OnEdge
        );
        assert_eq!(
            point_in_polygon_2d(&p2(0.0, 0.5), &square),
            PointInPolygon::OnEdge
        );
        assert_eq!(
            point_in_polygon_2d(&p2(0.5, 1.0), &square),
            PointInPolygon::OnEdge
        );
    }

    #[test]
    fn concave_polygon_classification() {
        // an L-shape: the notch at (1.5, 1.5) is outside
        let l_shape = vec![
            p2(0.0, 0.0),
            p2(2.0, 0.0),
            p2(2.0, 1.0),
            p2(1.0, 1.0),
            p2(1.0, 2.0),
            p2(0.0, 2.0),
        ];
        assert_eq!(
            point_in_polygon_2d(&p2(0.5, 0.5), &l_shape),
            PointInPolygon::Interior
        );
        assert_eq!(
            point_in_polygon_2d(&p2(1.5, 1.5), &l_shape),
            PointInPolygon::Exterior
        );
        assert_eq!(
            point_in_polygon_2d(&p2(0.5, 1.5), &l_shape),
            PointInPolygon::Interior
        );
    }

    #[test]
    fn exact_classification_of_quantized_points() {
        let q = |value: f64| Rational::quantize(value, 2.0);
        let square = vec![
            Vec2::new(q(0.0), q(0.0)),
            Vec2::new(q(1.0), q(0.0)),
            Vec2::new(q(1.0), q(1.0)),
            Vec2::new(q(0.0), q(1.0)),
        ];
        assert_eq!(
            point_in_polygon_2d(&Vec2::new(q(0.5), q(0.5)), &square),
            PointInPolygon::Interior
        );
        assert_eq!(
            point_in_polygon_2d(&Vec2::new(q(0.5), q(0.0)), &square),
            PointInPolygon::OnEdge
        );
        assert_eq!(
            point_in_polygon_2d(&Vec2::new(q(1.0), q(1.0)), &square),
            PointInPolygon::OnVertex
        );
        assert_eq!(
            point_in_polygon_2d(&Vec2::new(q(2.0), q(2.0)), &square),
            PointInPolygon::Exterior
        );
    }

    #[test]
    fn projection_drops_the_dominant_axis() {
        let point = p3(1.0, 2.0, 3.0);
        assert_eq!(project_point_to_2d(&point, Axis::Z), p2(1.0, 2.0));
        assert_eq!(project_point_to_2d(&point, Axis::X), p2(2.0, 3.0));
        assert_eq!(project_point_to_2d(&point, Axis::Y), p2(3.0, 1.0));
    }

    #[test]
    fn polygon_in_space_classifies_through_projection() {
        let square = vec![
            p3(0.0, 0.0, 2.0),
            p3(1.0, 0.0, 2.0),
            p3(1.0, 1.0, 2.0),
            p3(0.0, 1.0, 2.0),
        ];
        let plane = polygon_plane_coefficients(&square).unwrap();
        assert_eq!(
            point_in_polygon_3d(&p3(0.5, 0.5, 2.0), &square, plane.largest_component),
            PointInPolygon::Interior
        );
        assert_eq!(
            point_in_polygon_3d(&p3(5.0, 5.0, 2.0), &square, plane.largest_component),
            PointInPolygon::Exterior
        );
        assert_eq!(
            point_in_polygon_3d(&p3(0.5, 0.0, 2.0), &square, plane.largest_component),
            PointInPolygon::OnEdge
        );
        assert_eq!(
            point_in_polygon_3d(&p3(1.0, 1.0, 2.0), &square, plane.largest_component),
            PointInPolygon::OnVertex
        );
    }

    #[test]
    fn vertical_polygon_projects_along_its_own_normal() {
        // a square in the x = 1 plane; the dominant normal axis is X
        let square = vec![
            p3(1.0, 0.0, 0.0),
            p3(1.0, 1.0, 0.0),
            p3(1.0, 1.0, 1.0),
            p3(1.0, 0.0, 1.0),
        ];
        let plane = polygon_plane_coefficients(&square).unwrap();
        assert_eq!(plane.largest_component, Axis::X);
        assert_eq!(
            point_in_polygon_3d(&p3(1.0, 0.5, 0.5), &square, plane.largest_component),
            PointInPolygon::Interior
        );
        assert_eq!(
            point_in_polygon_3d(&p3(1.0, 3.0, 0.5), &square, plane.largest_component),
            PointInPolygon::Exterior
        );
    }
}
