use crate::algebra::{cross_product, dot_product, Vec3};
use crate::predicates::{orient3d, PolygonPlane};
use crate::scalar::{Scalar, Sign};

/// Outcome of intersecting an infinite line with a polygon's plane.
#[derive(Debug, Clone, PartialEq)]
pub enum LinePlaneIntersection<S> {
    /// Line is parallel to the plane.
    Parallel,
    /// Unique intersection point.
    Point(Vec3<S>),
    /// Both defining points of the line lie in the plane.
    InPlane,
}

/// Intersects the infinite line through `q` and `r` with a polygon's plane.
///
/// The plane equation is solved parametrically along the line; a vanishing
/// denominator is the exact parallel case, decided by sign rather than by
/// any threshold.
#[must_use]
pub fn line_plane_intersect<S: Scalar>(
    q: &Vec3<S>,
    r: &Vec3<S>,
    plane: &PolygonPlane<S>,
) -> LinePlaneIntersection<S> {
    let numerator = -(dot_product(&plane.normal, q) + plane.d_coeff.clone());
    let direction = r - q;
    let denominator = dot_product(&plane.normal, &direction);

    if denominator.sign().is_zero() {
        if numerator.sign().is_zero() {
            return LinePlaneIntersection::InPlane;
        }
        return LinePlaneIntersection::Parallel;
    }

    let t = numerator / denominator;
    LinePlaneIntersection::Point(q + &(&direction * t))
}

/// Outcome of intersecting the bounded segment `q..r` with a plane.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPlaneIntersection<S> {
    /// Segment lies wholly within the plane.
    InPlane,
    /// Only the first endpoint `q` lies on the plane.
    StartOnPlane(Vec3<S>),
    /// Only the second endpoint `r` lies on the plane.
    EndOnPlane(Vec3<S>),
    /// Segment lies strictly to one side of the plane.
    Disjoint,
    /// Proper crossing at the carried interior point.
    Crossing(Vec3<S>),
}

/// Intersects the segment `q..r` with the plane `normal . p + d_coeff = 0`.
///
/// Classification compares the parametric position exactly against the
/// segment ends; no epsilon is involved in any branch.
#[must_use]
pub fn segment_plane_intersect<S: Scalar>(
    normal: &Vec3<S>,
    d_coeff: &S,
    q: &Vec3<S>,
    r: &Vec3<S>,
) -> SegmentPlaneIntersection<S> {
    let numerator = -(dot_product(normal, q) + d_coeff.clone());
    let direction = r - q;
    let denominator = dot_product(normal, &direction);

    if denominator.sign().is_zero() {
        if numerator.sign().is_zero() {
            return SegmentPlaneIntersection::InPlane;
        }
        return SegmentPlaneIntersection::Disjoint;
    }

    let t = numerator / denominator;
    let zero = S::zero();
    let one = S::one();
    if t == zero {
        SegmentPlaneIntersection::StartOnPlane(q.clone())
    } else if t == one {
        SegmentPlaneIntersection::EndOnPlane(r.clone())
    } else if zero < t && t < one {
        SegmentPlaneIntersection::Crossing(q + &(&direction * t))
    } else {
        SegmentPlaneIntersection::Disjoint
    }
}

/// Classification-only variant of the segment/plane test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPlaneRelation {
    InPlane,
    StartOnPlane,
    EndOnPlane,
    Disjoint,
    Crossing,
}

/// Classifies the segment `q..r` against the plane spanned by a polygon,
/// using only the signs of `orient3d` evaluations of the endpoints against a
/// non-collinear vertex triple.
///
/// # Panics
///
/// Panics if every vertex triple of the polygon is collinear; a degenerate
/// polygon is a caller precondition breach.
#[must_use]
pub fn segment_plane_relation<S: Scalar>(
    q: &Vec3<S>,
    r: &Vec3<S>,
    polygon_vertices: &[Vec3<S>],
) -> SegmentPlaneRelation {
    let (a, b, c) = noncollinear_triple(polygon_vertices);
    let q_side = orient3d(a, b, c, q);
    let r_side = orient3d(a, b, c, r);
    match (q_side, r_side) {
        (Sign::Zero, Sign::Zero) => SegmentPlaneRelation::InPlane,
        (Sign::Zero, _) => SegmentPlaneRelation::StartOnPlane,
        (_, Sign::Zero) => SegmentPlaneRelation::EndOnPlane,
        (q_side, r_side) if q_side == r_side => SegmentPlaneRelation::Disjoint,
        _ => SegmentPlaneRelation::Crossing,
    }
}

fn noncollinear_triple<S: Scalar>(vertices: &[Vec3<S>]) -> (&Vec3<S>, &Vec3<S>, &Vec3<S>) {
    let n = vertices.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let u = &vertices[j] - &vertices[i];
                let v = &vertices[k] - &vertices[i];
                let cross = cross_product(&u, &v);
                let vanishes = cross.x.sign().is_zero()
                    && cross.y.sign().is_zero()
                    && cross.z.sign().is_zero();
                if !vanishes {
                    return (&vertices[i], &vertices[j], &vertices[k]);
                }
            }
        }
    }
    panic!("polygon with {n} vertices has no non-collinear vertex triple");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::predicates::polygon_plane_coefficients;
    use crate::scalar::Rational;

    fn p(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z)
    }

    fn unit_square_xy() -> Vec<Vec3<f64>> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    // -- line_plane_intersect --

    #[test]
    fn line_crosses_the_plane() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = line_plane_intersect(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 1.0), &plane);
        match result {
            LinePlaneIntersection::Point(point) => {
                assert!((point.x - 0.5).abs() < 1e-12);
                assert!((point.y - 0.5).abs() < 1e-12);
                assert!(point.z.abs() < 1e-12);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn line_beyond_the_segment_extent_still_intersects() {
        // the line is infinite, so an intersection far outside q..r counts
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = line_plane_intersect(&p(0.0, 0.0, 1.0), &p(0.0, 0.0, 2.0), &plane);
        match result {
            LinePlaneIntersection::Point(point) => assert!(point.z.abs() < 1e-12),
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn line_parallel_to_the_plane() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = line_plane_intersect(&p(0.0, 0.0, 1.0), &p(1.0, 0.0, 1.0), &plane);
        assert_eq!(result, LinePlaneIntersection::Parallel);
    }

    #[test]
    fn line_within_the_plane() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = line_plane_intersect(&p(0.2, 0.2, 0.0), &p(0.8, 0.9, 0.0), &plane);
        assert_eq!(result, LinePlaneIntersection::InPlane);
    }

    // -- segment_plane_intersect --

    #[test]
    fn segment_crosses_the_plane() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = segment_plane_intersect(
            &plane.normal,
            &plane.d_coeff,
            &p(0.5, 0.5, -2.0),
            &p(0.5, 0.5, 2.0),
        );
        match result {
            SegmentPlaneIntersection::Crossing(point) => {
                assert!(point.z.abs() < 1e-12);
            }
            other => panic!("expected Crossing, got {other:?}"),
        }
    }

    #[test]
    fn segment_touching_with_its_first_endpoint() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let q = p(0.5, 0.5, 0.0);
        let r = p(0.5, 0.5, 3.0);
        let result = segment_plane_intersect(&plane.normal, &plane.d_coeff, &q, &r);
        assert_eq!(result, SegmentPlaneIntersection::StartOnPlane(q));
    }

    #[test]
    fn segment_touching_with_its_second_endpoint() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let q = p(0.5, 0.5, 3.0);
        let r = p(0.5, 0.5, 0.0);
        let result = segment_plane_intersect(&plane.normal, &plane.d_coeff, &q, &r);
        assert_eq!(result, SegmentPlaneIntersection::EndOnPlane(r));
    }

    #[test]
    fn segment_strictly_to_one_side() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = segment_plane_intersect(
            &plane.normal,
            &plane.d_coeff,
            &p(0.0, 0.0, 1.0),
            &p(0.0, 0.0, 2.0),
        );
        assert_eq!(result, SegmentPlaneIntersection::Disjoint);
        let parallel = segment_plane_intersect(
            &plane.normal,
            &plane.d_coeff,
            &p(0.0, 0.0, 1.0),
            &p(1.0, 1.0, 1.0),
        );
        assert_eq!(parallel, SegmentPlaneIntersection::Disjoint);
    }

    #[test]
    fn segment_wholly_within_the_plane() {
        let plane = polygon_plane_coefficients(&unit_square_xy()).unwrap();
        let result = segment_plane_intersect(
            &plane.normal,
            &plane.d_coeff,
            &p(0.1, 0.1, 0.0),
            &p(0.9, 0.2, 0.0),
        );
        assert_eq!(result, SegmentPlaneIntersection::InPlane);
    }

    // -- segment_plane_relation --

    #[test]
    fn relation_matches_the_constructive_test() {
        let square = unit_square_xy();
        assert_eq!(
            segment_plane_relation(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 1.0), &square),
            SegmentPlaneRelation::Crossing
        );
        assert_eq!(
            segment_plane_relation(&p(0.5, 0.5, 0.0), &p(0.5, 0.5, 1.0), &square),
            SegmentPlaneRelation::StartOnPlane
        );
        assert_eq!(
            segment_plane_relation(&p(0.5, 0.5, 1.0), &p(0.5, 0.5, 0.0), &square),
            SegmentPlaneRelation::EndOnPlane
        );
        assert_eq!(
            segment_plane_relation(&p(0.0, 0.0, 1.0), &p(1.0, 1.0, 2.0), &square),
            SegmentPlaneRelation::Disjoint
        );
        assert_eq!(
            segment_plane_relation(&p(0.1, 0.1, 0.0), &p(0.9, 0.9, 0.0), &square),
            SegmentPlaneRelation::InPlane
        );
    }

    #[test]
    fn relation_skips_collinear_leading_vertices() {
        // first three vertices are collinear; the classifier must look past
        // them for a spanning triple
        let polygon = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        assert_eq!(
            segment_plane_relation(&p(1.0, 1.0, -1.0), &p(1.0, 1.0, 1.0), &polygon),
            SegmentPlaneRelation::Crossing
        );
    }

    #[test]
    fn exact_segment_crossing() {
        let square = vec![
            Vec3::new(Rational::from(0), Rational::from(0), Rational::from(0)),
            Vec3::new(Rational::from(2), Rational::from(0), Rational::from(0)),
            Vec3::new(Rational::from(2), Rational::from(2), Rational::from(0)),
            Vec3::new(Rational::from(0), Rational::from(2), Rational::from(0)),
        ];
        let q = Vec3::new(Rational::from(1), Rational::from(1), Rational::from(-1));
        let r = Vec3::new(Rational::from(1), Rational::from(1), Rational::from(1));
        assert_eq!(
            segment_plane_relation(&q, &r, &square),
            SegmentPlaneRelation::Crossing
        );

        let plane = polygon_plane_coefficients(&square).unwrap();
        match segment_plane_intersect(&plane.normal, &plane.d_coeff, &q, &r) {
            SegmentPlaneIntersection::Crossing(point) => {
                assert_eq!(point.z.sign(), Sign::Zero);
                assert_eq!(point.x, Rational::from(1));
            }
            other => panic!("expected Crossing, got {other:?}"),
        }
    }
}
