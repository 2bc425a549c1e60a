use crate::algebra::Vec2;
use crate::predicates::collinear;
use crate::scalar::Scalar;

/// Outcome of intersecting two 2D segments.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentSegmentIntersection<S> {
    /// The segments share no point.
    Disjoint,
    /// Proper interior crossing; `s` and `t` locate `point` on the first
    /// and second segment, both strictly inside `(0, 1)`.
    Proper { point: Vec2<S>, s: S, t: S },
    /// An endpoint of one segment lies on the other segment; `s` and `t`
    /// are in `[0, 1]` with at least one exactly at an end.
    Vertex { point: Vec2<S>, s: S, t: S },
    /// The segments collinearly overlap; `point` is one shared point.
    CollinearOverlap { point: Vec2<S> },
}

/// Parametric intersection of segments `a..b` and `c..d`.
///
/// A vanishing denominator routes to [`parallel_segments_intersect`] before
/// any division takes place, so the near-parallel case never divides by a
/// near-zero value. All endpoint classification is by exact comparison of
/// the parameters against 0 and 1.
#[must_use]
pub fn segment_segment_intersect<S: Scalar>(
    a: &Vec2<S>,
    b: &Vec2<S>,
    c: &Vec2<S>,
    d: &Vec2<S>,
) -> SegmentSegmentIntersection<S> {
    let denominator = a.x.clone() * (d.y.clone() - c.y.clone())
        + b.x.clone() * (c.y.clone() - d.y.clone())
        + d.x.clone() * (b.y.clone() - a.y.clone())
        + c.x.clone() * (a.y.clone() - b.y.clone());
    if denominator.sign().is_zero() {
        return parallel_segments_intersect(a, b, c, d);
    }

    let s_numerator = a.x.clone() * (d.y.clone() - c.y.clone())
        + c.x.clone() * (a.y.clone() - d.y.clone())
        + d.x.clone() * (c.y.clone() - a.y.clone());
    let t_numerator = -(a.x.clone() * (c.y.clone() - b.y.clone())
        + b.x.clone() * (a.y.clone() - c.y.clone())
        + c.x.clone() * (b.y.clone() - a.y.clone()));

    let s = s_numerator / denominator.clone();
    let t = t_numerator / denominator;

    let zero = S::zero();
    let one = S::one();
    let point = a + &(&(b - a) * s.clone());

    if zero < s && s < one && zero < t && t < one {
        SegmentSegmentIntersection::Proper { point, s, t }
    } else if s < zero || one < s || t < zero || one < t {
        SegmentSegmentIntersection::Disjoint
    } else {
        // at least one parameter sits exactly on a segment end
        SegmentSegmentIntersection::Vertex { point, s, t }
    }
}

/// Intersection of two parallel segments: the precursor path taken when the
/// generic denominator vanishes. Collinearity is decided by `orient2d`,
/// overlap by exact betweenness along the dominant axis.
#[must_use]
pub fn parallel_segments_intersect<S: Scalar>(
    a: &Vec2<S>,
    b: &Vec2<S>,
    c: &Vec2<S>,
    d: &Vec2<S>,
) -> SegmentSegmentIntersection<S> {
    if !collinear(a, b, c) {
        return SegmentSegmentIntersection::Disjoint;
    }
    if between(a, b, c) {
        return SegmentSegmentIntersection::CollinearOverlap { point: c.clone() };
    }
    if between(a, b, d) {
        return SegmentSegmentIntersection::CollinearOverlap { point: d.clone() };
    }
    if between(c, d, a) {
        return SegmentSegmentIntersection::CollinearOverlap { point: a.clone() };
    }
    if between(c, d, b) {
        return SegmentSegmentIntersection::CollinearOverlap { point: b.clone() };
    }
    SegmentSegmentIntersection::Disjoint
}

/// Is `c`, known collinear with `a..b`, within the segment? Compared along
/// whichever axis the segment has extent on.
fn between<S: Scalar>(a: &Vec2<S>, b: &Vec2<S>, c: &Vec2<S>) -> bool {
    if a.x != b.x {
        (a.x <= c.x && c.x <= b.x) || (b.x <= c.x && c.x <= a.x)
    } else {
        (a.y <= c.y && c.y <= b.y) || (b.y <= c.y && c.y <= a.y)
    }
}
