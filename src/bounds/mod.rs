use crate::algebra::{compwise_max, compwise_min, Axis, Components, Vec3};
use crate::scalar::Scalar;

/// Axis-aligned bounding box over any vector cardinality.
///
/// An empty box carries inverted sentinels (the largest representable
/// coordinate on `minimum`, its negation on `maximum`), so the first
/// expansion establishes real bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox<V> {
    minimum: V,
    maximum: V,
}

impl<V: Components> BoundingBox<V> {
    #[must_use]
    pub fn new(minimum: V, maximum: V) -> Self {
        Self { minimum, maximum }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            minimum: V::splat(V::Element::from_f64(f64::MAX)),
            maximum: V::splat(V::Element::from_f64(-f64::MAX)),
        }
    }

    /// Smallest box containing every point in `points`.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[V]) -> Self {
        assert!(!points.is_empty(), "cannot bound an empty point set");
        let mut bbox = Self::empty();
        for point in points {
            bbox.expand_point(point);
        }
        bbox
    }

    #[must_use]
    pub fn minimum(&self) -> &V {
        &self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> &V {
        &self.maximum
    }

    /// Grows the box to contain `point`.
    pub fn expand_point(&mut self, point: &V) {
        self.minimum = compwise_min(&self.minimum, point);
        self.maximum = compwise_max(&self.maximum, point);
    }

    /// Grows the box to contain `other`.
    pub fn expand_box(&mut self, other: &Self) {
        self.minimum = compwise_min(&self.minimum, &other.minimum);
        self.maximum = compwise_max(&self.maximum, &other.maximum);
    }

    /// Uniformly inflates every face outward by `epsilon` (or deflates, for
    /// a negative `epsilon`).
    pub fn enlarge(&mut self, epsilon: &V::Element) {
        for i in 0..V::CARDINALITY {
            self.minimum[i] = self.minimum[i].clone() - epsilon.clone();
            self.maximum[i] = self.maximum[i].clone() + epsilon.clone();
        }
    }
}

impl<S: Scalar> BoundingBox<Vec3<S>> {
    /// Total face area of the box.
    #[must_use]
    pub fn surface_area(&self) -> S {
        let d = &self.maximum - &self.minimum;
        let two = S::one() + S::one();
        two * (d.x.clone() * d.y.clone() + d.x.clone() * d.z.clone() + d.y.clone() * d.z.clone())
    }

    /// Axis of greatest extent; ties break toward the lower axis index, so
    /// x beats y beats z.
    #[must_use]
    pub fn maximum_extent(&self) -> Axis {
        let d = &self.maximum - &self.minimum;
        if d.x >= d.y && d.x >= d.z {
            Axis::X
        } else if d.y >= d.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

/// Closed-interval overlap test; boxes sharing only a boundary still
/// intersect.
#[must_use]
pub fn intersect_bounding_boxes<V: Components>(a: &BoundingBox<V>, b: &BoundingBox<V>) -> bool {
    for i in 0..V::CARDINALITY {
        if a.minimum[i] > b.maximum[i] || a.maximum[i] < b.minimum[i] {
            return false;
        }
    }
    true
}

/// Closed-interval containment test; boundary points are inside.
#[must_use]
pub fn point_in_bounding_box<V: Components>(point: &V, bbox: &BoundingBox<V>) -> bool {
    for i in 0..V::CARDINALITY {
        if point[i] < bbox.minimum[i] || point[i] > bbox.maximum[i] {
            return false;
        }
    }
    true
}
