pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{Axis, Components, Vec2, Vec3};

use crate::error::{GeometryError, Result};
use crate::scalar::{Scalar, Sign};

/// Dot product over any vector cardinality.
#[must_use]
pub fn dot_product<V: Components>(a: &V, b: &V) -> V::Element {
    let mut out = V::Element::zero();
    for i in 0..V::CARDINALITY {
        out += a[i].clone() * b[i].clone();
    }
    out
}

/// Squared Euclidean length; stays inside the scalar domain.
#[must_use]
pub fn squared_length<V: Components>(v: &V) -> V::Element {
    dot_product(v, v)
}

/// Euclidean length.
///
/// Routes through [`Scalar::square_root`], so in the exact realization the
/// result passes through the documented lossy float round-trip; `multiplier`
/// must bound the resulting length.
#[must_use]
pub fn length<V: Components>(v: &V, multiplier: f64) -> V::Element {
    squared_length(v).square_root(multiplier)
}

/// Unit-length copy of `v`, subject to the precision notes on [`length`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has zero length.
pub fn normalize<V: Components>(v: &V, multiplier: f64) -> Result<V> {
    let len = length(v, multiplier);
    if len.sign() == Sign::Zero {
        return Err(GeometryError::ZeroVector);
    }
    let mut out = v.clone();
    for i in 0..V::CARDINALITY {
        out[i] = v[i].clone() / len.clone();
    }
    Ok(out)
}

/// 3D cross product.
#[must_use]
pub fn cross_product<S: Scalar>(a: &Vec3<S>, b: &Vec3<S>) -> Vec3<S> {
    Vec3::new(
        a.y.clone() * b.z.clone() - a.z.clone() * b.y.clone(),
        a.z.clone() * b.x.clone() - a.x.clone() * b.z.clone(),
        a.x.clone() * b.y.clone() - a.y.clone() * b.x.clone(),
    )
}

/// Rank-1 matrix `a * b^T`; the cardinality selects the 2x2 or 3x3 shape.
#[must_use]
pub fn outer_product<V: Components>(a: &V, b: &V) -> Matrix<V::Element> {
    let mut out = Matrix::new(V::CARDINALITY, V::CARDINALITY);
    for row in 0..V::CARDINALITY {
        for col in 0..V::CARDINALITY {
            out[(row, col)] = a[row].clone() * b[col].clone();
        }
    }
    out
}

/// Componentwise minimum, used to grow bounding boxes.
#[must_use]
pub fn compwise_min<V: Components>(a: &V, b: &V) -> V {
    let mut out = a.clone();
    for i in 0..V::CARDINALITY {
        out[i] = a[i].clone().min(b[i].clone());
    }
    out
}

/// Componentwise maximum, used to grow bounding boxes.
#[must_use]
pub fn compwise_max<V: Components>(a: &V, b: &V) -> V {
    let mut out = a.clone();
    for i in 0..V::CARDINALITY {
        out[i] = a[i].clone().max(b[i].clone());
    }
    out
}
