use crate::algebra::{cross_product, dot_product, Axis, Components, Vec2, Vec3};
use crate::error::{GeometryError, Result};
use crate::scalar::{Scalar, Sign};

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// `Positive` means `a, b, c` wind counter-clockwise, `Negative` clockwise,
/// `Zero` collinear. The sign is exact under either scalar realization.
#[must_use]
pub fn orient2d<S: Scalar>(a: &Vec2<S>, b: &Vec2<S>, c: &Vec2<S>) -> Sign {
    S::orient2d(&a.to_array(), &b.to_array(), &c.to_array()).sign()
}

/// Side of the plane through `a, b, c` that `d` lies on; `Zero` means
/// coplanar.
#[must_use]
pub fn orient3d<S: Scalar>(a: &Vec3<S>, b: &Vec3<S>, c: &Vec3<S>, d: &Vec3<S>) -> Sign {
    S::orient3d(&a.to_array(), &b.to_array(), &c.to_array(), &d.to_array()).sign()
}

/// Zero-sign shortcut over [`orient2d`].
#[must_use]
pub fn collinear<S: Scalar>(a: &Vec2<S>, b: &Vec2<S>, c: &Vec2<S>) -> bool {
    orient2d(a, b, c).is_zero()
}

/// Zero-sign shortcut over [`orient3d`].
#[must_use]
pub fn coplanar<S: Scalar>(a: &Vec3<S>, b: &Vec3<S>, c: &Vec3<S>, d: &Vec3<S>) -> bool {
    orient3d(a, b, c, d).is_zero()
}

/// Position of `d` relative to the circumcircle of the counter-clockwise
/// triangle `a, b, c`; `Zero` means exactly on the circle.
#[must_use]
pub fn incircle<S: Scalar>(a: &Vec2<S>, b: &Vec2<S>, c: &Vec2<S>, d: &Vec2<S>) -> Sign {
    S::incircle(&a.to_array(), &b.to_array(), &c.to_array(), &d.to_array()).sign()
}

/// Position of `e` relative to the circumsphere of the tetrahedron
/// `a, b, c, d`; `Zero` means exactly on the sphere.
#[must_use]
pub fn insphere<S: Scalar>(
    a: &Vec3<S>,
    b: &Vec3<S>,
    c: &Vec3<S>,
    d: &Vec3<S>,
    e: &Vec3<S>,
) -> Sign {
    S::insphere(
        &a.to_array(),
        &b.to_array(),
        &c.to_array(),
        &d.to_array(),
        &e.to_array(),
    )
    .sign()
}

/// Unnormalized plane of a polygon: `normal . p + d_coeff = 0` for every
/// point `p` in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPlane<S> {
    pub normal: Vec3<S>,
    pub d_coeff: S,
    /// Axis carrying the largest-magnitude normal component; the stable
    /// projection axis for 2D containment testing.
    pub largest_component: Axis,
}

/// Derives a polygon's plane coefficients by accumulating cross products of
/// consecutive edge pairs around the first vertex. The normal is left
/// unnormalized.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePolygon`] when fewer than three
/// vertices are given or the accumulated normal vanishes (zero-area
/// polygon).
pub fn polygon_plane_coefficients<S: Scalar>(
    polygon_vertices: &[Vec3<S>],
) -> Result<PolygonPlane<S>> {
    let n = polygon_vertices.len();
    if n < 3 {
        return Err(GeometryError::DegeneratePolygon(format!(
            "{n} vertices cannot span a plane"
        )));
    }

    let origin = &polygon_vertices[0];
    let mut normal = Vec3::splat(S::zero());
    for i in 0..n {
        let a = &polygon_vertices[i] - origin;
        let b = &polygon_vertices[(i + 1) % n] - origin;
        normal = &normal + &cross_product(&a, &b);
    }

    if normal.x.sign().is_zero() && normal.y.sign().is_zero() && normal.z.sign().is_zero() {
        return Err(GeometryError::DegeneratePolygon(
            "zero-area polygon".to_string(),
        ));
    }

    let d_coeff = -dot_product(origin, &normal);
    let largest_component = largest_normal_component(&normal);
    Ok(PolygonPlane {
        normal,
        d_coeff,
        largest_component,
    })
}

fn largest_normal_component<S: Scalar>(normal: &Vec3<S>) -> Axis {
    let ax = normal.x.abs();
    let ay = normal.y.abs();
    let az = normal.z.abs();
    if ax >= ay && ax >= az {
        Axis::X
    } else if ay >= az {
        Axis::Y
    } else {
        Axis::Z
    }
}
