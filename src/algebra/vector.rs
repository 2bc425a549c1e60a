use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::scalar::Scalar;

/// Coordinate axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The two axes that remain once this one is dropped, in an order that
    /// keeps projections winding-stable.
    #[must_use]
    pub fn complement(self) -> (usize, usize) {
        let dropped = self.index();
        ((dropped + 1) % 3, (dropped + 2) % 3)
    }
}

/// Shared surface of the fixed-cardinality vector types.
///
/// Algebra that is uniform across 2D and 3D (dot products, componentwise
/// min/max, bounding volumes) is written as free functions over this trait;
/// there is no vector supertype and no virtual dispatch.
pub trait Components: Clone + Index<usize, Output = Self::Element> + IndexMut<usize> {
    type Element: Scalar;

    /// Number of components.
    const CARDINALITY: usize;

    /// A vector with every component set to `value`.
    fn splat(value: Self::Element) -> Self;
}

/// 2D vector of scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    #[must_use]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Components as a raw coordinate array, the shape the determinant
    /// evaluations consume.
    #[must_use]
    pub fn to_array(&self) -> [S; 2] {
        [self.x.clone(), self.y.clone()]
    }
}

impl<S: Scalar> Components for Vec2<S> {
    type Element = S;

    const CARDINALITY: usize = 2;

    fn splat(value: S) -> Self {
        Self {
            x: value.clone(),
            y: value,
        }
    }
}

impl<S: Scalar> Index<usize> for Vec2<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("2D vector index {index} out of range"),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for Vec2<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("2D vector index {index} out of range"),
        }
    }
}

impl<S: Scalar> Add for &Vec2<S> {
    type Output = Vec2<S>;

    fn add(self, rhs: Self) -> Vec2<S> {
        Vec2::new(self.x.clone() + rhs.x.clone(), self.y.clone() + rhs.y.clone())
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<S: Scalar> Sub for &Vec2<S> {
    type Output = Vec2<S>;

    fn sub(self, rhs: Self) -> Vec2<S> {
        Vec2::new(self.x.clone() - rhs.x.clone(), self.y.clone() - rhs.y.clone())
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<S: Scalar> Mul<S> for &Vec2<S> {
    type Output = Vec2<S>;

    fn mul(self, rhs: S) -> Vec2<S> {
        Vec2::new(self.x.clone() * rhs.clone(), self.y.clone() * rhs)
    }
}

impl<S: Scalar> Div<S> for &Vec2<S> {
    type Output = Vec2<S>;

    fn div(self, rhs: S) -> Vec2<S> {
        Vec2::new(self.x.clone() / rhs.clone(), self.y.clone() / rhs)
    }
}

impl<S: Scalar> fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3D vector of scalars. Holds its own three components; it is not a
/// specialization of [`Vec2`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    #[must_use]
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn to_array(&self) -> [S; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }
}

impl<S: Scalar> Components for Vec3<S> {
    type Element = S;

    const CARDINALITY: usize = 3;

    fn splat(value: S) -> Self {
        Self {
            x: value.clone(),
            y: value.clone(),
            z: value,
        }
    }
}

impl<S: Scalar> Index<usize> for Vec3<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("3D vector index {index} out of range"),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for Vec3<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("3D vector index {index} out of range"),
        }
    }
}

impl<S: Scalar> Add for &Vec3<S> {
    type Output = Vec3<S>;

    fn add(self, rhs: Self) -> Vec3<S> {
        Vec3::new(
            self.x.clone() + rhs.x.clone(),
            self.y.clone() + rhs.y.clone(),
            self.z.clone() + rhs.z.clone(),
        )
    }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<S: Scalar> Sub for &Vec3<S> {
    type Output = Vec3<S>;

    fn sub(self, rhs: Self) -> Vec3<S> {
        Vec3::new(
            self.x.clone() - rhs.x.clone(),
            self.y.clone() - rhs.y.clone(),
            self.z.clone() - rhs.z.clone(),
        )
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<S: Scalar> Mul<S> for &Vec3<S> {
    type Output = Vec3<S>;

    fn mul(self, rhs: S) -> Vec3<S> {
        Vec3::new(
            self.x.clone() * rhs.clone(),
            self.y.clone() * rhs.clone(),
            self.z.clone() * rhs,
        )
    }
}

impl<S: Scalar> Div<S> for &Vec3<S> {
    type Output = Vec3<S>;

    fn div(self, rhs: S) -> Vec3<S> {
        Vec3::new(
            self.x.clone() / rhs.clone(),
            self.y.clone() / rhs.clone(),
            self.z.clone() / rhs,
        )
    }
}

impl<S: Scalar> fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Conversions for the floating realization, which is what the surrounding
// nalgebra-based mesh tooling exchanges.

impl From<Vec2<f64>> for nalgebra::Point2<f64> {
    fn from(v: Vec2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Point2<f64>> for Vec2<f64> {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2<f64>> for nalgebra::Vector2<f64> {
    fn from(v: Vec2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vec2<f64> {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec3<f64>> for nalgebra::Point3<f64> {
    fn from(v: Vec3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vec3<f64> {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vec3<f64>> for nalgebra::Vector3<f64> {
    fn from(v: Vec3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vec3<f64> {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
