pub mod exact;

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub use exact::Rational;

/// Number of fractional bits of the quantization grid: exact-mode
/// coordinates are integer-valued rationals in `[-2^26, 2^26]`.
pub const QUANTIZE_BITS: u32 = 26;

/// Tri-state sign of a predicate result.
///
/// `Zero` denotes an exact on-boundary condition, never a tolerance-based
/// "close to zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classifies a floating-point value by comparison against zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }
}

/// Orientation flip.
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

/// Sign of a product.
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (lhs, rhs) if lhs == rhs => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// The interchangeable numeric type every geometric routine is written
/// against.
///
/// Two realizations exist: `f64` (fast, delegates sign-critical determinants
/// to an adaptive-precision oracle) and [`Rational`] (exact, evaluates them
/// directly). Algorithms written against this trait produce the same sign
/// for any predicate under either realization, modulo the quantization
/// mapping that carries floating input into the exact domain.
///
/// The realization is picked by the caller at the type level; there is no
/// runtime branching inside the predicate paths.
pub trait Scalar:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    fn zero() -> Self;

    fn one() -> Self;

    fn from_f64(value: f64) -> Self;

    fn to_f64(&self) -> f64;

    fn abs(&self) -> Self;

    #[must_use]
    fn min(self, other: Self) -> Self;

    #[must_use]
    fn max(self, other: Self) -> Self;

    #[must_use]
    fn clamp(self, lower: Self, upper: Self) -> Self;

    fn sign(&self) -> Sign;

    fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Maps a floating-point value of known magnitude bound `multiplier`
    /// into this scalar domain.
    ///
    /// The exact realization lands on the integer grid `[-2^26, 2^26]`; the
    /// floating realization stores the value unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is zero or `|value| > multiplier`; both are
    /// caller contract breaches, not recoverable conditions.
    fn quantize(value: f64, multiplier: f64) -> Self;

    /// Reverses [`Scalar::quantize`]. The round-trip truncates to floating
    /// precision and is only meant to re-enter floating-point computation;
    /// topological decisions stay in the scalar domain.
    fn dequantize(&self, multiplier: f64) -> f64;

    /// Square root.
    ///
    /// The floating realization takes the direct root. The exact realization
    /// dequantizes with `multiplier`, takes the floating root, and
    /// re-quantizes: a deliberate, isolated precision drop, because exact
    /// square roots are not closed over the rationals. `multiplier` must
    /// bound the root as well as the input for the re-quantize to be valid.
    #[must_use]
    fn square_root(&self, multiplier: f64) -> Self;

    /// Signed magnitude of the 2x2 orientation determinant `(a-c) x (b-c)`.
    /// Positive means `a, b, c` wind counter-clockwise.
    fn orient2d(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2]) -> Self;

    /// Signed magnitude of the 3x3 determinant of `a, b, c` relative to `d`;
    /// the sign encodes which side of the plane through `a, b, c` the point
    /// `d` lies on, zero means coplanar.
    fn orient3d(pa: &[Self; 3], pb: &[Self; 3], pc: &[Self; 3], pd: &[Self; 3]) -> Self;

    /// Signed magnitude whose sign places `d` relative to the circumcircle
    /// of the counter-clockwise triangle `a, b, c`.
    fn incircle(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2], pd: &[Self; 2]) -> Self;

    /// Signed magnitude whose sign places `e` relative to the circumsphere
    /// of the tetrahedron `a, b, c, d`.
    fn insphere(
        pa: &[Self; 3],
        pb: &[Self; 3],
        pc: &[Self; 3],
        pd: &[Self; 3],
        pe: &[Self; 3],
    ) -> Self;
}

fn coord(p: &[f64; 2]) -> robust::Coord<f64> {
    robust::Coord { x: p[0], y: p[1] }
}

fn coord3(p: &[f64; 3]) -> robust::Coord3D<f64> {
    robust::Coord3D {
        x: p[0],
        y: p[1],
        z: p[2],
    }
}

/// Floating-point realization. Determinant signs come from the external
/// adaptive-precision oracle, so they stay correct under cancellation;
/// quantization is the identity because floating coordinates are used raw.
impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }

    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }

    fn clamp(self, lower: Self, upper: Self) -> Self {
        f64::clamp(self, lower, upper)
    }

    fn sign(&self) -> Sign {
        Sign::from_f64(*self)
    }

    fn quantize(value: f64, multiplier: f64) -> Self {
        assert!(multiplier != 0.0, "quantize multiplier must be non-zero");
        assert!(
            value.abs() <= multiplier,
            "|{value}| exceeds the magnitude bound {multiplier}"
        );
        value
    }

    fn dequantize(&self, _multiplier: f64) -> f64 {
        *self
    }

    fn square_root(&self, _multiplier: f64) -> Self {
        f64::sqrt(*self)
    }

    fn orient2d(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2]) -> Self {
        robust::orient2d(coord(pa), coord(pb), coord(pc))
    }

    fn orient3d(pa: &[Self; 3], pb: &[Self; 3], pc: &[Self; 3], pd: &[Self; 3]) -> Self {
        robust::orient3d(coord3(pa), coord3(pb), coord3(pc), coord3(pd))
    }

    fn incircle(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2], pd: &[Self; 2]) -> Self {
        robust::incircle(coord(pa), coord(pb), coord(pc), coord(pd))
    }

    fn insphere(
        pa: &[Self; 3],
        pb: &[Self; 3],
        pc: &[Self; 3],
        pd: &[Self; 3],
        pe: &[Self; 3],
    ) -> Self {
        robust::insphere(coord3(pa), coord3(pb), coord3(pc), coord3(pd), coord3(pe))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sign_classification() {
        assert_eq!(Sign::from_f64(3.5), Sign::Positive);
        assert_eq!(Sign::from_f64(-0.25), Sign::Negative);
        assert_eq!(Sign::from_f64(0.0), Sign::Zero);
        assert_eq!(Sign::from_f64(-0.0), Sign::Zero);
    }

    #[test]
    fn sign_negation_and_product() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Zero, Sign::Zero);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Positive * Sign::Zero, Sign::Zero);
    }

    #[test]
    fn float_quantize_is_identity() {
        let q = f64::quantize(0.75, 2.0);
        assert!((q - 0.75).abs() < f64::EPSILON);
        assert!((q.dequantize(2.0) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "exceeds the magnitude bound")]
    fn float_quantize_rejects_out_of_range_input() {
        let _ = f64::quantize(3.0, 2.0);
    }

    #[test]
    fn oracle_orientation_2d() {
        let a = [0.0, 0.0];
        let b = [1.0, 0.0];
        let c = [0.0, 1.0];
        assert_eq!(f64::orient2d(&a, &b, &c).sign(), Sign::Positive);
        assert_eq!(f64::orient2d(&b, &a, &c).sign(), Sign::Negative);
        let mid = [0.5, 0.5];
        let far = [2.0, 2.0];
        assert_eq!(f64::orient2d(&[0.0, 0.0], &far, &mid).sign(), Sign::Zero);
    }

    #[test]
    fn oracle_orientation_3d_is_antisymmetric() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [0.0, 1.0, 0.0];
        let above = [0.0, 0.0, 1.0];
        let below = [0.0, 0.0, -1.0];
        let s_above = f64::orient3d(&a, &b, &c, &above).sign();
        let s_below = f64::orient3d(&a, &b, &c, &below).sign();
        assert_ne!(s_above, Sign::Zero);
        assert_eq!(s_above, -s_below);
        assert_eq!(f64::orient3d(&a, &b, &c, &c).sign(), Sign::Zero);
    }

    #[test]
    fn float_square_root_ignores_multiplier() {
        assert!((2.25_f64.square_root(1.0) - 1.5).abs() < f64::EPSILON);
    }
}
