use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::{Scalar, Sign, QUANTIZE_BITS};

/// Exact realization of [`Scalar`]: an arbitrary-precision rational number.
///
/// Arithmetic carries no rounding error, so determinant signs computed here
/// are exact by construction; the price is cost that grows with operand
/// bit-length. Coordinates are expected to enter this domain through
/// [`Scalar::quantize`], which keeps them integer-valued and bounded.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// The quantization grid resolution `2^26` as a rational.
    fn grid_scale() -> BigRational {
        BigRational::from_integer(BigInt::from(1_i64 << QUANTIZE_BITS))
    }

    /// Exact rational value of a finite float.
    ///
    /// # Panics
    ///
    /// Panics on non-finite input.
    fn from_f64_exact(value: f64) -> BigRational {
        assert!(value.is_finite(), "cannot represent {value} as a rational");
        BigRational::from_float(value).unwrap_or_else(BigRational::zero)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self(self.0.clone() + rhs.0);
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self(self.0.clone() - rhs.0);
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self(self.0.clone() * rhs.0);
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = Self(self.0.clone() / rhs.0);
    }
}

impl Scalar for Rational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn one() -> Self {
        Self(BigRational::one())
    }

    fn from_f64(value: f64) -> Self {
        Self(Self::from_f64_exact(value))
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_else(|| {
            if self.0.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        })
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    fn clamp(self, lower: Self, upper: Self) -> Self {
        Scalar::max(lower, Scalar::min(self, upper))
    }

    fn sign(&self) -> Sign {
        if self.0.is_zero() {
            Sign::Zero
        } else if self.0.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    fn quantize(value: f64, multiplier: f64) -> Self {
        assert!(multiplier != 0.0, "quantize multiplier must be non-zero");
        assert!(
            value.abs() <= multiplier,
            "|{value}| exceeds the magnitude bound {multiplier}"
        );
        if value == 0.0 {
            return Self::zero();
        }
        // map into the normalized range [-1, 1], then onto the integer grid
        // [-2^26, 2^26]
        let normalized = value / multiplier;
        #[allow(clippy::cast_possible_truncation)]
        let grid = (normalized * f64::from(1_u32 << QUANTIZE_BITS)).round() as i64;
        Self(BigRational::from_integer(BigInt::from(grid)))
    }

    fn dequantize(&self, multiplier: f64) -> f64 {
        if self.0.is_zero() {
            return 0.0;
        }
        // back to [-1, 1], then to user coordinates; the final extraction
        // truncates to floating precision
        let normalized = self.0.clone() / Self::grid_scale();
        let value = normalized * Self::from_f64_exact(multiplier);
        Self(value).to_f64()
    }

    fn square_root(&self, multiplier: f64) -> Self {
        let dequantized = self.dequantize(multiplier);
        Self::quantize(dequantized.sqrt(), multiplier)
    }

    fn orient2d(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2]) -> Self {
        let acx = pa[0].clone() - pc[0].clone();
        let bcx = pb[0].clone() - pc[0].clone();
        let acy = pa[1].clone() - pc[1].clone();
        let bcy = pb[1].clone() - pc[1].clone();

        acx * bcy - acy * bcx
    }

    fn orient3d(pa: &[Self; 3], pb: &[Self; 3], pc: &[Self; 3], pd: &[Self; 3]) -> Self {
        let adx = pa[0].clone() - pd[0].clone();
        let bdx = pb[0].clone() - pd[0].clone();
        let cdx = pc[0].clone() - pd[0].clone();
        let ady = pa[1].clone() - pd[1].clone();
        let bdy = pb[1].clone() - pd[1].clone();
        let cdy = pc[1].clone() - pd[1].clone();
        let adz = pa[2].clone() - pd[2].clone();
        let bdz = pb[2].clone() - pd[2].clone();
        let cdz = pc[2].clone() - pd[2].clone();

        adx * (bdy.clone() * cdz.clone() - bdz.clone() * cdy.clone())
            + bdx * (cdy.clone() * adz.clone() - cdz.clone() * ady.clone())
            + cdx * (ady.clone() * bdz.clone() - adz.clone() * bdy.clone())
    }

    fn incircle(pa: &[Self; 2], pb: &[Self; 2], pc: &[Self; 2], pd: &[Self; 2]) -> Self {
        let adx = pa[0].clone() - pd[0].clone();
        let ady = pa[1].clone() - pd[1].clone();
        let bdx = pb[0].clone() - pd[0].clone();
        let bdy = pb[1].clone() - pd[1].clone();
        let cdx = pc[0].clone() - pd[0].clone();
        let cdy = pc[1].clone() - pd[1].clone();

        let abdet = adx.clone() * bdy.clone() - bdx.clone() * ady.clone();
        let bcdet = bdx.clone() * cdy.clone() - cdx.clone() * bdy.clone();
        let cadet = cdx.clone() * ady.clone() - adx.clone() * cdy.clone();
        let alift = adx.clone() * adx + ady.clone() * ady;
        let blift = bdx.clone() * bdx + bdy.clone() * bdy;
        let clift = cdx.clone() * cdx + cdy.clone() * cdy;

        alift * bcdet + blift * cadet + clift * abdet
    }

    fn insphere(
        pa: &[Self; 3],
        pb: &[Self; 3],
        pc: &[Self; 3],
        pd: &[Self; 3],
        pe: &[Self; 3],
    ) -> Self {
        let aex = pa[0].clone() - pe[0].clone();
        let aey = pa[1].clone() - pe[1].clone();
        let aez = pa[2].clone() - pe[2].clone();
        let bex = pb[0].clone() - pe[0].clone();
        let bey = pb[1].clone() - pe[1].clone();
        let bez = pb[2].clone() - pe[2].clone();
        let cex = pc[0].clone() - pe[0].clone();
        let cey = pc[1].clone() - pe[1].clone();
        let cez = pc[2].clone() - pe[2].clone();
        let dex = pd[0].clone() - pe[0].clone();
        let dey = pd[1].clone() - pe[1].clone();
        let dez = pd[2].clone() - pe[2].clone();

        let ab = aex.clone() * bey.clone() - bex.clone() * aey.clone();
        let bc = bex.clone() * cey.clone() - cex.clone() * bey.clone();
        let cd = cex.clone() * dey.clone() - dex.clone() * cey.clone();
        let da = dex.clone() * aey.clone() - aex.clone() * dey.clone();
        let ac = aex.clone() * cey.clone() - cex.clone() * aey.clone();
        let bd = bex.clone() * dey.clone() - dex.clone() * bey.clone();

        let abc = aez.clone() * bc.clone() - bez.clone() * ac.clone() + cez.clone() * ab.clone();
        let bcd = bez.clone() * cd.clone() - cez.clone() * bd.clone() + dez.clone() * bc.clone();
        let cda = cez.clone() * da.clone() + dez.clone() * ac.clone() + aez.clone() * cd.clone();
        let dab = dez.clone() * ab.clone() + aez.clone() * bd.clone() + bez.clone() * da.clone();

        let alift = aex.clone() * aex + aey.clone() * aey + aez.clone() * aez;
        let blift = bex.clone() * bex + bey.clone() * bey + bez.clone() * bez;
        let clift = cex.clone() * cex + cey.clone() * cey + cez.clone() * cez;
        let dlift = dex.clone() * dex + dey.clone() * dey + dez.clone() * dez;

        (dlift * abc - clift * dab) + (blift * cda - alift * bcd)
    }
}
