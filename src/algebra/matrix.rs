use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul, Sub};

use super::vector::{Components, Vec2, Vec3};
use crate::scalar::Scalar;

/// Dense row-major matrix of scalars with explicit dimensions.
///
/// Construction zero-initializes every entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    rows: usize,
    cols: usize,
    entries: Vec<S>,
}

impl<S: Scalar> Matrix<S> {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![S::zero(); rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 2x3 projection matrix times a 3-vector.
    ///
    /// # Panics
    ///
    /// Panics unless the matrix is 2x3.
    #[must_use]
    pub fn mul_vec3(&self, v: &Vec3<S>) -> Vec2<S> {
        assert!(
            self.rows == 2 && self.cols == 3,
            "expected a 2x3 matrix, got {}x{}",
            self.rows,
            self.cols
        );
        let mut out = Vec2::splat(S::zero());
        for row in 0..self.rows {
            for col in 0..self.cols {
                out[row] += self[(row, col)].clone() * v[col].clone();
            }
        }
        out
    }
}

impl<S: Scalar> Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    fn index(&self, (row, col): (usize, usize)) -> &S {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &self.entries[row * self.cols + col]
    }
}

impl<S: Scalar> IndexMut<(usize, usize)> for Matrix<S> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &mut self.entries[row * self.cols + col]
    }
}

impl<S: Scalar> Mul for &Matrix<S> {
    type Output = Matrix<S>;

    fn mul(self, rhs: Self) -> Matrix<S> {
        assert!(
            self.cols == rhs.rows,
            "inner dimensions mismatch: {}x{} times {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        let mut out = Matrix::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                for k in 0..self.cols {
                    out[(i, j)] += self[(i, k)].clone() * rhs[(k, j)].clone();
                }
            }
        }
        out
    }
}

impl<S: Scalar> Mul<S> for &Matrix<S> {
    type Output = Matrix<S>;

    fn mul(self, rhs: S) -> Matrix<S> {
        let entries = self
            .entries
            .iter()
            .map(|entry| entry.clone() * rhs.clone())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        }
    }
}

impl<S: Scalar> Div<S> for &Matrix<S> {
    type Output = Matrix<S>;

    fn div(self, rhs: S) -> Matrix<S> {
        let entries = self
            .entries
            .iter()
            .map(|entry| entry.clone() / rhs.clone())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        }
    }
}

impl<S: Scalar> Sub for &Matrix<S> {
    type Output = Matrix<S>;

    fn sub(self, rhs: Self) -> Matrix<S> {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "dimension mismatch: {}x{} minus {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        let entries = self
            .entries
            .iter()
            .zip(&rhs.entries)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        }
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}, ", self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
