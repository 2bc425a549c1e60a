pub mod algebra;
pub mod bounds;
pub mod error;
pub mod intersect;
pub mod predicates;
pub mod scalar;

pub use error::{GeometryError, Result};
pub use scalar::{Rational, Scalar, Sign};
