//! Stack-allocated numeric vectors with a compile-time dimension.
//!
//! [`FixedVector<T, N>`] owns exactly `N` elements in a `[T; N]` and provides
//! indexed access, elementwise addition, scalar multiplication, dot product,
//! Euclidean norm and a `[ e0, e1, ... ]` display form.
//!
//! ```
//! use fixed_vec::FixedVector;
//!
//! let v = FixedVector::<f64, 3>::from([3.0, -12.0, -4.0]);
//! assert_eq!(v.norm(), 13.0);
//! assert_eq!((2.0 * v).to_string(), "[ 6, -24, -8 ]");
//! ```

mod error;
mod named;
pub mod scalar;
mod vector;

pub use error::{Error, Result};
pub use named::NamedFixedVec;
pub use scalar::Sqrt;
pub use vector::{FixedVector, dot, norm};
