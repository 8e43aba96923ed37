//! Error types for pixdesc-math.
//!
//! Geometric value types are total over their inputs. The only failure is
//! constructing a fixed-arity value from a runtime-sized sequence of the
//! wrong length.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_math::{GeomError, Point};
//!
//! let err = Point::try_from(&[1.0_f32, 2.0, 3.0][..]).unwrap_err();
//! assert!(matches!(err, GeomError::InvalidArgument { expected: 2, got: 3, .. }));
//! ```
//!
//! # Used By
//!
//! - `pixdesc-core` - wrapped as `pixdesc_core::Error::Geom`

use thiserror::Error;

/// Result type alias using [`GeomError`] as the error type.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Errors produced by geometric value constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A sequence of the wrong length was converted into a fixed-arity value.
    ///
    /// Returned by the `TryFrom<&[T]>` conversions of [`crate::Point`],
    /// [`crate::IPoint`], [`crate::Point3`], [`crate::Size`] and
    /// [`crate::ISize`].
    #[error("{kind} must have exactly {expected} elements, got {got}")]
    InvalidArgument {
        /// Name of the type being constructed
        kind: &'static str,
        /// Required number of elements
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },
}

impl GeomError {
    /// Creates an [`GeomError::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(kind: &'static str, expected: usize, got: usize) -> Self {
        Self::InvalidArgument {
            kind,
            expected,
            got,
        }
    }

    /// Returns `true` if this is an arity error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Checks that `got` matches the fixed arity of `kind`.
#[inline]
pub(crate) fn check_arity(kind: &'static str, expected: usize, got: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(GeomError::invalid_argument(kind, expected, got))
    }
}
