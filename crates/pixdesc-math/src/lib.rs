//! # pixdesc-math
//!
//! Geometric value types for describing and addressing pixel grids.
//!
//! This crate provides the coordinate and extent primitives used by
//! `pixdesc-core`:
//!
//! - [`Point`], [`IPoint`] - 2D points/vectors with float and integer components
//! - [`Point3`] - 3D points/vectors
//! - [`Size`], [`ISize`] - 2D extents with float and integer components
//! - [`IRect`] - integer rectangle (image bounds)
//!
//! # Design
//!
//! Every type is a `Copy` value with public fields, named methods for the
//! vector algebra, and the matching `std::ops` operators. Conversions from
//! fixed-size arrays and tuples are infallible; conversions from slices
//! check the arity and fail with [`GeomError::InvalidArgument`].
//!
//! ```rust
//! use pixdesc_math::{GeomError, Point, Point3};
//!
//! let p = Point::from([3.0, 4.0]);
//! assert_eq!(p.length(), 5.0);
//!
//! let values: &[f32] = &[1.0, 2.0, 3.0];
//! assert!(Point3::try_from(values).is_ok());
//! assert!(matches!(Point::try_from(values), Err(GeomError::InvalidArgument { .. })));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `From` conversions to and from `Vec2`, `IVec2`, `Vec3`
//! - [`thiserror`] - error derive
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for all value types
//!
//! # Used By
//!
//! - `pixdesc-core` - image dimensions and bounds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod point;
mod point3;
mod rect;
mod size;

pub use error::{GeomError, Result};
pub use point::*;
pub use point3::*;
pub use rect::*;
pub use size::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{IVec2, Vec2, Vec3};
}
