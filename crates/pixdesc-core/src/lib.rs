//! # pixdesc-core
//!
//! Pixel format and image descriptors.
//!
//! This crate describes how raw pixel memory is to be interpreted without
//! owning any of it:
//!
//! - [`ColorType`], [`AlphaType`], [`YuvColorSpace`] - pixel encodings
//! - [`ColorSpace`] - shared, immutable color space (transfer curve + gamut)
//! - [`ColorInfo`] - color type, alpha type and optional color space
//! - [`ImageInfo`] - a `ColorInfo` plus dimensions, with row/byte-size arithmetic
//!
//! ## Design
//!
//! Descriptors are immutable values. Derived descriptors are produced by the
//! `make_*` methods; the color space is held through an [`Arc`](std::sync::Arc)
//! and shared between every copy.
//!
//! The arithmetic is total: empty dimensions give zero sizes, overflow
//! gives [`BYTE_SIZE_OVERFLOW`]. Callers that prefer errors use
//! [`ImageInfo::validate`] and [`ImageInfo::check_row_bytes`].
//!
//! ```rust
//! use pixdesc_core::prelude::*;
//!
//! let info = ImageInfo::s32(1920, 1080, AlphaType::Premul);
//! let row_bytes = info.min_row_bytes();
//! let size = info.check_row_bytes(row_bytes)?;
//!
//! assert_eq!(size, 1920 * 4 * 1080);
//! assert!(info.gamma_close_to_srgb());
//! # Ok::<(), pixdesc_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! pixdesc-math (points, sizes, rects)
//!    ^
//!    |
//!    +-- pixdesc-core (this crate)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for descriptors, enums and color spaces
//! - `n32-rgba` - Use [`ColorType::Rgba8888`] as [`ColorType::N32`]
//!   (default is [`ColorType::Bgra8888`])
//!
//! ## Logging
//!
//! Emits [`tracing`] events (`trace` for overflow and alpha coercion,
//! `debug` for rejected descriptors). No subscriber is installed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color_info;
pub mod colorspace;
pub mod error;
pub mod format;
pub mod image_info;

// Re-exports for convenience
pub use color_info::ColorInfo;
pub use colorspace::{ColorSpace, ColorSpaceRef, Gamut, TransferFn};
pub use error::{Error, Result};
pub use format::*;
pub use image_info::{ImageInfo, BYTE_SIZE_OVERFLOW};
pub use pixdesc_math::{IRect, ISize};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixdesc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color_info::ColorInfo;
    pub use crate::colorspace::{ColorSpace, ColorSpaceRef};
    pub use crate::error::{Error, Result};
    pub use crate::format::{AlphaType, ColorType, YuvColorSpace};
    pub use crate::image_info::{ImageInfo, BYTE_SIZE_OVERFLOW};
    pub use pixdesc_math::{IPoint, IRect, ISize, Point, Point3, Size};
}
