//! Error types for pixdesc-core operations.
//!
//! The descriptor arithmetic itself never fails: overflow is reported with
//! the [`BYTE_SIZE_OVERFLOW`](crate::BYTE_SIZE_OVERFLOW) sentinel and
//! degenerate dimensions give empty results. This module backs the opt-in
//! checked layer ([`ImageInfo::validate`](crate::ImageInfo::validate),
//! [`ImageInfo::check_row_bytes`](crate::ImageInfo::check_row_bytes)) used
//! by code that wants to reject a descriptor before allocating for it.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_core::{AlphaType, ColorType, Error, ImageInfo};
//!
//! let info = ImageInfo::new(0, 10, ColorType::Rgba8888, AlphaType::Premul, None);
//! let err = info.validate().unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 10, .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

use crate::format::{AlphaType, ColorType};
use pixdesc_math::GeomError;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked descriptor API.
///
/// # Categories
///
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Format errors**: [`UnknownColorType`](Error::UnknownColorType), [`InvalidAlphaType`](Error::InvalidAlphaType)
/// - **Layout errors**: [`InvalidStride`](Error::InvalidStride), [`ByteSizeOverflow`](Error::ByteSizeOverflow)
/// - **Geometry errors**: [`Geom`](Error::Geom)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Width or height is zero or negative.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// The descriptor has [`ColorType::Unknown`].
    #[error("color type is unknown")]
    UnknownColorType,

    /// The alpha type cannot be represented by the color type.
    #[error("alpha type {alpha_type} is not valid for color type {color_type}")]
    InvalidAlphaType {
        /// Color type of the descriptor
        color_type: ColorType,
        /// Rejected alpha type
        alpha_type: AlphaType,
    },

    /// Row bytes are smaller than one row of pixels.
    #[error("row bytes {row_bytes} is less than minimum {min_row_bytes} for width {width}")]
    InvalidStride {
        /// Provided row bytes
        row_bytes: usize,
        /// Minimum required row bytes
        min_row_bytes: usize,
        /// Image width
        width: i32,
    },

    /// The pixel buffer size does not fit in `usize`.
    #[error("byte size overflows for {width}x{height} with row bytes {row_bytes}")]
    ByteSizeOverflow {
        /// Image width
        width: i32,
        /// Image height
        height: i32,
        /// Row bytes used in the computation
        row_bytes: usize,
    },

    /// Error from a geometric value constructor.
    #[error(transparent)]
    Geom(#[from] GeomError),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: i32, height: i32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidAlphaType`] error.
    #[inline]
    pub fn invalid_alpha_type(color_type: ColorType, alpha_type: AlphaType) -> Self {
        Self::InvalidAlphaType {
            color_type,
            alpha_type,
        }
    }

    /// Creates an [`Error::InvalidStride`] error.
    #[inline]
    pub fn invalid_stride(row_bytes: usize, min_row_bytes: usize, width: i32) -> Self {
        Self::InvalidStride {
            row_bytes,
            min_row_bytes,
            width,
        }
    }

    /// Creates an [`Error::ByteSizeOverflow`] error.
    #[inline]
    pub fn byte_size_overflow(width: i32, height: i32, row_bytes: usize) -> Self {
        Self::ByteSizeOverflow {
            width,
            height,
            row_bytes,
        }
    }

    /// Returns `true` if this is a pixel-format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnknownColorType | Self::InvalidAlphaType { .. })
    }

    /// Returns `true` if this is a buffer layout error.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Self::InvalidStride { .. } | Self::ByteSizeOverflow { .. })
    }
}
