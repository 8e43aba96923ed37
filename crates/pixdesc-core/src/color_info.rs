//! Dimensionless pixel encoding.
//!
//! [`ColorInfo`] bundles a [`ColorType`], an [`AlphaType`] and an optional
//! shared [`ColorSpace`]. An [`ImageInfo`](crate::ImageInfo) is a
//! `ColorInfo` plus dimensions.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_core::{AlphaType, ColorInfo, ColorSpace, ColorType};
//!
//! let info = ColorInfo::new(ColorType::Rgba8888, AlphaType::Premul, Some(ColorSpace::srgb()));
//! let unpremul = info.make_alpha_type(AlphaType::Unpremul);
//!
//! assert_eq!(unpremul.color_type(), ColorType::Rgba8888);
//! assert!(unpremul.gamma_close_to_srgb());
//! assert_ne!(info, unpremul);
//! ```

use std::sync::Arc;

use crate::colorspace::{color_space_eq, ColorSpace, ColorSpaceRef};
use crate::format::{AlphaType, ColorType};

/// Describes how pixel bits encode color and alpha.
///
/// Immutable: every `make_*` method returns a new value and shares the
/// color space with `self`. Equality compares all three fields, with color
/// spaces compared by value.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorInfo {
    color_type: ColorType,
    alpha_type: AlphaType,
    color_space: Option<ColorSpaceRef>,
}

impl ColorInfo {
    /// Creates a color info from its three parts.
    #[inline]
    pub fn new(color_type: ColorType, alpha_type: AlphaType, color_space: Option<ColorSpaceRef>) -> Self {
        Self {
            color_type,
            alpha_type,
            color_space,
        }
    }

    /// Returns the color type.
    #[inline]
    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    /// Returns the alpha type.
    #[inline]
    pub fn alpha_type(&self) -> AlphaType {
        self.alpha_type
    }

    /// Borrows the color space, if any.
    #[inline]
    pub fn color_space(&self) -> Option<&ColorSpace> {
        self.color_space.as_deref()
    }

    /// Returns a new owning reference to the color space, if any.
    #[inline]
    pub fn ref_color_space(&self) -> Option<ColorSpaceRef> {
        self.color_space.clone()
    }

    /// Returns true if the alpha type is [`AlphaType::Opaque`] or the
    /// color type has no alpha channel.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha_type.is_opaque() || self.color_type.is_always_opaque()
    }

    /// Returns true if a color space is set and its curve is close to sRGB.
    #[inline]
    pub fn gamma_close_to_srgb(&self) -> bool {
        self.color_space().is_some_and(ColorSpace::gamma_close_to_srgb)
    }

    /// Same color type and color space with a new alpha type.
    pub fn make_alpha_type(&self, alpha_type: AlphaType) -> Self {
        Self::new(self.color_type, alpha_type, self.ref_color_space())
    }

    /// Same alpha type and color space with a new color type.
    pub fn make_color_type(&self, color_type: ColorType) -> Self {
        Self::new(color_type, self.alpha_type, self.ref_color_space())
    }

    /// Same color and alpha type with a new color space.
    pub fn make_color_space(&self, color_space: Option<ColorSpaceRef>) -> Self {
        Self::new(self.color_type, self.alpha_type, color_space)
    }

    /// Bytes per pixel of the color type.
    #[inline]
    pub fn bytes_per_pixel(&self) -> i32 {
        self.color_type.bytes_per_pixel()
    }

    /// Bit shift converting row bytes to row pixels.
    #[inline]
    pub fn shift_per_pixel(&self) -> i32 {
        self.color_type.shift_per_pixel()
    }

    /// Returns true if both hold the very same color space allocation
    /// (or both hold none).
    pub fn shares_color_space(&self, other: &ColorInfo) -> bool {
        match (&self.color_space, &other.color_space) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for ColorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.color_type == other.color_type
            && self.alpha_type == other.alpha_type
            && color_space_eq(self.color_space(), other.color_space())
    }
}

impl std::fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color_space() {
            Some(cs) => write!(f, "{} {} {}", self.color_type, self.alpha_type, cs),
            None => write!(f, "{} {}", self.color_type, self.alpha_type),
        }
    }
}
