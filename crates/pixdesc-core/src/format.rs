//! Pixel encodings: color type, alpha type, YUV color space.
//!
//! This module provides the canonical definitions for how the bytes of one
//! pixel are laid out and how alpha relates to color.
//!
//! # Types
//!
//! - [`ColorType`] - Channel order and bit depth of one pixel
//! - [`AlphaType`] - How alpha relates to the color channels
//! - [`YuvColorSpace`] - Luma/chroma encoding metadata
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_core::format::{color_type_validate_alpha_type, AlphaType, ColorType};
//!
//! assert_eq!(ColorType::RgbaF16.bytes_per_pixel(), 8);
//! assert_eq!(ColorType::RgbaF16.shift_per_pixel(), 3);
//!
//! // 565 has no alpha channel, so premultiplied is not a valid request.
//! let (ok, resolved) = color_type_validate_alpha_type(ColorType::Rgb565, AlphaType::Premul);
//! assert!(!ok);
//! assert_eq!(resolved, AlphaType::Opaque);
//! ```

use tracing::trace;

/// Describes how a pixel's alpha relates to its color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaType {
    /// Uninitialized.
    #[default]
    Unknown,
    /// Pixel is opaque; stored alpha bits, if any, are ignored.
    Opaque,
    /// Color components are premultiplied by alpha.
    Premul,
    /// Color components are independent of alpha.
    Unpremul,
}

impl AlphaType {
    /// All alpha types in declaration order.
    pub const ALL: [AlphaType; 4] = [Self::Unknown, Self::Opaque, Self::Premul, Self::Unpremul];

    /// Returns true if pixels are always fully visible.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }

    /// Native name, e.g. `"Premul"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Opaque => "Opaque",
            Self::Premul => "Premul",
            Self::Unpremul => "Unpremul",
        }
    }
}

impl std::fmt::Display for AlphaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bit layout of one pixel.
///
/// Each variant maps to a fixed byte size ([`ColorType::bytes_per_pixel`]),
/// the base-2 log of that size ([`ColorType::shift_per_pixel`]) and whether
/// the layout can carry alpha at all ([`ColorType::is_always_opaque`]).
///
/// # Variants
///
/// | Variant | Bytes | Alpha |
/// |---------|-------|-------|
/// | `Alpha8` | 1 | alpha only |
/// | `Rgb565` | 2 | no |
/// | `Argb4444` | 2 | yes |
/// | `Rgba8888`, `Bgra8888` | 4 | yes |
/// | `Rgb888x` | 4 | no |
/// | `Rgba1010102`, `Bgra1010102` | 4 | 2-bit |
/// | `Rgb101010x`, `Bgr101010x` | 4 | no |
/// | `Gray8` | 1 | no |
/// | `RgbaF16Norm`, `RgbaF16` | 8 | yes |
/// | `RgbaF32` | 16 | yes |
/// | `R8G8Unorm` | 2 | no |
/// | `A16Float`, `A16Unorm` | 2 | alpha only |
/// | `R16G16Float`, `R16G16Unorm` | 4 | no |
/// | `R16G16B16A16Unorm` | 8 | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorType {
    /// Uninitialized.
    #[default]
    Unknown,
    /// Alpha in an 8-bit byte.
    Alpha8,
    /// 5 bits red, 6 bits green, 5 bits blue in a 16-bit word.
    Rgb565,
    /// 4 bits each for alpha, red, green, blue in a 16-bit word.
    Argb4444,
    /// 8 bits each for red, green, blue, alpha in a 32-bit word.
    Rgba8888,
    /// 8 bits each for red, green, blue in a 32-bit word.
    Rgb888x,
    /// 8 bits each for blue, green, red, alpha in a 32-bit word.
    Bgra8888,
    /// 10 bits for red, green, blue; 2 bits for alpha; in a 32-bit word.
    Rgba1010102,
    /// 10 bits for blue, green, red; 2 bits for alpha; in a 32-bit word.
    Bgra1010102,
    /// 10 bits each for red, green, blue in a 32-bit word.
    Rgb101010x,
    /// 10 bits each for blue, green, red in a 32-bit word.
    Bgr101010x,
    /// Grayscale level in an 8-bit byte.
    Gray8,
    /// Half floats in [0, 1] for red, green, blue, alpha in a 64-bit word.
    RgbaF16Norm,
    /// Half floats for red, green, blue, alpha in a 64-bit word.
    RgbaF16,
    /// 32-bit floats for red, green, blue, alpha in a 128-bit word.
    RgbaF32,
    /// 8 bits each for red and green.
    R8G8Unorm,
    /// Alpha as a half float.
    A16Float,
    /// Half floats for red and green.
    R16G16Float,
    /// Alpha in a 16-bit unsigned normalized word.
    A16Unorm,
    /// 16-bit unsigned normalized red and green.
    R16G16Unorm,
    /// 16-bit unsigned normalized red, green, blue, alpha.
    R16G16B16A16Unorm,
}

impl ColorType {
    /// Native 32-bit color type of the platform.
    ///
    /// `Bgra8888` unless the `n32-rgba` feature is enabled.
    #[cfg(not(feature = "n32-rgba"))]
    pub const N32: ColorType = ColorType::Bgra8888;

    /// Native 32-bit color type of the platform.
    ///
    /// `Rgba8888` because the `n32-rgba` feature is enabled.
    #[cfg(feature = "n32-rgba")]
    pub const N32: ColorType = ColorType::Rgba8888;

    /// All color types in declaration order.
    pub const ALL: [ColorType; 21] = [
        Self::Unknown,
        Self::Alpha8,
        Self::Rgb565,
        Self::Argb4444,
        Self::Rgba8888,
        Self::Rgb888x,
        Self::Bgra8888,
        Self::Rgba1010102,
        Self::Bgra1010102,
        Self::Rgb101010x,
        Self::Bgr101010x,
        Self::Gray8,
        Self::RgbaF16Norm,
        Self::RgbaF16,
        Self::RgbaF32,
        Self::R8G8Unorm,
        Self::A16Float,
        Self::R16G16Float,
        Self::A16Unorm,
        Self::R16G16Unorm,
        Self::R16G16B16A16Unorm,
    ];

    /// Number of bytes per pixel. Returns 0 for Unknown.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Alpha8 | Self::Gray8 => 1,
            Self::Rgb565
            | Self::Argb4444
            | Self::R8G8Unorm
            | Self::A16Float
            | Self::A16Unorm => 2,
            Self::Rgba8888
            | Self::Rgb888x
            | Self::Bgra8888
            | Self::Rgba1010102
            | Self::Bgra1010102
            | Self::Rgb101010x
            | Self::Bgr101010x
            | Self::R16G16Float
            | Self::R16G16Unorm => 4,
            Self::RgbaF16Norm | Self::RgbaF16 | Self::R16G16B16A16Unorm => 8,
            Self::RgbaF32 => 16,
        }
    }

    /// Bit shift converting row bytes to row pixels.
    ///
    /// Kept as its own table rather than derived from
    /// [`ColorType::bytes_per_pixel`]; a layout whose size is not a power
    /// of two has no meaningful shift. Returns 0 for Unknown.
    #[inline]
    pub const fn shift_per_pixel(&self) -> i32 {
        match self {
            Self::Unknown | Self::Alpha8 | Self::Gray8 => 0,
            Self::Rgb565
            | Self::Argb4444
            | Self::R8G8Unorm
            | Self::A16Float
            | Self::A16Unorm => 1,
            Self::Rgba8888
            | Self::Rgb888x
            | Self::Bgra8888
            | Self::Rgba1010102
            | Self::Bgra1010102
            | Self::Rgb101010x
            | Self::Bgr101010x
            | Self::R16G16Float
            | Self::R16G16Unorm => 2,
            Self::RgbaF16Norm | Self::RgbaF16 | Self::R16G16B16A16Unorm => 3,
            Self::RgbaF32 => 4,
        }
    }

    /// Whether the layout has no alpha channel, forcing [`AlphaType::Opaque`].
    ///
    /// Returns false for Unknown.
    #[inline]
    pub const fn is_always_opaque(&self) -> bool {
        matches!(
            self,
            Self::Rgb565
                | Self::Rgb888x
                | Self::Rgb101010x
                | Self::Bgr101010x
                | Self::Gray8
                | Self::R8G8Unorm
                | Self::R16G16Float
                | Self::R16G16Unorm
        )
    }

    /// Whether the layout stores an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        !self.is_unknown() && !self.is_always_opaque()
    }

    /// Whether the layout stores only alpha.
    #[inline]
    pub const fn is_alpha_only(&self) -> bool {
        matches!(self, Self::Alpha8 | Self::A16Float | Self::A16Unorm)
    }

    /// Whether this is Unknown.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Alpha8 => "Alpha_8",
            Self::Rgb565 => "RGB_565",
            Self::Argb4444 => "ARGB_4444",
            Self::Rgba8888 => "RGBA_8888",
            Self::Rgb888x => "RGB_888x",
            Self::Bgra8888 => "BGRA_8888",
            Self::Rgba1010102 => "RGBA_1010102",
            Self::Bgra1010102 => "BGRA_1010102",
            Self::Rgb101010x => "RGB_101010x",
            Self::Bgr101010x => "BGR_101010x",
            Self::Gray8 => "Gray_8",
            Self::RgbaF16Norm => "RGBA_F16Norm",
            Self::RgbaF16 => "RGBA_F16",
            Self::RgbaF32 => "RGBA_F32",
            Self::R8G8Unorm => "R8G8_unorm",
            Self::A16Float => "A16_float",
            Self::R16G16Float => "R16G16_float",
            Self::A16Unorm => "A16_unorm",
            Self::R16G16Unorm => "R16G16_unorm",
            Self::R16G16B16A16Unorm => "R16G16B16A16_unorm",
        }
    }
}

impl std::fmt::Display for ColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Luma/chroma encoding of YUV pixel data.
///
/// Descriptive metadata only; nothing in this crate converts YUV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YuvColorSpace {
    /// Full range.
    #[default]
    Jpeg,
    /// SDTV range.
    Rec601,
    /// HDTV range.
    Rec709,
    /// UHDTV range, non-constant luminance.
    Bt2020,
    /// Maps Y to R, U to G, V to B.
    Identity,
}

impl YuvColorSpace {
    /// Human-readable description of the encoding.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Jpeg => "full range",
            Self::Rec601 => "SDTV range",
            Self::Rec709 => "HDTV range",
            Self::Bt2020 => "UHDTV range, non-constant-luminance",
            Self::Identity => "maps Y->R, U->G, V->B",
        }
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Rec601 => "Rec601",
            Self::Rec709 => "Rec709",
            Self::Bt2020 => "BT2020",
            Self::Identity => "Identity",
        }
    }
}

impl std::fmt::Display for YuvColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns true if `at` hints that all pixels are opaque.
#[inline]
pub const fn alpha_type_is_opaque(at: AlphaType) -> bool {
    at.is_opaque()
}

/// Returns the number of bytes per pixel of `ct`.
#[inline]
pub const fn color_type_bytes_per_pixel(ct: ColorType) -> i32 {
    ct.bytes_per_pixel()
}

/// Returns true if `ct` has no alpha channel.
#[inline]
pub const fn color_type_is_always_opaque(ct: ColorType) -> bool {
    ct.is_always_opaque()
}

/// Reconciles a requested alpha type with what `ct` can represent.
///
/// Returns whether the request is acceptable and the canonical alpha type:
///
/// - `Unknown` color type: always `(true, Unknown)`.
/// - Color types without alpha: the result is always [`AlphaType::Opaque`];
///   the request is acceptable only if it was `Unknown` or `Opaque`.
/// - Color types with alpha: the request is kept as-is and is acceptable
///   unless it is `Unknown`.
///
/// A `false` result still carries the canonical alpha type so the caller
/// can choose between rejecting and coercing.
pub fn color_type_validate_alpha_type(ct: ColorType, requested: AlphaType) -> (bool, AlphaType) {
    if ct.is_unknown() {
        return (true, AlphaType::Unknown);
    }
    if ct.is_always_opaque() {
        let ok = matches!(requested, AlphaType::Unknown | AlphaType::Opaque);
        if !ok {
            trace!(color_type = %ct, alpha_type = %requested, "alpha type rejected for opaque color type");
        }
        return (ok, AlphaType::Opaque);
    }
    let ok = requested != AlphaType::Unknown;
    if !ok {
        trace!(color_type = %ct, "unknown alpha type for color type with alpha");
    }
    (ok, requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(ColorType::Unknown.bytes_per_pixel(), 0);
        assert_eq!(ColorType::Alpha8.bytes_per_pixel(), 1);
        assert_eq!(ColorType::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(ColorType::Rgba8888.bytes_per_pixel(), 4);
        assert_eq!(ColorType::RgbaF16.bytes_per_pixel(), 8);
        assert_eq!(ColorType::RgbaF32.bytes_per_pixel(), 16);
        assert_eq!(color_type_bytes_per_pixel(ColorType::Gray8), 1);
    }

    #[test]
    fn test_shift_matches_bytes() {
        for ct in ColorType::ALL {
            let bpp = ct.bytes_per_pixel();
            if bpp > 0 {
                assert_eq!(bpp, 1 << ct.shift_per_pixel(), "{ct}");
            }
        }
    }

    #[test]
    fn test_always_opaque() {
        assert!(ColorType::Rgb565.is_always_opaque());
        assert!(ColorType::Rgb888x.is_always_opaque());
        assert!(ColorType::Gray8.is_always_opaque());
        assert!(ColorType::Bgr101010x.is_always_opaque());
        assert!(!ColorType::Rgba8888.is_always_opaque());
        assert!(!ColorType::Alpha8.is_always_opaque());
        assert!(!ColorType::Unknown.is_always_opaque());
        assert!(color_type_is_always_opaque(ColorType::R8G8Unorm));
    }

    #[test]
    fn test_has_alpha() {
        assert!(ColorType::Argb4444.has_alpha());
        assert!(ColorType::Alpha8.has_alpha());
        assert!(!ColorType::Rgb565.has_alpha());
        assert!(!ColorType::Unknown.has_alpha());
        assert!(ColorType::A16Unorm.is_alpha_only());
        assert!(!ColorType::Rgba8888.is_alpha_only());
    }

    #[test]
    fn test_alpha_type_is_opaque() {
        assert!(AlphaType::Opaque.is_opaque());
        assert!(alpha_type_is_opaque(AlphaType::Opaque));
        assert!(!AlphaType::Premul.is_opaque());
        assert!(!AlphaType::Unknown.is_opaque());
    }

    #[test]
    fn test_validate_opaque_color_type() {
        let ct = ColorType::Rgb565;
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Unknown), (true, AlphaType::Opaque));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Opaque), (true, AlphaType::Opaque));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Premul), (false, AlphaType::Opaque));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Unpremul), (false, AlphaType::Opaque));
    }

    #[test]
    fn test_validate_alpha_color_type() {
        let ct = ColorType::Rgba8888;
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Unknown), (false, AlphaType::Unknown));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Premul), (true, AlphaType::Premul));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Unpremul), (true, AlphaType::Unpremul));
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Opaque), (true, AlphaType::Opaque));
    }

    #[test]
    fn test_validate_unknown_color_type() {
        for at in AlphaType::ALL {
            assert_eq!(
                color_type_validate_alpha_type(ColorType::Unknown, at),
                (true, AlphaType::Unknown)
            );
        }
    }

    #[test]
    fn test_n32_is_32_bit_with_alpha() {
        assert_eq!(ColorType::N32.bytes_per_pixel(), 4);
        assert!(ColorType::N32.has_alpha());
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorType::Rgba8888.to_string(), "RGBA_8888");
        assert_eq!(AlphaType::Premul.to_string(), "Premul");
        assert_eq!(YuvColorSpace::Bt2020.to_string(), "BT2020");
        assert_eq!(YuvColorSpace::Identity.description(), "maps Y->R, U->G, V->B");
    }
}
