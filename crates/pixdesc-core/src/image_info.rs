//! Image descriptor: pixel encoding plus dimensions.
//!
//! [`ImageInfo`] is everything needed to interpret a block of raw pixel
//! memory except the memory itself and its row stride. It answers the
//! layout questions a pixel buffer owner has to ask before allocating:
//! how many bytes a row needs, where a pixel lives, how big the whole
//! buffer is.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_core::{ImageInfo, BYTE_SIZE_OVERFLOW};
//!
//! let info = ImageInfo::n32_premul(100, 200, None);
//! assert_eq!(info.min_row_bytes(), 400);
//! assert_eq!(info.compute_min_byte_size(), 400 * 200);
//! assert_eq!(info.compute_offset(2, 1, 400), 408);
//!
//! // Overflow never panics; it reports a sentinel.
//! let huge = ImageInfo::n32_premul(i32::MAX, i32::MAX, None);
//! let size = huge.compute_byte_size(usize::MAX / 2);
//! assert_eq!(size, BYTE_SIZE_OVERFLOW);
//! assert!(ImageInfo::byte_size_overflowed(size));
//! ```
//!
//! # Byte Size
//!
//! The buffer for `height` rows of stride `row_bytes` ends right after the
//! last pixel of the last row, so the last row only needs
//! [`min_row_bytes`](ImageInfo::min_row_bytes):
//!
//! ```text
//! size = row_bytes * (height - 1) + width * bytes_per_pixel
//! ```
//!
//! Empty descriptors have size 0. Any overflow gives
//! [`BYTE_SIZE_OVERFLOW`].
//!
//! # Dependencies
//!
//! - [`pixdesc_math::ISize`], [`pixdesc_math::IRect`] - dimensions and bounds
//! - [`crate::color_info::ColorInfo`] - pixel encoding
//!
//! # Used By
//!
//! - Pixel buffer owners sizing and addressing their storage

use pixdesc_math::{IRect, ISize};
use tracing::{debug, trace};

use crate::color_info::ColorInfo;
use crate::colorspace::{ColorSpace, ColorSpaceRef};
use crate::error::{Error, Result};
use crate::format::{color_type_validate_alpha_type, AlphaType, ColorType};

/// Sentinel returned by byte-size computations that overflow.
pub const BYTE_SIZE_OVERFLOW: usize = usize::MAX;

/// Describes pixel dimensions and encoding.
///
/// Immutable value: the `make_*` methods return modified copies that share
/// the color space. Equality is structural.
///
/// # Example
///
/// ```rust
/// use pixdesc_core::{AlphaType, ColorType, ImageInfo};
///
/// let info = ImageInfo::new(640, 480, ColorType::Rgba8888, AlphaType::Unpremul, None);
/// let thumb = info.make_wh(64, 48);
///
/// assert_eq!(thumb.color_info(), info.color_info());
/// assert_eq!(thumb.width(), 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageInfo {
    color_info: ColorInfo,
    dimensions: ISize,
}

impl ImageInfo {
    // === Constructors ===

    /// Creates a descriptor from width, height, color type, alpha type and
    /// optional color space.
    ///
    /// Parameters are not validated; see [`validate`](Self::validate).
    pub fn new(
        width: i32,
        height: i32,
        color_type: ColorType,
        alpha_type: AlphaType,
        color_space: Option<ColorSpaceRef>,
    ) -> Self {
        Self::from_dimensions(ISize::new(width, height), color_type, alpha_type, color_space)
    }

    /// Creates a descriptor from an [`ISize`].
    pub fn from_dimensions(
        dimensions: ISize,
        color_type: ColorType,
        alpha_type: AlphaType,
        color_space: Option<ColorSpaceRef>,
    ) -> Self {
        Self::from_color_info(dimensions, ColorInfo::new(color_type, alpha_type, color_space))
    }

    /// Creates a descriptor from dimensions and an existing [`ColorInfo`].
    #[inline]
    pub fn from_color_info(dimensions: ISize, color_info: ColorInfo) -> Self {
        Self { color_info, dimensions }
    }

    /// Native 32-bit color type ([`ColorType::N32`]).
    pub fn n32(width: i32, height: i32, alpha_type: AlphaType, color_space: Option<ColorSpaceRef>) -> Self {
        Self::new(width, height, ColorType::N32, alpha_type, color_space)
    }

    /// Native 32-bit color type in the sRGB color space.
    pub fn s32(width: i32, height: i32, alpha_type: AlphaType) -> Self {
        Self::n32(width, height, alpha_type, Some(ColorSpace::srgb()))
    }

    /// Native 32-bit color type, premultiplied.
    pub fn n32_premul(width: i32, height: i32, color_space: Option<ColorSpaceRef>) -> Self {
        Self::n32(width, height, AlphaType::Premul, color_space)
    }

    /// [`n32_premul`](Self::n32_premul) from an [`ISize`].
    pub fn n32_premul_dimensions(dimensions: ISize, color_space: Option<ColorSpaceRef>) -> Self {
        Self::from_dimensions(dimensions, ColorType::N32, AlphaType::Premul, color_space)
    }

    /// Alpha-only mask, premultiplied, no color space.
    pub fn a8(width: i32, height: i32) -> Self {
        Self::a8_dimensions(ISize::new(width, height))
    }

    /// [`a8`](Self::a8) from an [`ISize`].
    pub fn a8_dimensions(dimensions: ISize) -> Self {
        Self::from_dimensions(dimensions, ColorType::Alpha8, AlphaType::Premul, None)
    }

    /// Unknown color and alpha type with the given dimensions.
    ///
    /// Such a descriptor can describe a size but no pixels.
    pub fn unknown(width: i32, height: i32) -> Self {
        Self::new(width, height, ColorType::Unknown, AlphaType::Unknown, None)
    }

    /// Resets to the empty default descriptor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // === Accessors ===

    /// Pixel columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.dimensions.width()
    }

    /// Pixel rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.dimensions.height()
    }

    /// Channel layout and depth.
    #[inline]
    pub fn color_type(&self) -> ColorType {
        self.color_info.color_type()
    }

    /// Alpha interpretation.
    #[inline]
    pub fn alpha_type(&self) -> AlphaType {
        self.color_info.alpha_type()
    }

    /// Borrows the color space, if any.
    #[inline]
    pub fn color_space(&self) -> Option<&ColorSpace> {
        self.color_info.color_space()
    }

    /// Returns a new owning reference to the color space, if any.
    #[inline]
    pub fn ref_color_space(&self) -> Option<ColorSpaceRef> {
        self.color_info.ref_color_space()
    }

    /// Width and height.
    #[inline]
    pub fn dimensions(&self) -> ISize {
        self.dimensions
    }

    /// Rectangle at the origin covering every pixel.
    #[inline]
    pub fn bounds(&self) -> IRect {
        IRect::from_size(self.dimensions)
    }

    /// Borrows the dimensionless encoding.
    #[inline]
    pub fn color_info(&self) -> &ColorInfo {
        &self.color_info
    }

    /// Returns true if width or height is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns true if every pixel is known to be opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.color_info.is_opaque()
    }

    /// Returns true if the color space curve is close to sRGB.
    #[inline]
    pub fn gamma_close_to_srgb(&self) -> bool {
        self.color_info.gamma_close_to_srgb()
    }

    /// Bytes per pixel of the color type.
    #[inline]
    pub fn bytes_per_pixel(&self) -> i32 {
        self.color_info.bytes_per_pixel()
    }

    /// Bit shift converting row bytes to row pixels.
    #[inline]
    pub fn shift_per_pixel(&self) -> i32 {
        self.color_info.shift_per_pixel()
    }

    // === Derived descriptors ===

    /// Same encoding with new width and height.
    pub fn make_wh(&self, width: i32, height: i32) -> Self {
        self.make_dimensions(ISize::new(width, height))
    }

    /// Same encoding with new dimensions.
    pub fn make_dimensions(&self, dimensions: ISize) -> Self {
        Self::from_color_info(dimensions, self.color_info.clone())
    }

    /// Same encoding with dimensions read from a `[width, height]` slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Geom`] if `dimensions` does not hold exactly two
    /// values.
    pub fn try_make_dimensions(&self, dimensions: &[i32]) -> Result<Self> {
        let dimensions = ISize::try_from(dimensions)?;
        Ok(self.make_dimensions(dimensions))
    }

    /// Same dimensions, color type and color space with a new alpha type.
    pub fn make_alpha_type(&self, alpha_type: AlphaType) -> Self {
        Self::from_color_info(self.dimensions, self.color_info.make_alpha_type(alpha_type))
    }

    /// Same dimensions, alpha type and color space with a new color type.
    pub fn make_color_type(&self, color_type: ColorType) -> Self {
        Self::from_color_info(self.dimensions, self.color_info.make_color_type(color_type))
    }

    /// Same dimensions and encoding with a new color space.
    pub fn make_color_space(&self, color_space: Option<ColorSpaceRef>) -> Self {
        Self::from_color_info(self.dimensions, self.color_info.make_color_space(color_space))
    }

    // === Layout arithmetic ===

    /// Bytes in one row of pixels, `width * bytes_per_pixel`, in 64 bits.
    #[inline]
    pub fn min_row_bytes64(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.bytes_per_pixel())
    }

    /// [`min_row_bytes64`](Self::min_row_bytes64) narrowed to `usize`.
    ///
    /// Returns 0 if the row does not fit in `0..=i32::MAX` bytes.
    pub fn min_row_bytes(&self) -> usize {
        let bytes = self.min_row_bytes64();
        if (0..=i64::from(i32::MAX)).contains(&bytes) {
            bytes as usize
        } else {
            0
        }
    }

    /// Byte offset of pixel `(x, y)` for a buffer with stride `row_bytes`.
    ///
    /// Coordinates are not bounds-checked. Arithmetic saturates instead of
    /// wrapping.
    pub fn compute_offset(&self, x: i32, y: i32, row_bytes: usize) -> i64 {
        let row_bytes = i64::try_from(row_bytes).unwrap_or(i64::MAX);
        i64::from(y)
            .saturating_mul(row_bytes)
            .saturating_add(i64::from(x).saturating_mul(i64::from(self.bytes_per_pixel())))
    }

    /// Bytes needed for the pixels with stride `row_bytes`.
    ///
    /// Returns 0 for empty dimensions and [`BYTE_SIZE_OVERFLOW`] if the
    /// size does not fit in `usize`. `row_bytes` is not checked against
    /// [`min_row_bytes`](Self::min_row_bytes).
    pub fn compute_byte_size(&self, row_bytes: usize) -> usize {
        if self.width() <= 0 || self.height() <= 0 {
            return 0;
        }
        let rows = (self.height() - 1) as u64;
        let last_row = self.min_row_bytes64() as u64;
        let size = (row_bytes as u64)
            .checked_mul(rows)
            .and_then(|bytes| bytes.checked_add(last_row))
            .and_then(|bytes| usize::try_from(bytes).ok());
        match size {
            Some(size) if size != BYTE_SIZE_OVERFLOW => size,
            _ => {
                trace!(
                    width = self.width(),
                    height = self.height(),
                    row_bytes,
                    "byte size overflow"
                );
                BYTE_SIZE_OVERFLOW
            }
        }
    }

    /// [`compute_byte_size`](Self::compute_byte_size) with tightly packed
    /// rows.
    ///
    /// Returns [`BYTE_SIZE_OVERFLOW`] if one row exceeds `i32::MAX` bytes.
    pub fn compute_min_byte_size(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        if self.min_row_bytes64() > i64::from(i32::MAX) {
            trace!(
                width = self.width(),
                min_row_bytes = self.min_row_bytes64(),
                "row too wide for packed byte size"
            );
            return BYTE_SIZE_OVERFLOW;
        }
        self.compute_byte_size(self.min_row_bytes())
    }

    /// Returns true if `byte_size` is the overflow sentinel.
    #[inline]
    pub fn byte_size_overflowed(byte_size: usize) -> bool {
        byte_size == BYTE_SIZE_OVERFLOW
    }

    /// Returns true if `row_bytes` holds at least one row of pixels.
    ///
    /// Compares against [`min_row_bytes64`](Self::min_row_bytes64), so rows
    /// wider than `i32::MAX` bytes are not waved through.
    pub fn valid_row_bytes(&self, row_bytes: usize) -> bool {
        let Ok(min) = u64::try_from(self.min_row_bytes64()) else {
            return true;
        };
        u64::try_from(row_bytes).map_or(true, |row_bytes| row_bytes >= min)
    }

    // === Checked API ===

    /// Checks that the descriptor can describe real pixels.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if the descriptor is empty or one row
    ///   exceeds `i32::MAX` bytes
    /// - [`Error::UnknownColorType`] for [`ColorType::Unknown`]
    /// - [`Error::InvalidAlphaType`] if the alpha type is rejected by
    ///   [`color_type_validate_alpha_type`]
    /// - [`Error::ByteSizeOverflow`] if the packed size does not fit
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(info = %self, error = %err, "image info rejected");
        }
        result
    }

    fn check(&self) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if self.is_empty() {
            return Err(Error::invalid_dimensions(width, height, "width and height must be positive"));
        }
        if self.color_type().is_unknown() {
            return Err(Error::UnknownColorType);
        }
        let (ok, _) = color_type_validate_alpha_type(self.color_type(), self.alpha_type());
        if !ok {
            return Err(Error::invalid_alpha_type(self.color_type(), self.alpha_type()));
        }
        if self.min_row_bytes64() > i64::from(i32::MAX) {
            return Err(Error::invalid_dimensions(width, height, "row exceeds i32::MAX bytes"));
        }
        if Self::byte_size_overflowed(self.compute_min_byte_size()) {
            return Err(Error::byte_size_overflow(width, height, self.min_row_bytes()));
        }
        Ok(())
    }

    /// Byte size for stride `row_bytes`, rejecting short strides and
    /// overflow.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `row_bytes` is below
    ///   [`min_row_bytes64`](Self::min_row_bytes64)
    /// - [`Error::ByteSizeOverflow`] if the size does not fit in `usize`
    pub fn check_row_bytes(&self, row_bytes: usize) -> Result<usize> {
        if !self.valid_row_bytes(row_bytes) {
            let min = usize::try_from(self.min_row_bytes64()).unwrap_or(usize::MAX);
            return Err(Error::invalid_stride(row_bytes, min, self.width()));
        }
        let size = self.compute_byte_size(row_bytes);
        if Self::byte_size_overflowed(size) {
            return Err(Error::byte_size_overflow(self.width(), self.height(), row_bytes));
        }
        Ok(size)
    }
}

impl std::fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageInfo({} {})", self.dimensions, self.color_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_n32_premul_scenario() {
        let info = ImageInfo::n32_premul(100, 200, None);
        assert_eq!(info.width(), 100);
        assert_eq!(info.height(), 200);
        assert_eq!(info.color_type(), ColorType::N32);
        assert_eq!(info.alpha_type(), AlphaType::Premul);
        assert!(info.color_space().is_none());
        assert_eq!(info.bytes_per_pixel(), 4);
        assert_eq!(info.shift_per_pixel(), 2);
        assert_eq!(info.min_row_bytes64(), 400);
        assert_eq!(info.min_row_bytes(), 400);
        assert_eq!(info.compute_min_byte_size(), 80_000);
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_default_and_reset() {
        let def = ImageInfo::default();
        assert_eq!(def.color_type(), ColorType::Unknown);
        assert_eq!(def.alpha_type(), AlphaType::Unknown);
        assert_eq!(def.dimensions(), ISize::new(0, 0));
        assert!(def.is_empty());
        assert_eq!(def, ImageInfo::unknown(0, 0));

        let mut info = ImageInfo::s32(10, 10, AlphaType::Opaque);
        info.reset();
        assert_eq!(info, def);
    }

    #[test]
    fn test_factories() {
        let a8 = ImageInfo::a8(7, 3);
        assert_eq!(a8.color_type(), ColorType::Alpha8);
        assert_eq!(a8.alpha_type(), AlphaType::Premul);
        assert_eq!(a8.min_row_bytes(), 7);
        assert_eq!(a8, ImageInfo::a8_dimensions(ISize::new(7, 3)));

        let s32 = ImageInfo::s32(4, 4, AlphaType::Unpremul);
        assert!(s32.color_space().is_some_and(ColorSpace::is_srgb));
        assert!(s32.gamma_close_to_srgb());

        let dims = ImageInfo::n32_premul_dimensions(ISize::new(5, 6), None);
        assert_eq!(dims, ImageInfo::n32_premul(5, 6, None));

        let info = ColorInfo::new(ColorType::RgbaF16, AlphaType::Premul, None);
        let from_ci = ImageInfo::from_color_info(ISize::new(2, 2), info.clone());
        assert_eq!(from_ci.color_info(), &info);
        assert_eq!(from_ci.bounds(), IRect::new(0, 0, 2, 2));
    }

    #[test]
    fn test_make_wh_keeps_encoding() {
        let info = ImageInfo::s32(10, 20, AlphaType::Premul);
        let resized = info.make_wh(30, 40);
        assert_eq!(resized.dimensions(), ISize::new(30, 40));
        assert_eq!(resized.color_info(), info.color_info());
        assert_eq!(resized.make_wh(10, 20), info);
    }

    #[test]
    fn test_try_make_dimensions() {
        let info = ImageInfo::a8(1, 1);
        let resized = info.try_make_dimensions(&[8, 9]).unwrap();
        assert_eq!(resized.dimensions(), ISize::new(8, 9));

        let err = info.try_make_dimensions(&[8]).unwrap_err();
        assert!(matches!(err, Error::Geom(_)));
    }

    #[test]
    fn test_make_single_field() {
        let info = ImageInfo::n32_premul(3, 4, Some(ColorSpace::srgb()));

        let at = info.make_alpha_type(AlphaType::Opaque);
        assert_eq!(at.alpha_type(), AlphaType::Opaque);
        assert_eq!(at.color_type(), info.color_type());
        assert_eq!(at.dimensions(), info.dimensions());

        let ct = info.make_color_type(ColorType::RgbaF32);
        assert_eq!(ct.color_type(), ColorType::RgbaF32);
        assert_eq!(ct.min_row_bytes(), 48);

        let cs = info.make_color_space(None);
        assert!(cs.color_space().is_none());
        assert_eq!(cs.make_color_space(info.ref_color_space()), info);
    }

    #[test]
    fn test_color_space_shared() {
        let cs = ColorSpace::display_p3();
        let before = Arc::strong_count(&cs);
        let info = ImageInfo::n32_premul(1, 1, Some(cs.clone()));
        let copy = info.make_wh(2, 2);
        assert_eq!(Arc::strong_count(&cs), before + 2);
        drop(copy);
        drop(info);
        assert_eq!(Arc::strong_count(&cs), before);
    }

    #[test]
    fn test_min_row_bytes_narrowing() {
        let wide = ImageInfo::new(i32::MAX, 1, ColorType::RgbaF32, AlphaType::Premul, None);
        assert_eq!(wide.min_row_bytes64(), i64::from(i32::MAX) * 16);
        assert_eq!(wide.min_row_bytes(), 0);

        let negative = ImageInfo::n32_premul(-5, 1, None);
        assert_eq!(negative.min_row_bytes64(), -20);
        assert_eq!(negative.min_row_bytes(), 0);
    }

    #[test]
    fn test_compute_offset() {
        let info = ImageInfo::n32_premul(10, 10, None);
        assert_eq!(info.compute_offset(0, 0, 40), 0);
        assert_eq!(info.compute_offset(3, 2, 64), 2 * 64 + 3 * 4);
        assert_eq!(info.compute_offset(i32::MAX, i32::MAX, usize::MAX), i64::MAX);
    }

    #[test]
    fn test_byte_size_empty() {
        for (w, h) in [(0, 10), (10, 0), (-1, 10), (10, -1), (0, 0)] {
            let info = ImageInfo::n32_premul(w, h, None);
            assert_eq!(info.compute_byte_size(1000), 0, "{w}x{h}");
            assert_eq!(info.compute_min_byte_size(), 0, "{w}x{h}");
        }
    }

    #[test]
    fn test_byte_size_stride() {
        let info = ImageInfo::n32_premul(10, 3, None);
        // last row needs only 40 bytes
        assert_eq!(info.compute_byte_size(64), 64 * 2 + 40);
        assert_eq!(ImageInfo::unknown(10, 3).compute_byte_size(64), 128);
    }

    #[test]
    fn test_byte_size_overflow() {
        let info = ImageInfo::n32_premul(1, i32::MAX, None);
        let size = info.compute_byte_size(usize::MAX);
        assert_eq!(size, BYTE_SIZE_OVERFLOW);
        assert!(ImageInfo::byte_size_overflowed(size));
        assert!(!ImageInfo::byte_size_overflowed(0));
    }

    #[test]
    fn test_wide_row_stride() {
        let info = ImageInfo::new(i32::MAX, 2, ColorType::RgbaF32, AlphaType::Premul, None);
        let row = i64::from(i32::MAX) * 16;
        assert_eq!(info.min_row_bytes64(), row);
        assert_eq!(info.min_row_bytes(), 0);
        assert!(!info.valid_row_bytes(0));
        assert!(!info.valid_row_bytes(16));
        assert!(matches!(info.check_row_bytes(16), Err(Error::InvalidStride { row_bytes: 16, .. })));

        #[cfg(target_pointer_width = "64")]
        {
            let row = row as usize;
            assert!(info.valid_row_bytes(row));
            assert_eq!(info.check_row_bytes(row), Ok(row * 2));
        }
    }

    #[test]
    fn test_wide_row_min_byte_size() {
        let info = ImageInfo::new(i32::MAX, 2, ColorType::RgbaF32, AlphaType::Premul, None);
        assert!(ImageInfo::byte_size_overflowed(info.compute_min_byte_size()));

        let narrow = ImageInfo::new(i32::MAX / 16, 2, ColorType::RgbaF32, AlphaType::Premul, None);
        assert!(!ImageInfo::byte_size_overflowed(narrow.compute_min_byte_size()));
    }

    #[test]
    fn test_valid_row_bytes() {
        let info = ImageInfo::n32_premul(10, 1, None);
        assert!(info.valid_row_bytes(40));
        assert!(info.valid_row_bytes(41));
        assert!(!info.valid_row_bytes(39));
    }

    #[test]
    fn test_validate() {
        assert!(ImageInfo::a8(1, 1).validate().is_ok());
        assert!(matches!(
            ImageInfo::n32_premul(0, 5, None).validate(),
            Err(Error::InvalidDimensions { width: 0, height: 5, .. })
        ));
        assert_eq!(ImageInfo::unknown(4, 4).validate(), Err(Error::UnknownColorType));
        assert_eq!(
            ImageInfo::new(4, 4, ColorType::Rgb565, AlphaType::Premul, None).validate(),
            Err(Error::invalid_alpha_type(ColorType::Rgb565, AlphaType::Premul))
        );
        assert!(ImageInfo::new(4, 4, ColorType::Rgb565, AlphaType::Opaque, None).validate().is_ok());
        assert!(matches!(
            ImageInfo::new(4, 4, ColorType::Rgba8888, AlphaType::Unknown, None).validate(),
            Err(Error::InvalidAlphaType { .. })
        ));
        assert!(matches!(
            ImageInfo::new(i32::MAX, 1, ColorType::RgbaF32, AlphaType::Premul, None).validate(),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_check_row_bytes() {
        let info = ImageInfo::n32_premul(10, 2, None);
        assert_eq!(info.check_row_bytes(40), Ok(80));
        assert_eq!(info.check_row_bytes(39), Err(Error::invalid_stride(39, 40, 10)));
        let err = info.check_row_bytes(usize::MAX).unwrap_err();
        assert!(err.is_layout_error());
        assert!(matches!(err, Error::ByteSizeOverflow { .. }));
    }

    #[test]
    fn test_display() {
        let info = ImageInfo::new(3, 2, ColorType::Rgba8888, AlphaType::Premul, None);
        assert_eq!(info.to_string(), "ImageInfo(3x2 RGBA_8888 Premul)");
    }
}
