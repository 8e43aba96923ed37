//! Two-component extents.
//!
//! - [`ISize`] - integer width and height, as used for pixel dimensions
//! - [`Size`] - floating-point width and height
//!
//! Neither type clamps: negative extents are representable and simply
//! report [`ISize::is_empty`] / [`Size::is_empty`].
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_math::{ISize, Size};
//!
//! let dims = ISize::new(1920, 1080);
//! assert_eq!(dims.area(), 2_073_600);
//!
//! let scaled = Size::new(1920.0 * 0.3, 1080.0 * 0.3);
//! assert_eq!(scaled.to_round(), ISize::new(576, 324));
//! ```

use crate::error::{check_arity, GeomError};

/// Integer width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ISize {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl ISize {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns a 0x0 size.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Sets width and height.
    #[inline]
    pub fn set(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
    }

    /// Sets width and height to zero.
    #[inline]
    pub fn set_empty(&mut self) {
        *self = Self::empty();
    }

    /// Returns true if width and height are both zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns true if either width or height is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `width * height` in 64 bits.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Returns true if the size equals `(width, height)`.
    #[inline]
    pub const fn equals(&self, width: i32, height: i32) -> bool {
        self.width == width && self.height == height
    }
}

impl std::fmt::Display for ISize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(i32, i32)> for ISize {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

impl From<[i32; 2]> for ISize {
    #[inline]
    fn from([width, height]: [i32; 2]) -> Self {
        Self::new(width, height)
    }
}

impl TryFrom<&[i32]> for ISize {
    type Error = GeomError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        check_arity("ISize", 2, values.len())?;
        Ok(Self::new(values[0], values[1]))
    }
}

/// Floating-point width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a 0x0 size.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Sets width and height.
    #[inline]
    pub fn set(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    /// Sets width and height to zero.
    #[inline]
    pub fn set_empty(&mut self) {
        *self = Self::empty();
    }

    /// Returns true if width and height are both zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if either width or height is not positive.
    ///
    /// NaN extents count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Returns true if the size equals `(width, height)`.
    #[inline]
    pub fn equals(&self, width: f32, height: f32) -> bool {
        self.width == width && self.height == height
    }

    /// Rounds each extent to the nearest integer, halves rounding up.
    ///
    /// Values outside the `i32` range saturate; NaN becomes 0.
    #[inline]
    pub fn to_round(&self) -> ISize {
        ISize::new(
            (self.width + 0.5).floor() as i32,
            (self.height + 0.5).floor() as i32,
        )
    }

    /// Rounds each extent up.
    #[inline]
    pub fn to_ceil(&self) -> ISize {
        ISize::new(self.width.ceil() as i32, self.height.ceil() as i32)
    }

    /// Rounds each extent down.
    #[inline]
    pub fn to_floor(&self) -> ISize {
        ISize::new(self.width.floor() as i32, self.height.floor() as i32)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<ISize> for Size {
    #[inline]
    fn from(s: ISize) -> Self {
        Self::new(s.width as f32, s.height as f32)
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<[f32; 2]> for Size {
    #[inline]
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

impl TryFrom<&[f32]> for Size {
    type Error = GeomError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_arity("Size", 2, values.len())?;
        Ok(Self::new(values[0], values[1]))
    }
}
