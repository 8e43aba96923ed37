//! Integer rectangle type.
//!
//! [`IRect`] describes a pixel-aligned region by its four edges. It is what
//! an image descriptor reports as its bounds.
//!
//! # Coordinate System
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Image   │
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Left and top edges are inclusive, right and bottom edges exclusive.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_math::{IRect, ISize};
//!
//! let bounds = IRect::from_size(ISize::new(100, 50));
//! assert!(bounds.contains(99, 49));
//! assert!(!bounds.contains(100, 0));
//!
//! let overlap = bounds.intersect(&IRect::new(50, 25, 200, 200)).unwrap();
//! assert_eq!(overlap, IRect::new(50, 25, 100, 50));
//! ```

use crate::size::ISize;

/// A rectangle with 32-bit integer edges.
///
/// # Invariants
///
/// None are enforced: a rectangle whose right edge is not past its left
/// edge (or bottom not past top) is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IRect {
    /// Left edge (inclusive)
    pub left: i32,
    /// Top edge (inclusive)
    pub top: i32,
    /// Right edge (exclusive)
    pub right: i32,
    /// Bottom edge (exclusive)
    pub bottom: i32,
}

impl IRect {
    /// Creates a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle at the origin with the given width and height.
    #[inline]
    pub const fn from_wh(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: ISize) -> Self {
        Self::from_wh(size.width, size.height)
    }

    /// Creates a rectangle from origin and extent.
    ///
    /// Edges wrap if `x + width` or `y + height` overflows.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.wrapping_add(width), y.wrapping_add(height))
    }

    /// Returns `right - left`, wrapping on overflow.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Returns `bottom - top`, wrapping on overflow.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Returns `right - left` computed in 64 bits.
    #[inline]
    pub const fn width64(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Returns `bottom - top` computed in 64 bits.
    #[inline]
    pub const fn height64(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Returns the extent as an [`ISize`].
    #[inline]
    pub const fn size(&self) -> ISize {
        ISize::new(self.width(), self.height())
    }

    /// Returns `true` if the rectangle encloses no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width64() <= 0 || self.height64() <= 0
    }

    /// Returns `true` if the pixel (x, y) is inside this rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    #[inline]
    pub fn intersect(&self, other: &IRect) -> Option<IRect> {
        let r = IRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

impl std::fmt::Display for IRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IRect({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
