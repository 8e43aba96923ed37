//! Two-component points and vectors.
//!
//! [`Point`] holds two `f32` coordinates and doubles as a 2D vector.
//! [`IPoint`] holds two `i32` coordinates.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_math::{IPoint, Point};
//!
//! let mut v = Point::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! assert!(v.normalize());
//!
//! let p = IPoint::new(1, 2) + IPoint::new(3, 4);
//! assert_eq!(p, IPoint::new(4, 6));
//! ```
//!
//! # Degenerate vectors
//!
//! [`Point::normalize`], [`Point::set_normalize`] and [`Point::set_length`]
//! return `false` and leave the point untouched when the input has zero or
//! non-finite length, or when the rescaled result would not be finite.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{check_arity, GeomError};

/// A point or vector with two `f32` coordinates.
///
/// # Example
///
/// ```rust
/// use pixdesc_math::Point;
///
/// let a = Point::new(1.0, 2.0);
/// let b = Point::from((3.0, 4.0));
/// assert_eq!(a + b, Point::new(4.0, 6.0));
/// assert_eq!(a.cross(b), 1.0 * 4.0 - 2.0 * 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point {
    /// X-axis value
    pub x: f32,
    /// Y-axis value
    pub y: f32,
}

/// Alias used where a [`Point`] is interpreted as a direction.
pub type Vector = Point;

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-axis value.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y-axis value.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns true if both coordinates are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Sets both coordinates.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Sets both coordinates from integers, promoting them to `f32`.
    #[inline]
    pub fn iset(&mut self, x: i32, y: i32) {
        self.set(x as f32, y as f32);
    }

    /// Sets both coordinates from an [`IPoint`].
    #[inline]
    pub fn iset_point(&mut self, p: IPoint) {
        self.iset(p.x, p.y);
    }

    /// Sets each coordinate to the absolute value of `pt`'s.
    #[inline]
    pub fn set_abs(&mut self, pt: Point) {
        self.set(pt.x.abs(), pt.y.abs());
    }

    /// Adds `(dx, dy)` to the point.
    #[inline]
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns true if the point equals `(x, y)`.
    #[inline]
    pub fn equals(&self, x: f32, y: f32) -> bool {
        self.x == x && self.y == y
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn length(&self) -> f32 {
        Self::length_of(self.x, self.y)
    }

    /// Same as [`Point::length`].
    #[inline]
    pub fn distance_to_origin(&self) -> f32 {
        self.length()
    }

    /// Scales the vector to unit length.
    ///
    /// Returns `false` and leaves the vector unchanged if its length is zero
    /// or not finite.
    #[inline]
    pub fn normalize(&mut self) -> bool {
        self.set_length_xy(self.x, self.y, 1.0)
    }

    /// Sets the vector to `(x, y)` scaled to unit length.
    ///
    /// Returns `false` and leaves the vector unchanged if `(x, y)` has zero
    /// or non-finite length.
    #[inline]
    pub fn set_normalize(&mut self, x: f32, y: f32) -> bool {
        self.set_length_xy(x, y, 1.0)
    }

    /// Scales the vector so that its length becomes `length`.
    #[inline]
    pub fn set_length(&mut self, length: f32) -> bool {
        self.set_length_xy(self.x, self.y, length)
    }

    /// Sets the vector to `(x, y)` scaled to `length`.
    pub fn set_length_xy(&mut self, x: f32, y: f32, length: f32) -> bool {
        match scaled_to_length(x, y, length) {
            Some((nx, ny, _)) => {
                self.set(nx, ny);
                true
            }
            None => false,
        }
    }

    /// Returns the point multiplied by `scale`.
    #[inline]
    pub fn scaled(&self, scale: f32) -> Point {
        Point::new(self.x * scale, self.y * scale)
    }

    /// Scales the point in place.
    #[inline]
    pub fn scale(&mut self, scale: f32) {
        *self = self.scaled(scale);
    }

    /// Changes the sign of both coordinates.
    #[inline]
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Returns true if both coordinates are neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product with `vec`.
    #[inline]
    pub fn dot(&self, vec: Vector) -> f32 {
        Self::dot_product(*self, vec)
    }

    /// Cross product with `vec`, i.e. the z component of the 3D cross product.
    #[inline]
    pub fn cross(&self, vec: Vector) -> f32 {
        Self::cross_product(*self, vec)
    }

    /// Euclidean length of `(x, y)`.
    ///
    /// Falls back to `f64` when the squared magnitude overflows `f32`.
    pub fn length_of(x: f32, y: f32) -> f32 {
        let mag2 = x * x + y * y;
        if mag2.is_finite() {
            mag2.sqrt()
        } else {
            let (xx, yy) = (x as f64, y as f64);
            (xx * xx + yy * yy).sqrt() as f32
        }
    }

    /// Normalizes `vec` in place and returns its original length.
    ///
    /// Returns `0.0` and leaves `vec` unchanged if it cannot be normalized.
    pub fn normalize_vec(vec: &mut Vector) -> f32 {
        match scaled_to_length(vec.x, vec.y, 1.0) {
            Some((nx, ny, orig)) => {
                vec.set(nx, ny);
                orig
            }
            None => 0.0,
        }
    }

    /// Euclidean distance between `a` and `b`.
    #[inline]
    pub fn distance(a: Point, b: Point) -> f32 {
        Self::length_of(a.x - b.x, a.y - b.y)
    }

    /// Dot product of `a` and `b`.
    #[inline]
    pub fn dot_product(a: Vector, b: Vector) -> f32 {
        a.x * b.x + a.y * b.y
    }

    /// Cross product of `a` and `b`: `a.x * b.y - a.y * b.x`.
    #[inline]
    pub fn cross_product(a: Vector, b: Vector) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// Adds `offset` to every point in `points`.
    pub fn offset_all(points: &mut [Point], offset: Vector) {
        Self::offset_all_xy(points, offset.x, offset.y);
    }

    /// Adds `(dx, dy)` to every point in `points`.
    pub fn offset_all_xy(points: &mut [Point], dx: f32, dy: f32) {
        for p in points {
            p.offset(dx, dy);
        }
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Rescales `(x, y)` to `length` with the magnitude computed in `f64`.
///
/// Returns the new coordinates and the original magnitude, or `None` when
/// the result is not finite or collapses to zero.
fn scaled_to_length(x: f32, y: f32, length: f32) -> Option<(f32, f32, f32)> {
    let (xx, yy) = (x as f64, y as f64);
    let mag = (xx * xx + yy * yy).sqrt();
    let scale = length as f64 / mag;
    let nx = (xx * scale) as f32;
    let ny = (yy * scale) as f32;
    if !nx.is_finite() || !ny.is_finite() || (nx == 0.0 && ny == 0.0) {
        return None;
    }
    Some((nx, ny, mag as f32))
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

impl MulAssign<f32> for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.scale(rhs);
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Point {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f32; 2] {
    #[inline]
    fn from(p: Point) -> [f32; 2] {
        p.to_array()
    }
}

impl TryFrom<&[f32]> for Point {
    type Error = GeomError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_arity("Point", 2, values.len())?;
        Ok(Self::new(values[0], values[1]))
    }
}

impl From<IPoint> for Point {
    #[inline]
    fn from(p: IPoint) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl From<glam::Vec2> for Point {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for glam::Vec2 {
    #[inline]
    fn from(p: Point) -> glam::Vec2 {
        glam::Vec2::new(p.x, p.y)
    }
}

/// A point with two 32-bit integer coordinates.
///
/// Arithmetic wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IPoint {
    /// X-axis value
    pub x: i32,
    /// Y-axis value
    pub y: i32,
}

/// Alias used where an [`IPoint`] is interpreted as a direction.
pub type IVector = IPoint;

impl IPoint {
    /// Origin (0, 0).
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-axis value.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Returns the y-axis value.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns true if both coordinates are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Sets both coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Returns true if the point equals `(x, y)`.
    #[inline]
    pub const fn equals(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

impl Add for IPoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for IPoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Neg for IPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl AddAssign for IPoint {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for IPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for IPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for IPoint {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[i32]> for IPoint {
    type Error = GeomError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        check_arity("IPoint", 2, values.len())?;
        Ok(Self::new(values[0], values[1]))
    }
}

impl From<glam::IVec2> for IPoint {
    #[inline]
    fn from(v: glam::IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<IPoint> for glam::IVec2 {
    #[inline]
    fn from(p: IPoint) -> glam::IVec2 {
        glam::IVec2::new(p.x, p.y)
    }
}
