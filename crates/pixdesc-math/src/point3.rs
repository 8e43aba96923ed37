//! Three-component point type.
//!
//! [`Point3`] is a 3D point or direction with `f32` coordinates, used for
//! light positions and surface normals.
//!
//! # Usage
//!
//! ```rust
//! use pixdesc_math::Point3;
//!
//! let x = Point3::new(1.0, 0.0, 0.0);
//! let y = Point3::new(0.0, 1.0, 0.0);
//! assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
//! ```

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::error::{check_arity, GeomError};

/// A 3D point or vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, the accessor methods, or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use pixdesc_math::Point3;
///
/// let p = Point3::new(2.0, 3.0, 6.0);
/// assert_eq!(p.length(), 7.0);
/// assert_eq!(p[2], 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Point3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Euclidean distance from the origin to `(x, y, z)`.
    pub fn length_of(x: f32, y: f32, z: f32) -> f32 {
        let mag2 = x * x + y * y + z * z;
        if mag2.is_finite() {
            mag2.sqrt()
        } else {
            let (xx, yy, zz) = (x as f64, y as f64, z as f64);
            (xx * xx + yy * yy + zz * zz).sqrt() as f32
        }
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        Self::length_of(self.x, self.y, self.z)
    }

    /// Scales the vector to unit length in place.
    ///
    /// Returns `false` and leaves the vector unchanged if its length is zero
    /// or not finite.
    pub fn normalize(&mut self) -> bool {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        let scale = 1.0 / (x * x + y * y + z * z).sqrt();
        let n = Self::new((x * scale) as f32, (y * scale) as f32, (z * scale) as f32);
        if !n.is_finite() || n == Self::ZERO {
            return false;
        }
        *self = n;
        true
    }

    /// Returns a new point with every component multiplied by `scale`.
    #[inline]
    pub fn make_scale(&self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }

    /// Scales the point in place.
    #[inline]
    pub fn scale(&mut self, value: f32) {
        *self = self.make_scale(value);
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        Self::dot_product(*self, other)
    }

    /// Cross product with another vector.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self::cross_product(*self, other)
    }

    /// Dot product of `a` and `b`.
    #[inline]
    pub fn dot_product(a: Self, b: Self) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Cross product of `a` and `b`.
    #[inline]
    pub fn cross_product(a: Self, b: Self) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

// Indexing
impl Index<usize> for Point3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Point3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3 index out of bounds: {}", i),
        }
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Point3 * f32
impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.make_scale(rhs)
    }
}

// f32 * Point3
impl Mul<Point3> for f32 {
    type Output = Point3;

    #[inline]
    fn mul(self, rhs: Point3) -> Point3 {
        rhs.make_scale(self)
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Point3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(v: Point3) -> [f32; 3] {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Point3 {
    type Error = GeomError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_arity("Point3", 3, values.len())?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl From<glam::Vec3> for Point3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for glam::Vec3 {
    #[inline]
    fn from(v: Point3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point3_new() {
        let v = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn test_point3_cross() {
        assert_eq!(Point3::X.cross(Point3::Y), Point3::Z);
        assert_eq!(Point3::Y.cross(Point3::X), -Point3::Z);
        assert_eq!(Point3::cross_product(Point3::Y, Point3::Z), Point3::X);
    }

    #[test]
    fn test_point3_dot() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Point3::dot_product(a, b), b.dot(a));
    }

    #[test]
    fn test_point3_length() {
        assert_eq!(Point3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Point3::length_of(0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_point3_normalize() {
        let mut v = Point3::new(0.0, 3.0, 4.0);
        assert!(v.normalize());
        assert_relative_eq!(v.y, 0.6);
        assert_relative_eq!(v.z, 0.8);
        assert_relative_eq!(v.length(), 1.0);
    }

    #[test]
    fn test_point3_normalize_degenerate_is_noop() {
        let mut z = Point3::ZERO;
        assert!(!z.normalize());
        assert_eq!(z, Point3::ZERO);

        let mut inf = Point3::new(1.0, f32::INFINITY, 0.0);
        assert!(!inf.normalize());
        assert_eq!(inf.y, f32::INFINITY);
    }

    #[test]
    fn test_point3_ops() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Point3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.make_scale(0.5), Point3::new(0.5, 1.0, 1.5));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c.scale(0.0);
        assert_eq!(c, Point3::ZERO);
    }

    #[test]
    fn test_point3_index() {
        let mut v = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
    }

    #[test]
    fn test_point3_is_finite() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(1.0, f32::NAN, 3.0).is_finite());
    }

    #[test]
    fn test_point3_try_from_slice() {
        let v = Point3::try_from(&[1.0_f32, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, Point3::new(1.0, 2.0, 3.0));
        let err = Point3::try_from(&[1.0_f32, 2.0][..]).unwrap_err();
        assert_eq!(err, GeomError::invalid_argument("Point3", 3, 2));
    }
}
