//! Color space descriptions shared between pixel descriptors.
//!
//! A [`ColorSpace`] pairs a [`Gamut`] (RGB primaries and white point) with a
//! parametric [`TransferFn`]. Descriptors never transform colors with it;
//! they store it, share it, compare it and ask whether its transfer curve is
//! close to sRGB.
//!
//! # Ownership
//!
//! Color spaces are immutable and handed around as [`ColorSpaceRef`]
//! (`Arc<ColorSpace>`). Cloning a descriptor acquires another reference;
//! dropping it releases one. The color space is freed with its last holder.
//!
//! ```
//! use std::sync::Arc;
//! use pixdesc_core::ColorSpace;
//!
//! let a = ColorSpace::srgb();
//! let b = ColorSpace::srgb();
//! assert!(Arc::ptr_eq(&a, &b)); // shared singleton
//! assert!(a.gamma_close_to_srgb());
//! assert!(!ColorSpace::srgb_linear().gamma_close_to_srgb());
//! ```
//!
//! # Equality
//!
//! Two color spaces are equal when their gamut and transfer function are
//! equal; the display name does not participate.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

/// Shared, reference-counted handle to a [`ColorSpace`].
pub type ColorSpaceRef = Arc<ColorSpace>;

/// Per-parameter tolerance used when comparing transfer functions.
const TRANSFER_FN_TOLERANCE: f32 = 0.01;

/// Seven-parameter transfer function mapping encoded values to linear.
///
/// ```text
/// linear = c * x + f          for x <  d
/// linear = (a * x + b)^g + e  for x >= d
/// ```
///
/// Negative inputs are mirrored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferFn {
    /// Exponent
    pub g: f32,
    /// Scale inside the power segment
    pub a: f32,
    /// Offset inside the power segment
    pub b: f32,
    /// Slope of the linear segment
    pub c: f32,
    /// Breakpoint between the segments
    pub d: f32,
    /// Offset added to the power segment
    pub e: f32,
    /// Offset added to the linear segment
    pub f: f32,
}

impl TransferFn {
    /// IEC 61966-2-1 sRGB curve.
    pub const SRGB: Self = Self {
        g: 2.4,
        a: 1.0 / 1.055,
        b: 0.055 / 1.055,
        c: 1.0 / 12.92,
        d: 0.04045,
        e: 0.0,
        f: 0.0,
    };

    /// Identity (linear light).
    pub const LINEAR: Self = Self::gamma(1.0);

    /// Pure 2.2 power curve.
    pub const GAMMA_2_2: Self = Self::gamma(2.2);

    /// ITU-R BT.2020 curve.
    pub const REC2020: Self = Self {
        g: 2.22222,
        a: 0.909672,
        b: 0.0903276,
        c: 0.222222,
        d: 0.0812429,
        e: 0.0,
        f: 0.0,
    };

    /// Pure power curve `x^g`.
    #[inline]
    pub const fn gamma(g: f32) -> Self {
        Self {
            g,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Evaluates the curve at `x`.
    pub fn eval(&self, x: f32) -> f32 {
        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();
        let y = if x < self.d {
            self.c * x + self.f
        } else {
            (self.a * x + self.b).powf(self.g) + self.e
        };
        sign * y
    }

    /// Returns true if every parameter is within tolerance of `other`'s.
    pub fn approx_eq(&self, other: &TransferFn) -> bool {
        self.params()
            .iter()
            .zip(other.params().iter())
            .all(|(a, b)| (a - b).abs() < TRANSFER_FN_TOLERANCE)
    }

    /// Returns true if the curve is the identity.
    pub fn is_linear(&self) -> bool {
        self.approx_eq(&Self::LINEAR)
    }

    /// Returns true if every parameter is finite.
    pub fn is_finite(&self) -> bool {
        self.params().iter().all(|p| p.is_finite())
    }

    fn params(&self) -> [f32; 7] {
        [self.g, self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

/// RGB primaries and white point as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gamut {
    /// Red, green, blue primaries
    pub primaries: [(f32, f32); 3],
    /// White point
    pub white_point: (f32, f32),
}

impl Gamut {
    /// D65 white point.
    pub const D65: (f32, f32) = (0.3127, 0.3290);

    /// sRGB / Rec.709 primaries, D65.
    pub const SRGB: Self = Self {
        primaries: [(0.640, 0.330), (0.300, 0.600), (0.150, 0.060)],
        white_point: Self::D65,
    };

    /// DCI-P3 primaries with D65 white (Display P3).
    pub const DISPLAY_P3: Self = Self {
        primaries: [(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)],
        white_point: Self::D65,
    };

    /// ITU-R BT.2020 primaries, D65.
    pub const REC2020: Self = Self {
        primaries: [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
        white_point: Self::D65,
    };

    /// ACES AP1 primaries, ACES white (~D60).
    pub const ACES_AP1: Self = Self {
        primaries: [(0.713, 0.293), (0.165, 0.830), (0.128, 0.044)],
        white_point: (0.32168, 0.33767),
    };
}

/// An immutable color gamut and transfer function pair.
///
/// Usually held as a [`ColorSpaceRef`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSpace {
    name: Cow<'static, str>,
    transfer: TransferFn,
    gamut: Gamut,
}

impl ColorSpace {
    /// Creates a named color space.
    pub fn new(name: impl Into<Cow<'static, str>>, transfer: TransferFn, gamut: Gamut) -> Self {
        Self {
            name: name.into(),
            transfer,
            gamut,
        }
    }

    /// Creates a shared color space from a transfer function and gamut.
    ///
    /// Returns `None` if any transfer function parameter is not finite.
    pub fn new_rgb(transfer: TransferFn, gamut: Gamut) -> Option<ColorSpaceRef> {
        if !transfer.is_finite() {
            return None;
        }
        Some(Arc::new(Self::new("custom", transfer, gamut)))
    }

    /// Shared sRGB color space.
    pub fn srgb() -> ColorSpaceRef {
        static SRGB: OnceLock<ColorSpaceRef> = OnceLock::new();
        SRGB.get_or_init(|| Arc::new(Self::new("sRGB", TransferFn::SRGB, Gamut::SRGB)))
            .clone()
    }

    /// Shared linear sRGB color space.
    pub fn srgb_linear() -> ColorSpaceRef {
        static SRGB_LINEAR: OnceLock<ColorSpaceRef> = OnceLock::new();
        SRGB_LINEAR
            .get_or_init(|| Arc::new(Self::new("Linear sRGB", TransferFn::LINEAR, Gamut::SRGB)))
            .clone()
    }

    /// Display P3 (DCI-P3 primaries, D65, sRGB curve).
    pub fn display_p3() -> ColorSpaceRef {
        Arc::new(Self::new("Display P3", TransferFn::SRGB, Gamut::DISPLAY_P3))
    }

    /// Rec.2020 with the BT.2020 curve.
    pub fn rec2020() -> ColorSpaceRef {
        Arc::new(Self::new("Rec.2020", TransferFn::REC2020, Gamut::REC2020))
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transfer function.
    #[inline]
    pub fn transfer_fn(&self) -> &TransferFn {
        &self.transfer
    }

    /// Primaries and white point.
    #[inline]
    pub fn gamut(&self) -> &Gamut {
        &self.gamut
    }

    /// Returns true if the transfer curve is approximately sRGB.
    #[inline]
    pub fn gamma_close_to_srgb(&self) -> bool {
        self.transfer.approx_eq(&TransferFn::SRGB)
    }

    /// Returns true if the transfer curve is linear.
    #[inline]
    pub fn gamma_is_linear(&self) -> bool {
        self.transfer.is_linear()
    }

    /// Returns true if this is sRGB: sRGB gamut and approximately sRGB curve.
    pub fn is_srgb(&self) -> bool {
        self.gamut == Gamut::SRGB && self.gamma_close_to_srgb()
    }

    /// Same gamut with a linear transfer function.
    pub fn make_linear_gamma(&self) -> ColorSpaceRef {
        if self.gamut == Gamut::SRGB {
            return Self::srgb_linear();
        }
        Arc::new(Self::new(self.name.clone(), TransferFn::LINEAR, self.gamut))
    }

    /// Same gamut with the sRGB transfer function.
    pub fn make_srgb_gamma(&self) -> ColorSpaceRef {
        if self.gamut == Gamut::SRGB {
            return Self::srgb();
        }
        Arc::new(Self::new(self.name.clone(), TransferFn::SRGB, self.gamut))
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        self.transfer == other.transfer && self.gamut == other.gamut
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Compares two optional color spaces by value.
pub(crate) fn color_space_eq(a: Option<&ColorSpace>, b: Option<&ColorSpace>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
