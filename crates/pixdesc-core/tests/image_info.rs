//! Descriptor behavior through the public API.
//!
//! Covers alpha validation across every color type, byte-size edge cases,
//! derived descriptors and color space sharing.

use std::sync::Arc;

use pixdesc_core::prelude::*;
use pixdesc_core::{color_type_validate_alpha_type, Gamut, TransferFn};

// ============================================================================
// Format classification
// ============================================================================

#[test]
fn opaque_color_types_reject_alpha() {
    for ct in ColorType::ALL.into_iter().filter(ColorType::is_always_opaque) {
        for at in [AlphaType::Premul, AlphaType::Unpremul] {
            assert_eq!(color_type_validate_alpha_type(ct, at), (false, AlphaType::Opaque), "{ct} {at}");
        }
        for at in [AlphaType::Unknown, AlphaType::Opaque] {
            assert_eq!(color_type_validate_alpha_type(ct, at), (true, AlphaType::Opaque), "{ct} {at}");
        }
    }
}

#[test]
fn alpha_color_types_keep_request() {
    let with_alpha = ColorType::ALL
        .into_iter()
        .filter(|ct| !ct.is_unknown() && !ct.is_always_opaque());
    for ct in with_alpha {
        assert_eq!(color_type_validate_alpha_type(ct, AlphaType::Unknown), (false, AlphaType::Unknown));
        for at in [AlphaType::Opaque, AlphaType::Premul, AlphaType::Unpremul] {
            assert_eq!(color_type_validate_alpha_type(ct, at), (true, at), "{ct} {at}");
        }
    }
}

#[test]
fn shift_is_log2_of_bytes() {
    for ct in ColorType::ALL {
        let info = ImageInfo::new(1, 1, ct, AlphaType::Premul, None);
        if info.bytes_per_pixel() > 0 {
            assert_eq!(info.bytes_per_pixel(), 1 << info.shift_per_pixel(), "{ct}");
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn empty_dimensions_have_zero_size() {
    for ct in ColorType::ALL {
        for (w, h) in [(0, 0), (0, 7), (7, 0), (-3, 7), (7, -3)] {
            let info = ImageInfo::new(w, h, ct, AlphaType::Premul, None);
            assert_eq!(info.compute_byte_size(4096), 0);
            assert_eq!(info.compute_min_byte_size(), 0);
        }
    }
}

#[test]
fn overflow_reports_sentinel() {
    let info = ImageInfo::new(i32::MAX, i32::MAX, ColorType::RgbaF32, AlphaType::Premul, None);
    let size = info.compute_byte_size(usize::MAX);
    assert_eq!(size, BYTE_SIZE_OVERFLOW);
    assert!(ImageInfo::byte_size_overflowed(size));
    assert!(info.check_row_bytes(usize::MAX).unwrap_err().is_layout_error());
}

#[test]
fn tightly_packed_size_matches_area() {
    let info = ImageInfo::new(33, 17, ColorType::RgbaF16, AlphaType::Premul, None);
    let area = info.dimensions().area() as usize;
    assert_eq!(info.compute_min_byte_size(), area * 8);
    assert_eq!(info.check_row_bytes(info.min_row_bytes()), Ok(area * 8));
}

#[test]
fn offset_of_last_pixel_is_inside_buffer() {
    let info = ImageInfo::n32_premul(64, 32, None);
    let row_bytes = 300;
    let size = info.compute_byte_size(row_bytes);
    let last = info.compute_offset(63, 31, row_bytes);
    assert_eq!(last + i64::from(info.bytes_per_pixel()), size as i64);
}

// ============================================================================
// Derived descriptors
// ============================================================================

#[test]
fn make_wh_round_trip() {
    let info = ImageInfo::s32(100, 200, AlphaType::Unpremul);
    let other = info.make_wh(1, 1).make_wh(100, 200);
    assert_eq!(other, info);
}

#[test]
fn make_changes_exactly_one_field() {
    let info = ImageInfo::n32_premul(8, 8, Some(ColorSpace::srgb()));

    let a = info.make_alpha_type(AlphaType::Opaque);
    assert_eq!((a.color_type(), a.dimensions()), (info.color_type(), info.dimensions()));
    assert_eq!(a.color_space(), info.color_space());

    let c = info.make_color_type(ColorType::Gray8);
    assert_eq!((c.alpha_type(), c.dimensions()), (info.alpha_type(), info.dimensions()));
    assert_eq!(c.color_space(), info.color_space());

    let s = info.make_color_space(Some(ColorSpace::rec2020()));
    assert_eq!(s.color_info().make_color_space(info.ref_color_space()), *info.color_info());
    assert_ne!(s, info);
}

#[test]
fn color_space_released_on_drop() {
    let cs = ColorSpace::new_rgb(TransferFn::LINEAR, Gamut::ACES_AP1).unwrap();
    let infos: Vec<ImageInfo> = (1..=4).map(|n| ImageInfo::n32_premul(n, n, Some(cs.clone()))).collect();
    assert_eq!(Arc::strong_count(&cs), 5);

    let copy = infos[0].make_alpha_type(AlphaType::Unpremul);
    assert_eq!(Arc::strong_count(&cs), 6);
    assert!(copy.color_info().shares_color_space(infos[0].color_info()));

    drop(infos);
    drop(copy);
    assert_eq!(Arc::strong_count(&cs), 1);
}

#[test]
fn color_space_equality_ignores_identity() {
    let a = ImageInfo::n32_premul(2, 2, Some(ColorSpace::srgb()));
    let b = ImageInfo::n32_premul(2, 2, ColorSpace::new_rgb(TransferFn::SRGB, Gamut::SRGB));
    assert_eq!(a, b);
    assert!(a.gamma_close_to_srgb());
    assert!(!a.make_color_space(Some(ColorSpace::srgb_linear())).gamma_close_to_srgb());
}

#[test]
fn descriptors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImageInfo>();
    assert_send_sync::<ColorInfo>();
    assert_send_sync::<ColorSpaceRef>();
}
