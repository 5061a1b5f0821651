//! Integration tests for hue mapping and color conversion.

use beatlight_stage::Rgb;
use beatlight_stage::color::{color_hsv, gamma_correct, pack_rgb, peak, rgb_from_u32};
use beatlight_stage::math::{hue10_to_hue16, map_range, rescale_bits, wheel_hue};

// -----------------------------------------------------------------------------
// Hue scaling
// -----------------------------------------------------------------------------

#[test]
fn hue_scaling_covers_the_wheel() {
    assert_eq!(hue10_to_hue16(0), 1);
    assert_eq!(hue10_to_hue16(1023), 65536);
    assert_eq!(hue10_to_hue16(511), 511 * 65535 / 1023 + 1);
    assert!(hue10_to_hue16(511).abs_diff(32768) < 64);
}

#[test]
fn hue_scaling_is_monotonic() {
    let mut previous = 0;
    for hue in 0..=1023 {
        let scaled = hue10_to_hue16(hue);
        assert!(scaled > previous, "hue {} scaled to {}", hue, scaled);
        previous = scaled;
    }
}

#[test]
fn full_turn_folds_back_to_red() {
    assert_eq!(wheel_hue(65536), 0);
    assert_eq!(wheel_hue(1), 1);
    assert_eq!(wheel_hue(65535), 65535);
}

#[test]
fn map_range_interpolates() {
    assert_eq!(map_range(5, 0, 10, 0, 100), 50);
    assert_eq!(map_range(0, 0, 1023, 1, 65536), 1);
    assert_eq!(map_range(10, 10, 20, 100, 0), 100);
    assert_eq!(map_range(3, 7, 7, 42, 99), 42);
}

#[test]
fn adc_samples_rescale_to_ten_bits() {
    assert_eq!(rescale_bits(4095, 12, 10), 1023);
    assert_eq!(rescale_bits(0, 12, 10), 0);
    assert_eq!(rescale_bits(2048, 12, 10), 512);
    assert_eq!(rescale_bits(1023, 10, 12), 4092);
    assert_eq!(rescale_bits(700, 10, 10), 700);
}

// -----------------------------------------------------------------------------
// HSV conversion
// -----------------------------------------------------------------------------

#[test]
fn primary_hues_at_full_value() {
    assert_eq!(color_hsv(0, 255, 255), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(color_hsv(21845, 255, 255), Rgb { r: 0, g: 255, b: 0 });
    assert_eq!(color_hsv(43690, 255, 255), Rgb { r: 0, g: 0, b: 255 });
    assert_eq!(color_hsv(65535, 255, 255), Rgb { r: 255, g: 0, b: 0 });
}

#[test]
fn zero_saturation_is_white() {
    assert_eq!(color_hsv(12345, 0, 255), Rgb { r: 255, g: 255, b: 255 });
}

#[test]
fn value_scales_the_brightest_channel() {
    assert_eq!(color_hsv(0, 255, 120), Rgb { r: 120, g: 0, b: 0 });
    assert_eq!(color_hsv(0, 255, 50), Rgb { r: 50, g: 0, b: 0 });
    assert_eq!(color_hsv(30000, 255, 0), Rgb { r: 0, g: 0, b: 0 });

    for hue in (0..=u16::MAX).step_by(997) {
        assert_eq!(peak(color_hsv(hue, 255, 120)), 120, "hue {}", hue);
    }
}

// -----------------------------------------------------------------------------
// Gamma and packing
// -----------------------------------------------------------------------------

#[test]
fn gamma_keeps_extremes() {
    assert_eq!(gamma_correct(Rgb { r: 0, g: 0, b: 0 }), Rgb { r: 0, g: 0, b: 0 });
    assert_eq!(
        gamma_correct(Rgb { r: 255, g: 255, b: 255 }),
        Rgb { r: 255, g: 255, b: 255 }
    );
}

#[test]
fn gamma_darkens_midtones() {
    let corrected = gamma_correct(Rgb { r: 120, g: 50, b: 0 });

    assert!(corrected.r < 120);
    assert!(corrected.g < 50);
    assert!(corrected.g < corrected.r);
}

#[test]
fn packing_round_trips() {
    let color = Rgb { r: 0x12, g: 0x34, b: 0x56 };

    assert_eq!(pack_rgb(color), 0x0012_3456);
    assert_eq!(rgb_from_u32(0x00AB_CDEF), Rgb { r: 0xAB, g: 0xCD, b: 0xEF });
    assert_eq!(rgb_from_u32(pack_rgb(color)), color);
}
