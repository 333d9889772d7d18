//! Integration tests for colors module

use bar_sequencer::colors;
use palette::Srgb;

fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.01;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

#[test]
fn rgb_hex_unpacks_channels() {
    let color = colors::rgb_hex(0xFF8000);
    assert!(colors_equal(color, Srgb::new(1.0, 0.5, 0.0)));

    assert!(colors_equal(colors::rgb_hex(0x000000), Srgb::new(0.0, 0.0, 0.0)));
    assert!(colors_equal(colors::rgb_hex(0xFFFFFF), Srgb::new(1.0, 1.0, 1.0)));
}

#[test]
fn default_colors_match_material_palette() {
    // #F44336
    assert!(colors_equal(
        colors::RED,
        Srgb::new(244.0 / 255.0, 67.0 / 255.0, 54.0 / 255.0)
    ));
    // #BDBDBD
    assert!(colors_equal(colors::BACKDROP, Srgb::new(0.741, 0.741, 0.741)));
    assert_eq!(colors::DEFAULT_COLORS.len(), 5);
    assert_eq!(colors::DEFAULT_COLORS[4], colors::LIGHT_BLUE);
}

#[test]
fn hsv_creates_primary_colors() {
    let red = colors::hsv(0.0, 1.0, 1.0);
    assert!(colors_equal(red, Srgb::new(1.0, 0.0, 0.0)));

    let green = colors::hsv(120.0, 1.0, 1.0);
    assert!(colors_equal(green, Srgb::new(0.0, 1.0, 0.0)));

    let blue = colors::hsv(240.0, 1.0, 1.0);
    assert!(colors_equal(blue, Srgb::new(0.0, 0.0, 1.0)));
}

#[test]
fn hsv_handles_saturation_and_value() {
    let gray = colors::hsv(0.0, 0.0, 0.5);
    assert!(colors_equal(gray, Srgb::new(0.5, 0.5, 0.5)));

    let black = colors::hsv(0.0, 1.0, 0.0);
    assert!(colors_equal(black, Srgb::new(0.0, 0.0, 0.0)));
}

#[test]
fn hue_wraps_around_360() {
    let red1 = colors::hue(0.0);
    let red2 = colors::hue(360.0);
    assert!(colors_equal(red1, red2));

    let cyan = colors::hue(180.0);
    assert!(colors_equal(cyan, Srgb::new(0.0, 1.0, 1.0)));
}
