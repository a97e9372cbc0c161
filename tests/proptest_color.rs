//! Property-based tests for tincture.
//!
//! These tests use proptest to generate random colors and verify properties
//! that should always hold true.

use proptest::prelude::*;
use tincture::{Channel, Color, Component, Error, Named, Quantity};

/// Strategy for depths that can be written as hex text.
fn hex_depth_strategy() -> impl Strategy<Value = i64> {
    (1_i64..=8).prop_map(|digits| digits * 12)
}

/// Strategy for any supported depth.
fn depth_strategy() -> impl Strategy<Value = i64> {
    (1_i64..=32).prop_map(|bits| bits * 3)
}

/// Strategy for a valid color at the given depth.
fn samples_at(depth: i64) -> impl Strategy<Value = Color> {
    let max = (1_i64 << (depth / 3)) - 1;
    (0..=max, 0..=max, 0..=max).prop_map(move |(r, g, b)| {
        Color::with_depth(r, g, b, depth).expect("samples are in range")
    })
}

/// Strategy for a valid color at a depth that can be written as hex text.
fn hex_color_strategy() -> impl Strategy<Value = Color> {
    hex_depth_strategy().prop_flat_map(samples_at)
}

/// Strategy for a valid color at any supported depth.
fn color_strategy() -> impl Strategy<Value = Color> {
    depth_strategy().prop_flat_map(samples_at)
}

/// Strategy for an 8-bit color.
fn rgb8_strategy() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trip(color in hex_color_strategy()) {
        let text = color.to_hex().unwrap();
        prop_assert_eq!(text.len(), 1 + 3 * usize::from(color.depth() / 12));
        prop_assert_eq!(Color::from_hex(&text).unwrap(), color);
    }

    #[test]
    fn boundaries_are_accepted(depth in depth_strategy()) {
        let max = (1_i64 << (depth / 3)) - 1;
        prop_assert!(Color::with_depth(0, 0, 0, depth).is_ok());
        prop_assert!(Color::with_depth(max, max, max, depth).is_ok());
    }

    #[test]
    fn out_of_range_samples_are_rejected(
        depth in depth_strategy(),
        channel in prop_oneof![Just(Channel::Red), Just(Channel::Green), Just(Channel::Blue)],
        above in any::<bool>(),
    ) {
        let max = (1_i64 << (depth / 3)) - 1;
        let bad = if above { max + 1 } else { -1 };

        let mut color = Color::with_depth(0, 0, 0, depth).unwrap();
        let result = color.set_channel(channel, bad);
        let rejected = matches!(
            result,
            Err(Error::OutOfRange { quantity: Quantity::Channel(c), .. }) if c == channel
        );
        prop_assert!(rejected);
        prop_assert_eq!(color.rgb(), (0, 0, 0));

        let mut samples = [0_i64; 3];
        samples[channel.index()] = bad;
        prop_assert!(Color::with_depth(samples[0], samples[1], samples[2], depth).is_err());
    }

    #[test]
    fn depth_must_be_multiple_of_three(depth in -200_i64..200) {
        prop_assume!(!(depth > 0 && depth <= 96 && depth % 3 == 0));
        prop_assert_eq!(Color::with_depth(0, 0, 0, depth), Err(Error::InvalidDepth(depth)));
    }

    #[test]
    fn hue_wraps_around(color in rgb8_strategy(), hue in 0.0_f64..360.0, turns in -3_i32..=3) {
        let mut wrapped = color;
        let mut direct = color;
        wrapped.set_hue((hue + 360.0 * f64::from(turns)) as Component).unwrap();
        direct.set_hue(hue as Component).unwrap();
        for channel in Channel::ALL {
            prop_assert!(wrapped.channel(channel).abs_diff(direct.channel(channel)) <= 1);
        }
    }

    #[test]
    fn no_op_hsv_updates_keep_samples(color in color_strategy()) {
        let (hue, saturation, value) = color.hsv_f64();

        let mut saturated = color;
        saturated.set_saturation_f64(saturation).unwrap();

        let mut valued = color;
        valued.set_value_f64(value).unwrap();

        let mut rotated = color;
        rotated.set_hue_f64(hue).unwrap();

        for channel in Channel::ALL {
            prop_assert!(saturated.channel(channel).abs_diff(color.channel(channel)) <= 1);
            prop_assert!(valued.channel(channel).abs_diff(color.channel(channel)) <= 1);
            prop_assert!(rotated.channel(channel).abs_diff(color.channel(channel)) <= 1);
        }
    }

    #[test]
    fn component_no_op_keeps_8_bit_samples(color in rgb8_strategy()) {
        let mut saturated = color;
        saturated.set_saturation(color.saturation()).unwrap();

        let mut valued = color;
        valued.set_value(color.value()).unwrap();

        for channel in Channel::ALL {
            prop_assert!(saturated.channel(channel).abs_diff(color.channel(channel)) <= 1);
            prop_assert!(valued.channel(channel).abs_diff(color.channel(channel)) <= 1);
        }
    }

    #[test]
    fn hue_is_below_full_turn(color in color_strategy()) {
        let hue = color.hue();
        prop_assert!((0.0..360.0).contains(&hue));
        prop_assert!((0.0..360.0).contains(&color.hsv_f64().0));
    }

    #[test]
    fn named_presets_are_independent(index in 0..Named::ALL.len(), red in 0_i64..=255) {
        let named = Named::ALL[index];
        let mut first = named.color();
        first.set_red(red).unwrap();
        let second = named.color();
        prop_assert_eq!(second.red(), u32::from(named.rgb().0));
        prop_assert_eq!(first.red(), red as u32);
    }
}

#[test]
fn goldenrod_and_invalid_inputs() {
    assert_eq!(Color::with_depth(0, 0, 0, -1), Err(Error::InvalidDepth(-1)));
    assert_eq!(Color::with_depth(0, 0, 0, 5), Err(Error::InvalidDepth(5)));
    assert!(matches!(
        Color::from_hex("#abcde"),
        Err(Error::InvalidFormat { .. })
    ));

    let color = Color::from_hex("DAA520").unwrap();
    assert_eq!(color.rgb(), (218, 165, 32));
    assert_eq!(color.to_hex().unwrap(), "#daa520");
}
