//! Tests for wheel event decoding and translation

use proptest::prelude::*;
use ratatui::crossterm::event::{MouseButton, MouseEventKind};

use super::*;
use crate::config::WheelConfig;

fn units(event: WheelEvent) -> i32 {
    scroll_units(event, &WheelConfig::default())
}

#[test]
fn test_button_codes() {
    assert_eq!(WheelButton::from_code(4), Some(WheelButton::Up));
    assert_eq!(WheelButton::from_code(5), Some(WheelButton::Down));
    assert_eq!(WheelButton::from_code(1), None);
    assert_eq!(WheelButton::from_code(6), None);
    assert_eq!(WheelButton::Up.code(), 4);
    assert_eq!(WheelButton::Down.code(), 5);
}

#[test]
fn test_discrete_up_scrolls_one_unit_toward_start() {
    let up = WheelButton::from_code(4).map(WheelEvent::Discrete).unwrap();
    assert_eq!(units(up), -1);
}

#[test]
fn test_discrete_down_scrolls_one_unit_toward_end() {
    let down = WheelButton::from_code(5).map(WheelEvent::Discrete).unwrap();
    assert_eq!(units(down), 1);
}

#[test]
fn test_continuous_one_notch() {
    assert_eq!(units(WheelEvent::Continuous(-120)), 1);
    assert_eq!(units(WheelEvent::Continuous(120)), -1);
}

#[test]
fn test_continuous_multiple_notches() {
    assert_eq!(units(WheelEvent::Continuous(240)), -2);
    assert_eq!(units(WheelEvent::Continuous(-360)), 3);
}

#[test]
fn test_continuous_truncates_toward_zero() {
    assert_eq!(units(WheelEvent::Continuous(45)), 0);
    assert_eq!(units(WheelEvent::Continuous(-45)), 0);
    assert_eq!(units(WheelEvent::Continuous(239)), -1);
    assert_eq!(units(WheelEvent::Continuous(-239)), 1);
}

#[test]
fn test_continuous_custom_divisor() {
    let config = WheelConfig {
        delta_divisor: 1,
        ..WheelConfig::default()
    };
    assert_eq!(scroll_units(WheelEvent::Continuous(3), &config), -3);
}

#[test]
fn test_zero_divisor_falls_back_to_wheel_delta() {
    let config = WheelConfig {
        delta_divisor: 0,
        ..WheelConfig::default()
    };
    assert_eq!(scroll_units(WheelEvent::Continuous(240), &config), -2);
}

#[test]
fn test_extreme_delta_does_not_overflow() {
    let config = WheelConfig {
        delta_divisor: -1,
        ..WheelConfig::default()
    };
    // i32::MIN / -1 overflows; falls back to the default divisor
    assert_eq!(
        scroll_units(WheelEvent::Continuous(i32::MIN), &config),
        -(i32::MIN / WHEEL_DELTA)
    );
    assert_eq!(units(WheelEvent::Continuous(i32::MIN)), 17_895_697);
}

#[test]
fn test_from_mouse_kind() {
    assert_eq!(
        WheelEvent::from_mouse_kind(MouseEventKind::ScrollUp),
        Some(WheelEvent::Discrete(WheelButton::Up))
    );
    assert_eq!(
        WheelEvent::from_mouse_kind(MouseEventKind::ScrollDown),
        Some(WheelEvent::Discrete(WheelButton::Down))
    );
    assert_eq!(
        WheelEvent::from_mouse_kind(MouseEventKind::Down(MouseButton::Left)),
        None
    );
    assert_eq!(WheelEvent::from_mouse_kind(MouseEventKind::Moved), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Continuous translation is the inverted, truncated quotient
    #[test]
    fn prop_continuous_matches_truncated_quotient(delta in -1_000_000i32..1_000_000) {
        let expected = -(delta / WHEEL_DELTA);
        prop_assert_eq!(units(WheelEvent::Continuous(delta)), expected);
    }

    // Sub-notch deltas never scroll
    #[test]
    fn prop_sub_notch_is_zero(delta in -119i32..=119) {
        prop_assert_eq!(units(WheelEvent::Continuous(delta)), 0);
    }
}
