//! Temperature unit conversion and label formatting
//!
//! The board speaks Celsius (one unsigned byte on the wire); the operator
//! reads Fahrenheit. Conversion is integer-only and rounds to the nearest
//! whole degree, half away from zero.

use core::fmt::Write;

use heapless::String;

/// Label shown when no live temperature reading is available.
pub const UNKNOWN_LABEL: &str = "XX°F";

/// Capacity of a formatted temperature label, covering the widest i16
/// rendering plus the two-byte degree sign.
pub const LABEL_LEN: usize = 12;

/// Round `n / d` to the nearest integer, half away from zero. `d` must be
/// positive.
fn div_round(n: i32, d: i32) -> i32 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        (n - d / 2) / d
    }
}

/// Convert whole degrees Celsius to whole degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: i16) -> i16 {
    let f = div_round(i32::from(celsius) * 9, 5) + 32;
    f.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Convert whole degrees Fahrenheit to whole degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: i16) -> i16 {
    div_round((i32::from(fahrenheit) - 32) * 5, 9) as i16
}

/// Render a Fahrenheit reading for a panel label; `None` renders the
/// unknown sentinel instead of a stale number.
pub fn fahrenheit_label(temp_f: Option<i16>) -> String<LABEL_LEN> {
    let mut label = String::new();
    match temp_f {
        Some(f) => {
            let _ = write!(label, "{}°F", f);
        }
        None => {
            let _ = label.push_str(UNKNOWN_LABEL);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conversions() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(21), 70);
        assert_eq!(celsius_to_fahrenheit(25), 77);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(232), 450);

        assert_eq!(fahrenheit_to_celsius(32), 0);
        assert_eq!(fahrenheit_to_celsius(70), 21);
        assert_eq!(fahrenheit_to_celsius(212), 100);
        assert_eq!(fahrenheit_to_celsius(450), 232);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 75°F is 23.9°C — must round up, not truncate
        assert_eq!(fahrenheit_to_celsius(75), 24);
        // 34°F is 1.1°C
        assert_eq!(fahrenheit_to_celsius(34), 1);
        // 13°C is 55.4°F
        assert_eq!(celsius_to_fahrenheit(13), 55);
    }

    #[test]
    fn test_roundtrip_over_wire_range() {
        // Every Celsius value the board can report survives a trip through
        // the display conversion within one degree.
        for c in 0..=255i16 {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() <= 1, "{} -> {}", c, back);
        }
    }

    #[test]
    fn test_negative_temperatures() {
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        assert_eq!(fahrenheit_to_celsius(-40), -40);
        assert_eq!(fahrenheit_to_celsius(0), -18);
    }

    #[test]
    fn test_labels() {
        assert_eq!(fahrenheit_label(Some(78)).as_str(), "78°F");
        assert_eq!(fahrenheit_label(Some(-4)).as_str(), "-4°F");
        assert_eq!(fahrenheit_label(None).as_str(), "XX°F");
    }

    #[test]
    fn test_label_capacity_covers_extremes() {
        assert_eq!(fahrenheit_label(Some(i16::MIN)).as_str(), "-32768°F");
        assert_eq!(fahrenheit_label(Some(i16::MAX)).as_str(), "32767°F");
    }
}
