//! Loose numeric coercion for record fields that arrive from older or
//! hand-written JSON, where counters and distances may be strings,
//! floats or missing altogether.

use serde_json::Value;

use crate::UNKNOWN_TRUST_DISTANCE;

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_31: f64 = 2_147_483_648.0;

/// Convert a JSON value to a number the way a script engine would.
///
/// `null` and blank strings are 0, booleans are 0/1, numeric strings
/// (decimal, exponent, or `0x`/`0o`/`0b` prefixed) parse, anything else
/// is NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn string_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() || digits.starts_with('+') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust accepts "inf" and "nan" spellings that must stay NaN here.
    if t
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Leading-integer parse: optional sign, optional hex prefix, then digits.
/// Trailing garbage is ignored; no digits at all yields `None`.
fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            let f = n.as_f64()?;
            if f.is_finite() {
                Some(f.trunc() as i64)
            } else {
                None
            }
        }
        Value::String(s) => {
            let t = s.trim_start();
            let (negative, rest) = match t.as_bytes().first() {
                Some(b'-') => (true, &t[1..]),
                Some(b'+') => (false, &t[1..]),
                _ => (false, t),
            };
            let (radix, digits) = match rest.get(..2) {
                Some("0x") | Some("0X") => (16, &rest[2..]),
                _ => (10, rest),
            };
            let end = digits
                .find(|c: char| !c.is_digit(radix))
                .unwrap_or(digits.len());
            if end == 0 {
                return None;
            }
            let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
            Some(if negative { -magnitude } else { magnitude })
        }
        _ => None,
    }
}

/// Parse-or-zero coercion for endorsement counters.
///
/// Truncates toward zero and wraps into the signed 32-bit range; absent,
/// NaN and infinite inputs become 0.
pub fn coerce_counter(value: Option<&Value>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let n = to_number(value);
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_POW_32);
    let signed = if wrapped >= TWO_POW_31 {
        wrapped - TWO_POW_32
    } else {
        wrapped
    };
    signed as i64
}

/// A valid attribute distance: the full numeric value used for comparison
/// and the leading-integer hop count that gets stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub hops: u32,
}

/// Distance carried by an attribute's `dist` field.
///
/// Valid only when the value has a leading integer and the whole value is
/// a non-negative number; `"x"`, `-1`, `""` and `"3abc"` are all rejected.
/// `"1e3"` is worth 1000 when compared but stores 1 hop.
pub fn parse_distance(value: &Value) -> Option<Distance> {
    let hops = parse_int(value)?;
    let n = to_number(value);
    if n.is_nan() || n < 0.0 {
        return None;
    }
    Some(Distance {
        value: n,
        hops: hops.clamp(0, i64::from(u32::MAX)) as u32,
    })
}

/// Starting distance threshold of a record: its own `trustDistance` when
/// that is a finite non-negative number, otherwise [`UNKNOWN_TRUST_DISTANCE`].
/// Fractions are kept until an attribute distance replaces the value.
pub fn initial_trust_distance(value: Option<&Value>) -> f64 {
    match value.map(to_number) {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => f64::from(UNKNOWN_TRUST_DISTANCE),
    }
}

/// Stored form of a distance threshold: truncated and clamped to `u32`.
pub fn distance_hops(threshold: f64) -> u32 {
    threshold.trunc().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counter_absent_is_zero() {
        assert_eq!(coerce_counter(None), 0);
    }

    #[test]
    fn test_counter_non_numeric_is_zero() {
        assert_eq!(coerce_counter(Some(&json!("abc"))), 0);
        assert_eq!(coerce_counter(Some(&json!({"a": 1}))), 0);
        assert_eq!(coerce_counter(Some(&json!(null))), 0);
    }

    #[test]
    fn test_counter_truncates_toward_zero() {
        assert_eq!(coerce_counter(Some(&json!(3.7))), 3);
        assert_eq!(coerce_counter(Some(&json!(-3.7))), -3);
        assert_eq!(coerce_counter(Some(&json!("12"))), 12);
        assert_eq!(coerce_counter(Some(&json!(" 8.9 "))), 8);
    }

    #[test]
    fn test_counter_wraps_to_i32() {
        assert_eq!(coerce_counter(Some(&json!(4_294_967_301u64))), 5);
        assert_eq!(coerce_counter(Some(&json!(2_147_483_648u64))), -2_147_483_648);
    }

    #[test]
    fn test_counter_special_strings() {
        assert_eq!(coerce_counter(Some(&json!("0x1A"))), 26);
        assert_eq!(coerce_counter(Some(&json!("Infinity"))), 0);
        assert_eq!(coerce_counter(Some(&json!("inf"))), 0);
        assert_eq!(coerce_counter(Some(&json!("nan"))), 0);
        assert_eq!(coerce_counter(Some(&json!(""))), 0);
        assert_eq!(coerce_counter(Some(&json!(true))), 1);
    }

    #[test]
    fn test_to_number_exponent() {
        assert_eq!(to_number(&json!("1e3")), 1000.0);
        assert!(to_number(&json!("1e")).is_nan());
    }

    fn hops(value: Value) -> Option<u32> {
        parse_distance(&value).map(|d| d.hops)
    }

    #[test]
    fn test_distance_valid_values() {
        assert_eq!(hops(json!(5)), Some(5));
        assert_eq!(hops(json!("2")), Some(2));
        assert_eq!(hops(json!(2.7)), Some(2));
        assert_eq!(hops(json!(0)), Some(0));
    }

    #[test]
    fn test_distance_keeps_full_value() {
        let d = parse_distance(&json!("1e3")).unwrap();
        assert_eq!(d.value, 1000.0);
        assert_eq!(d.hops, 1);

        let d = parse_distance(&json!(2.7)).unwrap();
        assert_eq!(d.value, 2.7);
        assert_eq!(d.hops, 2);
    }

    #[test]
    fn test_distance_invalid_values() {
        assert_eq!(hops(json!("x")), None);
        assert_eq!(hops(json!(-1)), None);
        assert_eq!(hops(json!("")), None);
        assert_eq!(hops(json!("3abc")), None);
        assert_eq!(hops(json!("-0.5")), None);
        assert_eq!(hops(json!(null)), None);
        assert_eq!(hops(json!(true)), None);
    }

    #[test]
    fn test_initial_trust_distance() {
        let unknown = f64::from(UNKNOWN_TRUST_DISTANCE);
        assert_eq!(initial_trust_distance(None), unknown);
        assert_eq!(initial_trust_distance(Some(&json!(4))), 4.0);
        assert_eq!(initial_trust_distance(Some(&json!(2.5))), 2.5);
        assert_eq!(initial_trust_distance(Some(&json!("junk"))), unknown);
        assert_eq!(initial_trust_distance(Some(&json!(-2))), unknown);
    }

    #[test]
    fn test_distance_hops() {
        assert_eq!(distance_hops(2.5), 2);
        assert_eq!(distance_hops(99.0), 99);
        assert_eq!(distance_hops(0.0), 0);
    }
}
