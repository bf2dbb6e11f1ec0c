//! Lenient numeric coercion.
//!
//! Calculator inputs arrive from interactive forms where partial or empty
//! values are the normal state. Rather than failing, every numeric input is
//! coerced: text that cannot be read as a decimal becomes `0`, and values fed
//! into the calculators are clamped to finite, non-negative numbers.
//!
//! | Input | [`parse_decimal_or_zero`] | [`sanitize`] of the result |
//! |-------|---------------------------|----------------------------|
//! | `"12.5"` | 12.5 | 12.5 |
//! | `"12,5"` | 12.5 | 12.5 |
//! | `""` | 0 | 0 |
//! | `"abc"` | 0 | 0 |
//! | `"-3"` | -3 | 0 |

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Floating point type used for every dose, volume and area value.
pub type FloatValue = f64;

/// Clamps a value to a finite, non-negative number.
///
/// `NaN`, infinities and negative values all become `0`.
#[must_use]
pub fn sanitize(value: FloatValue) -> FloatValue {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Clamps an optional value, mapping `None` to `0`.
#[must_use]
pub fn sanitize_opt(value: Option<FloatValue>) -> FloatValue {
    value.map_or(0.0, sanitize)
}

/// Parses a decimal, defaulting to zero when the text is not a number.
///
/// A single comma is accepted as the decimal separator when no dot is
/// present. Surrounding whitespace is ignored. The sign is preserved; use
/// [`sanitize`] to clamp.
///
/// # Example
///
/// ```
/// use agromix_core::numeric::parse_decimal_or_zero;
///
/// assert_eq!(parse_decimal_or_zero("3.5"), 3.5);
/// assert_eq!(parse_decimal_or_zero("3,5"), 3.5);
/// assert_eq!(parse_decimal_or_zero("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_decimal_or_zero(input: &str) -> FloatValue {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<FloatValue>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!(input = %trimmed, "Could not read decimal; using 0");
            0.0
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(FloatValue),
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter reading a decimal from a number, a numeric string, or `null`.
///
/// Anything that cannot be read as a number deserializes to `0`. Pair with
/// `#[serde(default)]` so a missing field also becomes `0`.
///
/// ```
/// use agromix_core::numeric::FloatValue;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(default, deserialize_with = "agromix_core::numeric::lenient_decimal")]
///     dose: FloatValue,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"dose": "2,5"}"#).unwrap();
/// assert_eq!(row.dose, 2.5);
/// ```
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<FloatValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(RawDecimal::Number(value)) if value.is_finite() => value,
        Some(RawDecimal::Text(text)) => parse_decimal_or_zero(&text),
        _ => 0.0,
    })
}

/// Optional form of [`lenient_decimal`].
///
/// `null` and blank text stay unset. Any other value is read as
/// [`lenient_decimal`] reads it, so unreadable text becomes `Some(0)`.
pub fn lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<FloatValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawDecimal>::deserialize(deserializer)? {
        None => None,
        Some(RawDecimal::Text(text)) if text.trim().is_empty() => None,
        Some(RawDecimal::Text(text)) => Some(parse_decimal_or_zero(&text)),
        Some(RawDecimal::Number(value)) if value.is_finite() => Some(value),
        Some(_) => Some(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(4.5), 4.5);
        assert_eq!(sanitize(0.0), 0.0);
        assert_eq!(sanitize(-3.0), 0.0);
        assert_eq!(sanitize(FloatValue::NAN), 0.0);
        assert_eq!(sanitize(FloatValue::INFINITY), 0.0);
        assert_eq!(sanitize_opt(None), 0.0);
        assert_eq!(sanitize_opt(Some(2.0)), 2.0);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal_or_zero("12.5"), 12.5);
        assert_eq!(parse_decimal_or_zero("  7 "), 7.0);
        assert_eq!(parse_decimal_or_zero("12,5"), 12.5);
        assert_eq!(parse_decimal_or_zero("-3"), -3.0);
    }

    #[test]
    fn test_parse_decimal_falls_back_to_zero() {
        assert_eq!(parse_decimal_or_zero(""), 0.0);
        assert_eq!(parse_decimal_or_zero("abc"), 0.0);
        assert_eq!(parse_decimal_or_zero("1,000,5"), 0.0);
        assert_eq!(parse_decimal_or_zero("inf"), 0.0);
    }

    #[derive(Debug, Deserialize)]
    struct Surface {
        #[serde(default, deserialize_with = "lenient_decimal_opt")]
        area: Option<FloatValue>,
    }

    fn surface(json: &str) -> Option<FloatValue> {
        serde_json::from_str::<Surface>(json).unwrap().area
    }

    #[test]
    fn test_lenient_optional_decimal() {
        assert_eq!(surface(r#"{"area": 40}"#), Some(40.0));
        assert_eq!(surface(r#"{"area": "40"}"#), Some(40.0));
        assert_eq!(surface(r#"{"area": "7,5"}"#), Some(7.5));
        assert_eq!(surface(r#"{"area": "abc"}"#), Some(0.0));
        assert_eq!(surface(r#"{"area": true}"#), Some(0.0));
        assert_eq!(surface(r#"{"area": " "}"#), None);
        assert_eq!(surface(r#"{"area": null}"#), None);
        assert_eq!(surface("{}"), None);
    }
}
