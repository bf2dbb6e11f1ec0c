//! Linear proportional scaling.
//!
//! Both calculators reduce to one operation: a quantity defined against one
//! basis (an area, or "per one hectare") is re-expressed against another.
//!
//! $$scaled = \frac{value}{from\_basis} \cdot to\_basis$$
//!
//! A zero (or non-finite) `from_basis` yields `0` instead of `inf`/`NaN`.

use crate::numeric::FloatValue;

/// Scales `value` from `from_basis` to `to_basis`.
///
/// # Example
///
/// ```
/// use agromix_core::scaling::scale;
///
/// // 3 L defined for 10 ha, scaled to 25 ha
/// assert_eq!(scale(3.0, 10.0, 25.0), 7.5);
/// // No reference area: nothing can be derived
/// assert_eq!(scale(3.0, 0.0, 25.0), 0.0);
/// ```
#[must_use]
pub fn scale(value: FloatValue, from_basis: FloatValue, to_basis: FloatValue) -> FloatValue {
    if from_basis == 0.0 || !from_basis.is_finite() {
        return 0.0;
    }
    value / from_basis * to_basis
}

/// Scales a per-hectare rate to the given area.
#[must_use]
pub fn scale_rate(rate_per_hectare: FloatValue, hectares: FloatValue) -> FloatValue {
    rate_per_hectare * hectares
}
