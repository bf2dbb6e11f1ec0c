//! Measure and dose units.
//!
//! A product's unit string is resolved once, when the entry is built or
//! deserialized, into a [`DoseUnit`]:
//!
//! - [`DoseUnit::Rate`] for strings ending in `/ha` (`L/ha`, `cc/ha`, `kg/ha`),
//!   applied by multiplying by the treated area;
//! - [`DoseUnit::Absolute`] for everything else (`L`, `kg`, `bolsas`),
//!   a job-wide quantity that can only be prorated.
//!
//! The suffix is matched exactly: `KG/HA` is an absolute unit. Only `L/ha`,
//! `mL/ha` and `cc/ha` are liquid rates; alias spellings such as `l/ha`
//! are still rates but do not count towards the liquid share of a mix.
//!
//! The base of either variant is a [`MeasureUnit`], which is either a unit in
//! the [`UNIT_REGISTRY`] (and therefore convertible) or free-form text that
//! is carried through for display only.
//!
//! # Example
//!
//! ```
//! use agromix_core::units::DoseUnit;
//!
//! let unit = DoseUnit::parse("mL/ha");
//! assert!(unit.is_rate());
//! assert!(unit.is_liquid_rate());
//! assert_eq!(unit.display_unit(), "mL");
//! assert_eq!(unit.liters_per_hectare(500.0), Some(0.5));
//!
//! let bags = DoseUnit::parse("bolsas");
//! assert!(!bags.is_rate());
//! assert_eq!(bags.display_unit(), "bolsas");
//! ```

use super::registry::{UnitInfo, KILOGRAM, LITER, UNIT_REGISTRY};
use crate::errors::{AgroMixError, AgroMixResult};
use crate::numeric::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix marking a per-hectare rate unit.
pub const PER_HECTARE_SUFFIX: &str = "/ha";

/// Base symbols of the rate units that make up the liquid share of a mix.
pub const LIQUID_RATE_SYMBOLS: [&str; 3] = ["L", "mL", "cc"];

/// A volume or mass unit, or free-form text for units outside the registry.
///
/// # Equality
///
/// Known units compare by canonical symbol, so `ml` equals `mL`. Free-form
/// units compare by their exact text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MeasureUnit {
    /// A registered unit. `symbol` keeps the caller's spelling for display.
    Known { symbol: String, info: UnitInfo },
    /// Any unit the registry does not know.
    Other(String),
}

impl MeasureUnit {
    /// Resolves a unit symbol against the registry. Never fails.
    pub fn parse(input: &str) -> Self {
        let symbol = input.trim();
        match UNIT_REGISTRY.lookup(symbol) {
            Some(info) => Self::Known {
                symbol: symbol.to_string(),
                info,
            },
            None => Self::Other(symbol.to_string()),
        }
    }

    /// Returns the symbol as written by the caller.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Known { symbol, .. } => symbol,
            Self::Other(symbol) => symbol,
        }
    }

    /// Returns the registry entry, if the unit is known.
    #[must_use]
    pub fn info(&self) -> Option<UnitInfo> {
        match self {
            Self::Known { info, .. } => Some(*info),
            Self::Other(_) => None,
        }
    }

    /// Calculates the multiplier converting a value in `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`AgroMixError::UnknownUnit`] if either unit is free-form, or
    /// [`AgroMixError::IncompatibleUnits`] if the dimensions differ.
    pub fn conversion_factor(&self, other: &Self) -> AgroMixResult<f64> {
        let from = self
            .info()
            .ok_or_else(|| AgroMixError::UnknownUnit(self.symbol().to_string()))?;
        let to = other
            .info()
            .ok_or_else(|| AgroMixError::UnknownUnit(other.symbol().to_string()))?;

        if !from.dimension.is_compatible(&to.dimension) {
            return Err(AgroMixError::IncompatibleUnits {
                from: self.symbol().to_string(),
                to: other.symbol().to_string(),
                from_dimension: from.dimension.to_string(),
                to_dimension: to.dimension.to_string(),
            });
        }

        Ok(from.to_reference_factor / to.to_reference_factor)
    }

    /// Converts a value from this unit to the target unit.
    ///
    /// # Errors
    ///
    /// As for [`MeasureUnit::conversion_factor`].
    pub fn convert_to(&self, value: FloatValue, other: &Self) -> AgroMixResult<FloatValue> {
        Ok(value * self.conversion_factor(other)?)
    }

    /// The litre, reference unit for volumes.
    #[must_use]
    pub fn liter() -> Self {
        Self::parse(LITER)
    }

    /// The kilogram, reference unit for masses.
    #[must_use]
    pub fn kilogram() -> Self {
        Self::parse(KILOGRAM)
    }
}

impl PartialEq for MeasureUnit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Known { info: a, .. }, Self::Known { info: b, .. }) => a.name == b.name,
            (Self::Other(a), Self::Other(b)) => a == b,
            _ => false,
        }
    }
}

impl From<String> for MeasureUnit {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for MeasureUnit {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<MeasureUnit> for String {
    fn from(value: MeasureUnit) -> Self {
        value.symbol().to_string()
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a product's dose is expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DoseUnit {
    /// Quantity per hectare, scaled by the treated area.
    Rate(MeasureUnit),
    /// Quantity for the whole job, prorated by area when possible.
    Absolute(MeasureUnit),
}

impl DoseUnit {
    /// Classifies a unit string. Never fails.
    ///
    /// Only the exact suffix `/ha` makes a rate; `L/HA` is absolute.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match strip_per_hectare(trimmed) {
            Some(base) => Self::Rate(MeasureUnit::parse(base)),
            None => Self::Absolute(MeasureUnit::parse(trimmed)),
        }
    }

    /// Returns the underlying volume or mass unit.
    #[must_use]
    pub fn measure(&self) -> &MeasureUnit {
        match self {
            Self::Rate(unit) | Self::Absolute(unit) => unit,
        }
    }

    /// Returns true for per-hectare units.
    #[must_use]
    pub fn is_rate(&self) -> bool {
        matches!(self, Self::Rate(_))
    }

    /// Returns true for exactly `L/ha`, `mL/ha` and `cc/ha`.
    ///
    /// Only these count towards the liquid share of the spray mixture.
    #[must_use]
    pub fn is_liquid_rate(&self) -> bool {
        matches!(self, Self::Rate(unit) if LIQUID_RATE_SYMBOLS.contains(&unit.symbol()))
    }

    /// The unit shown next to a calculated amount: the base unit without `/ha`.
    #[must_use]
    pub fn display_unit(&self) -> &str {
        self.measure().symbol()
    }

    /// Converts a liquid rate dose to litres per hectare.
    ///
    /// Returns `None` unless this is a liquid rate.
    #[must_use]
    pub fn liters_per_hectare(&self, dose: FloatValue) -> Option<FloatValue> {
        if !self.is_liquid_rate() {
            return None;
        }
        self.measure().convert_to(dose, &MeasureUnit::liter()).ok()
    }
}

fn strip_per_hectare(unit: &str) -> Option<&str> {
    unit.strip_suffix(PER_HECTARE_SUFFIX)
}

impl From<String> for DoseUnit {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for DoseUnit {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<DoseUnit> for String {
    fn from(value: DoseUnit) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate(unit) => write!(f, "{unit}{PER_HECTARE_SUFFIX}"),
            Self::Absolute(unit) => write!(f, "{unit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_rate_classification() {
        for unit in ["L/ha", "mL/ha", "cc/ha", "kg/ha", "g/ha"] {
            assert!(DoseUnit::parse(unit).is_rate(), "{unit} should be a rate");
        }
        for unit in ["L", "kg", "mL", "g", "bolsas", ""] {
            assert!(!DoseUnit::parse(unit).is_rate(), "{unit} should be absolute");
        }
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let unit = DoseUnit::parse("KG/HA");
        assert!(!unit.is_rate());
        assert_eq!(unit.display_unit(), "KG/HA");
        assert!(!DoseUnit::parse("cc/HA").is_rate());
    }

    #[test]
    fn test_liquid_rates() {
        assert!(DoseUnit::parse("L/ha").is_liquid_rate());
        assert!(DoseUnit::parse("mL/ha").is_liquid_rate());
        assert!(DoseUnit::parse("cc/ha").is_liquid_rate());
        assert!(!DoseUnit::parse("kg/ha").is_liquid_rate());
        assert!(!DoseUnit::parse("g/ha").is_liquid_rate());
        assert!(!DoseUnit::parse("L").is_liquid_rate());
        assert!(!DoseUnit::parse("u/ha").is_liquid_rate());
    }

    #[test]
    fn test_alias_rates_are_not_liquid() {
        for unit in ["l/ha", "Lts/ha", "litros/ha", "ml/ha", "cm3/ha"] {
            let unit = DoseUnit::parse(unit);
            assert!(unit.is_rate(), "{unit} should be a rate");
            assert!(!unit.is_liquid_rate(), "{unit} should not be liquid");
            assert_eq!(unit.liters_per_hectare(2.0), None);
        }
    }

    #[test]
    fn test_display_unit_strips_suffix() {
        assert_eq!(DoseUnit::parse("kg/ha").display_unit(), "kg");
        assert_eq!(DoseUnit::parse("cc/ha").display_unit(), "cc");
        assert_eq!(DoseUnit::parse("kg").display_unit(), "kg");
        assert_eq!(DoseUnit::parse("/ha").display_unit(), "");
    }

    #[test]
    fn test_liters_per_hectare() {
        assert_eq!(DoseUnit::parse("L/ha").liters_per_hectare(2.0), Some(2.0));
        let ml = DoseUnit::parse("mL/ha").liters_per_hectare(500.0).unwrap();
        assert!(is_close!(ml, 0.5));
        let cc = DoseUnit::parse("cc/ha").liters_per_hectare(250.0).unwrap();
        assert!(is_close!(cc, 0.25));
        assert_eq!(DoseUnit::parse("kg/ha").liters_per_hectare(3.0), None);
        assert_eq!(DoseUnit::parse("L").liters_per_hectare(3.0), None);
    }

    #[test]
    fn test_measure_unit_equality() {
        assert_eq!(MeasureUnit::parse("ml"), MeasureUnit::parse("mL"));
        assert_ne!(MeasureUnit::parse("mL"), MeasureUnit::parse("cc"));
        assert_eq!(MeasureUnit::parse("bolsas"), MeasureUnit::parse(" bolsas "));
        assert_ne!(MeasureUnit::parse("kg"), MeasureUnit::parse("Kilogramos"));
    }

    #[test]
    fn test_conversion_factor() {
        let g = MeasureUnit::parse("g");
        let kg = MeasureUnit::kilogram();
        assert!(is_close!(g.conversion_factor(&kg).unwrap(), 1e-3));
        assert!(is_close!(kg.convert_to(2.5, &g).unwrap(), 2500.0));
    }

    #[test]
    fn test_conversion_errors() {
        let liter = MeasureUnit::liter();
        let kg = MeasureUnit::kilogram();
        assert!(matches!(
            liter.conversion_factor(&kg),
            Err(AgroMixError::IncompatibleUnits { .. })
        ));
        assert_eq!(
            liter.conversion_factor(&MeasureUnit::parse("bolsas")),
            Err(AgroMixError::UnknownUnit("bolsas".to_string()))
        );
    }

    #[test]
    fn test_serde_as_string() {
        let unit: DoseUnit = serde_json::from_str(r#""cc/ha""#).unwrap();
        assert_eq!(unit, DoseUnit::Rate(MeasureUnit::parse("cc")));
        assert_eq!(serde_json::to_string(&unit).unwrap(), r#""cc/ha""#);

        let measure: MeasureUnit = serde_json::from_str(r#""Lts""#).unwrap();
        assert_eq!(measure, MeasureUnit::liter());
        assert_eq!(serde_json::to_string(&measure).unwrap(), r#""Lts""#);
    }
}
