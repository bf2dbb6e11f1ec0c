//! Unit registry for agrochemical doses.
//!
//! This module provides a registry of the units used when dosing
//! agrochemicals, with their dimensions and conversion factors:
//!
//! - Volume: `L`, `mL`, `cc`
//! - Mass: `kg`, `g`, `t`
//!
//! # Conversion Factor Convention
//!
//! All conversion factors are the multiplier to convert FROM the registered
//! unit TO the reference unit of its dimension: litres for volume and
//! kilograms for mass. For example:
//! - `mL` has factor 1e-3 (1 mL = 0.001 L)
//! - `g` has factor 1e-3 (1 g = 0.001 kg)

use super::dimension::Dimension;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Information about a known unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    /// The canonical symbol of this unit.
    pub name: &'static str,
    /// The physical dimension of this unit.
    pub dimension: Dimension,
    /// Conversion factor to the reference unit of the dimension.
    pub to_reference_factor: f64,
}

impl UnitInfo {
    const fn new(name: &'static str, dimension: Dimension, to_reference_factor: f64) -> Self {
        Self {
            name,
            dimension,
            to_reference_factor,
        }
    }
}

/// Litres per millilitre (and per cubic centimetre).
pub const LITERS_PER_MILLILITER: f64 = 1e-3;
/// Kilograms per gram.
pub const KILOGRAMS_PER_GRAM: f64 = 1e-3;
/// Kilograms per metric tonne.
pub const KILOGRAMS_PER_TONNE: f64 = 1e3;

/// Canonical symbol of the volume reference unit.
pub const LITER: &str = "L";
/// Canonical symbol of the mass reference unit.
pub const KILOGRAM: &str = "kg";

/// The global unit registry.
pub static UNIT_REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of known units with their dimensions and conversion factors.
#[derive(Debug)]
pub struct UnitRegistry {
    /// Map from unit symbol to unit info.
    units: HashMap<&'static str, UnitInfo>,
    /// Map from lowercase alias to canonical name.
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    /// Creates a new unit registry populated with the dosing units.
    pub fn new() -> Self {
        let mut registry = Self {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_volume_units();
        registry.register_mass_units();
        registry
    }

    /// Looks up a unit by symbol.
    ///
    /// Exact symbols are matched first, then aliases. Aliases are matched
    /// case-insensitively so `ml`, `ML` and `Lts` all resolve. Liquid rate
    /// detection does not go through this lookup.
    pub fn lookup(&self, symbol: &str) -> Option<UnitInfo> {
        let symbol = symbol.trim();
        if let Some(info) = self.units.get(symbol) {
            return Some(*info);
        }

        let lower = symbol.to_lowercase();
        if let Some(info) = self.units.get(lower.as_str()) {
            return Some(*info);
        }
        self.aliases
            .get(lower.as_str())
            .and_then(|canonical| self.units.get(canonical))
            .copied()
    }

    fn register_volume_units(&mut self) {
        self.units
            .insert("L", UnitInfo::new("L", Dimension::VOLUME, 1.0));
        self.units.insert(
            "mL",
            UnitInfo::new("mL", Dimension::VOLUME, LITERS_PER_MILLILITER),
        );
        self.units.insert(
            "cc",
            UnitInfo::new("cc", Dimension::VOLUME, LITERS_PER_MILLILITER),
        );

        self.aliases.insert("l", "L");
        self.aliases.insert("lt", "L");
        self.aliases.insert("lts", "L");
        self.aliases.insert("litro", "L");
        self.aliases.insert("litros", "L");
        self.aliases.insert("ml", "mL");
        self.aliases.insert("cm3", "cc");
    }

    fn register_mass_units(&mut self) {
        self.units
            .insert("kg", UnitInfo::new("kg", Dimension::MASS, 1.0));
        self.units
            .insert("g", UnitInfo::new("g", Dimension::MASS, KILOGRAMS_PER_GRAM));
        self.units
            .insert("t", UnitInfo::new("t", Dimension::MASS, KILOGRAMS_PER_TONNE));

        self.aliases.insert("kgs", "kg");
        self.aliases.insert("kilo", "kg");
        self.aliases.insert("kilos", "kg");
        self.aliases.insert("gr", "g");
        self.aliases.insert("grs", "g");
        self.aliases.insert("gramos", "g");
        self.aliases.insert("tn", "t");
    }
}
