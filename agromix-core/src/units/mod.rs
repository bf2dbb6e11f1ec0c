//! Units for agrochemical doses.
//!
//! This module resolves the unit strings attached to products into typed
//! values, and converts between compatible volume and mass units.
//!
//! # Quick Start
//!
//! ```
//! use agromix_core::units::{DoseUnit, MeasureUnit};
//!
//! // Per-hectare rates are recognised by their `/ha` suffix
//! let rate = DoseUnit::parse("cc/ha");
//! assert!(rate.is_liquid_rate());
//!
//! // Conversions work between units of the same dimension
//! let ml = MeasureUnit::parse("mL");
//! let factor = ml.conversion_factor(&MeasureUnit::liter()).unwrap();
//! assert!((factor - 0.001).abs() < 1e-12);
//!
//! // Volume cannot become mass
//! assert!(ml.conversion_factor(&MeasureUnit::kilogram()).is_err());
//! ```
//!
//! # Module Structure
//!
//! - [`dimension`]: Physical dimensions (M, L)
//! - [`registry`]: Known units with conversion factors
//! - [`dose`]: [`MeasureUnit`] and the rate/absolute [`DoseUnit`] variant

pub mod dimension;
pub mod dose;
pub mod registry;

pub use dimension::Dimension;
pub use dose::{DoseUnit, MeasureUnit, LIQUID_RATE_SYMBOLS, PER_HECTARE_SUFFIX};
pub use registry::{UnitInfo, UnitRegistry, UNIT_REGISTRY};
