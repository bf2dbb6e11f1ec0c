//! Agrochemical dose and spray mix calculations.
//!
//! This crate ties together the unit and scaling primitives of
//! [`agromix_core`] with the calculators of [`agromix_components`], and adds
//! TOML configuration for the calculators' defaults.
//!
//! # Example
//!
//! ```
//! use agromix::prelude::*;
//!
//! let config = AgroMixConfig::from_toml_str("[job]\ndefault_dose_caldo = 8.0").unwrap();
//! let entries = vec![ChemicalEntry::new("p1", "Glifosato", 2.0, "L/ha")];
//!
//! let result = config.job_calculator().compute(&entries, &JobContext::new(50.0));
//! assert_eq!(result.caldo_total, 400.0);
//! assert_eq!(result.agua_litros, 300.0);
//! ```

pub mod config;

pub use agromix_components;
pub use agromix_core;

pub mod prelude {
    pub use crate::config::{AgroMixConfig, ConfigError};
    pub use agromix_components::components::{
        compute_job_mix, compute_required_amount, sum_hectares_done, AttendanceRecord,
        HectaresCheck, HectaresGuard, IngredientDraft, InMemoryCatalog, JobCalculator,
        JobContext, JobMixResult, JobSurface, Notification, Notifier, ProductCatalog,
        ProductChoice, Recipe, ScaledRecipe, TracingNotifier,
    };
    pub use agromix_core::product::{ChemicalEntry, RecipeIngredient};
    pub use agromix_core::units::{DoseUnit, MeasureUnit};
    pub use agromix_core::FloatValue;
}
