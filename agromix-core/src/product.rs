//! Product records fed into the calculators.

use crate::numeric::{lenient_decimal, FloatValue};
use crate::units::{DoseUnit, MeasureUnit};
use serde::{Deserialize, Serialize};

/// A chemical product in a job's product list.
///
/// `dose` is either a per-hectare rate or a job-wide absolute quantity,
/// depending on `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalEntry {
    /// Opaque identifier, unique within the job's list.
    pub id: String,
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub dose: FloatValue,
    pub unit: DoseUnit,
}

impl ChemicalEntry {
    pub fn new(
        id: impl Into<String>,
        product_name: impl Into<String>,
        dose: FloatValue,
        unit: impl Into<DoseUnit>,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            dose,
            unit: unit.into(),
        }
    }
}

/// An ingredient of a recipe, dosed for the recipe's reference area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Opaque identifier, unique within the recipe.
    pub id: String,
    pub product_name: String,
    /// Dose at the reference hectare count.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub standard_dose: FloatValue,
    pub unit: MeasureUnit,
}

impl RecipeIngredient {
    pub fn new(
        id: impl Into<String>,
        product_name: impl Into<String>,
        standard_dose: FloatValue,
        unit: impl Into<MeasureUnit>,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            standard_dose,
            unit: unit.into(),
        }
    }
}
