//! Recipe (mix) calculator
//!
//! A recipe lists ingredient doses for a reference area. Scaling it to a
//! target area is linear for every ingredient, whatever its unit:
//!
//! $$required = \frac{standard\_dose}{reference\_hectares} \cdot target\_hectares$$
//!
//! A reference area of `0` yields `0` for every ingredient.

use super::catalog::ProductCatalog;
use agromix_core::numeric::sanitize;
use agromix_core::product::RecipeIngredient;
use agromix_core::scaling::scale;
use agromix_core::units::MeasureUnit;
use agromix_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Scales a dose defined for `reference_hectares` to `target_hectares`.
///
/// # Example
///
/// ```
/// use agromix_components::components::compute_required_amount;
///
/// let amount = compute_required_amount(3.5, 120.0, 100.0);
/// assert!((amount - 2.916_666).abs() < 1e-6);
///
/// // No reference area, nothing to scale from
/// assert_eq!(compute_required_amount(3.5, 0.0, 100.0), 0.0);
/// ```
#[must_use]
pub fn compute_required_amount(
    standard_dose: FloatValue,
    reference_hectares: FloatValue,
    target_hectares: FloatValue,
) -> FloatValue {
    scale(
        sanitize(standard_dose),
        sanitize(reference_hectares),
        sanitize(target_hectares),
    )
}

/// How the user named the product of a new ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ProductChoice {
    /// A product picked from the catalog, by id.
    Catalog(String),
    /// A name typed by the user.
    FreeText(String),
}

impl ProductChoice {
    /// Resolves the display name, trimmed. Empty when nothing usable was given.
    pub fn resolve(&self, catalog: &dyn ProductCatalog) -> String {
        let name = match self {
            Self::Catalog(id) => catalog.product_name(id).unwrap_or_default(),
            Self::FreeText(name) => name.as_str(),
        };
        name.trim().to_string()
    }
}

/// A new ingredient as entered in the form, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub product: ProductChoice,
    pub dose: FloatValue,
    pub unit: MeasureUnit,
}

impl IngredientDraft {
    pub fn new(product: ProductChoice, dose: FloatValue, unit: impl Into<MeasureUnit>) -> Self {
        Self {
            product,
            dose,
            unit: unit.into(),
        }
    }
}

/// A recipe: ingredient doses for a reference area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Area the standard doses were calibrated for.
    ///
    /// unit: ha
    #[serde(default, deserialize_with = "agromix_core::numeric::lenient_decimal")]
    pub reference_hectares: FloatValue,
    #[serde(default)]
    ingredients: Vec<RecipeIngredient>,
    #[serde(skip)]
    id_counter: u64,
}

impl Recipe {
    pub fn new(reference_hectares: FloatValue) -> Self {
        Self {
            reference_hectares,
            ingredients: Vec::new(),
            id_counter: 0,
        }
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Appends an ingredient and returns its id.
    ///
    /// Nothing is added, and `None` is returned, when the dose is not
    /// strictly positive or the product name resolves to an empty string.
    pub fn add_ingredient(
        &mut self,
        draft: IngredientDraft,
        catalog: &dyn ProductCatalog,
    ) -> Option<String> {
        let product_name = draft.product.resolve(catalog);
        if !(draft.dose.is_finite() && draft.dose > 0.0) || product_name.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.ingredients.push(RecipeIngredient {
            id: id.clone(),
            product_name,
            standard_dose: draft.dose,
            unit: draft.unit,
        });
        Some(id)
    }

    /// Removes the ingredient with `id`. Returns true if one was removed.
    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|ingredient| ingredient.id != id);
        self.ingredients.len() != before
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    /// Scales every ingredient to `target_hectares`.
    pub fn scale_to(&self, target_hectares: FloatValue) -> ScaledRecipe {
        let ingredients: Vec<ScaledIngredient> = self
            .ingredients
            .iter()
            .map(|ingredient| ScaledIngredient {
                calculated_amount: compute_required_amount(
                    ingredient.standard_dose,
                    self.reference_hectares,
                    target_hectares,
                ),
                display_unit: ingredient.unit.symbol().to_string(),
                ingredient: ingredient.clone(),
            })
            .collect();

        let total_volume_liters = total_in(&ingredients, &MeasureUnit::liter());
        let total_mass_kg = total_in(&ingredients, &MeasureUnit::kilogram());

        tracing::debug!(
            reference_hectares = self.reference_hectares,
            target_hectares,
            ingredients = ingredients.len(),
            "Scaled recipe"
        );

        ScaledRecipe {
            reference_hectares: sanitize(self.reference_hectares),
            target_hectares: sanitize(target_hectares),
            ingredients,
            total_volume_liters,
            total_mass_kg,
        }
    }

    fn next_id(&mut self) -> String {
        loop {
            self.id_counter += 1;
            let id = format!("ing-{}", self.id_counter);
            if !self.ingredients.iter().any(|ingredient| ingredient.id == id) {
                return id;
            }
        }
    }
}

/// Sums the rows convertible to `unit`, expressed in `unit`.
fn total_in(rows: &[ScaledIngredient], unit: &MeasureUnit) -> FloatValue {
    rows.iter()
        .filter_map(|row| {
            row.ingredient
                .unit
                .convert_to(row.calculated_amount, unit)
                .ok()
        })
        .fold(0.0, |acc, value| acc + value)
}

/// An ingredient with its amount for the target area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    #[serde(flatten)]
    pub ingredient: RecipeIngredient,
    pub calculated_amount: FloatValue,
    pub display_unit: String,
}

/// A recipe scaled to a target area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipe {
    pub reference_hectares: FloatValue,
    pub target_hectares: FloatValue,
    pub ingredients: Vec<ScaledIngredient>,
    /// Sum of ingredients in volume units. Free-form units are left out.
    ///
    /// unit: L
    pub total_volume_liters: FloatValue,
    /// Sum of ingredients in mass units. Free-form units are left out.
    ///
    /// unit: kg
    pub total_mass_kg: FloatValue,
}
