//! Job mix calculator
//!
//! Given a job's product list, the area being treated in this pass and the
//! spray mixture (caldo) rate, works out how much mixture to prepare, how
//! much of it is water, and how much of each product to load.
//!
//! $$caldo = hectares \cdot dose_{caldo}$$
//! $$water = caldo - \sum_{liquid\ rates} dose_{L/ha} \cdot hectares$$
//!
//! Per product:
//! - rate units (`*/ha`): $amount = dose \cdot hectares$, shown without `/ha`;
//! - absolute units: $amount = \frac{dose}{total\_job\_hectares} \cdot hectares$
//!   when the job's total area is known, otherwise the dose unchanged. The
//!   division happens first, so results can differ from
//!   $\frac{dose \cdot hectares}{total\_job\_hectares}$ in the last bit.
//!
//! Water is not clamped. When the declared liquid products exceed the
//! mixture volume it goes negative, and callers show that value as is.

use crate::parameters::JobMixParameters;
use agromix_core::numeric::{sanitize, sanitize_opt};
use agromix_core::product::ChemicalEntry;
use agromix_core::scaling::{scale, scale_rate};
use agromix_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Area and mixture settings for one calculation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    /// Area treated in this pass.
    ///
    /// unit: ha
    #[serde(default, deserialize_with = "agromix_core::numeric::lenient_decimal")]
    pub hectares: FloatValue,
    /// Spray mixture per hectare; the configured default when unset.
    ///
    /// unit: L/ha
    #[serde(default, deserialize_with = "agromix_core::numeric::lenient_decimal_opt")]
    pub dose_caldo: Option<FloatValue>,
    /// The job's overall planned area, used to prorate absolute quantities.
    ///
    /// unit: ha
    #[serde(default, deserialize_with = "agromix_core::numeric::lenient_decimal_opt")]
    pub total_job_hectares: Option<FloatValue>,
}

impl JobContext {
    pub fn new(hectares: FloatValue) -> Self {
        Self {
            hectares,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dose_caldo(mut self, dose_caldo: FloatValue) -> Self {
        self.dose_caldo = Some(dose_caldo);
        self
    }

    #[must_use]
    pub fn with_total_job_hectares(mut self, total_job_hectares: FloatValue) -> Self {
        self.total_job_hectares = Some(total_job_hectares);
        self
    }
}

/// A product with the quantity to load for this pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedEntry {
    #[serde(flatten)]
    pub entry: ChemicalEntry,
    pub calculated_amount: FloatValue,
    pub display_unit: String,
}

/// Output of a job mix calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMixResult {
    /// Total spray mixture.
    ///
    /// unit: L
    pub caldo_total: FloatValue,
    /// Water to add: mixture minus liquid products. May be negative.
    ///
    /// unit: L
    pub agua_litros: FloatValue,
    /// Volume contributed by products dosed in `L/ha`, `mL/ha` or `cc/ha`.
    ///
    /// unit: L
    pub total_liquid_products: FloatValue,
    /// One row per input entry, in input order.
    pub entries: Vec<CalculatedEntry>,
}

impl JobMixResult {
    /// Rows whose product counts towards the liquid share of the mixture.
    pub fn liquid_entries(&self) -> impl Iterator<Item = &CalculatedEntry> {
        self.entries.iter().filter(|row| row.entry.unit.is_liquid_rate())
    }

    /// True when the liquid products alone exceed the mixture volume.
    #[must_use]
    pub fn has_negative_water(&self) -> bool {
        self.agua_litros < 0.0
    }
}

/// Job mix calculator with configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobCalculator {
    parameters: JobMixParameters,
}

impl JobCalculator {
    pub fn from_parameters(parameters: JobMixParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &JobMixParameters {
        &self.parameters
    }

    /// Computes the mix for `entries` over the context's area.
    pub fn compute(&self, entries: &[ChemicalEntry], context: &JobContext) -> JobMixResult {
        let dose_caldo = context
            .dose_caldo
            .unwrap_or(self.parameters.default_dose_caldo);
        compute_job_mix(
            entries,
            context.hectares,
            dose_caldo,
            context.total_job_hectares,
        )
    }
}

/// Computes the spray mixture, water and per-product amounts.
///
/// Inputs are sanitized: negative or non-finite numbers count as `0`.
/// This function never fails.
///
/// # Example
///
/// ```
/// use agromix_components::components::compute_job_mix;
/// use agromix_core::product::ChemicalEntry;
///
/// let entries = vec![ChemicalEntry::new("p1", "Glifosato", 2.0, "L/ha")];
/// let result = compute_job_mix(&entries, 100.0, 10.0, None);
///
/// assert_eq!(result.caldo_total, 1000.0);
/// assert_eq!(result.total_liquid_products, 200.0);
/// assert_eq!(result.agua_litros, 800.0);
/// ```
pub fn compute_job_mix(
    entries: &[ChemicalEntry],
    hectares: FloatValue,
    dose_caldo: FloatValue,
    total_job_hectares: Option<FloatValue>,
) -> JobMixResult {
    let hectares = sanitize(hectares);
    let dose_caldo = sanitize(dose_caldo);
    let total_job_hectares = sanitize_opt(total_job_hectares);

    let caldo_total = hectares * dose_caldo;

    let total_liquid_products: FloatValue = entries
        .iter()
        .filter_map(|entry| entry.unit.liters_per_hectare(sanitize(entry.dose)))
        .map(|liters_per_hectare| scale_rate(liters_per_hectare, hectares))
        .fold(0.0, |acc, liters| acc + liters);

    let agua_litros = caldo_total - total_liquid_products;

    let entries: Vec<CalculatedEntry> = entries
        .iter()
        .map(|entry| CalculatedEntry {
            calculated_amount: product_amount(entry, hectares, total_job_hectares),
            display_unit: entry.unit.display_unit().to_string(),
            entry: entry.clone(),
        })
        .collect();

    tracing::debug!(
        hectares,
        dose_caldo,
        caldo_total,
        total_liquid_products,
        agua_litros,
        products = entries.len(),
        "Computed job mix"
    );

    JobMixResult {
        caldo_total,
        agua_litros,
        total_liquid_products,
        entries,
    }
}

/// Quantity of one product to load for `hectares`.
///
/// `total_job_hectares` of `0` means the job's area is unknown, in which
/// case absolute quantities pass through unscaled.
fn product_amount(
    entry: &ChemicalEntry,
    hectares: FloatValue,
    total_job_hectares: FloatValue,
) -> FloatValue {
    let dose = sanitize(entry.dose);
    if entry.unit.is_rate() {
        scale_rate(dose, hectares)
    } else if total_job_hectares > 0.0 {
        scale(dose, total_job_hectares, hectares)
    } else {
        dose
    }
}
