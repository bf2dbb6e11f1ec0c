mod catalog;
mod hectares_guard;
mod job_mix;
mod notification;
mod recipe;

pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use hectares_guard::{
    sum_hectares_done, AttendanceRecord, HectaresCheck, HectaresGuard, JobSurface, LimitSource,
};
pub use job_mix::{compute_job_mix, CalculatedEntry, JobCalculator, JobContext, JobMixResult};
pub use notification::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use recipe::{
    compute_required_amount, IngredientDraft, ProductChoice, Recipe, ScaledIngredient,
    ScaledRecipe,
};
