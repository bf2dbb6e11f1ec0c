//! Component parameters
//!
//! Each parameter struct provides defaults matching the behaviour of the
//! calculators when nothing is configured.

mod hectares_guard;
mod job_mix;

pub use hectares_guard::HectaresGuardParameters;
pub use job_mix::JobMixParameters;
