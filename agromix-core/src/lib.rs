//! Core types for agrochemical dose and mix calculations.
//!
//! - [`units`]: dose unit vocabulary, registry and conversions
//! - [`numeric`]: lenient decimal coercion used for all form inputs
//! - [`scaling`]: the proportional scaling primitive shared by calculators
//! - [`product`]: product records fed into the calculators

pub mod errors;
pub mod numeric;
pub mod product;
pub mod scaling;
pub mod units;

pub use numeric::FloatValue;
