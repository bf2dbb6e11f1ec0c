//! Calculators for agrochemical spray jobs
//!
//! This crate provides the components that turn product lists into
//! quantities to load:
//! - `components::job_mix`: spray mixture (caldo), water and per-product
//!   amounts for a job's product list
//! - `components::recipe`: recipes dosed for a reference area, scaled to a
//!   target area
//! - `components::hectares_guard`: advisory check of hectares done against
//!   a job's planned surface
//!
//! # Parameters
//!
//! Each configurable component has a parameters struct in the `parameters`
//! module with sensible defaults.

pub mod components;
pub mod parameters;
