//! Validators: reference root data and live model invariants.

pub mod data;
pub mod model;
