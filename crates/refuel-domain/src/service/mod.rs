//! Domain services

pub mod assignment_engine;
pub mod pricing;

pub use assignment_engine::{select_employee, AssignmentEngine};
pub use pricing::RatePolicy;
