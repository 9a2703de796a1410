//! Domain module containing refueling business types and services

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::VehicleRepository;
pub use service::{select_employee, AssignmentEngine, RatePolicy};
