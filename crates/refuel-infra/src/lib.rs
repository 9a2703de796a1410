//! Infrastructure layer
//!
//! Concrete implementations of domain interfaces: reading vehicle batches
//! from JSON files.

pub mod persistence;
pub mod vehicle_loader;

pub use vehicle_loader::VehicleLoader;
