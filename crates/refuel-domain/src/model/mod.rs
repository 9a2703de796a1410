//! Domain model types

pub mod assignment;
pub mod employee;
pub mod vehicle;

pub use assignment::{Assignment, Dispatch};
pub use employee::{Crew, CrewSlot, Employee};
pub use vehicle::{Fuel, Vehicle, VehicleSize};
