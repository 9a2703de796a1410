//! Vehicle type definitions

use std::str::FromStr;

use refuel_types::DispatchError;
use serde::{Deserialize, Serialize};

/// Fuel tank state of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    /// Tank capacity in liters
    pub capacity: u64,
    /// Filled fraction of the tank (0.0 - 1.0)
    pub level: f64,
}

impl Fuel {
    /// Liters currently in the tank
    pub fn current_liters(&self) -> f64 {
        self.capacity as f64 * self.level
    }
}

/// A vehicle waiting to be refueled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub fuel: Fuel,
    pub licence_plate: String,
    /// Size category as read from input; resolved with [`Vehicle::size`]
    pub size: String,
}

impl Vehicle {
    pub fn new(licence_plate: impl Into<String>, size: impl Into<String>, capacity: u64, level: f64) -> Self {
        Self {
            fuel: Fuel { capacity, level },
            licence_plate: licence_plate.into(),
            size: size.into(),
        }
    }

    /// Resolve the size category
    pub fn size(&self) -> Result<VehicleSize, DispatchError> {
        self.size.parse()
    }
}

/// Vehicle size category used for flat-rate pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    Small,
    Large,
}

impl VehicleSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleSize::Small => "small",
            VehicleSize::Large => "large",
        }
    }
}

impl FromStr for VehicleSize {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(VehicleSize::Small),
            "large" => Ok(VehicleSize::Large),
            other => Err(DispatchError::UnknownVehicleSize(other.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
