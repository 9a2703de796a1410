//! Refueling price calculation

use serde::{Deserialize, Serialize};

use crate::model::{Fuel, VehicleSize};

/// Flat charge for a small vehicle
pub const FLAT_RATE_SMALL: f64 = 25.0;
/// Flat charge for a large vehicle
pub const FLAT_RATE_LARGE: f64 = 35.0;
/// Tanks filled above this fraction are not refueled
pub const REFUEL_THRESHOLD: f64 = 0.10;
/// Price of one liter of fuel
pub const FUEL_PRICE_PER_LITER: f64 = 1.75;

/// Pricing constants applied to every task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePolicy {
    pub small_flat_rate: f64,
    pub large_flat_rate: f64,
    pub refuel_threshold: f64,
    pub fuel_price_per_liter: f64,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            small_flat_rate: FLAT_RATE_SMALL,
            large_flat_rate: FLAT_RATE_LARGE,
            refuel_threshold: REFUEL_THRESHOLD,
            fuel_price_per_liter: FUEL_PRICE_PER_LITER,
        }
    }
}

impl RatePolicy {
    /// Liters needed to top off the tank
    ///
    /// Zero when the level is above the refuel threshold.
    pub fn fuel_added(&self, fuel: &Fuel) -> f64 {
        if fuel.level > self.refuel_threshold {
            return 0.0;
        }
        fuel.capacity as f64 - fuel.current_liters()
    }

    pub fn flat_rate(&self, size: VehicleSize) -> f64 {
        match size {
            VehicleSize::Small => self.small_flat_rate,
            VehicleSize::Large => self.large_flat_rate,
        }
    }

    /// price = fuel_added x fuel price + flat rate
    pub fn price(&self, fuel_added: f64, size: VehicleSize) -> f64 {
        fuel_added * self.fuel_price_per_liter + self.flat_rate(size)
    }
}
