//! Assignment type definitions

use serde::{Deserialize, Serialize};

use super::employee::Crew;

/// One refueling task handed to an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub licence_plate: String,
    /// Name of the employee doing the task
    pub employee: String,
    /// Liters added to the tank
    pub fuel_added: f64,
    pub price: f64,
}

/// Outcome of assigning a whole batch
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// One assignment per vehicle, in input order
    pub assignments: Vec<Assignment>,
    /// Crew state after the last assignment
    pub crew: Crew,
}

impl Dispatch {
    /// Number of tasks handed to the named employee
    pub fn task_count(&self, employee: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.employee == employee)
            .count()
    }

    /// Sum of all task prices
    pub fn total_price(&self) -> f64 {
        self.assignments.iter().map(|a| a.price).sum()
    }

    /// Sum of all fuel added
    pub fn total_fuel(&self) -> f64 {
        self.assignments.iter().map(|a| a.fuel_added).sum()
    }
}
