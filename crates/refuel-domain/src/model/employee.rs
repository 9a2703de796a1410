//! Employee and crew type definitions

use serde::{Deserialize, Serialize};

/// Default name of the first employee
pub const EMPLOYEE_A: &str = "A";
/// Default name of the second employee
pub const EMPLOYEE_B: &str = "B";
/// Default commission of employee A
pub const COMMISSION_A: f64 = 0.11;
/// Default commission of employee B
pub const COMMISSION_B: f64 = 0.15;

/// An employee who performs refueling tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    /// Fraction of each task price credited to this employee
    pub commission: f64,
    /// Commission earned so far
    #[serde(default)]
    pub paid: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, commission: f64) -> Self {
        Self {
            name: name.into(),
            commission,
            paid: 0.0,
        }
    }

    /// Seed the running total
    pub fn with_paid(mut self, paid: f64) -> Self {
        self.paid = paid;
        self
    }

    /// Credit this employee's commission on a completed task
    pub fn credit(&mut self, price: f64) {
        self.paid += price * self.commission;
    }
}

/// Position of an employee within the crew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrewSlot {
    A,
    B,
}

/// The two employees sharing the work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    pub employee_a: Employee,
    pub employee_b: Employee,
}

impl Crew {
    pub fn new(employee_a: Employee, employee_b: Employee) -> Self {
        Self {
            employee_a,
            employee_b,
        }
    }

    pub fn get(&self, slot: CrewSlot) -> &Employee {
        match slot {
            CrewSlot::A => &self.employee_a,
            CrewSlot::B => &self.employee_b,
        }
    }

    pub fn get_mut(&mut self, slot: CrewSlot) -> &mut Employee {
        match slot {
            CrewSlot::A => &mut self.employee_a,
            CrewSlot::B => &mut self.employee_b,
        }
    }

    /// Both employees, A first
    pub fn members(&self) -> [&Employee; 2] {
        [&self.employee_a, &self.employee_b]
    }
}

impl Default for Crew {
    fn default() -> Self {
        Self::new(
            Employee::new(EMPLOYEE_A, COMMISSION_A),
            Employee::new(EMPLOYEE_B, COMMISSION_B),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crew() {
        let crew = Crew::default();
        assert_eq!(crew.employee_a.name, "A");
        assert_eq!(crew.employee_b.name, "B");
        assert!((crew.employee_a.commission - 0.11).abs() < f64::EPSILON);
        assert!((crew.employee_b.commission - 0.15).abs() < f64::EPSILON);
        assert_eq!(crew.employee_a.paid, 0.0);
        assert_eq!(crew.employee_b.paid, 0.0);
    }

    #[test]
    fn test_credit_adds_commission() {
        let mut employee = Employee::new("A", 0.10).with_paid(5.0);
        employee.credit(35.0);
        assert!((employee.paid - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_get_mut_targets_slot() {
        let mut crew = Crew::default();
        crew.get_mut(CrewSlot::B).paid = 3.0;
        assert_eq!(crew.get(CrewSlot::B).paid, 3.0);
        assert_eq!(crew.get(CrewSlot::A).paid, 0.0);
    }
}
