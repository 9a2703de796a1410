//! Assignment of refueling tasks to the crew
//!
//! Vehicles are processed strictly in input order. Each step picks the
//! employee who has earned least so far, prices the task and credits the
//! commission, so every step depends on the crew state left by the previous one.

use refuel_types::DispatchError;
use tracing::debug;

use super::pricing::RatePolicy;
use crate::model::{Assignment, Crew, CrewSlot, Dispatch, Employee, Vehicle};

/// Pick the employee for the next task
///
/// While nobody has earned anything the lower commission goes first,
/// afterwards the lower running total. Ties go to employee A.
pub fn select_employee(employee_a: &Employee, employee_b: &Employee) -> CrewSlot {
    if employee_a.paid == 0.0 && employee_b.paid == 0.0 {
        if employee_a.commission <= employee_b.commission {
            return CrewSlot::A;
        }
        return CrewSlot::B;
    }

    if employee_a.paid <= employee_b.paid {
        CrewSlot::A
    } else {
        CrewSlot::B
    }
}

/// Assigns and prices refueling tasks
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    policy: RatePolicy,
}

impl AssignmentEngine {
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }

    /// Assign every vehicle to one of the two employees
    ///
    /// The seed employees are left untouched; the updated crew comes back in
    /// the [`Dispatch`]. Fails on the first vehicle with an unknown size, in
    /// which case no assignments are returned.
    pub fn assign(
        &self,
        employee_a: &Employee,
        employee_b: &Employee,
        vehicles: &[Vehicle],
    ) -> Result<Dispatch, DispatchError> {
        self.assign_crew(&Crew::new(employee_a.clone(), employee_b.clone()), vehicles)
    }

    /// Same as [`assign`](Self::assign), seeded from a crew
    pub fn assign_crew(&self, crew: &Crew, vehicles: &[Vehicle]) -> Result<Dispatch, DispatchError> {
        let mut crew = crew.clone();
        let mut assignments = Vec::with_capacity(vehicles.len());

        for vehicle in vehicles {
            assignments.push(self.process_next(&mut crew, vehicle)?);
        }

        Ok(Dispatch { assignments, crew })
    }

    /// Hand one vehicle to the next employee and credit their commission
    pub fn process_next(&self, crew: &mut Crew, vehicle: &Vehicle) -> Result<Assignment, DispatchError> {
        let slot = select_employee(&crew.employee_a, &crew.employee_b);
        let employee = crew.get_mut(slot);

        let assignment = self.complete_task(employee, vehicle)?;
        employee.credit(assignment.price);

        debug!(
            plate = %assignment.licence_plate,
            employee = %assignment.employee,
            fuel_added = assignment.fuel_added,
            price = assignment.price,
            paid = employee.paid,
            "task assigned"
        );

        Ok(assignment)
    }

    /// Price a task for the given employee without touching their pay
    pub fn complete_task(&self, employee: &Employee, vehicle: &Vehicle) -> Result<Assignment, DispatchError> {
        let size = vehicle.size()?;
        let fuel_added = self.policy.fuel_added(&vehicle.fuel);

        Ok(Assignment {
            licence_plate: vehicle.licence_plate.clone(),
            employee: employee.name.clone(),
            fuel_added,
            price: self.policy.price(fuel_added, size),
        })
    }
}
