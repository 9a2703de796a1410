//! Dispatch Service - Core Use Case for Refueling Assignment
//!
//! This service orchestrates one batch:
//! 1. Load vehicles from the repository
//! 2. Assign and price each task with the assignment engine
//! 3. Return the assignments together with the crew's final pay
//!
//! Any failure aborts the batch; nothing partial is returned.

use refuel_domain::{AssignmentEngine, Crew, Dispatch, RatePolicy, VehicleRepository};
use refuel_types::Result;
use tracing::{error, info};

/// Runs a refueling batch against a vehicle source
pub struct DispatchService<R: VehicleRepository> {
    repository: R,
    engine: AssignmentEngine,
    crew: Crew,
}

impl<R: VehicleRepository> DispatchService<R> {
    /// Service with the standard rate policy and crew
    pub fn new(repository: R) -> Self {
        Self::with_policy(repository, RatePolicy::default(), Crew::default())
    }

    pub fn with_policy(repository: R, policy: RatePolicy, crew: Crew) -> Self {
        Self {
            repository,
            engine: AssignmentEngine::new(policy),
            crew,
        }
    }

    /// Load all vehicles and assign them
    pub fn run(&self) -> Result<Dispatch> {
        let vehicles = self.repository.find_all()?;
        info!(vehicle_count = vehicles.len(), "dispatch started");

        let dispatch = self
            .engine
            .assign_crew(&self.crew, &vehicles)
            .inspect_err(|e| error!(error = %e, "dispatch aborted"))?;

        info!(
            assignment_count = dispatch.assignments.len(),
            paid_a = dispatch.crew.employee_a.paid,
            paid_b = dispatch.crew.employee_b.paid,
            "dispatch completed"
        );

        Ok(dispatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refuel_domain::{Employee, Vehicle};
    use refuel_types::{DispatchError, Error};

    struct InMemoryVehicles(Vec<Vehicle>);

    impl VehicleRepository for InMemoryVehicles {
        fn find_all(&self) -> Result<Vec<Vehicle>> {
            Ok(self.0.clone())
        }
    }

    struct FailingVehicles;

    impl VehicleRepository for FailingVehicles {
        fn find_all(&self) -> Result<Vec<Vehicle>> {
            Err(Error::FileNotFound("input-data.json".to_string()))
        }
    }

    #[test]
    fn test_run_default_crew() {
        let service = DispatchService::new(InMemoryVehicles(vec![
            Vehicle::new("ABC", "large", 57, 0.37),
            Vehicle::new("DEF", "small", 60, 0.05),
        ]));

        let dispatch = service.run().unwrap();

        // A has the lower commission (0.11) and takes the first task
        assert_eq!(dispatch.assignments[0].employee, "A");
        assert_eq!(dispatch.assignments[1].employee, "B");
        assert!((dispatch.crew.employee_a.paid - 35.0 * 0.11).abs() < 1e-9);
        assert!((dispatch.crew.employee_b.paid - 124.75 * 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_run_is_repeatable() {
        let service = DispatchService::new(InMemoryVehicles(vec![
            Vehicle::new("P1", "small", 40, 0.02),
            Vehicle::new("P2", "large", 80, 0.5),
            Vehicle::new("P3", "small", 35, 0.09),
        ]));
        assert_eq!(service.run().unwrap(), service.run().unwrap());
    }

    #[test]
    fn test_run_custom_crew() {
        let crew = Crew::new(Employee::new("Ann", 0.05), Employee::new("Bob", 0.10));
        let service = DispatchService::with_policy(
            InMemoryVehicles(vec![Vehicle::new("ABC", "large", 57, 0.37)]),
            RatePolicy::default(),
            crew,
        );
        let dispatch = service.run().unwrap();
        assert_eq!(dispatch.assignments[0].employee, "Ann");
    }

    #[test]
    fn test_run_unknown_size() {
        let service = DispatchService::new(InMemoryVehicles(vec![
            Vehicle::new("ABC", "large", 57, 0.37),
            Vehicle::new("TRK", "truck", 90, 0.01),
        ]));
        let err = service.run().unwrap_err();
        assert!(matches!(
            err,
            Error::Dispatch(DispatchError::UnknownVehicleSize(ref s)) if s == "truck"
        ));
    }

    #[test]
    fn test_run_repository_failure() {
        let service = DispatchService::new(FailingVehicles);
        assert!(matches!(service.run(), Err(Error::FileNotFound(_))));
    }
}
