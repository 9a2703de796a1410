//! Repository trait definitions for vehicle input

use crate::model::Vehicle;
use refuel_types::Error;

/// Source of vehicles waiting to be refueled
pub trait VehicleRepository {
    /// Load all vehicles, in input order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;
}
