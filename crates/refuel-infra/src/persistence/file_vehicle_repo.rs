//! File-based implementation of VehicleRepository

use std::path::PathBuf;

use refuel_domain::model::Vehicle;
use refuel_domain::repository::VehicleRepository;
use refuel_types::Error;

use crate::vehicle_loader::VehicleLoader;

/// File-based vehicle repository (JSON)
///
/// The whole file is read and validated when the repository is opened.
pub struct FileVehicleRepository {
    loader: VehicleLoader,
}

impl FileVehicleRepository {
    /// Open a repository over a JSON vehicle file
    pub fn open(json_path: PathBuf) -> Result<Self, Error> {
        let loader = VehicleLoader::load_from_file(&json_path)?;
        Ok(Self { loader })
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.loader.vehicles().to_vec())
    }
}
