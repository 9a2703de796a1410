//! Repository adapters for the persistence layer

use std::path::PathBuf;

use refuel_infra::persistence::FileVehicleRepository;
use refuel_types::Result;

use crate::config::Config;

/// Open the vehicle repository at the configured input path
pub fn open_vehicle_repo(config: &Config) -> Result<FileVehicleRepository> {
    open_vehicle_repo_at(config.input_path.clone())
}

/// Open the vehicle repository at a custom path
pub fn open_vehicle_repo_at(json_path: PathBuf) -> Result<FileVehicleRepository> {
    FileVehicleRepository::open(json_path)
}
