//! Vehicle batch loader from JSON input files

use std::fs;
use std::path::Path;

use refuel_domain::model::Vehicle;
use refuel_types::{Error, Result};
use tracing::debug;

/// Ordered batch of vehicles read from JSON
#[derive(Debug, Clone, Default)]
pub struct VehicleLoader {
    vehicles: Vec<Vehicle>,
}

impl VehicleLoader {
    /// Load vehicles from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Vehicle file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), count = loader.count(), "loaded vehicles");
        Ok(loader)
    }

    /// Load vehicles from a JSON string
    ///
    /// The document must be an array of vehicle records.
    pub fn load_from_str(json: &str) -> Result<Self> {
        let vehicles: Vec<Vehicle> = serde_json::from_str(json)?;

        for vehicle in &vehicles {
            validate(vehicle)?;
        }

        Ok(Self { vehicles })
    }

    /// All vehicles in input order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

fn validate(vehicle: &Vehicle) -> Result<()> {
    let level = vehicle.fuel.level;
    if !level.is_finite() || !(0.0..=1.0).contains(&level) {
        return Err(Error::InvalidInput(format!(
            "fuel level {} of vehicle {} is outside 0.0-1.0",
            level, vehicle.licence_plate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_VEHICLES: &str = r#"[
  {"fuel": {"capacity": 57, "level": 0.07}, "licencePlate": "A", "size": "large"},
  {"fuel": {"capacity": 63, "level": 0.23}, "licencePlate": "B", "size": "small"}
]"#;

    #[test]
    fn test_load_from_str() {
        let loader = VehicleLoader::load_from_str(TWO_VEHICLES).unwrap();
        assert_eq!(loader.count(), 2);
        assert_eq!(loader.vehicles()[0], Vehicle::new("A", "large", 57, 0.07));
        assert_eq!(loader.vehicles()[1], Vehicle::new("B", "small", 63, 0.23));
    }

    #[test]
    fn test_empty_array() {
        let loader = VehicleLoader::load_from_str("[]").unwrap();
        assert!(loader.is_empty());
    }

    #[test]
    fn test_unknown_size_is_kept_for_engine() {
        let json = r#"[{"fuel": {"capacity": 50, "level": 0.7}, "licencePlate": "FGH", "size": "truck"}]"#;
        let loader = VehicleLoader::load_from_str(json).unwrap();
        assert_eq!(loader.vehicles()[0].size, "truck");
    }

    #[test]
    fn test_malformed_json() {
        let err = VehicleLoader::load_from_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_field() {
        let json = r#"[{"fuel": {"capacity": 50}, "licencePlate": "X", "size": "small"}]"#;
        assert!(matches!(VehicleLoader::load_from_str(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let json = r#"[{"fuel": {"capacity": -5, "level": 0.5}, "licencePlate": "X", "size": "small"}]"#;
        assert!(matches!(VehicleLoader::load_from_str(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_level_out_of_range() {
        let json = r#"[{"fuel": {"capacity": 50, "level": 1.5}, "licencePlate": "X", "size": "small"}]"#;
        let err = VehicleLoader::load_from_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("X")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_VEHICLES.as_bytes()).unwrap();

        let loader = VehicleLoader::load_from_file(file.path()).unwrap();
        assert_eq!(loader.count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VehicleLoader::load_from_file(&dir.path().join("wrong-path.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(ref msg) if msg.contains("wrong-path.json")));
    }
}
