use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use theatercore::model::{ControlPoint, Flight, GroundObject, SupplyRoute};
use theatercore::prelude::LatLon;

/// Full theater description loadable from YAML.
///
/// Every collection defaults to empty so a scenario file only needs to name
/// what it uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub map_center: LatLon,
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
    #[serde(default)]
    pub ground_objects: Vec<GroundObject>,
    #[serde(default)]
    pub supply_routes: Vec<SupplyRoute>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn entity_count(&self) -> usize {
        self.control_points.len()
            + self.ground_objects.len()
            + self.supply_routes.len()
            + self.flights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn scenario_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: Test theater\n\
              map_center: {lat: 42.0, lon: 41.7}\n\
              control_points:\n\
                - {id: 1, name: Batumi, position: {lat: 41.6, lon: 41.6}, faction: Blue}\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = ScenarioConfig::load(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("Test theater"));
        assert_eq!(config.control_points.len(), 1);
        assert!(config.flights.is_empty());
        assert_eq!(config.entity_count(), 1);
    }

    #[test]
    fn scenario_load_rejects_malformed_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"map_center: not-a-coordinate\n").unwrap();
        let path = temp.into_temp_path();
        assert!(ScenarioConfig::load(&path).is_err());
    }
}
