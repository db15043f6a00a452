//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading role costs and
//! department rosters from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::department::Department;
use crate::error::{AllocationResult, ConfigError};

use super::types::{RoleCosts, RoleCostsConfig, Roster};

/// Loads and provides access to a department configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/engineering/
/// ├── roles.yaml   # Monthly cost per role
/// └── roster.yaml  # Department name, head, employees and reports
/// ```
///
/// # Example
///
/// ```no_run
/// use expense_allocation::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engineering")?;
/// let department = loader.department()?;
/// println!("{} costs {} per month", department.name(), department.allocation(None)?);
/// # Ok::<(), expense_allocation::error::AllocationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    costs: RoleCosts,
    roster: Roster,
}

impl ConfigLoader {
    /// Loads `roles.yaml` and `roster.yaml` from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if either file is missing, or
    /// [`ConfigError::Parse`] if either file is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let costs = Self::load_costs(path.join("roles.yaml"))?;
        let roster = Self::load_roster(path.join("roster.yaml"))?;

        info!(
            path = %path.display(),
            department = %roster.name,
            employees = roster.employees.len(),
            reports = roster.reports.len(),
            "Loaded department configuration"
        );
        Ok(Self { costs, roster })
    }

    /// Loads a role cost table from a `roles.yaml` file.
    pub fn load_costs<P: AsRef<Path>>(path: P) -> Result<RoleCosts, ConfigError> {
        let config = Self::load_yaml::<RoleCostsConfig>(path.as_ref())?;
        Ok(config.costs)
    }

    /// Loads a department roster from a `roster.yaml` file.
    pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, ConfigError> {
        Self::load_yaml::<Roster>(path.as_ref())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded role costs.
    pub fn costs(&self) -> &RoleCosts {
        &self.costs
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Builds the department described by the roster, priced with the loaded costs.
    pub fn department(&self) -> AllocationResult<Department> {
        Department::from_roster(&self.roster, self.costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn config_path() -> &'static str {
        "./config/engineering"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.roster().name, "Engineering");
        assert_eq!(loader.roster().head, "Tom");
        assert_eq!(loader.roster().employees.len(), 7);
        assert_eq!(loader.roster().reports.len(), 7);
    }

    #[test]
    fn test_costs_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.costs().cost(Role::Manager), 300);
        assert_eq!(loader.costs().cost(Role::Developer), 1000);
        assert_eq!(loader.costs().cost(Role::QaTester), 500);
    }

    #[test]
    fn test_department_from_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let department = loader.department().unwrap();

        assert_eq!(department.len(), 8);
        assert_eq!(department.allocation(None).unwrap(), 5400);
        assert_eq!(department.allocation_for_manager_named("Brandon", Some(1)), Ok(Some(2800)));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(ConfigError::NotFound { path }) => {
                assert!(path.contains("roles.yaml"));
            }
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_costs_returns_parse_error() {
        match ConfigLoader::load_costs("./config/invalid/roles.yaml") {
            Err(ConfigError::Parse { path, message }) => {
                assert!(path.contains("roles.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }
}
