//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! calculation policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the calculation policy.
///
/// The `ConfigLoader` reads a YAML policy file from a directory. The
/// directory layout keeps room for future policy revisions to live next
/// to each other:
///
/// ```text
/// config/default/
/// └── policy.yaml   # hour rules, multipliers, statutory limits
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let policy = loader.policy();
/// println!("Minimum wage: {}", policy.limits.minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// policy file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Ok(Self { policy })
    }

    /// Creates a loader backed by the compiled-in default policy.
    ///
    /// Useful for library consumers and tests that do not carry a
    /// configuration directory.
    pub fn from_defaults() -> Self {
        Self {
            policy: PolicyConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded calculation policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
