use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AeroBackend, AeroConstants, CommitConfig, DebugLogConfig, DeflectionConfig, WingLimits};
use crate::resources::ConfigError;

/// Aggregate configuration, loadable from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcWingConfig {
    pub aero: AeroConstants,
    pub backend: AeroBackend,
    pub commit: CommitConfig,
    pub limits: WingLimits,
    pub deflection: DeflectionConfig,
    pub logging: DebugLogConfig,
}

impl ProcWingConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.commit.delay_ticks == 0 {
            return Err(ConfigError::Validation(
                "commit delay must be at least one tick".to_string(),
            ));
        }
        if self.aero.stock_lift_area_divisor <= 0.0 {
            return Err(ConfigError::Validation(
                "stock lift area divisor must be positive".to_string(),
            ));
        }
        if self.deflection.rate_limit_slack < 0.0 {
            return Err(ConfigError::Validation(
                "rate limit slack cannot be negative".to_string(),
            ));
        }
        for limits in [&self.limits.wing, &self.limits.control_surface] {
            if limits.length.min <= 0.0 {
                return Err(ConfigError::Validation(
                    "minimum length must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}
