//! Circular histogram descriptor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;

/// Configuration for [`CircularHistogram`](crate::descriptors::CircularHistogram).
///
/// Loaded from YAML; every field is optional and falls back to its default.
///
/// ```yaml
/// radius: 0.5
/// sector_count: 16
/// peak_weight: 5.0
/// spread_weight: 1.0
/// min_neighbors: 7
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CghConfig {
    /// Neighbourhood radius the descriptor is built for (meters).
    /// Informational only; neighbour selection happens upstream.
    #[serde(default = "defaults::radius")]
    pub radius: f64,

    /// Number of angular sectors covering the full circle.
    #[serde(default = "defaults::sector_count")]
    pub sector_count: usize,

    /// Weight added to the sector a neighbour falls into.
    #[serde(default = "defaults::peak_weight")]
    pub peak_weight: f64,

    /// Weight added to each of the two adjacent sectors.
    #[serde(default = "defaults::spread_weight")]
    pub spread_weight: f64,

    /// Minimum neighbour set size (central point included) for a valid descriptor.
    #[serde(default = "defaults::min_neighbors")]
    pub min_neighbors: usize,
}

impl Default for CghConfig {
    fn default() -> Self {
        Self {
            radius: defaults::radius(),
            sector_count: defaults::sector_count(),
            peak_weight: defaults::peak_weight(),
            spread_weight: defaults::spread_weight(),
            min_neighbors: defaults::min_neighbors(),
        }
    }
}

impl CghConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/descriptor.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/descriptor.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Angular width of one sector (radians).
    #[inline]
    pub fn sector_width(&self) -> f64 {
        crate::core::TWO_PI / self.sector_count as f64
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.sector_count == 0 {
            return Err(ConfigLoadError::Invalid(
                "sector_count must be positive".to_string(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        for (name, weight) in [
            ("peak_weight", self.peak_weight),
            ("spread_weight", self.spread_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigLoadError::Invalid(format!(
                    "{} must be finite and non-negative, got {}",
                    name, weight
                )));
            }
        }
        if self.peak_weight + self.spread_weight <= 0.0 {
            return Err(ConfigLoadError::Invalid(
                "peak_weight and spread_weight cannot both be zero".to_string(),
            ));
        }
        Ok(())
    }
}
