//! # Generator Configuration
//!
//! Tuning knobs for the terrain generator, loadable from TOML.
//!
//! ```toml
//! water_frequency = 200   # higher = fewer lakes
//! min_radius = 3
//! max_radius = 5
//! ```
//!
//! Every field is optional; the defaults reproduce the stock terrain.

use serde::{Deserialize, Serialize};

use crate::error::{WorldGenError, WorldGenResult};

/// Terrain generator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Density values are drawn from `[0, water_frequency)`; a cell seeds a
    /// lake when its value is 0, so the seed chance is `1 / water_frequency`.
    pub water_frequency: u32,
    /// Smallest lake radius in cells (inclusive).
    pub min_radius: u32,
    /// Largest lake radius in cells (inclusive).
    pub max_radius: u32,
}

impl GeneratorConfig {
    /// Stock seed chance denominator.
    pub const DEFAULT_WATER_FREQUENCY: u32 = 200;
    /// Stock smallest radius.
    pub const DEFAULT_MIN_RADIUS: u32 = 3;
    /// Stock largest radius.
    pub const DEFAULT_MAX_RADIUS: u32 = 5;

    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::InvalidConfig`] if the text is not valid TOML
    /// for this struct or the values fail [`GeneratorConfig::validate`].
    pub fn from_toml_str(text: &str) -> WorldGenResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| WorldGenError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a usable generator.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::InvalidConfig`] if `water_frequency` is zero
    /// or `min_radius > max_radius`.
    pub fn validate(&self) -> WorldGenResult<()> {
        if self.water_frequency == 0 {
            return Err(WorldGenError::InvalidConfig(
                "water_frequency must be at least 1".into(),
            ));
        }
        if self.min_radius > self.max_radius {
            return Err(WorldGenError::InvalidConfig(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            water_frequency: Self::DEFAULT_WATER_FREQUENCY,
            min_radius: Self::DEFAULT_MIN_RADIUS,
            max_radius: Self::DEFAULT_MAX_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.water_frequency, 200);
        assert_eq!((config.min_radius, config.max_radius), (3, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str("water_frequency = 50").unwrap();
        assert_eq!(config.water_frequency, 50);
        assert_eq!(config.min_radius, 3);
        assert_eq!(config.max_radius, 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            GeneratorConfig::from_toml_str("").unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let err = GeneratorConfig::from_toml_str("water_frequency = 0").unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_radius() {
        let err = GeneratorConfig::from_toml_str("min_radius = 6\nmax_radius = 2").unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidConfig(msg) if msg.contains("min_radius")));
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(GeneratorConfig::from_toml_str("lakes = true").is_err());
    }
}
