//! JSON configuration of the photoevaporation model.
//!
//! ```json
//! { "model": { "type": "fixed", "mdot": 1e-8, "amax": 10.0 } }
//! ```
//!
//! Table providers embed their grid:
//!
//! ```json
//! {
//!   "model": {
//!     "type": "bySurfaceDensity",
//!     "table": {
//!       "stellarMass": 1.0,
//!       "fuv": 1000.0,
//!       "conditions": [0.1, 1.0, 10.0],
//!       "radii": [10.0, 100.0],
//!       "rates": [1e-9, 1e-8, 1e-8, 1e-7, 1e-7, 1e-6]
//!     }
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::disc::Disc;
use crate::error::{ConfigError, ConfigResult};
use crate::evaporation::ExternalPhotoevaporation;
use crate::rates::{DEFAULT_FIXED_AMAX, DEFAULT_FIXED_MDOT, RateModel};
use crate::table::RateGrid;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoevaporationConfig {
    #[serde(default)]
    pub model: ModelConfig,
}

/// Rate provider selection, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModelConfig {
    Fixed {
        /// Mass-loss rate (M☉/yr)
        #[serde(default = "default_mdot")]
        mdot: f64,
        /// Maximum entrained grain size (cm)
        #[serde(default = "default_amax")]
        amax: f64,
    },
    BySurfaceDensity {
        table: RateGrid,
    },
    ByExtrapolatedMass {
        table: RateGrid,
    },
    ByIntegratedMass {
        table: RateGrid,
    },
}

fn default_mdot() -> f64 {
    DEFAULT_FIXED_MDOT
}

fn default_amax() -> f64 {
    DEFAULT_FIXED_AMAX
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::Fixed {
            mdot: DEFAULT_FIXED_MDOT,
            amax: DEFAULT_FIXED_AMAX,
        }
    }
}

impl PhotoevaporationConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed JSON or an invalid rate grid,
    /// [`ConfigError::Invalid`] for out-of-range fixed-rate parameters.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// A non-positive `mdot` is allowed and disables the wind.
    pub fn validate(&self) -> ConfigResult<()> {
        if let ModelConfig::Fixed { mdot, amax } = self.model {
            if !mdot.is_finite() {
                return Err(ConfigError::Invalid(format!("mdot must be finite, got {mdot}")));
            }
            if !(amax.is_finite() && amax >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "amax must be finite and non-negative, got {amax}"
                )));
            }
        }
        Ok(())
    }

    /// Rate provider described by this configuration.
    pub fn into_model(self) -> RateModel {
        match self.model {
            ModelConfig::Fixed { mdot, amax } => RateModel::Fixed { mdot, amax },
            ModelConfig::BySurfaceDensity { table } => RateModel::BySurfaceDensity(table),
            ModelConfig::ByExtrapolatedMass { table } => RateModel::ByExtrapolatedMass(table),
            ModelConfig::ByIntegratedMass { table } => RateModel::ByIntegratedMass(table),
        }
    }

    /// Photoevaporation set up for `disc`.
    pub fn into_evaporation(self, disc: &Disc) -> ExternalPhotoevaporation {
        ExternalPhotoevaporation::new(self.into_model(), disc)
    }
}
