//! Coupon engine configuration.

use std::path::Path;

use cadence_core::Basis;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the loose-argument [`CouponCalculator`](crate::CouponCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponConfig {
    /// Basis used when a call omits the basis argument
    #[serde(default = "default_basis")]
    pub default_basis: Basis,
}

fn default_basis() -> Basis {
    Basis::UsNasd30360
}

impl Default for CouponConfig {
    fn default() -> Self {
        Self {
            default_basis: default_basis(),
        }
    }
}

impl CouponConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
