//! Editor configuration with defaults, optionally overridden from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::camera::ZoomLimits;
use crate::consts::{MIN_TABLE_SIZE, PRINT_SCALE, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a number: {value}")]
    NotANumber { var: &'static str, value: String },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: f64 },
    #[error("zoom range is empty: min {min} > max {max}")]
    EmptyZoomRange { min: f64, max: f64 },
}

/// Tunables for the interaction engine and exports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Smallest width/height a resize may produce.
    pub min_table_size: f64,
    pub zoom: ZoomLimits,
    /// Capture scale for PDF export.
    pub print_scale: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_table_size: MIN_TABLE_SIZE,
            zoom: ZoomLimits { min: ZOOM_MIN, max: ZOOM_MAX, step: ZOOM_STEP },
            print_scale: PRINT_SCALE,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `SEATPLAN_MIN_TABLE_SIZE`: default 40
    /// - `SEATPLAN_ZOOM_MIN`: default 0.2
    /// - `SEATPLAN_ZOOM_MAX`: default 2.0
    /// - `SEATPLAN_ZOOM_STEP`: default 0.1
    /// - `SEATPLAN_PRINT_SCALE`: default 2.0
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparsable or non-positive values, or a
    /// zoom minimum above the maximum.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_table_size = parse_positive(&lookup, "SEATPLAN_MIN_TABLE_SIZE", MIN_TABLE_SIZE)?;
        let min = parse_positive(&lookup, "SEATPLAN_ZOOM_MIN", ZOOM_MIN)?;
        let max = parse_positive(&lookup, "SEATPLAN_ZOOM_MAX", ZOOM_MAX)?;
        let step = parse_positive(&lookup, "SEATPLAN_ZOOM_STEP", ZOOM_STEP)?;
        let print_scale = parse_positive(&lookup, "SEATPLAN_PRINT_SCALE", PRINT_SCALE)?;

        if min > max {
            return Err(ConfigError::EmptyZoomRange { min, max });
        }

        Ok(Self { min_table_size, zoom: ZoomLimits { min, max, step }, print_scale })
    }
}

fn parse_positive<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber { var, value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { var, value });
    }
    Ok(value)
}
