//! Tuned default rows for matrix-based recipes.
//!
//! These values are meant for rfluxmtx/rcontrib workflows only and do not
//! apply to plain rtrace/rpict runs. DC and VM rows target illuminance; DM and
//! the sun row also work for image-based studies.
//!
//! Every row must keep `limit_weight < 1 / ambient_divisions`. The shipped
//! rows use roughly `(1 / ambient_divisions) * 0.01`. The three tables are
//! tuned independently and must not be derived from one another.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::Quality;
use crate::error::RadError;
use crate::params::{AmbientOptions, ContributionOptions, DirectOptions, RcontribParameters};

/// One row of a matrix default table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixDefaults {
    pub ambient_divisions: u32,
    pub ambient_bounces: u32,
    pub limit_weight: f64,
    #[serde(default)]
    pub sampling_rays_count: Option<u32>,
}

impl MatrixDefaults {
    /// Checks the limit-weight ratio invariant.
    pub fn validate(&self) -> Result<()> {
        if self.ambient_divisions == 0 {
            return Err(RadError::InvalidDefaults {
                table: "matrix defaults".to_string(),
                reason: "ambient_divisions must be positive".to_string(),
            }
            .into());
        }
        let max = 1.0 / f64::from(self.ambient_divisions);
        if !(self.limit_weight >= 0.0 && self.limit_weight < max) {
            return Err(RadError::InvalidDefaults {
                table: "matrix defaults".to_string(),
                reason: format!(
                    "limit_weight {} must be below 1/ambient_divisions = {}",
                    self.limit_weight, max
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Parses and validates a row, e.g. from a project defaults file.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let row: Self = serde_json::from_str(json).context("Failed to parse matrix defaults")?;
        row.validate()?;
        Ok(row)
    }

    /// Writes this row into a matrix parameter set.
    pub fn apply<P: AmbientOptions + ContributionOptions>(&self, params: &mut P) -> Result<()> {
        params.set_ambient_divisions(self.ambient_divisions)?;
        params.set_ambient_bounces(self.ambient_bounces)?;
        params.set_limit_weight(self.limit_weight)?;
        if let Some(c) = self.sampling_rays_count {
            params.set_sampling_rays_count(c)?;
        }
        Ok(())
    }
}

/// Sun-matrix row. Tier independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SunMatrixDefaults {
    pub ambient_bounces: u32,
    pub direct_jitter: f64,
    pub direct_certainty: f64,
    pub direct_threshold: f64,
}

impl SunMatrixDefaults {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse sun matrix defaults")
    }

    pub fn apply(&self, params: &mut RcontribParameters) -> Result<()> {
        params.set_ambient_bounces(self.ambient_bounces)?;
        params.set_direct_jitter(self.direct_jitter)?;
        params.set_direct_certainty(self.direct_certainty)?;
        params.set_direct_threshold(self.direct_threshold)
    }
}

/// Illuminance-based daylight coefficients.
///
/// - Low: simple room with almost no external geometry.
/// - Medium: furniture, partitions and a few surrounding buildings.
/// - High: a room in a high-rise with intricate furniture and complex
///   external geometry (fins, overhangs).
pub const DC_DEFAULTS: [MatrixDefaults; Quality::COUNT] = [
    MatrixDefaults {
        ambient_divisions: 5000,
        ambient_bounces: 3,
        limit_weight: 0.000002,
        sampling_rays_count: Some(1),
    },
    MatrixDefaults {
        ambient_divisions: 15000,
        ambient_bounces: 5,
        limit_weight: 6.67e-07,
        sampling_rays_count: Some(1),
    },
    MatrixDefaults {
        ambient_divisions: 25000,
        ambient_bounces: 6,
        limit_weight: 4e-07,
        sampling_rays_count: Some(1),
    },
];

/// View matrix.
///
/// - Low: one or two glazing systems, no furniture.
/// - Medium: partitions and furniture, but nothing occluding the grids.
/// - High: heavily detailed interiors with occluding surfaces.
pub const VM_DEFAULTS: [MatrixDefaults; Quality::COUNT] = [
    MatrixDefaults {
        ambient_divisions: 1000,
        ambient_bounces: 3,
        limit_weight: 0.00001,
        sampling_rays_count: None,
    },
    MatrixDefaults {
        ambient_divisions: 5000,
        ambient_bounces: 5,
        limit_weight: 0.00002,
        sampling_rays_count: None,
    },
    MatrixDefaults {
        ambient_divisions: 20000,
        ambient_bounces: 7,
        limit_weight: 5e-07,
        sampling_rays_count: None,
    },
];

/// Daylight matrix.
///
/// - Low: glazing with a clear view of the sky.
/// - Medium: some surrounding buildings.
/// - High: dense surroundings, glazing may not see the sky directly.
pub const DM_DEFAULTS: [MatrixDefaults; Quality::COUNT] = [
    MatrixDefaults {
        ambient_divisions: 1024,
        ambient_bounces: 2,
        limit_weight: 0.00001,
        sampling_rays_count: Some(1000),
    },
    MatrixDefaults {
        ambient_divisions: 3000,
        ambient_bounces: 4,
        limit_weight: 3.33e-06,
        sampling_rays_count: Some(1000),
    },
    MatrixDefaults {
        ambient_divisions: 10000,
        ambient_bounces: 6,
        limit_weight: 0.000001,
        sampling_rays_count: Some(1000),
    },
];

/// Every solar disc in the sky hemisphere participates in shadow testing.
pub const SUN_DEFAULTS: SunMatrixDefaults = SunMatrixDefaults {
    ambient_bounces: 0,
    direct_jitter: 0.0,
    direct_certainty: 1.0,
    direct_threshold: 0.0,
};
