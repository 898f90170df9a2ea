use anyhow::Result;

use super::flags::*;
use super::gridbased::QUALITY_TABLE;
use super::option::{OptionSpec, ParameterSet};
use super::{AmbientOptions, ContributionOptions, HasOptions, builtin, tiered};
use crate::Quality;

const SPECS: &[OptionSpec] = &[
    AMBIENT_ACCURACY,
    AMBIENT_BOUNCES,
    AMBIENT_DIVISIONS,
    AMBIENT_RESOLUTION,
    AMBIENT_SUPERSAMPLES,
    LIMIT_WEIGHT,
    SAMPLING_RAYS_COUNT,
    IRRADIANCE_CALC,
];

/// rfluxmtx parameters for view and daylight matrix calculations.
#[derive(Debug, Clone, PartialEq)]
pub struct RfluxmtxParameters {
    options: ParameterSet,
}

impl RfluxmtxParameters {
    /// Seeds the ambient options that the matrix default rows do not carry
    /// (`-aa -ar -as`) from the quality table.
    ///
    /// Bounces, divisions, limit weight and sampling rays are left unset; the
    /// recipe defaults fill them in.
    pub fn with_quality(quality: Quality) -> Self {
        let mut params = Self::without_options();
        builtin("quality table", params.seed_ambient(quality));
        params
    }

    fn seed_ambient(&mut self, quality: Quality) -> Result<()> {
        let t = &QUALITY_TABLE;
        self.set_ambient_accuracy(tiered(quality, t.ambient_accuracy))?;
        self.set_ambient_resolution(tiered(quality, t.ambient_resolution))?;
        self.set_ambient_supersamples(tiered(quality, t.ambient_supersamples))
    }
}

impl Default for RfluxmtxParameters {
    fn default() -> Self {
        Self::without_options()
    }
}

impl HasOptions for RfluxmtxParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("rfluxmtx parameters", SPECS),
        }
    }
}

impl AmbientOptions for RfluxmtxParameters {}
impl ContributionOptions for RfluxmtxParameters {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadError;
    use crate::params::{FromFlags, RadianceParameters};

    #[test]
    fn test_with_quality_seeds_accuracy_only() {
        let p = RfluxmtxParameters::with_quality(Quality::Medium);
        assert_eq!(p.render_flags(), "-aa 0.2 -ar 64 -as 2048");
        assert_eq!(p.ambient_divisions(), None);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(RfluxmtxParameters::default().render_flags(), "");
    }

    #[test]
    fn test_contribution_options() -> Result<()> {
        let mut p = RfluxmtxParameters::default();
        p.set_ambient_bounces(5)?;
        p.set_ambient_divisions(15000)?;
        p.set_limit_weight(6.67e-7)?;
        p.set_sampling_rays_count(1)?;
        p.set_irradiance_calc(true)?;
        assert_eq!(p.render_flags(), "-ab 5 -ad 15000 -lw 0.000000667 -c 1 -I");
        Ok(())
    }

    #[test]
    fn test_direct_options_are_not_known() {
        let mut p = RfluxmtxParameters::default();
        let err = p.set_option("direct_jitter", 0.5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RadError>(),
            Some(RadError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_from_flags_roundtrip() -> Result<()> {
        let mut p = RfluxmtxParameters::with_quality(Quality::High);
        p.set_ambient_divisions(10000)?;
        p.set_limit_weight(1e-6)?;
        p.set_sampling_rays_count(1000)?;
        let parsed = RfluxmtxParameters::from_flags(&p.render_flags())?;
        assert_eq!(parsed, p);
        Ok(())
    }
}
