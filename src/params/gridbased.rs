use super::flags::*;
use super::option::{OptionSpec, ParameterSet};
use super::{AmbientOptions, DirectOptions, HasOptions, builtin, tiered};
use crate::Quality;

const SPECS: &[OptionSpec] = &[
    AMBIENT_ACCURACY,
    AMBIENT_BOUNCES,
    AMBIENT_DIVISIONS,
    AMBIENT_RESOLUTION,
    AMBIENT_SUPERSAMPLES,
    DIRECT_CERTAINTY,
    DIRECT_JITTER,
    DIRECT_PRETEST_DENSITY,
    DIRECT_SEC_RELAYS,
    DIRECT_SAMPLING,
    DIRECT_THRESHOLD,
    SPECULAR_THRESHOLD,
    SPECULAR_SAMPLING,
    LIMIT_REFLECTIONS,
    LIMIT_WEIGHT,
    IRRADIANCE_CALC,
];

/// Quality-scaled values shared by the grid-based and image-based constructors.
///
/// Columns are low / medium / high.
pub(crate) struct QualityTable {
    pub ambient_accuracy: [f64; Quality::COUNT],
    pub ambient_bounces: [u32; Quality::COUNT],
    pub ambient_divisions: [u32; Quality::COUNT],
    pub ambient_resolution: [u32; Quality::COUNT],
    pub ambient_supersamples: [u32; Quality::COUNT],
    pub direct_certainty: [f64; Quality::COUNT],
    pub direct_jitter: [f64; Quality::COUNT],
    pub direct_pretest_density: [u32; Quality::COUNT],
    pub direct_sec_relays: [u32; Quality::COUNT],
    pub direct_sampling: [f64; Quality::COUNT],
    pub direct_threshold: [f64; Quality::COUNT],
    pub specular_threshold: [f64; Quality::COUNT],
    pub specular_sampling: [f64; Quality::COUNT],
    pub limit_reflections: [i64; Quality::COUNT],
    pub limit_weight: [f64; Quality::COUNT],
}

pub(crate) const QUALITY_TABLE: QualityTable = QualityTable {
    ambient_accuracy: [0.25, 0.2, 0.1],
    ambient_bounces: [2, 3, 6],
    ambient_divisions: [512, 2048, 4096],
    ambient_resolution: [16, 64, 128],
    ambient_supersamples: [128, 2048, 4096],
    direct_certainty: [0.25, 0.5, 0.75],
    direct_jitter: [0.0, 0.5, 1.0],
    direct_pretest_density: [64, 256, 512],
    direct_sec_relays: [0, 1, 3],
    direct_sampling: [0.5, 0.25, 0.05],
    direct_threshold: [0.5, 0.25, 0.15],
    specular_threshold: [0.85, 0.5, 0.15],
    specular_sampling: [0.0, 0.7, 1.0],
    limit_reflections: [4, 6, 8],
    limit_weight: [0.05, 0.01, 0.005],
};

/// Applies the quality table to any set that carries the ambient, direct and
/// specular options.
pub(crate) fn apply_quality(set: &mut ParameterSet, quality: Quality) {
    let t = &QUALITY_TABLE;
    let values: [(&str, super::OptionValue); 15] = [
        (AMBIENT_ACCURACY.name, tiered(quality, t.ambient_accuracy).into()),
        (AMBIENT_BOUNCES.name, tiered(quality, t.ambient_bounces).into()),
        (AMBIENT_DIVISIONS.name, tiered(quality, t.ambient_divisions).into()),
        (AMBIENT_RESOLUTION.name, tiered(quality, t.ambient_resolution).into()),
        (AMBIENT_SUPERSAMPLES.name, tiered(quality, t.ambient_supersamples).into()),
        (DIRECT_CERTAINTY.name, tiered(quality, t.direct_certainty).into()),
        (DIRECT_JITTER.name, tiered(quality, t.direct_jitter).into()),
        (DIRECT_PRETEST_DENSITY.name, tiered(quality, t.direct_pretest_density).into()),
        (DIRECT_SEC_RELAYS.name, tiered(quality, t.direct_sec_relays).into()),
        (DIRECT_SAMPLING.name, tiered(quality, t.direct_sampling).into()),
        (DIRECT_THRESHOLD.name, tiered(quality, t.direct_threshold).into()),
        (SPECULAR_THRESHOLD.name, tiered(quality, t.specular_threshold).into()),
        (SPECULAR_SAMPLING.name, tiered(quality, t.specular_sampling).into()),
        (LIMIT_REFLECTIONS.name, tiered(quality, t.limit_reflections).into()),
        (LIMIT_WEIGHT.name, tiered(quality, t.limit_weight).into()),
    ];
    for (name, value) in values {
        builtin("quality table", set.set(name, value));
    }
}

/// rtrace parameters for grid-based (sensor point) simulations.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBasedParameters {
    options: ParameterSet,
    quality: Option<Quality>,
}

impl GridBasedParameters {
    /// Parameters pre-filled from the quality table.
    pub fn new(quality: Quality) -> Self {
        let mut options = ParameterSet::new("rtrace parameters", SPECS);
        apply_quality(&mut options, quality);
        Self {
            options,
            quality: Some(quality),
        }
    }

    /// Tier the parameters were seeded from, if any.
    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }

    pub fn irradiance_calc(&self) -> Option<bool> {
        self.options.boolean(IRRADIANCE_CALC.name)
    }

    pub fn set_irradiance_calc(&mut self, value: bool) -> anyhow::Result<()> {
        self.options.set(IRRADIANCE_CALC.name, value)
    }
}

impl Default for GridBasedParameters {
    fn default() -> Self {
        Self::new(Quality::Low)
    }
}

impl HasOptions for GridBasedParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("rtrace parameters", SPECS),
            quality: None,
        }
    }
}

impl AmbientOptions for GridBasedParameters {}
impl DirectOptions for GridBasedParameters {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FromFlags, RadianceParameters};

    #[test]
    fn test_quality_scaling() {
        let low = GridBasedParameters::new(Quality::Low);
        let high = GridBasedParameters::new(Quality::High);
        assert_eq!(low.ambient_divisions(), Some(512));
        assert_eq!(high.ambient_divisions(), Some(4096));
        assert_eq!(low.ambient_bounces(), Some(2));
        assert_eq!(high.ambient_bounces(), Some(6));
        assert!(high.limit_weight().unwrap() < low.limit_weight().unwrap());
    }

    #[test]
    fn test_render_low() {
        let p = GridBasedParameters::new(Quality::Low);
        assert_eq!(
            p.render_flags(),
            "-aa 0.25 -ab 2 -ad 512 -ar 16 -as 128 -dc 0.25 -dj 0 -dp 64 -dr 0 \
             -ds 0.5 -dt 0.5 -st 0.85 -ss 0 -lr 4 -lw 0.05"
        );
    }

    #[test]
    fn test_irradiance_switch() -> anyhow::Result<()> {
        let mut p = GridBasedParameters::new(Quality::Medium);
        p.set_irradiance_calc(true)?;
        assert!(p.render_flags().ends_with("-lw 0.01 -I"));
        Ok(())
    }

    #[test]
    fn test_from_flags_roundtrip() -> anyhow::Result<()> {
        let mut p = GridBasedParameters::new(Quality::High);
        p.set_irradiance_calc(true)?;
        let parsed = GridBasedParameters::from_flags(&p.render_flags())?;
        assert_eq!(parsed.options(), p.options());
        assert_eq!(parsed.quality(), None);
        Ok(())
    }

    #[test]
    fn test_every_tier_is_valid() {
        for q in Quality::ALL {
            let p = GridBasedParameters::new(q);
            assert_eq!(p.options().explicit_values().count(), 15);
        }
    }
}
