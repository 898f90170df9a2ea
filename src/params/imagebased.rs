use anyhow::Result;

use super::flags::*;
use super::gridbased::apply_quality;
use super::option::{OptionSpec, OptionValue, ParameterSet};
use super::{AmbientOptions, DirectOptions, HasOptions, builtin, count, tiered};
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
    PIXEL_SAMPLING,
    PIXEL_THRESHOLD,
    PIXEL_JITTER,
    X_RESOLUTION,
    Y_RESOLUTION,
];

const PIXEL_SAMPLING_BY_TIER: [u32; Quality::COUNT] = [8, 4, 2];
const PIXEL_THRESHOLD_BY_TIER: [f64; Quality::COUNT] = [0.15, 0.10, 0.05];
const PIXEL_JITTER_BY_TIER: [f64; Quality::COUNT] = [0.6, 0.9, 0.9];

/// rpict parameters for image-based simulations.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBasedParameters {
    options: ParameterSet,
    quality: Option<Quality>,
}

impl ImageBasedParameters {
    /// Parameters pre-filled from the quality table, plus the pixel options.
    pub fn new(quality: Quality) -> Self {
        let mut options = ParameterSet::new("rpict parameters", SPECS);
        apply_quality(&mut options, quality);
        let pixel: [(&str, OptionValue); 3] = [
            (PIXEL_SAMPLING.name, tiered(quality, PIXEL_SAMPLING_BY_TIER).into()),
            (PIXEL_THRESHOLD.name, tiered(quality, PIXEL_THRESHOLD_BY_TIER).into()),
            (PIXEL_JITTER.name, tiered(quality, PIXEL_JITTER_BY_TIER).into()),
        ];
        for (name, value) in pixel {
            builtin("pixel table", options.set(name, value));
        }
        Self {
            options,
            quality: Some(quality),
        }
    }

    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }

    pub fn pixel_sampling(&self) -> Option<u32> {
        count(&self.options, PIXEL_SAMPLING.name)
    }

    pub fn set_pixel_sampling(&mut self, value: u32) -> Result<()> {
        self.options.set(PIXEL_SAMPLING.name, value)
    }

    pub fn pixel_threshold(&self) -> Option<f64> {
        self.options.float(PIXEL_THRESHOLD.name)
    }

    pub fn set_pixel_threshold(&mut self, value: f64) -> Result<()> {
        self.options.set(PIXEL_THRESHOLD.name, value)
    }

    pub fn pixel_jitter(&self) -> Option<f64> {
        self.options.float(PIXEL_JITTER.name)
    }

    pub fn set_pixel_jitter(&mut self, value: f64) -> Result<()> {
        self.options.set(PIXEL_JITTER.name, value)
    }

    /// Image resolution (`-x` / `-y`).
    pub fn set_resolution(&mut self, x: u32, y: u32) -> Result<()> {
        self.options.set(X_RESOLUTION.name, x)?;
        self.options.set(Y_RESOLUTION.name, y)
    }
}

impl Default for ImageBasedParameters {
    fn default() -> Self {
        Self::new(Quality::Low)
    }
}

impl HasOptions for ImageBasedParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("rpict parameters", SPECS),
            quality: None,
        }
    }
}

impl AmbientOptions for ImageBasedParameters {}
impl DirectOptions for ImageBasedParameters {}
