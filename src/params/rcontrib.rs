use super::flags::*;
use super::option::{OptionSpec, ParameterSet};
use super::{AmbientOptions, ContributionOptions, DirectOptions, HasOptions};

const SPECS: &[OptionSpec] = &[
    AMBIENT_ACCURACY,
    AMBIENT_BOUNCES,
    AMBIENT_DIVISIONS,
    AMBIENT_RESOLUTION,
    AMBIENT_SUPERSAMPLES,
    LIMIT_WEIGHT,
    DIRECT_CERTAINTY,
    DIRECT_JITTER,
    DIRECT_PRETEST_DENSITY,
    DIRECT_SEC_RELAYS,
    DIRECT_SAMPLING,
    DIRECT_THRESHOLD,
    SAMPLING_RAYS_COUNT,
    IRRADIANCE_CALC,
];

/// rcontrib parameters, used for the sun matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RcontribParameters {
    options: ParameterSet,
}

impl RcontribParameters {
    pub fn new() -> Self {
        Self::without_options()
    }
}

impl Default for RcontribParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl HasOptions for RcontribParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("rcontrib parameters", SPECS),
        }
    }
}

impl AmbientOptions for RcontribParameters {}
impl DirectOptions for RcontribParameters {}
impl ContributionOptions for RcontribParameters {}
