//! Typed parameter sets for the Radiance programs.
//!
//! Each variant wraps a [`ParameterSet`] built over a fixed option table and
//! renders itself to a flag string without knowing about any other set.
//! Command builders only see the [`RadianceParameters`] trait.

pub mod dctimestep;
pub mod falsecolor;
pub mod flags;
pub mod gridbased;
pub mod imagebased;
pub mod option;
pub mod rcontrib;
pub mod rfluxmtx;

use anyhow::Result;

pub use dctimestep::{DataFormat, DctimestepParameters};
pub use falsecolor::FalsecolorParameters;
pub use gridbased::GridBasedParameters;
pub use imagebased::ImageBasedParameters;
pub use option::{OptionKind, OptionSpec, OptionValue, ParameterSet};
pub use rcontrib::RcontribParameters;
pub use rfluxmtx::RfluxmtxParameters;

use flags::*;

/// Anything that can render itself into command-line flags.
pub trait RadianceParameters {
    /// Human-readable name used in messages and logs.
    fn name(&self) -> &'static str;

    /// Space separated flags. Empty when nothing is set.
    fn render_flags(&self) -> String;
}

/// Reconstructs a parameter set from a rendered flag string.
pub trait FromFlags: Sized {
    fn from_flags(flags: &str) -> Result<Self>;
}

/// Access to the option storage behind a parameter variant.
pub trait HasOptions {
    fn options(&self) -> &ParameterSet;

    fn options_mut(&mut self) -> &mut ParameterSet;

    /// Variant with no option set.
    fn without_options() -> Self
    where
        Self: Sized;

    /// Sets an option by name. Unknown names and invalid values are rejected.
    fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()>
    where
        Self: Sized,
    {
        self.options_mut().set(name, value)
    }

    /// Sets an option by name from its textual form.
    fn set_option_str(&mut self, name: &str, raw: &str) -> Result<()> {
        self.options_mut().set_from_str(name, raw)
    }
}

impl<T: HasOptions> RadianceParameters for T {
    fn name(&self) -> &'static str {
        self.options().label()
    }

    fn render_flags(&self) -> String {
        self.options().render()
    }
}

impl<T: HasOptions> FromFlags for T {
    fn from_flags(flags: &str) -> Result<Self> {
        let mut params = T::without_options();
        params.options_mut().parse_flags(flags)?;
        Ok(params)
    }
}

fn count(set: &ParameterSet, name: &str) -> Option<u32> {
    set.integer(name).and_then(|v| u32::try_from(v).ok())
}

/// Ambient calculation options (`-aa -ab -ad -ar -as -lw`).
pub trait AmbientOptions: HasOptions {
    fn ambient_accuracy(&self) -> Option<f64> {
        self.options().float(AMBIENT_ACCURACY.name)
    }

    fn set_ambient_accuracy(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(AMBIENT_ACCURACY.name, value)
    }

    fn ambient_bounces(&self) -> Option<u32> {
        count(self.options(), AMBIENT_BOUNCES.name)
    }

    fn set_ambient_bounces(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(AMBIENT_BOUNCES.name, value)
    }

    fn ambient_divisions(&self) -> Option<u32> {
        count(self.options(), AMBIENT_DIVISIONS.name)
    }

    fn set_ambient_divisions(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(AMBIENT_DIVISIONS.name, value)
    }

    fn ambient_resolution(&self) -> Option<u32> {
        count(self.options(), AMBIENT_RESOLUTION.name)
    }

    fn set_ambient_resolution(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(AMBIENT_RESOLUTION.name, value)
    }

    fn ambient_supersamples(&self) -> Option<u32> {
        count(self.options(), AMBIENT_SUPERSAMPLES.name)
    }

    fn set_ambient_supersamples(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(AMBIENT_SUPERSAMPLES.name, value)
    }

    fn limit_weight(&self) -> Option<f64> {
        self.options().float(LIMIT_WEIGHT.name)
    }

    fn set_limit_weight(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(LIMIT_WEIGHT.name, value)
    }
}

/// Direct calculation options (`-dc -dj -dp -dr -ds -dt`).
pub trait DirectOptions: HasOptions {
    fn direct_certainty(&self) -> Option<f64> {
        self.options().float(DIRECT_CERTAINTY.name)
    }

    fn set_direct_certainty(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(DIRECT_CERTAINTY.name, value)
    }

    fn direct_jitter(&self) -> Option<f64> {
        self.options().float(DIRECT_JITTER.name)
    }

    fn set_direct_jitter(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(DIRECT_JITTER.name, value)
    }

    fn direct_pretest_density(&self) -> Option<u32> {
        count(self.options(), DIRECT_PRETEST_DENSITY.name)
    }

    fn set_direct_pretest_density(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(DIRECT_PRETEST_DENSITY.name, value)
    }

    fn direct_sec_relays(&self) -> Option<u32> {
        count(self.options(), DIRECT_SEC_RELAYS.name)
    }

    fn set_direct_sec_relays(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(DIRECT_SEC_RELAYS.name, value)
    }

    fn direct_sampling(&self) -> Option<f64> {
        self.options().float(DIRECT_SAMPLING.name)
    }

    fn set_direct_sampling(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(DIRECT_SAMPLING.name, value)
    }

    fn direct_threshold(&self) -> Option<f64> {
        self.options().float(DIRECT_THRESHOLD.name)
    }

    fn set_direct_threshold(&mut self, value: f64) -> Result<()> {
        self.options_mut().set(DIRECT_THRESHOLD.name, value)
    }
}

/// Contribution coefficient options shared by rfluxmtx and rcontrib (`-c -I`).
pub trait ContributionOptions: HasOptions {
    fn sampling_rays_count(&self) -> Option<u32> {
        count(self.options(), SAMPLING_RAYS_COUNT.name)
    }

    fn set_sampling_rays_count(&mut self, value: u32) -> Result<()> {
        self.options_mut().set(SAMPLING_RAYS_COUNT.name, value)
    }

    fn irradiance_calc(&self) -> Option<bool> {
        self.options().boolean(IRRADIANCE_CALC.name)
    }

    fn set_irradiance_calc(&mut self, value: bool) -> Result<()> {
        self.options_mut().set(IRRADIANCE_CALC.name, value)
    }
}

/// Unwraps the result of applying one of the built-in tables.
///
/// The shipped tables stay within every option's declared range; an error
/// here means a table was edited without updating the option catalogue.
pub(crate) fn builtin<T>(table: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("built-in {table} rejected: {e}"),
    }
}

/// Per-tier value used by the quality-scaled constructors.
pub(crate) fn tiered<T: Copy>(quality: crate::Quality, values: [T; crate::Quality::COUNT]) -> T {
    values[quality.index()]
}
