use anyhow::Result;

use super::flags::*;
use super::option::{OptionSpec, ParameterSet};
use super::{HasOptions, count};

const SPECS: &[OptionSpec] = &[
    TIME_STEPS,
    SUPPRESS_HEADER,
    INPUT_DATA_FORMAT,
    OUTPUT_DATA_FORMAT,
];

/// Numeric encoding of matrix data read or written by dctimestep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ::clap::ValueEnum)]
pub enum DataFormat {
    #[value(alias = "a")]
    Ascii,
    #[value(alias = "f")]
    Float,
    #[value(alias = "d")]
    Double,
    /// RGBE pictures. Output only.
    #[value(alias = "c")]
    Rgbe,
    /// Input only: take the format from the file header.
    #[value(alias = "h")]
    Header,
}

impl DataFormat {
    pub fn code(self) -> &'static str {
        match self {
            DataFormat::Ascii => "a",
            DataFormat::Float => "f",
            DataFormat::Double => "d",
            DataFormat::Rgbe => "c",
            DataFormat::Header => "h",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" => Some(DataFormat::Ascii),
            "f" => Some(DataFormat::Float),
            "d" => Some(DataFormat::Double),
            "c" => Some(DataFormat::Rgbe),
            "h" => Some(DataFormat::Header),
            _ => None,
        }
    }
}

/// dctimestep parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DctimestepParameters {
    options: ParameterSet,
}

impl DctimestepParameters {
    pub fn new() -> Self {
        Self::without_options()
    }

    pub fn time_steps(&self) -> Option<u32> {
        count(&self.options, TIME_STEPS.name)
    }

    /// Number of time steps (`-n`). Needed when the sky vector is read from
    /// standard input.
    pub fn set_time_steps(&mut self, value: u32) -> Result<()> {
        self.options.set(TIME_STEPS.name, value)
    }

    pub fn suppress_header(&self) -> Option<bool> {
        self.options.boolean(SUPPRESS_HEADER.name)
    }

    pub fn set_suppress_header(&mut self, value: bool) -> Result<()> {
        self.options.set(SUPPRESS_HEADER.name, value)
    }

    pub fn input_data_format(&self) -> Option<DataFormat> {
        self.options
            .text(INPUT_DATA_FORMAT.name)
            .and_then(DataFormat::from_code)
    }

    /// `-if`, `-id` or `-ih`. ASCII and RGBE are rejected.
    pub fn set_input_data_format(&mut self, format: DataFormat) -> Result<()> {
        self.options.set(INPUT_DATA_FORMAT.name, format.code())
    }

    pub fn output_data_format(&self) -> Option<DataFormat> {
        self.options
            .text(OUTPUT_DATA_FORMAT.name)
            .and_then(DataFormat::from_code)
    }

    /// `-oa`, `-of`, `-od` or `-oc`. Header is rejected.
    pub fn set_output_data_format(&mut self, format: DataFormat) -> Result<()> {
        self.options.set(OUTPUT_DATA_FORMAT.name, format.code())
    }
}

impl Default for DctimestepParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl HasOptions for DctimestepParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("dctimestep parameters", SPECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FromFlags, RadianceParameters};

    #[test]
    fn test_data_format_value_names() {
        use clap::ValueEnum;
        assert_eq!(DataFormat::from_str("float", true), Ok(DataFormat::Float));
        assert_eq!(DataFormat::from_str("c", true), Ok(DataFormat::Rgbe));
        assert!(DataFormat::from_str("x", true).is_err());
        for format in DataFormat::value_variants() {
            assert_eq!(DataFormat::from_code(format.code()), Some(*format));
        }
    }

    #[test]
    fn test_render() -> Result<()> {
        let mut p = DctimestepParameters::new();
        p.set_output_data_format(DataFormat::Float)?;
        p.set_time_steps(8760)?;
        p.set_suppress_header(true)?;
        assert_eq!(p.render_flags(), "-n 8760 -h -of");
        Ok(())
    }

    #[test]
    fn test_invalid_format_direction() {
        let mut p = DctimestepParameters::new();
        assert!(p.set_input_data_format(DataFormat::Ascii).is_err());
        assert!(p.set_output_data_format(DataFormat::Header).is_err());
        assert_eq!(p.render_flags(), "");
    }

    #[test]
    fn test_time_steps_must_be_positive() {
        let mut p = DctimestepParameters::new();
        assert!(p.set_time_steps(0).is_err());
    }

    #[test]
    fn test_from_flags_roundtrip() -> Result<()> {
        let parsed = DctimestepParameters::from_flags("-n 24 -ih -od")?;
        assert_eq!(parsed.time_steps(), Some(24));
        assert_eq!(parsed.input_data_format(), Some(DataFormat::Header));
        assert_eq!(parsed.output_data_format(), Some(DataFormat::Double));
        assert_eq!(parsed.suppress_header(), None);
        assert_eq!(parsed.render_flags(), "-n 24 -ih -od");
        Ok(())
    }
}
