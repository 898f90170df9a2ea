use std::path::PathBuf;

use anyhow::Result;

use super::{CommandSpec, RadianceCommand, required};
use crate::config::RadianceConfig;
use crate::params::{FalsecolorParameters, RadianceParameters};

/// falsecolor: maps a luminance or illuminance picture to a color scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Falsecolor {
    pub input_image: PathBuf,
    pub parameters: FalsecolorParameters,
    pub output_file: Option<PathBuf>,
}

impl Falsecolor {
    pub fn new(input_image: impl Into<PathBuf>) -> Self {
        Self {
            input_image: input_image.into(),
            parameters: FalsecolorParameters::default(),
            output_file: None,
        }
    }

    pub fn with_parameters(mut self, parameters: FalsecolorParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(file.into());
        self
    }
}

impl RadianceCommand for Falsecolor {
    fn program(&self) -> &'static str {
        "falsecolor"
    }

    fn assemble(&self, config: &RadianceConfig) -> Result<CommandSpec> {
        let image = required(self.program(), "input image", &self.input_image)?;
        let mut spec = CommandSpec::new(config.executable(self.program()));
        spec.arg(self.parameters.render_flags());
        spec.arg("-i");
        spec.input_arg(image);
        spec.stdout = self.output_file.clone().filter(|p| !p.as_os_str().is_empty());
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadError;
    use tempfile::tempdir;

    #[test]
    fn test_falsecolor_command() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("office.hdr"), "")?;
        let config = RadianceConfig::new()
            .with_radbin_path("/opt/radiance/bin")
            .with_base_dir(dir.path());

        let mut params = FalsecolorParameters::new();
        params.set_scale(2000.0)?;
        params.set_label("Lux")?;
        params.set_contour_lines(true)?;
        let cmd = Falsecolor::new("office.hdr")
            .with_parameters(params)
            .with_output_file("office_fc.hdr");
        assert_eq!(
            cmd.to_rad_string(&config)?,
            "/opt/radiance/bin/falsecolor -s 2000 -l Lux -cl -i office.hdr > office_fc.hdr"
        );
        Ok(())
    }

    #[test]
    fn test_empty_image_rejected() {
        let dir = tempdir().unwrap();
        let config = RadianceConfig::new().with_base_dir(dir.path());
        let err = Falsecolor::new("").to_rad_string(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::IncompleteInputs {
                mode: "falsecolor",
                missing: vec!["input image"],
            })
        );
    }

    #[test]
    fn test_missing_image() {
        let dir = tempdir().unwrap();
        let config = RadianceConfig::new().with_base_dir(dir.path());
        let err = Falsecolor::new("office.hdr").build(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RadError>(),
            Some(RadError::MissingInputFile { .. })
        ));
    }
}
