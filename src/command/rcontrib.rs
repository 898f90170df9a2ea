use std::path::PathBuf;

use anyhow::Result;

use super::{CommandSpec, OutputTarget, RadianceCommand, non_empty, normspace, required};
use crate::config::RadianceConfig;
use crate::error::RadError;
use crate::params::{RadianceParameters, RcontribParameters};

/// rcontrib: sun matrix contributions for a set of sensor points.
///
/// Points are read from standard input. At least one modifier must be given,
/// either through a modifier list file (`-M`) or by name (`-m`).
#[derive(Debug, Clone, PartialEq)]
pub struct Rcontrib {
    pub octree_file: PathBuf,
    pub points_file: PathBuf,
    pub modifier_file: Option<PathBuf>,
    pub modifiers: Vec<String>,
    pub parameters: RcontribParameters,
    pub output: OutputTarget,
}

impl Rcontrib {
    pub fn new(octree_file: impl Into<PathBuf>, points_file: impl Into<PathBuf>) -> Self {
        Self {
            octree_file: octree_file.into(),
            points_file: points_file.into(),
            modifier_file: None,
            modifiers: Vec::new(),
            parameters: RcontribParameters::default(),
            output: OutputTarget::Stdout,
        }
    }

    pub fn with_modifier_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.modifier_file = Some(file.into());
        self
    }

    pub fn with_modifier(mut self, name: impl Into<String>) -> Self {
        self.modifiers.push(name.into());
        self
    }

    pub fn with_parameters(mut self, parameters: RcontribParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}

impl RadianceCommand for Rcontrib {
    fn program(&self) -> &'static str {
        "rcontrib"
    }

    fn assemble(&self, config: &RadianceConfig) -> Result<CommandSpec> {
        let octree = required(self.program(), "octree", &self.octree_file)?;
        let points = required(self.program(), "points", &self.points_file)?;
        let modifier_file = non_empty(&self.modifier_file);
        let modifiers: Vec<&str> = self
            .modifiers
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();
        if modifier_file.is_none() && modifiers.is_empty() {
            return Err(RadError::IncompleteInputs {
                mode: "rcontrib",
                missing: vec!["modifiers"],
            }
            .into());
        }

        let mut spec = CommandSpec::new(config.executable(self.program()));
        spec.arg(self.parameters.render_flags());
        if let Some(flag) = self.output.format_flag() {
            spec.arg(flag);
        }

        if let Some(file) = modifier_file {
            spec.arg("-M");
            spec.input_arg(file);
        }
        for name in modifiers {
            spec.arg(format!("-m {}", normspace(name)));
        }

        spec.input_arg(octree);
        spec.input(points);
        spec.stdin = Some(points.to_path_buf());
        spec.stdout = self.output.redirect();
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::SUN_DEFAULTS;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sun_matrix_command() -> Result<()> {
        let dir = tempdir()?;
        for name in ["suns.mod", "suns.oct", "grid.pts"] {
            fs::write(dir.path().join(name), "")?;
        }
        let config = RadianceConfig::new().with_base_dir(dir.path());

        let mut params = RcontribParameters::new();
        SUN_DEFAULTS.apply(&mut params)?;
        let cmd = Rcontrib::new("suns.oct", "grid.pts")
            .with_modifier_file("suns.mod")
            .with_parameters(params)
            .with_output(OutputTarget::file("sun.ill"));
        assert_eq!(
            cmd.to_rad_string(&config)?,
            "rcontrib -ab 0 -dc 1 -dj 0 -dt 0 -M suns.mod suns.oct < grid.pts > sun.ill"
        );
        Ok(())
    }

    #[test]
    fn test_pattern_output_and_named_modifiers() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("suns.oct"), "")?;
        fs::write(dir.path().join("view.pts"), "")?;
        let config = RadianceConfig::new().with_base_dir(dir.path());

        let cmd = Rcontrib::new("suns.oct", "view.pts")
            .with_modifier("solar1")
            .with_modifier("solar2")
            .with_output(OutputTarget::pattern("sun/%03d.hdr"));
        let rendered = cmd.to_rad_string(&config)?;
        assert_eq!(
            rendered,
            "rcontrib -o sun/%03d.hdr -m solar1 -m solar2 suns.oct < view.pts"
        );
        assert!(!rendered.contains('>'));
        Ok(())
    }

    #[test]
    fn test_empty_octree_or_points_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("grid.pts"), "")?;
        fs::write(dir.path().join("suns.oct"), "")?;
        let config = RadianceConfig::new().with_base_dir(dir.path());

        let err = Rcontrib::new("", "grid.pts")
            .with_modifier("solar")
            .to_rad_string(&config)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::IncompleteInputs {
                mode: "rcontrib",
                missing: vec!["octree"],
            })
        );

        let err = Rcontrib::new("suns.oct", "")
            .with_modifier("solar")
            .to_rad_string(&config)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::IncompleteInputs {
                mode: "rcontrib",
                missing: vec!["points"],
            })
        );
        Ok(())
    }

    #[test]
    fn test_requires_modifiers() {
        let cmd = Rcontrib::new("suns.oct", "grid.pts").with_modifier(" ");
        let err = cmd.assemble(&RadianceConfig::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::IncompleteInputs {
                mode: "rcontrib",
                missing: vec!["modifiers"],
            })
        );
    }
}
