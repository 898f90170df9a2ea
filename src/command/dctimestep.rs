use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{CommandSpec, OutputTarget, RadianceCommand, non_blank, non_empty, normspace};
use crate::config::RadianceConfig;
use crate::error::RadError;
use crate::params::{DctimestepParameters, RadianceParameters};

const THREE_PHASE: &str = "the 3-phase method (vmatrix, tmatrix, dmatrix)";
const DAYLIGHT_COEFFICIENTS: &str = "daylight coefficients";

/// dctimestep: multiplies a daylight coefficient or three-phase matrix chain
/// by a sky vector.
///
/// Exactly one computation mode must be supplied: either all of
/// `vmatrix_spec`, `tmatrix_file` and `dmatrix_file`, or `daylight_coeff_spec`.
/// Empty strings count as absent.
///
/// Supplying neither mode is an error ([`RadError::NoComputationMode`]).
/// Older recipe tooling silently emitted a bare `dctimestep <sky>` in that
/// case; this builder refuses instead of guessing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dctimestep {
    /// View matrix file or file name pattern.
    pub vmatrix_spec: Option<String>,
    pub tmatrix_file: Option<PathBuf>,
    pub dmatrix_file: Option<PathBuf>,
    /// Daylight coefficient matrix or image pattern.
    pub daylight_coeff_spec: Option<String>,
    pub sky_vector_file: Option<PathBuf>,
    pub parameters: DctimestepParameters,
    pub output: OutputTarget,
}

enum Mode<'a> {
    ThreePhase {
        vmatrix: &'a str,
        tmatrix: &'a Path,
        dmatrix: &'a Path,
    },
    DaylightCoefficient {
        spec: &'a str,
    },
}

impl Dctimestep {
    pub fn three_phase(
        vmatrix_spec: impl Into<String>,
        tmatrix_file: impl Into<PathBuf>,
        dmatrix_file: impl Into<PathBuf>,
        sky_vector_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vmatrix_spec: Some(vmatrix_spec.into()),
            tmatrix_file: Some(tmatrix_file.into()),
            dmatrix_file: Some(dmatrix_file.into()),
            sky_vector_file: Some(sky_vector_file.into()),
            ..Self::default()
        }
    }

    pub fn daylight_coefficient(
        daylight_coeff_spec: impl Into<String>,
        sky_vector_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            daylight_coeff_spec: Some(daylight_coeff_spec.into()),
            sky_vector_file: Some(sky_vector_file.into()),
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, parameters: DctimestepParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    fn mode(&self) -> Result<Mode<'_>> {
        let vmatrix = non_blank(&self.vmatrix_spec);
        let tmatrix = non_empty(&self.tmatrix_file);
        let dmatrix = non_empty(&self.dmatrix_file);
        let dc = non_blank(&self.daylight_coeff_spec);

        let any_three_phase = vmatrix.is_some() || tmatrix.is_some() || dmatrix.is_some();
        if dc.is_some() && any_three_phase {
            return Err(RadError::InputConflict {
                first: THREE_PHASE,
                second: DAYLIGHT_COEFFICIENTS,
            }
            .into());
        }

        if let Some(spec) = dc {
            return Ok(Mode::DaylightCoefficient { spec });
        }

        match (vmatrix, tmatrix, dmatrix) {
            (Some(vmatrix), Some(tmatrix), Some(dmatrix)) => Ok(Mode::ThreePhase {
                vmatrix,
                tmatrix,
                dmatrix,
            }),
            (None, None, None) => Err(RadError::NoComputationMode {
                program: "dctimestep",
            }
            .into()),
            _ => {
                let missing = [
                    ("vmatrix", vmatrix.is_none()),
                    ("tmatrix", tmatrix.is_none()),
                    ("dmatrix", dmatrix.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(RadError::IncompleteInputs {
                    mode: THREE_PHASE,
                    missing,
                }
                .into())
            }
        }
    }
}

impl RadianceCommand for Dctimestep {
    fn program(&self) -> &'static str {
        "dctimestep"
    }

    fn assemble(&self, config: &RadianceConfig) -> Result<CommandSpec> {
        let mode = self.mode()?;
        let mut spec = CommandSpec::new(config.executable(self.program()));

        spec.arg(self.parameters.render_flags());
        if let Some(flag) = self.output.format_flag() {
            spec.arg(flag);
        }

        match mode {
            Mode::ThreePhase {
                vmatrix,
                tmatrix,
                dmatrix,
            } => {
                // The view matrix may be a per-view file pattern, so it is not
                // checked on disk.
                spec.arg(normspace(vmatrix));
                spec.input_arg(tmatrix);
                spec.input_arg(dmatrix);
            }
            Mode::DaylightCoefficient { spec: dc } => {
                spec.arg(normspace(dc));
            }
        }

        if let Some(sky) = non_empty(&self.sky_vector_file) {
            spec.input_arg(sky);
        }
        spec.stdout = self.output.redirect();
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DataFormat;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn workspace(files: &[&str]) -> Result<(TempDir, RadianceConfig)> {
        let dir = tempdir()?;
        for name in files {
            fs::write(dir.path().join(name), "")?;
        }
        let config = RadianceConfig::new().with_base_dir(dir.path());
        Ok((dir, config))
    }

    fn conflict(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<RadError>(),
            Some(RadError::InputConflict { .. })
        )
    }

    #[test]
    fn test_three_phase_with_pattern() -> Result<()> {
        let (_dir, config) = workspace(&["blinds.xml", "daylight.dmx", "sky.vec"])?;
        let mut params = DctimestepParameters::new();
        params.set_time_steps(8760)?;
        params.set_output_data_format(DataFormat::Float)?;
        let cmd = Dctimestep::three_phase("views/view%03d.vmx", "blinds.xml", "daylight.dmx", "sky.vec")
            .with_parameters(params)
            .with_output(OutputTarget::pattern("hdr/%04d.hdr"));

        let rendered = cmd.to_rad_string(&config)?;
        assert_eq!(
            rendered,
            "dctimestep -n 8760 -of -o hdr/%04d.hdr views/view%03d.vmx blinds.xml daylight.dmx sky.vec"
        );
        assert!(!rendered.contains('>'));
        Ok(())
    }

    #[test]
    fn test_output_file_is_redirect_suffix() -> Result<()> {
        let (_dir, config) = workspace(&["dc.mtx", "sky.vec"])?;
        let cmd = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec")
            .with_output(OutputTarget::file("results/grid.ill"));
        let rendered = cmd.to_rad_string(&config)?;
        assert_eq!(rendered, "dctimestep dc.mtx sky.vec > results/grid.ill");
        assert!(rendered.ends_with("> results/grid.ill"));
        assert!(!rendered.contains("-o "));
        Ok(())
    }

    #[test]
    fn test_no_output_clause() -> Result<()> {
        let (_dir, config) = workspace(&["dc.mtx", "sky.vec"])?;
        let rendered = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec").to_rad_string(&config)?;
        assert!(!rendered.contains('>'));
        assert!(!rendered.contains("-o"));
        Ok(())
    }

    #[test]
    fn test_executable_from_radbin() -> Result<()> {
        let (_dir, config) = workspace(&["dc.mtx", "sky.vec"])?;
        let config = config.with_radbin_path("/usr/local/radiance/bin");
        let spec = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec").build(&config)?;
        assert_eq!(
            spec.executable,
            PathBuf::from("/usr/local/radiance/bin/dctimestep")
        );
        Ok(())
    }

    #[test]
    fn test_both_modes_conflict() -> Result<()> {
        let (_dir, config) = workspace(&["t.xml", "d.dmx", "dc.mtx", "sky.vec"])?;
        let mut cmd = Dctimestep::three_phase("v.vmx", "t.xml", "d.dmx", "sky.vec");
        cmd.daylight_coeff_spec = Some("dc.mtx".to_string());
        let err = cmd.to_rad_string(&config).unwrap_err();
        assert!(conflict(&err));
        let message = err.to_string();
        assert!(message.contains("3-phase"));
        assert!(message.contains("daylight coefficients"));
        Ok(())
    }

    #[test]
    fn test_conflict_is_raised_before_file_checks() {
        // Nothing exists on disk, the conflict still wins.
        let config = RadianceConfig::new();
        let mut cmd = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec");
        cmd.tmatrix_file = Some(PathBuf::from("t.xml"));
        let err = cmd.build(&config).unwrap_err();
        assert!(conflict(&err));
    }

    #[test]
    fn test_empty_inputs_count_as_absent() -> Result<()> {
        let (_dir, config) = workspace(&["dc.mtx", "sky.vec"])?;
        let mut cmd = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec");
        cmd.vmatrix_spec = Some(String::new());
        cmd.tmatrix_file = Some(PathBuf::new());
        assert_eq!(cmd.to_rad_string(&config)?, "dctimestep dc.mtx sky.vec");
        Ok(())
    }

    #[test]
    fn test_partial_three_phase() {
        let cmd = Dctimestep {
            vmatrix_spec: Some("v.vmx".to_string()),
            dmatrix_file: Some(PathBuf::from("d.dmx")),
            ..Dctimestep::default()
        };
        let err = cmd.assemble(&RadianceConfig::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::IncompleteInputs {
                mode: THREE_PHASE,
                missing: vec!["tmatrix"],
            })
        );
    }

    #[test]
    fn test_no_mode_is_an_error() {
        let cmd = Dctimestep {
            sky_vector_file: Some(PathBuf::from("sky.vec")),
            ..Dctimestep::default()
        };
        let err = cmd.assemble(&RadianceConfig::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::NoComputationMode {
                program: "dctimestep"
            })
        );
    }

    #[test]
    fn test_missing_dmatrix_is_named() -> Result<()> {
        let (dir, config) = workspace(&["t.xml", "sky.vec"])?;
        let cmd = Dctimestep::three_phase("v.vmx", "t.xml", "daylight.dmx", "sky.vec")
            .with_output(OutputTarget::file("out.ill"));
        let err = cmd.to_rad_string(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RadError>(),
            Some(&RadError::MissingInputFile {
                path: dir.path().join("daylight.dmx")
            })
        );
        assert!(err.to_string().contains("daylight.dmx"));
        Ok(())
    }

    #[test]
    fn test_declared_inputs() -> Result<()> {
        let (_dir, config) = workspace(&["t.xml", "d.dmx", "sky.vec"])?;
        let spec = Dctimestep::three_phase("v%03d.vmx", "t.xml", "d.dmx", "sky.vec").build(&config)?;
        assert_eq!(
            spec.input_files,
            vec![
                PathBuf::from("t.xml"),
                PathBuf::from("d.dmx"),
                PathBuf::from("sky.vec")
            ]
        );

        let spec = Dctimestep::daylight_coefficient("dc.mtx", "sky.vec").assemble(&config)?;
        assert_eq!(spec.input_files, vec![PathBuf::from("sky.vec")]);
        Ok(())
    }

    #[test]
    fn test_paths_with_spaces_are_quoted() -> Result<()> {
        let (_dir, config) = workspace(&["my sky.vec"])?;
        let rendered = Dctimestep::daylight_coefficient("dc.mtx", "my sky.vec").to_rad_string(&config)?;
        assert_eq!(rendered, "dctimestep dc.mtx \"my sky.vec\"");
        Ok(())
    }
}
