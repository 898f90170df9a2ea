use std::path::PathBuf;

use anyhow::Result;

use super::{CommandSpec, RadianceCommand, non_empty, required};
use crate::config::RadianceConfig;
use crate::error::RadError;
use crate::params::{RadianceParameters, RfluxmtxParameters};

/// What sends rays into the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// Sensor points read from standard input (`-` plus `< points`).
    Points(PathBuf),
    /// A sender surface file with its own `#@rfluxmtx` header.
    Surface(PathBuf),
}

/// rfluxmtx: computes a view or daylight matrix between a sender and a
/// receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Rfluxmtx {
    pub sender: Sender,
    pub receiver_file: PathBuf,
    pub octree_file: Option<PathBuf>,
    pub scene_files: Vec<PathBuf>,
    pub parameters: RfluxmtxParameters,
    pub output_file: Option<PathBuf>,
}

impl Rfluxmtx {
    pub fn new(sender: Sender, receiver_file: impl Into<PathBuf>) -> Self {
        Self {
            sender,
            receiver_file: receiver_file.into(),
            octree_file: None,
            scene_files: Vec::new(),
            parameters: RfluxmtxParameters::default(),
            output_file: None,
        }
    }

    pub fn with_octree(mut self, octree: impl Into<PathBuf>) -> Self {
        self.octree_file = Some(octree.into());
        self
    }

    pub fn with_scene_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.scene_files.push(file.into());
        self
    }

    pub fn with_parameters(mut self, parameters: RfluxmtxParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(file.into());
        self
    }
}

impl RadianceCommand for Rfluxmtx {
    fn program(&self) -> &'static str {
        "rfluxmtx"
    }

    fn assemble(&self, config: &RadianceConfig) -> Result<CommandSpec> {
        let receiver = required(self.program(), "receiver", &self.receiver_file)?;
        let octree = non_empty(&self.octree_file);
        let scenes: Vec<&PathBuf> = self
            .scene_files
            .iter()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if octree.is_none() && scenes.is_empty() {
            return Err(RadError::IncompleteInputs {
                mode: "rfluxmtx",
                missing: vec!["octree or scene files"],
            }
            .into());
        }

        let mut spec = CommandSpec::new(config.executable(self.program()));
        spec.arg(self.parameters.render_flags());

        match &self.sender {
            Sender::Points(points) => {
                let points = required(self.program(), "sender points", points)?;
                spec.arg("-");
                spec.input(points);
                spec.stdin = Some(points.to_path_buf());
            }
            Sender::Surface(surface) => {
                spec.input_arg(required(self.program(), "sender surface", surface)?);
            }
        }
        spec.input_arg(receiver);

        if let Some(octree) = octree {
            spec.arg("-i");
            spec.input_arg(octree);
        }
        for scene in scenes {
            spec.input_arg(scene);
        }

        spec.stdout = self.output_file.clone().filter(|p| !p.as_os_str().is_empty());
        Ok(spec)
    }
}
