//! Builders for Radiance command lines.
//!
//! A builder validates its inputs, assembles the tokens in the order the
//! target program expects, then checks that every declared input file exists.
//! No process is spawned here.

pub mod dctimestep;
pub mod falsecolor;
pub mod rcontrib;
pub mod rfluxmtx;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::RadianceConfig;
use crate::error::RadError;

pub use dctimestep::Dctimestep;
pub use falsecolor::Falsecolor;
pub use rcontrib::Rcontrib;
pub use rfluxmtx::{Rfluxmtx, Sender};

/// Where a program writes its results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Leave the program's default (usually standard output).
    #[default]
    Stdout,
    /// Redirect standard output to a file (`> path`).
    File(PathBuf),
    /// Output file name pattern passed to the program (`-o pattern`).
    Pattern(String),
}

impl OutputTarget {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        OutputTarget::File(path.into())
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        OutputTarget::Pattern(pattern.into())
    }

    /// `-o <pattern>` token, if any.
    fn format_flag(&self) -> Option<String> {
        match self {
            OutputTarget::Pattern(p) if !p.is_empty() => Some(format!("-o {}", normspace(p))),
            _ => None,
        }
    }

    fn redirect(&self) -> Option<PathBuf> {
        match self {
            OutputTarget::File(p) if !p.as_os_str().is_empty() => Some(p.clone()),
            _ => None,
        }
    }
}

/// One assembled invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub executable: PathBuf,
    /// Rendered argument groups, in command-line order.
    pub arguments: Vec<String>,
    /// Files that must exist before the program runs.
    pub input_files: Vec<PathBuf>,
    /// File fed to standard input (`< path`).
    pub stdin: Option<PathBuf>,
    /// File standard output is redirected to (`> path`).
    pub stdout: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(executable: PathBuf) -> Self {
        Self {
            executable,
            arguments: Vec::new(),
            input_files: Vec::new(),
            stdin: None,
            stdout: None,
        }
    }

    /// Appends an argument group. Empty groups are skipped.
    pub fn arg(&mut self, token: impl Into<String>) -> &mut Self {
        let token = token.into();
        if !token.trim().is_empty() {
            self.arguments.push(token);
        }
        self
    }

    /// Appends a path argument and declares it as an input.
    pub fn input_arg(&mut self, path: &Path) -> &mut Self {
        self.arg(normspace(path.display()));
        self.input(path)
    }

    /// Declares an input file without adding it to the arguments.
    pub fn input(&mut self, path: &Path) -> &mut Self {
        self.input_files.push(path.to_path_buf());
        self
    }

    /// Verifies that every declared input exists, relative paths being
    /// resolved against the configured base directory.
    pub fn check_input_files(&self, config: &RadianceConfig) -> Result<()> {
        for path in &self.input_files {
            let resolved = config.resolve(path);
            log::debug!("Checking input file {}", resolved.display());
            if !resolved.exists() {
                return Err(RadError::MissingInputFile { path: resolved }.into());
            }
        }
        Ok(())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", normspace(self.executable.display()))?;
        for arg in &self.arguments {
            write!(f, " {arg}")?;
        }
        if let Some(stdin) = &self.stdin {
            write!(f, " < {}", normspace(stdin.display()))?;
        }
        if let Some(stdout) = &self.stdout {
            write!(f, " > {}", normspace(stdout.display()))?;
        }
        Ok(())
    }
}

/// A Radiance program invocation.
pub trait RadianceCommand {
    /// Program name, e.g. `dctimestep`.
    fn program(&self) -> &'static str;

    /// Validates the inputs and assembles the command. Does not touch the
    /// filesystem.
    fn assemble(&self, config: &RadianceConfig) -> Result<CommandSpec>;

    /// Assembles the command and checks its input files.
    fn build(&self, config: &RadianceConfig) -> Result<CommandSpec> {
        let spec = self.assemble(config)?;
        spec.check_input_files(config)?;
        log::debug!("Built {} command: {spec}", self.program());
        Ok(spec)
    }

    /// The command line as a single string.
    fn to_rad_string(&self, config: &RadianceConfig) -> Result<String> {
        Ok(self.build(config)?.to_string())
    }
}

/// Wraps a path or value in double quotes when it contains whitespace.
pub fn normspace(value: impl fmt::Display) -> String {
    let value = value.to_string();
    if value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value
    }
}

/// `Some(path)` only for a non-empty path.
pub(crate) fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}

/// Rejects an empty mandatory path, naming the `input` it stands for.
pub(crate) fn required<'a>(
    program: &'static str,
    input: &'static str,
    path: &'a Path,
) -> Result<&'a Path> {
    if path.as_os_str().is_empty() {
        return Err(RadError::IncompleteInputs {
            mode: program,
            missing: vec![input],
        }
        .into());
    }
    Ok(path)
}

/// `Some(value)` only for a non-blank string.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
