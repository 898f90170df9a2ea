use anyhow::Result;

use super::HasOptions;
use super::flags::*;
use super::option::{OptionSpec, ParameterSet};

const SPECS: &[OptionSpec] = &[
    SCALE,
    DIVISIONS,
    LABEL,
    LEGEND_WIDTH,
    LEGEND_HEIGHT,
    LOG_DECADES,
    CONTOUR_LINES,
    CONTOUR_BANDS,
    POSTERIZE,
    EXTREMA,
];

/// falsecolor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FalsecolorParameters {
    options: ParameterSet,
}

impl FalsecolorParameters {
    pub fn new() -> Self {
        Self::without_options()
    }

    /// Upper end of the legend scale (`-s`).
    pub fn set_scale(&mut self, value: f64) -> Result<()> {
        self.options.set(SCALE.name, value)
    }

    /// Number of contours/legend divisions (`-n`).
    pub fn set_divisions(&mut self, value: u32) -> Result<()> {
        self.options.set(DIVISIONS.name, value)
    }

    /// Legend label (`-l`), e.g. `cd/m2` or `Lux`.
    pub fn set_label(&mut self, value: &str) -> Result<()> {
        self.options.set(LABEL.name, value)
    }

    pub fn set_legend_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.options.set(LEGEND_WIDTH.name, width)?;
        self.options.set(LEGEND_HEIGHT.name, height)
    }

    /// Logarithmic scale over `decades` decades (`-log`).
    pub fn set_log_decades(&mut self, decades: u32) -> Result<()> {
        self.options.set(LOG_DECADES.name, decades)
    }

    pub fn set_contour_lines(&mut self, value: bool) -> Result<()> {
        self.options.set(CONTOUR_LINES.name, value)
    }

    pub fn set_contour_bands(&mut self, value: bool) -> Result<()> {
        self.options.set(CONTOUR_BANDS.name, value)
    }

    pub fn set_posterize(&mut self, value: bool) -> Result<()> {
        self.options.set(POSTERIZE.name, value)
    }

    /// Mark the image extrema (`-e`).
    pub fn set_extrema(&mut self, value: bool) -> Result<()> {
        self.options.set(EXTREMA.name, value)
    }
}

impl Default for FalsecolorParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl HasOptions for FalsecolorParameters {
    fn options(&self) -> &ParameterSet {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ParameterSet {
        &mut self.options
    }

    fn without_options() -> Self {
        Self {
            options: ParameterSet::new("falsecolor parameters", SPECS),
        }
    }
}
