//! Catalogue of the Radiance options used by the parameter sets.
//!
//! Flag strings are the exact tokens the Radiance programs recognize.

use super::option::{OptionKind, OptionSpec};

const UNBOUNDED: f64 = f64::INFINITY;

// Ambient calculation
pub const AMBIENT_ACCURACY: OptionSpec =
    OptionSpec::new("ambient_accuracy", "aa", OptionKind::Float).with_range(0.0, 1.0);
pub const AMBIENT_BOUNCES: OptionSpec =
    OptionSpec::new("ambient_bounces", "ab", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const AMBIENT_DIVISIONS: OptionSpec =
    OptionSpec::new("ambient_divisions", "ad", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const AMBIENT_RESOLUTION: OptionSpec =
    OptionSpec::new("ambient_resolution", "ar", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const AMBIENT_SUPERSAMPLES: OptionSpec =
    OptionSpec::new("ambient_supersamples", "as", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const LIMIT_WEIGHT: OptionSpec =
    OptionSpec::new("limit_weight", "lw", OptionKind::Float).with_range(0.0, 1.0);

// Direct calculation
pub const DIRECT_CERTAINTY: OptionSpec =
    OptionSpec::new("direct_certainty", "dc", OptionKind::Float).with_range(0.0, 1.0);
pub const DIRECT_JITTER: OptionSpec =
    OptionSpec::new("direct_jitter", "dj", OptionKind::Float).with_range(0.0, 1.0);
pub const DIRECT_PRETEST_DENSITY: OptionSpec =
    OptionSpec::new("direct_pretest_density", "dp", OptionKind::Integer)
        .with_range(0.0, UNBOUNDED);
pub const DIRECT_SEC_RELAYS: OptionSpec =
    OptionSpec::new("direct_sec_relays", "dr", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const DIRECT_SAMPLING: OptionSpec =
    OptionSpec::new("direct_sampling", "ds", OptionKind::Float).with_range(0.0, UNBOUNDED);
pub const DIRECT_THRESHOLD: OptionSpec =
    OptionSpec::new("direct_threshold", "dt", OptionKind::Float).with_range(0.0, 1.0);

// Specular and reflection limits
pub const SPECULAR_THRESHOLD: OptionSpec =
    OptionSpec::new("specular_threshold", "st", OptionKind::Float).with_range(0.0, 1.0);
pub const SPECULAR_SAMPLING: OptionSpec =
    OptionSpec::new("specular_sampling", "ss", OptionKind::Float).with_range(0.0, UNBOUNDED);
// Negative values switch Radiance to Russian roulette, so no lower bound.
pub const LIMIT_REFLECTIONS: OptionSpec =
    OptionSpec::new("limit_reflections", "lr", OptionKind::Integer);

// Contribution calculation (rfluxmtx / rcontrib)
pub const SAMPLING_RAYS_COUNT: OptionSpec =
    OptionSpec::new("sampling_rays_count", "c", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const IRRADIANCE_CALC: OptionSpec = OptionSpec::new("irradiance_calc", "I", OptionKind::Boolean);

// Image rendering (rpict)
pub const PIXEL_SAMPLING: OptionSpec =
    OptionSpec::new("pixel_sampling", "ps", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const PIXEL_THRESHOLD: OptionSpec =
    OptionSpec::new("pixel_threshold", "pt", OptionKind::Float).with_range(0.0, UNBOUNDED);
pub const PIXEL_JITTER: OptionSpec =
    OptionSpec::new("pixel_jitter", "pj", OptionKind::Float).with_range(0.0, 1.0);
pub const X_RESOLUTION: OptionSpec =
    OptionSpec::new("x_resolution", "x", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const Y_RESOLUTION: OptionSpec =
    OptionSpec::new("y_resolution", "y", OptionKind::Integer).with_range(1.0, UNBOUNDED);

// dctimestep
pub const TIME_STEPS: OptionSpec =
    OptionSpec::new("time_steps", "n", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const SUPPRESS_HEADER: OptionSpec =
    OptionSpec::new("suppress_header", "h", OptionKind::Boolean);
pub const INPUT_DATA_FORMAT: OptionSpec =
    OptionSpec::new("input_data_format", "i", OptionKind::Choice(&["f", "d", "h"]));
pub const OUTPUT_DATA_FORMAT: OptionSpec =
    OptionSpec::new("output_data_format", "o", OptionKind::Choice(&["a", "f", "d", "c"]));

// falsecolor
pub const SCALE: OptionSpec =
    OptionSpec::new("scale", "s", OptionKind::Float).with_range(0.0, UNBOUNDED);
pub const DIVISIONS: OptionSpec =
    OptionSpec::new("divisions", "n", OptionKind::Integer).with_range(1.0, UNBOUNDED);
pub const LABEL: OptionSpec = OptionSpec::new("label", "l", OptionKind::Text);
pub const LEGEND_WIDTH: OptionSpec =
    OptionSpec::new("legend_width", "lw", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const LEGEND_HEIGHT: OptionSpec =
    OptionSpec::new("legend_height", "lh", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const LOG_DECADES: OptionSpec =
    OptionSpec::new("log_decades", "log", OptionKind::Integer).with_range(0.0, UNBOUNDED);
pub const CONTOUR_LINES: OptionSpec = OptionSpec::new("contour_lines", "cl", OptionKind::Boolean);
pub const CONTOUR_BANDS: OptionSpec = OptionSpec::new("contour_bands", "cb", OptionKind::Boolean);
pub const POSTERIZE: OptionSpec = OptionSpec::new("posterize", "cp", OptionKind::Boolean);
pub const EXTREMA: OptionSpec = OptionSpec::new("extrema", "e", OptionKind::Boolean);
