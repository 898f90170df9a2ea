use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use radrecipe::params::{DataFormat, DctimestepParameters};
use radrecipe::{
    Dctimestep, OutputTarget, Quality, RadianceCommand, RadianceConfig,
    RecipeType, SimulationKind, select_defaults,
};

#[derive(Parser)]
#[command(author, version, about = "Radiance recipe defaults and command lines", long_about = None)]
struct Cli {
    /// JSON file with `radbin_path` and `base_dir`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default parameters of a recipe
    Defaults {
        /// low, medium or high (or 0, 1, 2)
        #[arg(long, default_value = "low")]
        quality: Quality,

        /// point-in-time, daylight-coefficient, three-phase or five-phase
        #[arg(long, default_value = "point-in-time")]
        recipe: RecipeType,

        /// Use rpict instead of rtrace parameters for point-in-time runs
        #[arg(long)]
        image: bool,
    },
    /// Print a dctimestep command line
    Dctimestep {
        #[arg(long)]
        vmatrix: Option<String>,

        #[arg(long)]
        tmatrix: Option<PathBuf>,

        #[arg(long)]
        dmatrix: Option<PathBuf>,

        /// Daylight coefficient matrix or image pattern
        #[arg(long)]
        dc: Option<String>,

        #[arg(long)]
        sky: Option<PathBuf>,

        /// Number of time steps (-n)
        #[arg(long)]
        time_steps: Option<u32>,

        /// Output data format
        #[arg(long, value_enum)]
        data_format: Option<DataFormat>,

        /// Redirect results to this file
        #[arg(long, conflicts_with = "output_pattern")]
        output: Option<PathBuf>,

        /// Output file name pattern (-o)
        #[arg(long)]
        output_pattern: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RadianceConfig::from_json_file(path)?,
        None => RadianceConfig::default(),
    };

    match cli.command {
        Commands::Defaults {
            quality,
            recipe,
            image,
        } => {
            let kind = if image {
                SimulationKind::ImageBased
            } else {
                SimulationKind::GridBased
            };
            let bundle = select_defaults(kind, quality, recipe);
            for (slot, params) in bundle.populated() {
                println!("{slot:<16} {}", params.render_flags());
            }
        }
        Commands::Dctimestep {
            vmatrix,
            tmatrix,
            dmatrix,
            dc,
            sky,
            time_steps,
            data_format,
            output,
            output_pattern,
        } => {
            let mut parameters = DctimestepParameters::new();
            if let Some(n) = time_steps {
                parameters.set_time_steps(n)?;
            }
            if let Some(format) = data_format {
                parameters.set_output_data_format(format)?;
            }
            let output = match (output, output_pattern) {
                (Some(file), _) => OutputTarget::File(file),
                (None, Some(pattern)) => OutputTarget::Pattern(pattern),
                (None, None) => OutputTarget::Stdout,
            };
            let cmd = Dctimestep {
                vmatrix_spec: vmatrix,
                tmatrix_file: tmatrix,
                dmatrix_file: dmatrix,
                daylight_coeff_spec: dc,
                sky_vector_file: sky,
                parameters,
                output,
            };
            let rendered = cmd
                .to_rad_string(&config)
                .context("Failed to build dctimestep command")?;
            println!("{rendered}");
        }
    }
    Ok(())
}
