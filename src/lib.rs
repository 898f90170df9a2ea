pub mod command;
pub mod config;
pub mod error;
pub mod params;
pub mod quality;
pub mod recipe;

// Prelude
pub use command::{
    CommandSpec, Dctimestep, Falsecolor, OutputTarget, RadianceCommand, Rcontrib, Rfluxmtx, Sender,
};
pub use config::RadianceConfig;
pub use error::RadError;
pub use params::{FromFlags, RadianceParameters};
pub use quality::{Quality, RecipeType, SimulationKind};
pub use recipe::{ParameterBundle, PrimaryParameters, select_defaults};
