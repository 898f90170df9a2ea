//! Recipe-level default parameter selection.

pub mod defaults;
pub mod selector;

pub use defaults::{
    DC_DEFAULTS, DM_DEFAULTS, MatrixDefaults, SUN_DEFAULTS, SunMatrixDefaults, VM_DEFAULTS,
};
pub use selector::{
    ParameterBundle, PrimaryParameters, grid_based_defaults, image_based_defaults,
    select_defaults, select_defaults_by_index, select_defaults_with,
};
