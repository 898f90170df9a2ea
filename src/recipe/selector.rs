use anyhow::Result;

use super::defaults::{DC_DEFAULTS, DM_DEFAULTS, MatrixDefaults, SUN_DEFAULTS, VM_DEFAULTS};
use crate::params::{
    GridBasedParameters, ImageBasedParameters, RadianceParameters, RcontribParameters,
    RfluxmtxParameters, builtin,
};
use crate::{Quality, RecipeType, SimulationKind};

/// Parameters of a point-in-time run.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryParameters {
    Grid(GridBasedParameters),
    Image(ImageBasedParameters),
}

impl RadianceParameters for PrimaryParameters {
    fn name(&self) -> &'static str {
        match self {
            PrimaryParameters::Grid(p) => p.name(),
            PrimaryParameters::Image(p) => p.name(),
        }
    }

    fn render_flags(&self) -> String {
        match self {
            PrimaryParameters::Grid(p) => p.render_flags(),
            PrimaryParameters::Image(p) => p.render_flags(),
        }
    }
}

/// Parameter sets needed by one recipe.
///
/// - point-in-time: `primary` only
/// - daylight coefficient: `daylight_matrix` + `sun_matrix`
/// - 3-phase / 5-phase: `view_matrix` + `daylight_matrix` + `sun_matrix`
///
/// Only [`select_defaults`] builds bundles, so the combination always matches
/// the recipe type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBundle {
    primary: Option<PrimaryParameters>,
    view_matrix: Option<RfluxmtxParameters>,
    daylight_matrix: Option<RfluxmtxParameters>,
    sun_matrix: Option<RcontribParameters>,
}

impl ParameterBundle {
    pub fn primary(&self) -> Option<&PrimaryParameters> {
        self.primary.as_ref()
    }

    pub fn view_matrix(&self) -> Option<&RfluxmtxParameters> {
        self.view_matrix.as_ref()
    }

    pub fn daylight_matrix(&self) -> Option<&RfluxmtxParameters> {
        self.daylight_matrix.as_ref()
    }

    pub fn sun_matrix(&self) -> Option<&RcontribParameters> {
        self.sun_matrix.as_ref()
    }

    /// Populated slots as `(slot name, parameters)`, in bundle order.
    pub fn populated(&self) -> Vec<(&'static str, &dyn RadianceParameters)> {
        let mut slots: Vec<(&'static str, &dyn RadianceParameters)> = Vec::new();
        if let Some(p) = &self.primary {
            slots.push(("primary", p as &dyn RadianceParameters));
        }
        if let Some(p) = &self.view_matrix {
            slots.push(("view matrix", p as &dyn RadianceParameters));
        }
        if let Some(p) = &self.daylight_matrix {
            slots.push(("daylight matrix", p as &dyn RadianceParameters));
        }
        if let Some(p) = &self.sun_matrix {
            slots.push(("sun matrix", p as &dyn RadianceParameters));
        }
        slots
    }

    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Option<PrimaryParameters>,
        Option<RfluxmtxParameters>,
        Option<RfluxmtxParameters>,
        Option<RcontribParameters>,
    ) {
        (
            self.primary,
            self.view_matrix,
            self.daylight_matrix,
            self.sun_matrix,
        )
    }
}

fn matrix_parameters(quality: Quality, row: &MatrixDefaults) -> RfluxmtxParameters {
    let mut params = RfluxmtxParameters::with_quality(quality);
    builtin("matrix defaults", row.apply(&mut params));
    params
}

fn sun_matrix_parameters() -> RcontribParameters {
    let mut params = RcontribParameters::new();
    builtin("sun matrix defaults", SUN_DEFAULTS.apply(&mut params));
    params
}

/// Selects the tuned parameter sets for a recipe.
pub fn select_defaults(
    kind: SimulationKind,
    quality: Quality,
    recipe: RecipeType,
) -> ParameterBundle {
    log::info!("Selecting {kind:?} defaults for a {recipe} recipe at {quality} quality");
    let q = quality.index();
    match recipe {
        RecipeType::PointInTime => ParameterBundle {
            primary: Some(match kind {
                SimulationKind::GridBased => {
                    PrimaryParameters::Grid(GridBasedParameters::new(quality))
                }
                SimulationKind::ImageBased => {
                    PrimaryParameters::Image(ImageBasedParameters::new(quality))
                }
            }),
            view_matrix: None,
            daylight_matrix: None,
            sun_matrix: None,
        },
        RecipeType::DaylightCoefficient => ParameterBundle {
            primary: None,
            view_matrix: None,
            daylight_matrix: Some(matrix_parameters(quality, &DC_DEFAULTS[q])),
            sun_matrix: Some(sun_matrix_parameters()),
        },
        RecipeType::ThreePhase | RecipeType::FivePhase => ParameterBundle {
            primary: None,
            view_matrix: Some(matrix_parameters(quality, &VM_DEFAULTS[q])),
            daylight_matrix: Some(matrix_parameters(quality, &DM_DEFAULTS[q])),
            sun_matrix: Some(sun_matrix_parameters()),
        },
    }
}

pub fn grid_based_defaults(quality: Quality, recipe: RecipeType) -> ParameterBundle {
    select_defaults(SimulationKind::GridBased, quality, recipe)
}

pub fn image_based_defaults(quality: Quality, recipe: RecipeType) -> ParameterBundle {
    select_defaults(SimulationKind::ImageBased, quality, recipe)
}

/// Index based entry point: quality 0..=2, recipe 0..=3.
///
/// # Panics
/// Panics on out-of-range indices. They are caller bugs and are never clamped.
pub fn select_defaults_by_index(
    kind: SimulationKind,
    quality: usize,
    recipe: usize,
) -> ParameterBundle {
    select_defaults(kind, Quality::from_index(quality), RecipeType::from_index(recipe))
}

/// Like [`select_defaults`], but with user supplied rows in place of the
/// built-in matrix tables. Rows are validated first.
pub fn select_defaults_with(
    quality: Quality,
    recipe: RecipeType,
    view: &MatrixDefaults,
    daylight: &MatrixDefaults,
) -> Result<ParameterBundle> {
    view.validate()?;
    daylight.validate()?;
    let mut bundle = select_defaults(SimulationKind::GridBased, quality, recipe);
    if let Some(p) = bundle.view_matrix.as_mut() {
        *p = RfluxmtxParameters::with_quality(quality);
        view.apply(p)?;
    }
    if let Some(p) = bundle.daylight_matrix.as_mut() {
        *p = RfluxmtxParameters::with_quality(quality);
        daylight.apply(p)?;
    }
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AmbientOptions, ContributionOptions, DirectOptions};

    #[test]
    fn test_point_in_time_only_primary() {
        for q in Quality::ALL {
            let bundle = grid_based_defaults(q, RecipeType::PointInTime);
            assert!(bundle.view_matrix().is_none());
            assert!(bundle.daylight_matrix().is_none());
            assert!(bundle.sun_matrix().is_none());
            let Some(PrimaryParameters::Grid(p)) = bundle.primary() else {
                panic!("expected grid-based primary parameters");
            };
            assert_eq!(p.ambient_divisions(), GridBasedParameters::new(q).ambient_divisions());
        }
    }

    #[test]
    fn test_point_in_time_image() {
        let bundle = image_based_defaults(Quality::High, RecipeType::PointInTime);
        assert!(matches!(bundle.primary(), Some(PrimaryParameters::Image(_))));
    }

    #[test]
    fn test_daylight_coefficient_slots() {
        for q in Quality::ALL {
            let bundle = grid_based_defaults(q, RecipeType::DaylightCoefficient);
            assert!(bundle.primary().is_none());
            assert!(bundle.view_matrix().is_none());
            let dm = bundle.daylight_matrix().unwrap();
            let row = DC_DEFAULTS[q.index()];
            assert_eq!(dm.ambient_divisions(), Some(row.ambient_divisions));
            assert_eq!(dm.ambient_bounces(), Some(row.ambient_bounces));
            assert_eq!(dm.limit_weight(), Some(row.limit_weight));
            assert_eq!(dm.sampling_rays_count(), Some(1));
        }
    }

    #[test]
    fn test_sun_matrix_is_tier_independent() {
        for q in Quality::ALL {
            for recipe in [
                RecipeType::DaylightCoefficient,
                RecipeType::ThreePhase,
                RecipeType::FivePhase,
            ] {
                let bundle = grid_based_defaults(q, recipe);
                let sun = bundle.sun_matrix().unwrap();
                assert_eq!(sun.ambient_bounces(), Some(0));
                assert_eq!(sun.direct_jitter(), Some(0.0));
                assert_eq!(sun.direct_certainty(), Some(1.0));
                assert_eq!(sun.direct_threshold(), Some(0.0));
                assert_eq!(sun.render_flags(), "-ab 0 -dc 1 -dj 0 -dt 0");
            }
        }
    }

    #[test]
    fn test_multi_phase_slots() {
        for recipe in [RecipeType::ThreePhase, RecipeType::FivePhase] {
            let bundle = grid_based_defaults(Quality::Medium, recipe);
            assert!(bundle.primary().is_none());
            let vm = bundle.view_matrix().unwrap();
            let dm = bundle.daylight_matrix().unwrap();
            assert_eq!(vm.ambient_divisions(), Some(5000));
            assert_eq!(vm.sampling_rays_count(), None);
            assert_eq!(dm.ambient_divisions(), Some(3000));
            assert_eq!(dm.sampling_rays_count(), Some(1000));
            assert_eq!(bundle.populated().len(), 3);
        }
    }

    #[test]
    fn test_matrix_parameters_keep_quality_seed() {
        let bundle = grid_based_defaults(Quality::High, RecipeType::ThreePhase);
        let vm = bundle.view_matrix().unwrap();
        assert_eq!(vm.ambient_accuracy(), Some(0.1));
        assert_eq!(
            vm.render_flags(),
            "-aa 0.1 -ab 7 -ad 20000 -ar 128 -as 4096 -lw 0.0000005"
        );
    }

    #[test]
    fn test_every_combination_selects() {
        for kind in [SimulationKind::GridBased, SimulationKind::ImageBased] {
            for q in Quality::ALL {
                for recipe in RecipeType::ALL {
                    let bundle = select_defaults(kind, q, recipe);
                    assert!(!bundle.populated().is_empty(), "{kind:?} {q} {recipe}");
                }
            }
        }
    }

    #[test]
    fn test_select_by_index() {
        let bundle = select_defaults_by_index(SimulationKind::GridBased, 0, 1);
        assert!(bundle.daylight_matrix().is_some());
        assert!(bundle.view_matrix().is_none());
    }

    #[test]
    #[should_panic(expected = "quality tier index 5")]
    fn test_select_by_index_bad_quality() {
        select_defaults_by_index(SimulationKind::GridBased, 5, 0);
    }

    #[test]
    #[should_panic(expected = "recipe type index 9")]
    fn test_select_by_index_bad_recipe() {
        select_defaults_by_index(SimulationKind::ImageBased, 1, 9);
    }

    #[test]
    fn test_select_with_custom_rows() -> Result<()> {
        let view = MatrixDefaults {
            ambient_divisions: 2000,
            ambient_bounces: 4,
            limit_weight: 0.000005,
            sampling_rays_count: None,
        };
        let daylight = DM_DEFAULTS[0];
        let bundle = select_defaults_with(Quality::Low, RecipeType::ThreePhase, &view, &daylight)?;
        assert_eq!(bundle.view_matrix().unwrap().ambient_divisions(), Some(2000));
        assert_eq!(bundle.daylight_matrix().unwrap().ambient_divisions(), Some(1024));
        Ok(())
    }

    #[test]
    fn test_select_with_rejects_bad_row() {
        let view = MatrixDefaults {
            ambient_divisions: 10,
            ambient_bounces: 4,
            limit_weight: 0.5,
            sampling_rays_count: None,
        };
        let result =
            select_defaults_with(Quality::Low, RecipeType::ThreePhase, &view, &DM_DEFAULTS[0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_parts() {
        let (primary, vm, dm, sun) =
            grid_based_defaults(Quality::Low, RecipeType::DaylightCoefficient).into_parts();
        assert!(primary.is_none() && vm.is_none());
        assert!(dm.is_some() && sun.is_some());
    }
}
