use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RadError;

/// Coarse simulation quality knob.
///
/// Trades runtime against noise through the ambient sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    /// Number of tiers, counted along [`Quality::next`]. Every default table
    /// is sized by this, so a new tier fails to compile until each table has
    /// a row for it.
    pub const COUNT: usize = {
        let mut n = 1;
        let mut q = Quality::Low;
        while let Some(next) = q.next() {
            q = next;
            n += 1;
        }
        n
    };

    /// Every tier, lowest first.
    pub const ALL: [Quality; Self::COUNT] = {
        let mut all = [Quality::Low; Self::COUNT];
        let mut i = 0;
        let mut q = Quality::Low;
        loop {
            all[i] = q;
            i += 1;
            match q.next() {
                Some(next) => q = next,
                None => break,
            }
        }
        all
    };

    /// The next tier up, `None` for the highest.
    pub const fn next(self) -> Option<Quality> {
        match self {
            Quality::Low => Some(Quality::Medium),
            Quality::Medium => Some(Quality::High),
            Quality::High => None,
        }
    }

    /// Row index into the default tables.
    pub const fn index(self) -> usize {
        match self {
            Quality::Low => 0,
            Quality::Medium => 1,
            Quality::High => 2,
        }
    }

    /// Converts a raw tier index.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1 or 2. Passing anything else is a bug in
    /// the caller, not a runtime condition.
    pub fn from_index(index: usize) -> Self {
        match Self::try_from(index) {
            Ok(q) => q,
            Err(_) => panic!(
                "quality tier index {index} is out of range (expected 0..={})",
                Self::COUNT - 1
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

// `index` must agree with the position in `ALL`.
const _: () = {
    let mut i = 0;
    while i < Quality::COUNT {
        assert!(Quality::ALL[i].index() == i);
        i += 1;
    }
};

impl TryFrom<usize> for Quality {
    type Error = RadError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or_else(|| RadError::InvalidValue {
                name: "quality".to_string(),
                value: value.to_string(),
                reason: "expected 0 (low), 1 (medium) or 2 (high)".to_string(),
            })
    }
}

impl FromStr for Quality {
    type Err = RadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "0" => Ok(Quality::Low),
            "medium" | "1" => Ok(Quality::Medium),
            "high" | "2" => Ok(Quality::High),
            _ => Err(RadError::InvalidValue {
                name: "quality".to_string(),
                value: s.to_string(),
                reason: "expected low, medium or high".to_string(),
            }),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of simulation recipe the defaults are selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeType {
    PointInTime,
    DaylightCoefficient,
    ThreePhase,
    FivePhase,
}

impl RecipeType {
    pub const ALL: [RecipeType; 4] = [
        RecipeType::PointInTime,
        RecipeType::DaylightCoefficient,
        RecipeType::ThreePhase,
        RecipeType::FivePhase,
    ];

    pub const fn index(self) -> usize {
        match self {
            RecipeType::PointInTime => 0,
            RecipeType::DaylightCoefficient => 1,
            RecipeType::ThreePhase => 2,
            RecipeType::FivePhase => 3,
        }
    }

    /// # Panics
    /// Panics on an unrecognized recipe index.
    pub fn from_index(index: usize) -> Self {
        match Self::try_from(index) {
            Ok(r) => r,
            Err(_) => panic!("recipe type index {index} is not recognized (expected 0..=3)"),
        }
    }

    /// Matrix-based methods that need view, daylight and sun matrices.
    pub fn is_multi_phase(self) -> bool {
        matches!(self, RecipeType::ThreePhase | RecipeType::FivePhase)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecipeType::PointInTime => "point-in-time",
            RecipeType::DaylightCoefficient => "daylight-coefficient",
            RecipeType::ThreePhase => "three-phase",
            RecipeType::FivePhase => "five-phase",
        }
    }
}

impl TryFrom<usize> for RecipeType {
    type Error = RadError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or_else(|| RadError::InvalidValue {
                name: "recipe type".to_string(),
                value: value.to_string(),
                reason: "expected 0 (point-in-time), 1 (daylight coefficient), 2 (3-phase) or 3 (5-phase)"
                    .to_string(),
            })
    }
}

impl FromStr for RecipeType {
    type Err = RadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point-in-time" | "pit" | "0" => Ok(RecipeType::PointInTime),
            "daylight-coefficient" | "dc" | "1" => Ok(RecipeType::DaylightCoefficient),
            "three-phase" | "3phase" | "2" => Ok(RecipeType::ThreePhase),
            "five-phase" | "5phase" | "3" => Ok(RecipeType::FivePhase),
            _ => Err(RadError::InvalidValue {
                name: "recipe type".to_string(),
                value: s.to_string(),
                reason: "expected point-in-time, daylight-coefficient, three-phase or five-phase"
                    .to_string(),
            }),
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the recipe computes values on a sensor grid or renders images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationKind {
    #[default]
    GridBased,
    ImageBased,
}
