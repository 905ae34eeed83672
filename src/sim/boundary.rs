use crate::types::*;
use std::str::FromStr;

/// Temperature profile held on one edge of the plate for the whole run.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryCondition {
    /// Every cell on the edge sits at the given temperature.
    Uniform(Scalar),

    /// Half sine bump over the edge:
    /// `v + v * sin(pi * c / len)` at running coordinate `c`.
    Sinusoidal(Scalar),
}

impl BoundaryCondition {
    /// Profile value at running coordinate `c` on an edge of `len` cells.
    pub fn value_at(&self, c: usize, len: usize) -> Scalar {
        return match *self {
            BoundaryCondition::Uniform(v) => v,
            BoundaryCondition::Sinusoidal(v) => {
                v + v * (std::f64::consts::PI * c as Scalar / len as Scalar).sin()
            }
        };
    }
}

impl FromStr for BoundaryCondition {
    type Err = String;

    /// Parses `"kind:value"`, e.g. `"uniform:30"` or `"sinusoidal:100"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or(format!("Need 'kind:value', got '{}'.", s))?;

        let v = value
            .trim()
            .parse::<Scalar>()
            .map_err(|e| format!("Value '{}' is not a number: {}.", value, e))?;

        return match kind.trim() {
            "uniform" => Ok(BoundaryCondition::Uniform(v)),
            "sinusoidal" => Ok(BoundaryCondition::Sinusoidal(v)),
            _ => Err(format!("Unknown boundary condition '{}'.", kind)),
        };
    }
}

/// One condition per plate edge. Edges are applied in the order
/// top, bottom, left, right, so the four corner cells always carry
/// the left/right edge value.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryConfig {
    pub top: BoundaryCondition,
    pub bottom: BoundaryCondition,
    pub left: BoundaryCondition,
    pub right: BoundaryCondition,
}

impl BoundaryConfig {
    pub fn uniform(v: Scalar) -> Self {
        return BoundaryConfig {
            top: BoundaryCondition::Uniform(v),
            bottom: BoundaryCondition::Uniform(v),
            left: BoundaryCondition::Uniform(v),
            right: BoundaryCondition::Uniform(v),
        };
    }
}
