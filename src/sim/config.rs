use crate::sim::boundary::BoundaryConfig;
use crate::sim::source::SourceSinkConfig;
use crate::types::*;

/// Largest stability coefficient for which the explicit 5-point scheme
/// stays stable in 2D.
pub const GAMMA_MAX: Scalar = 0.25;

/// Full description of one simulation run.
///
/// The time step is not configured directly: it is derived as
/// `dx^2 / (4 * alpha)`, which pins the stability coefficient
/// `gamma = alpha * dt / dx^2` to `GAMMA_MAX`.
#[derive(Clone, Debug, Builder)]
pub struct SimulationConfig {
    /// Cells per axis, `x` columns and `y` rows.
    pub dim: Dimension2,

    /// Number of time slices, including the initial one.
    pub time_steps: usize,

    /// Thermal diffusivity `alpha`.
    pub diffusivity: Scalar,

    /// Grid spacing `dx`.
    pub spatial_step: Scalar,

    /// Temperature every cell starts at, before the boundaries are applied.
    pub initial_temperature: Scalar,

    pub boundaries: BoundaryConfig,

    #[builder(default = "SourceSinkConfig::disabled()")]
    pub source_sink: SourceSinkConfig,
}

impl SimulationConfig {
    /// Derived time step `dx^2 / (4 * alpha)`.
    pub fn time_step(&self) -> Scalar {
        return self.spatial_step * self.spatial_step / (4.0 * self.diffusivity);
    }

    /// Derived stability coefficient `gamma = alpha * dt / dx^2`.
    pub fn stability_coefficient(&self) -> Scalar {
        return self.diffusivity * self.time_step()
            / (self.spatial_step * self.spatial_step);
    }

    pub fn validate(&self) -> SimpleResult<()> {
        if self.dim.x == 0 || self.dim.y == 0 {
            bail!(
                "Invalid configuration: grid dimensions must be positive, got {} x {}.",
                self.dim.x,
                self.dim.y
            );
        }
        if self.time_steps == 0 {
            bail!("Invalid configuration: need at least one time step.");
        }
        if !(self.diffusivity > 0.0) {
            bail!(
                "Invalid configuration: diffusivity must be positive, got '{}'.",
                self.diffusivity
            );
        }
        if !(self.spatial_step > 0.0) {
            bail!(
                "Invalid configuration: spatial step must be positive, got '{}'.",
                self.spatial_step
            );
        }

        let gamma = self.stability_coefficient();
        if !(gamma <= GAMMA_MAX) {
            bail!(
                "Invalid configuration: stability coefficient '{}' exceeds '{}'.",
                gamma,
                GAMMA_MAX
            );
        }

        if self.source_sink.is_active() {
            let p = self.source_sink.position;
            let inside = p.x >= 1 && p.y >= 1 && p.x + 1 < self.dim.x && p.y + 1 < self.dim.y;
            if !inside {
                bail!(
                    "Invalid configuration: source/sink position ({}, {}) \
                     is not strictly inside the plate interior.",
                    p.x,
                    p.y
                );
            }
            if !(self.source_sink.strength > 0.0) {
                bail!(
                    "Invalid configuration: source/sink strength must be positive, got '{}'.",
                    self.source_sink.strength
                );
            }
        }

        return Ok(());
    }
}
