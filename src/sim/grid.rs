use crate::sim::config::SimulationConfig;
use crate::types::*;
use rayon::prelude::*;

/// Dense `(T, H, W)` temperature history of the plate.
///
/// Slice `k` is the snapshot after `k` time steps. Cells are stored
/// row-major inside each slice: cell `(x, y)` of slice `k` lives at
/// `(k * dim.y + y) * dim.x + x`. Row `0` is the bottom edge of the
/// plate and row `dim.y - 1` the top edge.
pub struct GridState {
    pub dim: Dimension2,
    pub time_steps: usize,

    /// Derived time step `dx^2 / (4 * alpha)`.
    pub time_step: Scalar,

    /// Derived stability coefficient, `0.25` by construction.
    pub stability_coefficient: Scalar,

    config: SimulationConfig,
    temperature: Vec<Scalar>,
}

impl GridState {
    /// Validates the configuration, allocates the full history filled
    /// with the initial temperature and applies the boundary conditions
    /// once.
    pub fn new(config: SimulationConfig) -> SimpleResult<GridState> {
        config.validate()?;

        let n = config.time_steps * config.dim.x * config.dim.y;

        let mut grid = GridState {
            dim: config.dim,
            time_steps: config.time_steps,
            time_step: config.time_step(),
            stability_coefficient: config.stability_coefficient(),
            temperature: vec![config.initial_temperature; n],
            config,
        };

        grid.apply_boundary_conditions();

        return Ok(grid);
    }

    pub fn config(&self) -> &SimulationConfig {
        return &self.config;
    }

    fn offset(&self, k: usize, index: Index2) -> usize {
        return (k * self.dim.y + index.y) * self.dim.x + index.x;
    }

    pub fn at(&self, k: usize, index: Index2) -> Scalar {
        return self.temperature[self.offset(k, index)];
    }

    pub fn at_mut(&mut self, k: usize, index: Index2) -> &mut Scalar {
        let o = self.offset(k, index);
        return &mut self.temperature[o];
    }

    /// Snapshot `k` as a flat `dim.x * dim.y` slice.
    pub fn slice(&self, k: usize) -> &[Scalar] {
        let n = self.dim.x * self.dim.y;
        return &self.temperature[k * n..(k + 1) * n];
    }

    /// Disjoint views of slice `k` (read) and slice `k + 1` (write) for
    /// the stencil sweep.
    pub(crate) fn slice_pair_mut(&mut self, k: usize) -> (&[Scalar], &mut [Scalar]) {
        let n = self.dim.x * self.dim.y;
        let (head, tail) = self.temperature.split_at_mut((k + 1) * n);
        return (&head[k * n..], &mut tail[..n]);
    }

    pub fn is_inside_border(&self, index: Index2) -> bool {
        return index.x >= 1
            && index.y >= 1
            && index.x + 1 < self.dim.x
            && index.y + 1 < self.dim.y;
    }

    /// Read-only iteration over `(step index, snapshot)` pairs, for
    /// downstream consumers such as the heatmap writer.
    pub fn snapshots(&self) -> impl Iterator<Item = (usize, &[Scalar])> {
        let n = self.dim.x * self.dim.y;
        return self.temperature.chunks_exact(n).enumerate();
    }

    /// Overwrites the four border lines of every time slice with the
    /// configured edge profiles. Idempotent. The left/right edges are
    /// applied after top/bottom, so they own the corner cells.
    pub fn apply_boundary_conditions(&mut self) {
        let dim = self.dim;
        let n = dim.x * dim.y;
        let bc = &self.config.boundaries;

        for slice in self.temperature.chunks_exact_mut(n) {
            for x in 0..dim.x {
                slice[(dim.y - 1) * dim.x + x] = bc.top.value_at(x, dim.x);
                slice[x] = bc.bottom.value_at(x, dim.x);
            }
            for y in 0..dim.y {
                slice[y * dim.x] = bc.left.value_at(y, dim.y);
                slice[y * dim.x + dim.x - 1] = bc.right.value_at(y, dim.y);
            }
        }
    }

    /// Min/max temperature over the whole history.
    pub fn temperature_range(&self) -> (Scalar, Scalar) {
        return self
            .temperature
            .par_iter()
            .fold(
                || (Scalar::MAX, Scalar::MIN),
                |acc, &v| (acc.0.min(v), acc.1.max(v)),
            )
            .reduce(
                || (Scalar::MAX, Scalar::MIN),
                |a, b| (a.0.min(b.0), a.1.max(b.1)),
            );
    }
}
