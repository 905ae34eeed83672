use crate::log::*;
use crate::sim::grid::GridState;
use crate::types::*;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// How the interior stencil sweep is executed. Both modes read only
/// from slice `k` and are bit-identical.
#[derive(Copy, Clone, Debug)]
pub enum ExecutionMode {
    Single,
    Parallel,
}

/// Advances a [`GridState`] from step 0 to the final step.
///
/// Each step runs three strictly ordered phases: source/sink injection
/// into slice `k`, the explicit 5-point interior update writing slice
/// `k + 1`, and boundary re-application. The border is never touched by
/// the stencil, so the re-application is what keeps it at the
/// configured profile.
pub struct Simulator<'a> {
    grid: GridState,
    execution_mode: ExecutionMode,
    show_progress: bool,

    log: &'a Logger,
}

impl<'a> Simulator<'a> {
    pub fn new(
        log: &'a Logger,
        grid: GridState,
        execution_mode: ExecutionMode,
        show_progress: bool,
    ) -> Self {
        return Simulator {
            grid,
            execution_mode,
            show_progress,
            log,
        };
    }

    pub fn grid(&self) -> &GridState {
        return &self.grid;
    }

    /// Consumes the simulator and hands the populated history back.
    pub fn into_grid(self) -> GridState {
        return self.grid;
    }

    /// Computes slice `k + 1` from slice `k`.
    pub fn step(&mut self, k: usize) -> SimpleResult<()> {
        debug!(
            self.log,
            "Step '{}' at t: '{:0.4}'.",
            k,
            k as Scalar * self.grid.time_step
        );

        self.inject_source_sink(k);
        self.update_interior(k);
        self.grid.apply_boundary_conditions();

        return self.check_finite(k + 1);
    }

    /// Runs all `T - 1` transitions in order.
    pub fn run(&mut self) -> SimpleResult<()> {
        let steps = self.grid.time_steps - 1;

        info!(
            self.log,
            "Run '{}' steps on a {} x {} plate, dt: '{:0.4}', gamma: '{:0.3}'.",
            steps,
            self.grid.dim.x,
            self.grid.dim.y,
            self.grid.time_step,
            self.grid.stability_coefficient
        );

        let progress = self
            .show_progress
            .then(|| ProgressBar::new(steps as u64));

        for k in 0..steps {
            self.step(k)?;

            if let Some(p) = &progress {
                p.inc(1);
            }
        }

        if let Some(p) = &progress {
            p.finish();
        }

        info!(
            self.log,
            "Simulation finished at t: '{:0.4}'.",
            steps as Scalar * self.grid.time_step
        );

        return Ok(());
    }

    /// Adds the source, then subtracts the sink, on the same cell of
    /// slice `k`. Runs before the stencil reads slice `k`.
    fn inject_source_sink(&mut self, k: usize) {
        let src = self.grid.config().source_sink.clone();

        if src.source_enabled {
            *self.grid.at_mut(k, src.position) += src.strength;
        }
        if src.sink_enabled {
            *self.grid.at_mut(k, src.position) -= src.strength;
        }
    }

    /// Jacobi-style sweep: every interior cell of slice `k + 1` is a
    /// pure function of slice `k`.
    fn update_interior(&mut self, k: usize) {
        let dim = self.grid.dim;

        if dim.x < 3 || dim.y < 3 {
            return; // No interior cells.
        }

        let gamma = self.grid.stability_coefficient;
        let (prev, next) = self.grid.slice_pair_mut(k);

        let update_row = |y: usize, row: &mut [Scalar]| {
            for x in 1..dim.x - 1 {
                let c = y * dim.x + x;
                let center = prev[c];
                let laplacian = prev[c + 1] + prev[c - 1] + prev[c + dim.x]
                    + prev[c - dim.x]
                    - 4.0 * center;
                row[x] = gamma * laplacian + center;
            }
        };

        match self.execution_mode {
            ExecutionMode::Single => {
                for (y, row) in next
                    .chunks_exact_mut(dim.x)
                    .enumerate()
                    .skip(1)
                    .take(dim.y - 2)
                {
                    update_row(y, row);
                }
            }
            ExecutionMode::Parallel => {
                next.par_chunks_exact_mut(dim.x)
                    .enumerate()
                    .skip(1)
                    .take(dim.y - 2)
                    .for_each(|(y, row)| update_row(y, row));
            }
        }
    }

    /// A non-finite value means the scheme diverged; abort instead of
    /// propagating garbage through the remaining steps.
    fn check_finite(&self, k: usize) -> SimpleResult<()> {
        if self.grid.slice(k).iter().any(|v| !v.is_finite()) {
            bail!(
                "Simulation diverged: non-finite temperature in step '{}'.",
                k
            );
        }

        return Ok(());
    }
}
