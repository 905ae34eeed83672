use crate::log::*;
use crate::plotting;
use crate::sim::grid::GridState;
use crate::types::*;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Writes one heatmap PNG per kept snapshot. Pure read-only consumer of
/// the finished temperature history.
///
/// Temperatures are normalized into `range` before being mapped onto
/// the color gradient. `every` keeps every n-th frame only.
pub fn save_heatmaps(
    log: &Logger,
    grid: &GridState,
    output: &str,
    size: Index2,
    range: (Scalar, Scalar),
    every: usize,
) -> Result<(), Box<dyn Error>> {
    let (t_min, t_max) = range;
    let span = (t_max - t_min).max(Scalar::EPSILON);
    let every = every.max(1);

    if let Some(parent) = Path::new(output).parent() {
        fs::create_dir_all(parent)?;
    }

    info!(
        log,
        "Saving heatmaps to '{}', temperature range: [{:0.2}, {:0.2}].", output, t_min, t_max
    );

    for (k, slice) in grid.snapshots() {
        if k % every != 0 {
            continue;
        }

        let temp_get = |index: Index2| {
            return (slice[index.y * grid.dim.x + index.x] - t_min) / span;
        };

        let text = format!(
            "temperature at t = {:0.3} [step {}]",
            k as Scalar * grid.time_step,
            k
        );
        let file = output.replace("{}", &format!("{:06}", k));

        plotting::heatmap(size, grid.dim, temp_get, file, &text)?;
    }

    return Ok(());
}
