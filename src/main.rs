use rsheat::log::{create_logger, info};
use rsheat::sim::setup::{parse_args, setup_sim};
use rsheat::sim::visualization::save_heatmaps;
use rsheat::types::GenericResult;

fn main() -> GenericResult<()> {
    let cli = parse_args();
    let log = create_logger();

    info!(log, "2D heat equation solver.");

    let mut sim = setup_sim(&log, &cli)?;
    sim.run()?;

    let grid = sim.into_grid();

    if !cli.no_render {
        let auto = grid.temperature_range();
        let range = (
            cli.plot_min.unwrap_or(auto.0),
            cli.plot_max.unwrap_or(auto.1),
        );

        save_heatmaps(
            &log,
            &grid,
            &cli.output,
            cli.plot_dim,
            range,
            cli.render_every,
        )?;
    }

    return Ok(());
}
