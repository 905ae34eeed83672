use std::fmt::Debug;
use std::str::FromStr;

use crate::log::*;
use crate::sim::boundary::BoundaryCondition;
use crate::sim::boundary::BoundaryConfig;
use crate::sim::config::SimulationConfigBuilder;
use crate::sim::grid::GridState;
use crate::sim::source::SourceSinkConfig;
use crate::sim::stepper::{ExecutionMode, Simulator};
use crate::types::*;
use clap::Parser;
use nalgebra as na;

fn parse_vector<T, const DIM: usize>(s: &str) -> Result<na::SVector<T, DIM>, String>
where
    T: na::Scalar + FromStr,
    <T as FromStr>::Err: Debug,
{
    let ss = s.split(',').collect::<Vec<&str>>();

    if ss.len() != DIM {
        return Err(format!("Need {} comma-separated values. {:?}", DIM, ss));
    }

    let mut values = Vec::with_capacity(DIM);
    for s in &ss {
        match s.trim().parse::<T>() {
            Ok(v) => values.push(v),
            Err(e) => return Err(format!("Value '{}' is not a number: {:?}.", s, e)),
        }
    }

    return Ok(na::SVector::<T, DIM>::from_iterator(values.into_iter()));
}

fn parse_boundary(s: &str) -> Result<BoundaryCondition, String> {
    return BoundaryCondition::from_str(s);
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CLIArgs {
    #[arg(short = 'o', long, default_value_t = String::from("./frames/frame-{}.png"))]
    pub output: String,

    #[arg(short = 'n', long = "plate-length", default_value_t = 50)]
    pub plate_length: usize,

    #[arg(short = 't', long = "time-steps", default_value_t = 1000)]
    pub time_steps: usize,

    #[arg(short = 'a', long = "diffusivity", default_value_t = 4.0)]
    pub diffusivity: Scalar,

    #[arg(short = 'x', long = "spatial-step", default_value_t = 0.5)]
    pub spatial_step: Scalar,

    #[arg(short = 'i', long = "initial-temperature", default_value_t = 20.0)]
    pub initial_temperature: Scalar,

    #[arg(long = "top", default_value = "uniform:30", value_parser = parse_boundary)]
    pub top: BoundaryCondition,

    #[arg(long = "bottom", default_value = "sinusoidal:100", value_parser = parse_boundary)]
    pub bottom: BoundaryCondition,

    #[arg(long = "left", default_value = "uniform:30", value_parser = parse_boundary)]
    pub left: BoundaryCondition,

    #[arg(long = "right", default_value = "uniform:30", value_parser = parse_boundary)]
    pub right: BoundaryCondition,

    #[arg(long = "source-position", default_value = "25, 15", value_parser = parse_vector::<usize, 2>)]
    pub source_position: Index2,

    #[arg(long = "source-strength", default_value_t = 50.0)]
    pub source_strength: Scalar,

    #[arg(long = "heat-source", default_value_t = false)]
    pub heat_source: bool,

    #[arg(long = "heat-sink", default_value_t = false)]
    pub heat_sink: bool,

    #[arg(long = "plot-dim", default_value = "800, 800", value_parser = parse_vector::<usize, 2>)]
    pub plot_dim: Index2,

    #[arg(long = "plot-min")]
    pub plot_min: Option<Scalar>,

    #[arg(long = "plot-max")]
    pub plot_max: Option<Scalar>,

    #[arg(long = "render-every", default_value_t = 1)]
    pub render_every: usize,

    #[arg(long = "no-render", default_value_t = false)]
    pub no_render: bool,

    #[arg(long = "parallel", default_value_t = false)]
    pub parallel: bool,

    #[arg(long = "show-progress", default_value_t = false)]
    pub show_progress: bool,
}

pub fn parse_args() -> CLIArgs {
    return CLIArgs::parse();
}

pub fn setup_sim<'t>(log: &'t Logger, cli: &CLIArgs) -> SimpleResult<Simulator<'t>> {
    let config = SimulationConfigBuilder::default()
        .dim(dim!(cli.plate_length, cli.plate_length))
        .time_steps(cli.time_steps)
        .diffusivity(cli.diffusivity)
        .spatial_step(cli.spatial_step)
        .initial_temperature(cli.initial_temperature)
        .boundaries(BoundaryConfig {
            top: cli.top.clone(),
            bottom: cli.bottom.clone(),
            left: cli.left.clone(),
            right: cli.right.clone(),
        })
        .source_sink(SourceSinkConfig {
            position: cli.source_position,
            strength: cli.source_strength,
            source_enabled: cli.heat_source,
            sink_enabled: cli.heat_sink,
        })
        .build();

    let config = try_with!(config, "Invalid configuration");

    info!(
        log,
        "Plate: {} x {} cells, {} time slices, dt: '{:0.4}', gamma: '{:0.3}'.",
        cli.plate_length,
        cli.plate_length,
        cli.time_steps,
        config.time_step(),
        config.stability_coefficient()
    );

    let grid = GridState::new(config)?;

    let mode = if cli.parallel {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Single
    };

    return Ok(Simulator::new(log, grid, mode, cli.show_progress));
}
