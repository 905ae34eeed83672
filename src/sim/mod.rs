pub mod boundary;
pub mod config;
pub mod grid;
pub mod source;
pub mod stepper;

pub mod setup;

pub mod visualization;
