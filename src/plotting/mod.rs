pub mod plot;
pub mod tests;

pub use plot::*;
