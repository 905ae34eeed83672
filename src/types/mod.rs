pub mod algebra;
pub mod common;

pub use algebra::*;
pub use common::*;

#[macro_export]
macro_rules! idx {
    ($x:expr, $y:expr) => {
        $crate::types::Index2::new($x, $y)
    };
}

#[macro_export]
macro_rules! dim {
    ($x:expr, $y:expr) => {
        $crate::types::Dimension2::new($x, $y)
    };
}
