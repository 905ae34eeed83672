use nalgebra;

pub type Scalar = f64;

pub type Dimension2 = nalgebra::Vector2<usize>;
pub type Index2 = nalgebra::Vector2<usize>;
