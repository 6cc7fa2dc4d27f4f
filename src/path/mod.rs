mod generic_path;
pub use generic_path::*;

/// The Type used to measure the length of a Path
pub type Cost = f32;
