pub mod domain;
pub use domain::*;

pub mod wire;
pub use wire::*;
