pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod release;
pub mod tracker;
pub mod transform;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use geometry::*;
pub use release::*;
pub use tracker::*;
pub use transform::*;
