pub mod constants;
pub mod coordinates;

pub use constants::*;
pub use coordinates::{format_coordinate_pair, parse_coordinate_pair};
