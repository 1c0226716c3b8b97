pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DatasetKind};
pub use commands::run;
