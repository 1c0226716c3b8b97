pub mod gas_seeps;
pub mod mud_volcanoes;

pub use gas_seeps::gas_seeps;
pub use mud_volcanoes::mud_volcanoes;
