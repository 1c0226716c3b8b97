pub mod feature;

pub use feature::{GasSeep, MudVolcano, Position};
