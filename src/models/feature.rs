use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signed decimal-degree position derived from a record's coordinate text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Position {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MudVolcano {
    #[validate(length(min = 1))]
    pub name: String,

    pub region: String,

    /// Raw "DD.DDD° N|S, DD.DDD° E|W" encoding; the map position is derived
    /// from this, never stored.
    pub coordinate_text: String,

    pub nearest_town: String,
    pub distance_to_town: String,
    pub infrastructure_note: String,

    pub is_eruptive: bool,
    pub methane_flow_tons_per_year: Option<f64>,
    pub morphology: String,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GasSeep {
    #[validate(length(min = 1))]
    pub name: String,

    pub region: String,
    pub coordinate_text: String,
    pub nearest_town: String,
    pub distance_to_town: String,
    pub infrastructure_note: String,
}
