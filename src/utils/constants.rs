/// Layer names
pub const MUD_VOLCANO_LAYER: &str = "Mud Volcanoes";
pub const GAS_SEEP_LAYER: &str = "Gas Seeps";

/// Placeholder shown for absent optional attributes
pub const UNKNOWN_VALUE: &str = "N/A";

/// Default map viewport
pub const DEFAULT_CENTER_LAT: f64 = 25.0;
pub const DEFAULT_CENTER_LON: f64 = 0.0;
pub const DEFAULT_ZOOM_LEVEL: u8 = 2;

/// Marker colors per style
pub const ALERT_COLOR: &str = "red";
pub const NORMAL_COLOR: &str = "green";
