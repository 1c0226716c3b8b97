pub mod classify;
pub mod popup;
pub mod scene;
pub mod table;

pub use classify::{classify_seep, classify_volcano, MarkerStyle};
pub use popup::{seep_popup, volcano_popup, Popup, PopupField};
pub use scene::{build_scene, Layer, MapConfig, MapScene, Marker, SkippedRecord};
pub use table::{seep_table, volcano_table, TableView};
