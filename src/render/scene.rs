use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use crate::error::{AtlasError, Result};
use crate::models::{GasSeep, MudVolcano, Position};
use crate::render::classify::{classify_seep, classify_volcano, MarkerStyle};
use crate::render::popup::{seep_popup, volcano_popup, Popup};
use crate::utils::coordinates::parse_coordinate_pair;
use crate::utils::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_ZOOM_LEVEL, GAS_SEEP_LAYER, MUD_VOLCANO_LAYER,
};

/// Base viewport handed to the map collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom_level: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: DEFAULT_CENTER_LAT,
            center_longitude: DEFAULT_CENTER_LON,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

impl MapConfig {
    /// Load viewport settings from a TOML file, falling back to the
    /// defaults for any key the file omits.
    pub fn load(path: &Path) -> Result<Self> {
        let defaults = MapConfig::default();

        let settings = config::Config::builder()
            .set_default("center_latitude", defaults.center_latitude)
            .and_then(|b| b.set_default("center_longitude", defaults.center_longitude))
            .and_then(|b| b.set_default("zoom_level", defaults.zoom_level as i64))
            .map_err(|e| AtlasError::Config(e.to_string()))?
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| AtlasError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| AtlasError::Config(e.to_string()))
    }
}

/// One placed, classified, popup-carrying marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    pub position: Position,
    pub style: MarkerStyle,
    pub popup: Popup,
}

/// A named, independently toggleable group of markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub markers: Vec<Marker>,
}

/// A record excluded from the map because its coordinate text failed to
/// parse. Still present in the tabular view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub name: String,
    pub coordinate_text: String,
    pub reason: String,
}

/// The fully-resolved scene document consumed by the map collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapScene {
    pub config: MapConfig,
    pub layers: Vec<Layer>,
    pub skipped: Vec<SkippedRecord>,
}

impl MapScene {
    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.markers.len()).sum()
    }
}

/// Build the complete scene from both datasets.
///
/// A record whose coordinate text fails to parse (or parses to an
/// out-of-range position) is logged, recorded in `skipped`, and excluded
/// from its layer; the remaining records still render.
pub fn build_scene(config: MapConfig, volcanoes: &[MudVolcano], seeps: &[GasSeep]) -> MapScene {
    let mut skipped = Vec::new();

    let volcano_markers = volcanoes
        .iter()
        .filter_map(|volcano| {
            place_marker(
                &volcano.name,
                &volcano.coordinate_text,
                classify_volcano(volcano),
                volcano_popup(volcano),
                &mut skipped,
            )
        })
        .collect();

    let seep_markers = seeps
        .iter()
        .filter_map(|seep| {
            place_marker(
                &seep.name,
                &seep.coordinate_text,
                classify_seep(seep),
                seep_popup(seep),
                &mut skipped,
            )
        })
        .collect();

    MapScene {
        config,
        layers: vec![
            Layer {
                name: MUD_VOLCANO_LAYER.to_string(),
                markers: volcano_markers,
            },
            Layer {
                name: GAS_SEEP_LAYER.to_string(),
                markers: seep_markers,
            },
        ],
        skipped,
    }
}

fn place_marker(
    name: &str,
    coordinate_text: &str,
    style: MarkerStyle,
    popup: Popup,
    skipped: &mut Vec<SkippedRecord>,
) -> Option<Marker> {
    let placed = parse_coordinate_pair(coordinate_text).and_then(|position| {
        position.validate()?;
        Ok(position)
    });

    match placed {
        Ok(position) => Some(Marker {
            name: name.to_string(),
            position,
            style,
            popup,
        }),
        Err(e) => {
            warn!(
                record = name,
                raw = coordinate_text,
                error = %e,
                "excluding record from map"
            );
            skipped.push(SkippedRecord {
                name: name.to_string(),
                coordinate_text: coordinate_text.to_string(),
                reason: e.to_string(),
            });
            None
        }
    }
}
