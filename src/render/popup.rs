use serde::{Deserialize, Serialize};

use crate::models::{GasSeep, MudVolcano};
use crate::utils::UNKNOWN_VALUE;

/// One labelled line in a marker popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupField {
    pub label: String,
    pub value: String,
}

impl PopupField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Data-only popup view model. The rendering collaborator owns all markup;
/// this layer only decides which lines appear and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub title: String,
    pub fields: Vec<PopupField>,
}

/// Build the popup for a mud volcano record.
///
/// Absent optional attributes render as an explicit placeholder so that
/// every popup of this kind has the same shape.
pub fn volcano_popup(volcano: &MudVolcano) -> Popup {
    let methane = volcano
        .methane_flow_tons_per_year
        .map(|flow| flow.to_string())
        .unwrap_or_else(|| UNKNOWN_VALUE.to_string());

    let size = volcano
        .size
        .clone()
        .unwrap_or_else(|| UNKNOWN_VALUE.to_string());

    Popup {
        title: volcano.name.clone(),
        fields: vec![
            PopupField::new("Location", volcano.region.clone()),
            PopupField::new(
                "Nearest City/Town",
                format!("{} ({})", volcano.nearest_town, volcano.distance_to_town),
            ),
            PopupField::new(
                "Gas Infrastructure Nearby",
                volcano.infrastructure_note.clone(),
            ),
            PopupField::new("Eruptive?", if volcano.is_eruptive { "Yes" } else { "No" }),
            PopupField::new("Methane Flow (tons/yr)", methane),
            PopupField::new("Morphology", volcano.morphology.clone()),
            PopupField::new("Size", size),
        ],
    }
}

/// Build the popup for a gas seep record.
pub fn seep_popup(seep: &GasSeep) -> Popup {
    Popup {
        title: seep.name.clone(),
        fields: vec![
            PopupField::new("Location", seep.region.clone()),
            PopupField::new(
                "Nearest City/Town",
                format!("{} ({})", seep.nearest_town, seep.distance_to_town),
            ),
            PopupField::new("Gas Infrastructure Nearby", seep.infrastructure_note.clone()),
        ],
    }
}
