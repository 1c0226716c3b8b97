use serde::{Deserialize, Serialize};

use crate::models::{GasSeep, MudVolcano};
use crate::utils::UNKNOWN_VALUE;

/// Flat tabular view of one dataset, ready for the table collaborator.
///
/// Carries source attributes only; derived positions are deliberately
/// absent. Every record appears, including ones whose coordinates failed
/// to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn volcano_table(volcanoes: &[MudVolcano]) -> TableView {
    let columns = vec![
        "Mud Volcano",
        "Country/Region",
        "Coordinates",
        "Nearest City/Town",
        "Distance to City",
        "Gas Infrastructure Nearby",
        "Eruptive?",
        "Methane Flow (tons/yr)",
        "Morphology",
        "Size",
    ];

    let rows = volcanoes
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.region.clone(),
                v.coordinate_text.clone(),
                v.nearest_town.clone(),
                v.distance_to_town.clone(),
                v.infrastructure_note.clone(),
                if v.is_eruptive { "Yes" } else { "No" }.to_string(),
                v.methane_flow_tons_per_year
                    .map(|flow| flow.to_string())
                    .unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
                v.morphology.clone(),
                v.size.clone().unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            ]
        })
        .collect();

    TableView {
        columns: columns.into_iter().map(str::to_string).collect(),
        rows,
    }
}

pub fn seep_table(seeps: &[GasSeep]) -> TableView {
    let columns = vec![
        "Gas Seep",
        "Country/Region",
        "Coordinates",
        "Nearest City/Town",
        "Distance to City",
        "Gas Infrastructure Nearby",
    ];

    let rows = seeps
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.region.clone(),
                s.coordinate_text.clone(),
                s.nearest_town.clone(),
                s.distance_to_town.clone(),
                s.infrastructure_note.clone(),
            ]
        })
        .collect();

    TableView {
        columns: columns.into_iter().map(str::to_string).collect(),
        rows,
    }
}
