use serde::{Deserialize, Serialize};

use crate::models::{GasSeep, MudVolcano};
use crate::utils::{ALERT_COLOR, NORMAL_COLOR};

/// Visual treatment applied to a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    Alert,
    Normal,
}

impl MarkerStyle {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerStyle::Alert => ALERT_COLOR,
            MarkerStyle::Normal => NORMAL_COLOR,
        }
    }
}

/// Eruptive mud volcanoes get the alert treatment; everything else is normal.
pub fn classify_volcano(volcano: &MudVolcano) -> MarkerStyle {
    if volcano.is_eruptive {
        MarkerStyle::Alert
    } else {
        MarkerStyle::Normal
    }
}

/// Gas seeps carry no eruptive attribute, so they always classify as normal.
pub fn classify_seep(_seep: &GasSeep) -> MarkerStyle {
    MarkerStyle::Normal
}
