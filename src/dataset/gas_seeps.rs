use crate::models::GasSeep;

fn seep(
    name: &str,
    region: &str,
    coordinate_text: &str,
    nearest_town: &str,
    distance_to_town: &str,
    infrastructure_note: &str,
) -> GasSeep {
    GasSeep {
        name: name.to_string(),
        region: region.to_string(),
        coordinate_text: coordinate_text.to_string(),
        nearest_town: nearest_town.to_string(),
        distance_to_town: distance_to_town.to_string(),
        infrastructure_note: infrastructure_note.to_string(),
    }
}

/// The fixed gas seep dataset. Constructed fresh on every call; callers
/// treat the returned records as immutable.
pub fn gas_seeps() -> Vec<GasSeep> {
    vec![
        seep(
            "Chimaera (Yanartaş)",
            "Antalya Province, Turkey",
            "36.432° N, 30.467° E",
            "Çıralı",
            "~3 km",
            "Coastal LPG distribution",
        ),
        seep(
            "Yanar Dag",
            "Absheron Peninsula, Azerbaijan",
            "40.502° N, 49.892° E",
            "Baku",
            "~17 km",
            "National gas grid",
        ),
        seep(
            "Eternal Flame Falls",
            "Western New York, USA",
            "42.702° N, 78.751° W",
            "Orchard Park",
            "~6 km",
            "Regional utility gas network",
        ),
        seep(
            "Coal Oil Point",
            "Southern California, USA",
            "34.407° N, 119.878° W",
            "Goleta",
            "~4 km",
            "Offshore production infrastructure",
        ),
        seep(
            "Baba Gurgur",
            "Kirkuk, Iraq",
            "35.496° N, 44.339° E",
            "Kirkuk",
            "~16 km",
            "Oil field gathering lines",
        ),
        seep(
            "Mefite d'Ansanto",
            "Campania, Italy",
            "40.983° N, 15.166° E",
            "Rocca San Felice",
            "~2 km",
            "Rural distribution only",
        ),
        seep(
            "Pitch Lake Seeps",
            "Trinidad & Tobago",
            "10.232° N, 61.626° W",
            "La Brea",
            "~1 km",
            "National grid access",
        ),
        seep(
            "Rotokawa",
            "Taupō Volcanic Zone, New Zealand",
            "38.613° S, 176.193° E",
            "Taupō",
            "~14 km",
            "Geothermal field infrastructure",
        ),
    ]
}
