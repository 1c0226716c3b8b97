use crate::models::MudVolcano;

#[allow(clippy::too_many_arguments)]
fn volcano(
    name: &str,
    region: &str,
    coordinate_text: &str,
    nearest_town: &str,
    distance_to_town: &str,
    infrastructure_note: &str,
    is_eruptive: bool,
    methane_flow_tons_per_year: Option<f64>,
    morphology: &str,
    size: Option<&str>,
) -> MudVolcano {
    MudVolcano {
        name: name.to_string(),
        region: region.to_string(),
        coordinate_text: coordinate_text.to_string(),
        nearest_town: nearest_town.to_string(),
        distance_to_town: distance_to_town.to_string(),
        infrastructure_note: infrastructure_note.to_string(),
        is_eruptive,
        methane_flow_tons_per_year,
        morphology: morphology.to_string(),
        size: size.map(str::to_string),
    }
}

/// The fixed mud volcano dataset. Constructed fresh on every call; callers
/// treat the returned records as immutable.
pub fn mud_volcanoes() -> Vec<MudVolcano> {
    vec![
        volcano(
            "Lei-Gong-Hou",
            "Eastern Taiwan",
            "22.983° N, 121.209° E",
            "Chenggong Township",
            "20 km",
            "Limited rural pipelines",
            false,
            Some(29.0),
            "Shield",
            Some("150 m x 50 m"),
        ),
        volcano(
            "Goshogake Onsen",
            "Tohoku, Japan",
            "39.883° N, 140.817° E",
            "Kazuno, Akita",
            "12 km",
            "Regional gas supply",
            false,
            None,
            "Salsa ponds, gryphons, and mud pots",
            None,
        ),
        volcano(
            "Niikappu",
            "Hokkaido, Japan",
            "42.417° N, 142.183° E",
            "Niikappu Town",
            "<5 km",
            "Local propane distribution",
            true,
            None,
            "Cone",
            Some("70 m x 100 m"),
        ),
        volcano(
            "Murono (Tokamachi)",
            "Niigata Basin, Japan",
            "37.121° N, 138.558° E",
            "Tokamachi City",
            "<10 km",
            "Onshore gas network",
            true,
            Some(20.0),
            "Cone",
            Some("130 m x 180 m"),
        ),
        volcano(
            "Kamou (Tokamachi)",
            "Niigata Basin, Japan",
            "37.134° N, 138.578° E",
            "Tokamachi City",
            "<10 km",
            "Onshore gas network",
            false,
            Some(3.7),
            "Cone",
            Some("20 cm diameter vent"),
        ),
        volcano(
            "Devil's Woodyard",
            "Trinidad & Tobago",
            "10.180° N, 61.358° W",
            "Princes Town",
            "~4 km",
            "National grid access",
            true,
            None,
            "Cone",
            Some("< 30 cm tall"),
        ),
        volcano(
            "Moruga Bouffe",
            "Trinidad & Tobago",
            "10.150° N, 61.250° W",
            "Moruga",
            "<2 km",
            "Regional oil/gas field",
            false,
            None,
            "Cone",
            Some("1000 m x 670 m, 30 m tall"),
        ),
        volcano(
            "Erin Bouffe",
            "Trinidad & Tobago",
            "10.150° N, 61.347° W",
            "Los Iros",
            "~2 km",
            "Regional oil/gas field",
            false,
            None,
            "Mud pools",
            Some("0.25 ha area, < 20 ft tall"),
        ),
        volcano(
            "Digity Mud Volcano",
            "Trinidad & Tobago",
            "10.270° N, 61.400° W",
            "Barrackpore",
            "~3 km",
            "National grid access",
            false,
            Some(3.0),
            "Cone",
            Some("63 ft tall"),
        ),
        volcano(
            "Salton Sea (Davis-Schrimpf)",
            "Southern California, USA",
            "33.204° N, 115.579° W",
            "Niland",
            "~12 km",
            "Gas and geothermal infra",
            false,
            Some(3.41),
            "Mud Pots",
            Some("100 m x 100 m"),
        ),
        volcano(
            "Mendocino Coast",
            "Northern California, USA",
            "39.450° N, 123.800° W",
            "Fort Bragg",
            "~8 km",
            "PG&E natural gas grid",
            false,
            None,
            "Cone/Dome",
            Some("< 2 m tall"),
        ),
        volcano(
            "Tolsona",
            "Alaska, USA",
            "62.113° N, 145.975° W",
            "Paxson",
            "~40 km",
            "Remote – no pipelines",
            false,
            None,
            "Cone",
            Some("180 m x 270 m x 8 m"),
        ),
        volcano(
            "Klawasi Group",
            "Alaska, USA",
            "62.467° N, 144.250° W",
            "Chitina",
            "~30 km",
            "Remote – no pipelines",
            false,
            None,
            "Cone, Mud pools",
            Some("35 m diameter, 50-100 m tall"),
        ),
    ]
}
