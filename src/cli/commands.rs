use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, DatasetKind};
use crate::dataset::{gas_seeps, mud_volcanoes};
use crate::error::Result;
use crate::render::{build_scene, seep_table, volcano_table, MapConfig};
use crate::utils::parse_coordinate_pair;
use crate::writers::{SceneWriter, TableWriter};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            output_file,
            config_file,
            center_lat,
            center_lon,
            zoom,
            with_tables,
            compact,
        } => {
            let mut config = match config_file {
                Some(path) => MapConfig::load(&path)?,
                None => MapConfig::default(),
            };
            if let Some(lat) = center_lat {
                config.center_latitude = lat;
            }
            if let Some(lon) = center_lon {
                config.center_longitude = lon;
            }
            if let Some(level) = zoom {
                config.zoom_level = level;
            }

            let volcanoes = mud_volcanoes();
            let seeps = gas_seeps();
            let scene = build_scene(config, &volcanoes, &seeps);

            println!(
                "Built scene: {} markers in {} layers",
                scene.marker_count(),
                scene.layers.len()
            );
            if !scene.skipped.is_empty() {
                println!(
                    "⚠️  {} record(s) excluded from the map (see log)",
                    scene.skipped.len()
                );
            }

            let output = output_file.unwrap_or_else(|| PathBuf::from("atlas-scene.json"));
            let writer = if compact {
                SceneWriter::new().with_compact_output()
            } else {
                SceneWriter::new()
            };
            writer.write_scene(&scene, &output)?;
            println!("Scene written to {}", output.display());

            if with_tables {
                let table_writer = TableWriter::new();
                table_writer
                    .write_table(&volcano_table(&volcanoes), &PathBuf::from("mud-volcanoes.csv"))?;
                table_writer.write_table(&seep_table(&seeps), &PathBuf::from("gas-seeps.csv"))?;
                println!("Tables written to mud-volcanoes.csv and gas-seeps.csv");
            }
        }

        Commands::Table {
            dataset,
            output_file,
        } => {
            let (table, default_name) = match dataset {
                DatasetKind::MudVolcanoes => {
                    (volcano_table(&mud_volcanoes()), "mud-volcanoes.csv")
                }
                DatasetKind::GasSeeps => (seep_table(&gas_seeps()), "gas-seeps.csv"),
            };

            let output = output_file.unwrap_or_else(|| PathBuf::from(default_name));
            TableWriter::new().write_table(&table, &output)?;
            println!("{} rows written to {}", table.rows.len(), output.display());
        }

        Commands::Validate => {
            let mut failures = 0;

            for volcano in mud_volcanoes() {
                failures += report(&volcano.name, &volcano.coordinate_text);
            }
            for seep in gas_seeps() {
                failures += report(&seep.name, &seep.coordinate_text);
            }

            if failures == 0 {
                println!("✅ All records parsed to valid positions");
            } else {
                println!("⚠️  {} record(s) failed coordinate parsing", failures);
            }
        }
    }

    Ok(())
}

fn report(name: &str, coordinate_text: &str) -> u32 {
    match parse_coordinate_pair(coordinate_text) {
        Ok(position) => {
            println!(
                "{}: ({:.3}, {:.3})",
                name, position.latitude, position.longitude
            );
            0
        }
        Err(e) => {
            println!("{}: FAILED '{}' ({})", name, coordinate_text, e);
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore a failure here so tests can call run() repeatedly.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
