use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mudvolcano-atlas")]
#[command(about = "Map scene and table builder for the global mud volcano and gas seep dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetKind {
    MudVolcanoes,
    GasSeeps,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the map scene and write it as a JSON document
    Render {
        #[arg(
            short,
            long,
            help = "Output scene file path [default: atlas-scene.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "TOML file with map viewport settings")]
        config_file: Option<PathBuf>,

        #[arg(long, help = "Override the map center latitude")]
        center_lat: Option<f64>,

        #[arg(long, help = "Override the map center longitude")]
        center_lon: Option<f64>,

        #[arg(long, help = "Override the map zoom level")]
        zoom: Option<u8>,

        #[arg(long, default_value = "false", help = "Also write dataset CSV tables")]
        with_tables: bool,

        #[arg(long, default_value = "false", help = "Emit compact single-line JSON")]
        compact: bool,
    },

    /// Write one dataset as a CSV table
    Table {
        #[arg(short, long, value_enum, default_value = "mud-volcanoes")]
        dataset: DatasetKind,

        #[arg(short, long, help = "Output CSV path [default: <dataset>.csv]")]
        output_file: Option<PathBuf>,
    },

    /// Parse every record's coordinates and report per-record results
    Validate,
}
