use clap::Parser;
use mudvolcano_atlas::cli::{run, Cli};
use mudvolcano_atlas::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
