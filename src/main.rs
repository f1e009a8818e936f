use anyhow::Context;
use clap::Parser;

use cedict_shuffler::{shuffler, utils, Cli, Config};

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    let mut rng = utils::time_seeded_rng();
    let output = shuffler::run(&config, &mut rng)
        .context("Failed to pick an entry")?;
    println!("{}", output);
    Ok(())
}
