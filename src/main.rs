use clap::Parser;
use env2sph::{cli::Cli, error::Error};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    Cli::parse().run()?;

    Ok(())
}
