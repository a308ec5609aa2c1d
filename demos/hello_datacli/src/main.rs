//! `hello_datacli` entry point: resolve arguments, build the greeting, print it.
//!
//! Usage errors exit with status 2 and `--help` exits with status 0, both
//! handled by clap. An unresolved environment-backed argument or a failed
//! validation is reported through `color-eyre` and exits with status 1.

use datacli::DataCli as _;
use tracing_subscriber::EnvFilter;

use hello_datacli::cli::Greeting;
use hello_datacli::error::Result;
use hello_datacli::message::{build_plan, print_plan};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let greeting = Greeting::parse()?;
    tracing::debug!(?greeting, "resolved arguments");
    let plan = build_plan(&greeting)?;
    print_plan(&plan)?;
    Ok(())
}
