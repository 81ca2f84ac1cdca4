use clap::Parser;
use log::{debug, error};
use recipe_query::{load_config, run_report, RecipeQueryError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Run ingredient, title and time queries over a scraped recipe collection
#[derive(Parser, Debug)]
#[command(name = "recipe-query")]
#[command(version)]
struct Cli {
    /// Recipe JSON file (overrides data_path from the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file to use instead of ./recipe-query.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows shown per query (overrides preview_rows from the config)
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RecipeQueryError> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(limit) = cli.limit {
        config.preview_rows = limit;
    }
    debug!("{:#?}", config);

    let report = run_report(&config)?;
    print!("{}", report);
    Ok(())
}
