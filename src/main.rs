use pagegrid::cli::{parse_args, DemoCommand, VERSION};
use pagegrid::demo::{run_folders, run_form, run_gallery, run_recommendations};
use pagegrid::grid::GridConfig;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Handle --version before any initialization
    if command == DemoCommand::Version {
        println!("pagegrid {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagegrid=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GridConfig::from_env();
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(async {
        match command {
            DemoCommand::Folders => run_folders().await,
            DemoCommand::Gallery => run_gallery().await,
            DemoCommand::Form => run_form(),
            _ => run_recommendations(config).await,
        }
    })?;

    println!(
        "{:?} demo: {} pages fetched, {} reloads, {} images loaded, {} visible, {} valid fields",
        command,
        report.pages_fetched,
        report.reloads,
        report.images_loaded,
        report.final_visible,
        report.fields_valid
    );
    Ok(())
}
