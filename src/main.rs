use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use ddlgen::config::{self, GeneratorArgs};
use ddlgen::{GeneratorRegistry, commands};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "ddlgen.yaml", global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render CREATE statements for every object in the model
    Generate(GeneratorArgs),

    /// Render DROP statements for every object in the model
    Teardown(GeneratorArgs),

    /// List the available dialects
    Dialects,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    // Logs go to stderr so stdout carries only SQL
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    let registry = GeneratorRegistry::with_builtins();

    match cli.command {
        Commands::Dialects => commands::cmd_dialects(&registry),
        Commands::Generate(args) => {
            let config = resolve_config(&cli.config_file, args)?;
            info!("Generating schema script");
            commands::cmd_generate(&config, &registry)
        }
        Commands::Teardown(args) => {
            let config = resolve_config(&cli.config_file, args)?;
            info!("Generating teardown script");
            commands::cmd_teardown(&config, &registry)
        }
    }
}

fn resolve_config(config_file: &str, args: GeneratorArgs) -> Result<config::Config> {
    let (file_config, _root_dir) = config::load_config(config_file)?;
    let cli_config = config::ConfigInput {
        generator: Some(args.into()),
    };

    let config = config::ConfigBuilder::new()
        .with_file(file_config)
        .with_cli_args(cli_config)
        .resolve()?;

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}
