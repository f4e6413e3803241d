use clap::{Parser, Subcommand};
use modelgate::{Config, ModelResolver, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "modelgate")]
#[command(about = "Rule-driven model name resolution for AI gateways")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use an explicit config file instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration
    Config,

    /// Resolve a model name and print the response/request pair
    Resolve {
        /// Inbound model name; omit to resolve the default model
        model: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.config.as_deref())?;

    match cli.command {
        Commands::Config => validate_config(cli.config.as_deref()),
        Commands::Resolve { model } => resolve_model(cli.config.as_deref(), model.as_deref()),
    }
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn resolve_model(config_path: Option<&Path>, model: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let resolver = ModelResolver::new(&config);

    let resolution = resolver.resolve(model);
    println!("response model: {}", resolution.response_model);
    println!("request model:  {}", resolution.request_model);

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    info!("Validating configuration...");

    match load_config(config_path) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!("  Log level: {}", config.log.level);
            println!(
                "  Model proxy entries: {}",
                config.routing.model_proxy.len()
            );

            if let Ok(config_dir) = Config::config_dir() {
                println!("  Config directory: {}", config_dir.display());
            }

            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            Err(e)
        }
    }
}

fn init_tracing(verbose: bool, config_path: Option<&Path>) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Load config to get logging preferences
    let config = load_config(config_path).unwrap_or_default();

    let registry = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter);

    // Add file logging if enabled
    if config.log.file_enabled {
        let log_dir = config.log_dir()?;

        let rotation = match config.log.rotation.as_str() {
            "minutely" => Rotation::MINUTELY,
            "hourly" => Rotation::HOURLY,
            "daily" => Rotation::DAILY,
            "never" => Rotation::NEVER,
            _ => {
                eprintln!(
                    "Warning: Invalid log rotation '{}', using daily",
                    config.log.rotation
                );
                Rotation::DAILY
            }
        };

        let file_appender = RollingFileAppender::new(rotation, &log_dir, &config.log.file_prefix);

        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

        registry
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .init();

        // Keep guard alive by leaking it (simple approach for now)
        std::mem::forget(_guard);
    } else {
        registry.init();
    }

    Ok(())
}
