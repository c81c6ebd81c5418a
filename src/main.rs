use anyhow::Result;
use clap::{Parser, Subcommand};
use quakemap::{generate_commands, render};
use tracing::{info, warn};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both feeds and write every configured export
    Run {
        #[clap(short, long, default_value = "quakemap.yaml")]
        config: String,
    },
    /// Write a default configuration file
    Init {
        #[clap(short, long, default_value = "quakemap.yaml")]
        config: String,
    },
    Generate {
        #[clap(subcommand)]
        command: GenerateCommands,
    },
    /// Serve the map over HTTP, fetching the feeds on every page load
    #[cfg(feature = "server")]
    Serve {
        #[clap(short, long, default_value = "3000")]
        port: u16,
        #[clap(short, long)]
        config: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum GenerateCommands {
    Template { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Run { config } => {
            info!("Running config: {}", config);
            let report = render::execute_render(&config).await?;
            if !report.all_rendered() {
                warn!(
                    "Some feeds did not render: earthquakes {:?}, tectonic plates {:?}",
                    report.earthquakes.state, report.tectonic_plates.state
                );
            }
        }
        Commands::Init { config } => {
            generate_commands::generate_config(&config)?;
        }
        Commands::Generate { command } => match command {
            GenerateCommands::Template { name } => {
                generate_commands::generate_template(name);
            }
        },
        #[cfg(feature = "server")]
        Commands::Serve {
            port,
            config,
            cors_origin,
        } => {
            use quakemap::config::MapConfig;

            let config = match config {
                Some(path) => MapConfig::load(&path)?,
                None => MapConfig::default(),
            };
            info!("Starting server on port {}", port);
            quakemap::server::start_server(port, config, cors_origin.as_deref()).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .without_time()
        .init();
}
