use std::sync::Arc;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
    westeros_store::FixtureStore,
};

#[derive(Parser)]
#[command(name = "westeros", about = "Westeros — GraphQL of Thrones demo server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    // Server arguments (used when no subcommand is provided, or with `serve`)
    /// Address to bind to (overrides config value).
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Port to listen on (overrides config value).
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Path to a config file (skips the default discovery locations).
    #[arg(long, global = true, env = "WESTEROS_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server (default when no subcommand is provided).
    Serve,
    /// Print the schema in SDL form and exit.
    Schema,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<westeros_config::WesterosConfig> {
    let mut config = match cli.config {
        Some(ref path) => westeros_config::load_config(path)?,
        None => westeros_config::discover_and_load(),
    };

    // CLI args override config values
    if let Some(ref bind) = cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "westeros starting");

    match cli.command {
        // Default: start the server when no subcommand is provided
        None | Some(Commands::Serve) => {
            let config = load_config(&cli)?;
            westeros_gateway::server::start_gateway(&config).await
        },
        Some(Commands::Schema) => {
            let (tx, _) = tokio::sync::broadcast::channel(1);
            let schema = westeros_graphql::build_schema(Arc::new(FixtureStore::new()), tx);
            println!("{}", schema.sdl());
            Ok(())
        },
    }
}
