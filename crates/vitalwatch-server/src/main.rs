use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitalwatch_server::app;
use vitalwatch_server::config::ServerConfig;

#[allow(clippy::print_stderr)]
fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  vitalwatch-server [config.toml]    Evaluate all patients in the configured data file");
    eprintln!("  vitalwatch-server --help           Show this message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vitalwatch=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        other => {
            let config_path = other.unwrap_or("config/server.toml");
            let config = ServerConfig::load(config_path)?;
            tracing::info!(config = config_path, data_file = %config.data_file, "Starting evaluation");
            app::run(&config)?;
            Ok(())
        }
    }
}
