use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod core;
mod server;

use config::ServerConfig;

/// Time MCP Server
///
/// Exposes two MCP tools over streamable HTTP:
/// - get_current_time: current time in an IANA timezone
/// - convert_time: convert a wall-clock time between two timezones
#[derive(Parser, Debug)]
#[command(name = "time-mcp-server")]
#[command(about = "MCP server for timezone-aware time operations")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Default IANA timezone used when a request omits one
    #[arg(long, env = "LOCAL_TIMEZONE", default_value = "Asia/Tokyo")]
    timezone: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let config = ServerConfig::new(&args.timezone, args.port).map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running Time MCP server: {e}");
        return Err(e);
    }

    Ok(())
}
