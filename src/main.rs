// src/main.rs
// Jukebox - MCP music playback and workbook lookup tools

use anyhow::Result;
use clap::{Parser, Subcommand};
use jukebox::{config::JukeboxConfig, mcp::JukeboxServer, web};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "jukebox")]
#[command(about = "MCP music playback and workbook lookup tools for voice assistants")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,

    /// Expose the music directory over HTTP for stream playback
    ServeFiles {
        /// Port to listen on (overrides MUSIC_HTTP_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

async fn run_mcp_server() -> Result<()> {
    let config = JukeboxConfig::from_env();
    info!(
        "serving playback tools for {}",
        config.music_dir.display()
    );

    let server = JukeboxServer::new(config);

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_file_server(port: Option<u16>) -> Result<()> {
    let config = JukeboxConfig::from_env();
    let port = port.unwrap_or(config.http_port);

    web::serve_files(&config.music_dir, port).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet on stdio serve so logs never leak into the MCP channel
    let log_level = match &cli.command {
        Some(Commands::Serve) | None => Level::WARN,
        Some(Commands::ServeFiles { .. }) => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => run_mcp_server().await?,
        Some(Commands::ServeFiles { port }) => run_file_server(port).await?,
    }

    Ok(())
}
