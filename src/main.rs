use clap::Parser;
use mcp_adapters::Adapter;
use mcp_adapters::core::config;
use mcp_adapters::server;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mcp-adapters",
    about = "Serve one tool adapter over stdio JSON-RPC"
)]
struct Args {
    /// Adapter to serve
    #[arg(value_enum)]
    adapter: Adapter,

    /// TOML config file (defaults to ~/.mcp-adapters/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level: {s}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // stdout carries protocol traffic, so logs go to stderr or a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match &args.log_file {
        Some(path) => WriteLogger::init(args.log_level, log_config, File::create(path)?)?,
        None => WriteLogger::init(args.log_level, log_config, std::io::stderr())?,
    }

    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config);

    server::run_stdio(args.adapter, &resolved).await?;
    Ok(())
}
