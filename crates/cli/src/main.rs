use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use stub_dns_application::ResolveQueryUseCase;
use stub_dns_domain::CliOverrides;
use stub_dns_infrastructure::dns::{QueryHandler, StubDnsServer};
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "stub-dns")]
#[command(version)]
#[command(about = "Stub DNS responder for integration tests")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Port for both the UDP and TCP listeners
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// JSON record table; the built-in example.com table is used when absent
    #[arg(short = 'r', long, value_name = "FILE")]
    records: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting stub DNS responder v{}", env!("CARGO_PKG_VERSION"));

    let table = bootstrap::load_record_table(cli.records.as_deref())?;

    let use_case = Arc::new(ResolveQueryUseCase::new(Arc::new(table)));
    let handler = Arc::new(QueryHandler::new(use_case));

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let mut server = StubDnsServer::new(handler);
    server.start(addr).await?;

    tokio::signal::ctrl_c().await?;
    info!("Interrupt received, shutting down");

    server.stop().await;
    info!("Shutdown complete");
    Ok(())
}
