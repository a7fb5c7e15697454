use clap::Parser;
use quartz_dns_application::ResolveQueryUseCase;
use quartz_dns_domain::config::CliOverrides;
use quartz_dns_infrastructure::dns::server::DnsServerHandler;
use quartz_dns_infrastructure::repositories::SqliteRecordRepository;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "quartz-dns")]
#[command(version)]
#[command(about = "Quartz DNS - SQLite-backed authoritative DNS resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Record store path (SQLite file, opened read-only)
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Quartz DNS v{}", env!("CARGO_PKG_VERSION"));

    // Malformed fallback literals fail here, once, not per query.
    let fallback = config.validate()?;

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let store = Arc::new(SqliteRecordRepository::new(pool));
    let use_case = Arc::new(ResolveQueryUseCase::new(store, fallback));
    let handler = DnsServerHandler::new(use_case, fallback);

    let bind_addr = format!(
        "{}:{}",
        config.server.bind_address, config.server.dns_port
    );
    server::dns::start_dns_server(bind_addr, handler, config.server.tcp_timeout_secs).await
}
