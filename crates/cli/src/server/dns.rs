use hickory_server::ServerFuture;
use quartz_dns_infrastructure::dns::server::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    tcp_timeout_secs: u64,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(UdpSocket::bind(socket_addr).await?);
    server.register_listener(
        TcpListener::bind(socket_addr).await?,
        Duration::from_secs(tcp_timeout_secs),
    );

    info!(bind_address = %socket_addr, "DNS server ready (UDP + TCP)");

    server.block_until_done().await?;
    Ok(())
}
