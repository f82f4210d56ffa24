use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Parser)]
pub(crate) struct ServerConfig {
    #[arg(long, env = "LISTEN_ADDRESS", default_value = "127.0.0.1:8000")]
    pub(crate) listen: SocketAddr,
}
