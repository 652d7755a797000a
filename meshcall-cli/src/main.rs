use anyhow::Result;
use clap::Parser;
use meshcall::model::IceServerConfig;
use meshcall::server::{ServerConfig, serve};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meshcall")]
#[command(about = "Signaling server for mesh WebRTC calls")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "MESHCALL_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// STUN server URL handed to browsers. Repeatable.
    #[arg(long = "stun", value_name = "URL")]
    stun: Vec<String>,

    /// TURN server URL handed to browsers. Repeatable.
    #[arg(long = "turn", value_name = "URL")]
    turn: Vec<String>,

    #[arg(long, requires = "turn")]
    turn_username: Option<String>,

    #[arg(long, requires = "turn")]
    turn_credential: Option<String>,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut ice_servers: Vec<IceServerConfig> =
            self.stun.into_iter().map(IceServerConfig::stun).collect();

        if !self.turn.is_empty() {
            ice_servers.push(IceServerConfig {
                urls: self.turn,
                username: self.turn_username,
                credential: self.turn_credential,
            });
        }

        if ice_servers.is_empty() {
            ice_servers = IceServerConfig::default_stun();
        }

        ServerConfig {
            bind_addr: self.bind,
            ice_servers,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();

    serve(config).await
}
