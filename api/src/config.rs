use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection URL; the scheme picks the backend (sqlite:// or postgres://)
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = match env::var("HOST") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("HOST is not an IP address: {}", raw))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a port number: {}", raw))?,
            Err(_) => 8000,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://tasks.db?mode=rwc".to_string()),
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
