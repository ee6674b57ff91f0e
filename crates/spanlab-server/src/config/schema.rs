use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use spanlab_core::error::{Result, SpanLabError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        self.server.validate()
    }

    /// Socket address the service binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| SpanLabError::BadRequest(format!("server.host is not an IP address: {e}")))?;
        Ok(SocketAddr::new(host, self.server.port))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(SpanLabError::BadRequest(
                "server.host must be an IP address".into(),
            ));
        }
        if self.port == 0 {
            return Err(SpanLabError::BadRequest(
                "server.port must be nonzero".into(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}
