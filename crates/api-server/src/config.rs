//! Server configuration read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".taskboard-data";
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8081);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Seed file inserted into an empty task store at start-up
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let data_dir = value("TASKBOARD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let bind_addr = match value("TASKBOARD_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid TASKBOARD_BIND_ADDR {:?}, using default", raw);
                SocketAddr::from(DEFAULT_BIND_ADDR)
            }),
            None => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        Self {
            data_dir,
            bind_addr,
            seed_file: value("TASKBOARD_SEED_FILE").map(PathBuf::from),
        }
    }
}
