use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read from the environment.
///
/// - `PORT`: listen port, defaults to 8080.
/// - `HABIT_SEED_PATH`: optional JSON file replacing the built-in habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let seed_path = lookup("HABIT_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self { port, seed_path }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
