use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_lookup_timeout_seconds() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Upper bound on one provider request; lookups are user-interactive
    /// and must fail fast rather than retry.
    #[serde(default = "default_lookup_timeout_seconds")]
    pub lookup_timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_seconds: default_lookup_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let lookup_timeout_seconds = env::var("LOOKUP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10); // 10 seconds default

        Self {
            lookup_timeout_seconds,
        }
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }
}
