use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;

pub mod dictionary;
pub mod network;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            network: NetworkConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
