use std::env;

use serde::{Deserialize, Serialize};

fn default_dictionary() -> String {
    "collegiate".to_string()
}

fn default_api_url() -> String {
    "https://dictionaryapi.com/api/v3/references".to_string()
}

fn default_hide_offensive() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Provider dictionary identifier, e.g. "collegiate" or "sd3"
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Skip entries the provider marks as offensive
    #[serde(default = "default_hide_offensive")]
    pub hide_offensive: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            api_key: String::new(),
            api_url: default_api_url(),
            hide_offensive: default_hide_offensive(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let dictionary = env::var("DICTIONARY").unwrap_or_else(|_| default_dictionary());

        let api_key = env::var("DICTIONARY_API_KEY").unwrap_or_default();

        let api_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());

        let hide_offensive = env::var("HIDE_OFFENSIVE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_hide_offensive);

        Self {
            dictionary,
            api_key,
            api_url,
            hide_offensive,
        }
    }
}
