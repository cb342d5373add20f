use reqwest::Url;
use std::time::Duration;

use crate::{DictionaryProvider, LookupError, ProviderMetadata, RawResponse};

/// Client for the Merriam-Webster reference API
/// (`{base}/{dictionary}/json/{word}?key=...`).
#[derive(Clone)]
pub struct MerriamWebsterClient {
    client: reqwest::Client,
    base_url: String,
    dictionary: String,
    api_key: String,
}

impl MerriamWebsterClient {
    /// One bounded attempt per lookup, no retry: lookups are
    /// user-interactive and a failure should surface immediately.
    pub fn new(
        base_url: String,
        dictionary: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            dictionary,
            api_key,
        })
    }

    fn lookup_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Api(format!("invalid base url: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::Api("base url cannot have segments".to_string()))?
            .push(&self.dictionary)
            .push("json")
            .push(word);

        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(url)
    }
}

#[async_trait::async_trait]
impl DictionaryProvider for MerriamWebsterClient {
    async fn lookup(&self, word: &str) -> Result<RawResponse, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::Authentication);
        }

        let url = self.lookup_url(word)?;
        tracing::debug!(dictionary = %self.dictionary, word, "dictionary lookup");

        let response = self.client.get(url).send().await?;

        if response.status() == 429 {
            return Err(LookupError::RateLimited);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(LookupError::Authentication);
        }

        if !response.status().is_success() {
            return Err(LookupError::Api(format!("HTTP {}", response.status())));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("unrecognized provider body: {e}");
            LookupError::MalformedResponse(e.to_string())
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: format!("merriam-webster/{}", self.dictionary),
            requires_api_key: true,
        }
    }
}
