pub mod merriam;
pub mod raw;

pub use merriam::MerriamWebsterClient;
pub use raw::{RawCrossRef, RawCrossRefTarget, RawEntry, RawMeta, RawResponse, RawVariant};

/// Dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Look up a word and return the provider's raw response
    async fn lookup(&self, word: &str) -> Result<RawResponse, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

/// Transport-level failures. "Nothing found" is never an error; the
/// provider reports it inside a well-formed [`RawResponse`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("authentication error")]
    Authentication,

    #[error("rate limit exceeded")]
    RateLimited,

    /// The body matched neither the entry shape nor the suggestion shape.
    /// Kept distinct from "no match" so provider API drift is detectable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
