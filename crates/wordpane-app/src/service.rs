use uuid::Uuid;
use wordpane_dictionary::{DictionaryProvider, LookupError};
use wordpane_types::DefinitionView;

/// Host-side definition service: one provider call per lookup, a fresh
/// view out, no state shared between calls.
pub struct Definitions<P> {
    provider: P,
    hide_offensive: bool,
}

impl<P: DictionaryProvider> Definitions<P> {
    pub fn new(provider: P, hide_offensive: bool) -> Self {
        Self {
            provider,
            hide_offensive,
        }
    }

    /// The inbound operation: look `word` up, format the response, and
    /// wrap it with a per-call container token and a display title.
    pub async fn get_definition(&self, word: &str) -> Result<DefinitionView, LookupError> {
        tracing::debug!(word, "get_definition");

        let raw = self.provider.lookup(word).await?;
        let view = wordpane_core::format(word, &raw, self.hide_offensive);

        Ok(DefinitionView {
            containerid: Uuid::new_v4().simple().to_string(),
            title: format!("Definition for: {word}"),
            view,
        })
    }
}
