use serde::Deserialize;

/// Entry metadata. `id` is `headword` or `headword:homograph-index`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeta {
    pub id: String,
    #[serde(default)]
    pub offensive: bool,
}

/// A variant spelling. `va` may carry `*` emphasis markers inside the form.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVariant {
    #[serde(rename = "vl", default)]
    pub label: String,
    #[serde(rename = "va")]
    pub form: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCrossRefTarget {
    /// Colon-delimited like `meta.id`
    #[serde(rename = "cxt")]
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCrossRef {
    #[serde(rename = "cxl", default)]
    pub label: String,
    #[serde(rename = "cxtis", default)]
    pub targets: Vec<RawCrossRefTarget>,
}

/// One dictionary sense as returned by the provider. Fields we do not
/// consume are ignored on deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub meta: RawMeta,
    #[serde(rename = "fl", default)]
    pub functional_label: String,
    #[serde(rename = "shortdef", default)]
    pub short_definitions: Vec<String>,
    #[serde(rename = "vrs", default)]
    pub variants: Vec<RawVariant>,
    #[serde(rename = "cxs", default)]
    pub cross_references: Vec<RawCrossRef>,
}

/// The provider answers with one of two shapes: a list of entries, or a
/// bare list of close-match strings when nothing matched the query.
///
/// `Entries` must stay first: an empty array means "nothing found" and has
/// to parse as an empty entry list, not as zero suggestions.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    Entries(Vec<RawEntry>),
    Suggestions(Vec<String>),
}
