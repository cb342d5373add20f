use serde::{Deserialize, Serialize};

/// One tab in the definition tab strip. `target` holds the id of the panel
/// this tab reveals; serialized field names are the external contract and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub selected: bool,
    pub id: String,
    pub target: String,
    pub title: String,
}

/// "did you mean X, see Y" note: the variant label plus the variant form
/// with emphasis markers stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedNote {
    pub label: String,
    pub form: String,
}

/// One cross-reference group. `targets` are bare headwords; turning them
/// into clickable markup is the presenter's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub label: String,
    pub targets: Vec<String>,
}

/// A single short definition with its 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedDefinition {
    pub num: u32,
    pub text: String,
}

/// One definition panel, index-paired with its tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub word: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedNote>,
    pub fl: String,
    pub def: Vec<NumberedDefinition>,
    pub cxs: Vec<CrossReference>,
}

/// Provider-suggested alternate spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseMatch {
    pub word: String,
}

/// The formatted result of one lookup. `tabs` and `panels` are always the
/// same length, with `tabs[i].target == panels[i].id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub matchfound: bool,
    pub nomatch: bool,
    pub closematch: bool,
    pub showtabs: bool,
    pub tabs: Vec<Tab>,
    pub panels: Vec<Panel>,
    pub closematches: Vec<CloseMatch>,
}

impl ViewModel {
    /// A result for the provider's close-match shape.
    pub fn close_matches(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            matchfound: false,
            nomatch: false,
            closematch: true,
            showtabs: false,
            tabs: vec![],
            panels: vec![],
            closematches: words.into_iter().map(|word| CloseMatch { word }).collect(),
        }
    }
}

/// The inbound `get_definition` result: a per-call container token and a
/// display title wrapped around the view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionView {
    pub containerid: String,
    pub title: String,
    #[serde(flatten)]
    pub view: ViewModel,
}
