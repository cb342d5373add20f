pub mod types;

pub use types::{
    CloseMatch, CrossReference, DefinitionView, NumberedDefinition, Panel, RelatedNote, Tab,
    ViewModel,
};
