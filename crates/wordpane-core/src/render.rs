//! Presentation-boundary helpers. The formatter stays markup-free; these
//! reproduce the legacy HTML for clients that still consume it. The
//! `data-define` attribute is the hook the presenter wires to trigger a
//! fresh lookup on click.

use wordpane_types::{CrossReference, RelatedNote};

/// Legacy markup for one cross-reference group: label in emphasis, then
/// the targets as relookup links.
///
/// Separator placement matches the reference output exactly, which only
/// joins targets from the third one on. Suspected defect; kept until the
/// product owner confirms the fix.
pub fn render_cross_reference(cx: &CrossReference) -> String {
    let mut html = format!("<i>{}</i> ", cx.label);

    for (i, target) in cx.targets.iter().enumerate() {
        if i > 1 {
            html.push_str(", ");
        }
        html.push_str(&format!("<a href=\"#\" data-define=\"{target}\">{target}</a>"));
    }

    html
}

/// Legacy markup for the "did you mean" note.
pub fn render_related_note(note: &RelatedNote) -> String {
    format!("<i>{}</i> {}", note.label, note.form)
}
