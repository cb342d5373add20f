use wordpane_dictionary::raw::{RawEntry, RawResponse};
use wordpane_types::{CrossReference, NumberedDefinition, Panel, RelatedNote, Tab, ViewModel};

use crate::normalize::{normalize_query, strip_emphasis};

/// Reshape a raw provider response into the tab/panel view model.
///
/// Pure over its arguments; never fails for domain reasons. "Nothing
/// found" and "close matches only" are normal outcomes carried in the
/// returned flags.
pub fn format(query: &str, raw: &RawResponse, hide_offensive: bool) -> ViewModel {
    let query = normalize_query(query);

    match raw {
        RawResponse::Suggestions(words) => ViewModel::close_matches(words.iter().cloned()),
        RawResponse::Entries(entries) => format_entries(&query, entries, hide_offensive),
    }
}

fn format_entries(query: &str, entries: &[RawEntry], hide_offensive: bool) -> ViewModel {
    let mut tabs = Vec::new();
    let mut panels = Vec::new();
    let mut matchfound = false;

    // The provider returns similar words alongside the query (e.g.
    // "battle" also yields "battle-ax"). The first accepted entry decides
    // exactness: an exact first entry restricts the rest to exact
    // headwords, an inexact first entry lets everything through so the
    // "did you mean" cluster surfaces.
    let mut exact = true;

    // 1-based match index; counts every entry that survives the
    // offensiveness filter, including ones the exact gate later skips,
    // so tab/panel ids track the provider's ordering.
    let mut x = 0u32;

    for entry in entries {
        if hide_offensive && entry.meta.offensive {
            continue;
        }
        matchfound = true;
        x += 1;

        let (headword, homograph) = split_id(&entry.meta.id);
        let headword_lc = headword.to_lowercase();

        if x == 1 && headword_lc != query {
            exact = false;
        }
        if headword_lc != query && exact && x != 1 {
            continue;
        }

        let selected = x == 1;
        let panel_id = format!("panel_def_{x}");

        let mut title = headword.to_string();
        if let Some(index) = homograph {
            title.push_str(&format!(" ({index})"));
        }

        tabs.push(Tab {
            selected,
            id: format!("tab_def_{x}"),
            target: panel_id.clone(),
            title,
        });

        // For an included near-miss, find which variant it matched on;
        // the last matching variant wins, as the reference output does.
        let related = if headword_lc != query {
            entry
                .variants
                .iter()
                .filter(|v| strip_emphasis(&v.form) == query)
                .next_back()
                .map(|v| RelatedNote {
                    label: v.label.clone(),
                    form: strip_emphasis(&v.form),
                })
        } else {
            None
        };

        let cxs = entry
            .cross_references
            .iter()
            .map(|cx| CrossReference {
                label: cx.label.clone(),
                targets: cx
                    .targets
                    .iter()
                    .map(|t| split_id(&t.target).0.to_string())
                    .collect(),
            })
            .collect();

        let def = entry
            .short_definitions
            .iter()
            .enumerate()
            .map(|(i, text)| NumberedDefinition {
                num: i as u32 + 1,
                text: text.clone(),
            })
            .collect();

        panels.push(Panel {
            id: panel_id,
            word: headword.to_string(),
            selected,
            related,
            fl: entry.functional_label.clone(),
            def,
            cxs,
        });
    }

    ViewModel {
        matchfound,
        nomatch: entries.is_empty(),
        closematch: false,
        showtabs: tabs.len() > 1,
        tabs,
        panels,
        closematches: vec![],
    }
}

/// Split a colon-delimited entry id into headword and homograph index.
fn split_id(id: &str) -> (&str, Option<&str>) {
    let mut parts = id.split(':');
    let headword = parts.next().unwrap_or(id);
    (headword, parts.next())
}
