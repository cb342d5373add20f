use wordpane_dictionary::raw::{RawEntry, RawMeta, RawResponse};


pub fn entry(id: &str, shortdefs: &[&str]) -> RawEntry {
    RawEntry {
        meta: RawMeta {
            id: id.to_string(),
            offensive: false,
        },
        functional_label: "noun".to_string(),
        short_definitions: shortdefs.iter().map(|d| d.to_string()).collect(),
        variants: vec![],
        cross_references: vec![],
    }
}

pub fn offensive_entry(id: &str, shortdefs: &[&str]) -> RawEntry {
    let mut entry = entry(id, shortdefs);
    entry.meta.offensive = true;
    entry
}

pub fn entries(entries: Vec<RawEntry>) -> RawResponse {
    RawResponse::Entries(entries)
}
