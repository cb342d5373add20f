/// Query cleanup before any headword comparison
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Variant forms carry `*` emphasis markers inside the word
pub fn strip_emphasis(form: &str) -> String {
    form.replace('*', "")
}
