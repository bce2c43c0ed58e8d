use crate::domain::FirmName;
use crate::grouping::FirmIndex;

/// Upper bound on lookup results. A fixed truncation policy, not a knob.
pub const MAX_LOOKUP_RESULTS: usize = 10;

/// Case-insensitive substring search over the firm catalog.
///
/// An empty query yields no matches rather than the whole catalog. Results
/// keep catalog order and are capped at [`MAX_LOOKUP_RESULTS`].
pub fn search_firm_names<'a>(index: &'a FirmIndex, query: &str) -> Vec<&'a FirmName> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    index
        .firm_names()
        .filter(|name| name.search_key().contains(&needle))
        .take(MAX_LOOKUP_RESULTS)
        .collect()
}
