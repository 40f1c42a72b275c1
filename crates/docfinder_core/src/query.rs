//! Query-string codec: the bidirectional mapping between `FilterState`
//! and the shareable `search`/`mode`/`sort`/`specialty` parameters.

use url::form_urlencoded;

use crate::filters::{ConsultationMode, FilterState, SortKey};

/// The subset of filter fields present in a decoded query. Absent fields
/// stay `None` and must leave the live state untouched when applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPatch {
    pub search_term: Option<String>,
    pub mode: Option<ConsultationMode>,
    pub sort: Option<SortKey>,
    pub specialties: Option<Vec<String>>,
}

impl QueryPatch {
    pub fn is_empty(&self) -> bool {
        self == &QueryPatch::default()
    }
}

/// Decodes a raw query string (with or without a leading '?').
///
/// `search`, `mode` and `sort` take the last value when repeated;
/// repeated `specialty` keys collect in encounter order. Keys that are
/// absent, empty-valued, or unknown patch nothing. Never fails.
pub fn decode_query(query: &str) -> QueryPatch {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut patch = QueryPatch::default();
    let mut specialties: Vec<String> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "search" => patch.search_term = Some(value.into_owned()),
            "mode" => patch.mode = Some(ConsultationMode::from_param(&value)),
            "sort" => patch.sort = Some(SortKey::from_param(&value)),
            "specialty" => {
                if !specialties.iter().any(|s| *s == *value) {
                    specialties.push(value.into_owned());
                }
            }
            _ => {}
        }
    }

    if !specialties.is_empty() {
        patch.specialties = Some(specialties);
    }
    patch
}

/// Encodes the filter state; default fields emit nothing, so the default
/// state round-trips to an empty string.
pub fn encode_query(filters: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !filters.search_term.is_empty() {
        serializer.append_pair("search", &filters.search_term);
    }
    if !filters.mode.is_unset() {
        serializer.append_pair("mode", filters.mode.as_param());
    }
    if !filters.sort.is_unset() {
        serializer.append_pair("sort", filters.sort.as_param());
    }
    for specialty in &filters.selected_specialties {
        serializer.append_pair("specialty", specialty);
    }
    serializer.finish()
}

impl FilterState {
    /// Overwrites only the fields the patch carries.
    pub fn apply(&mut self, patch: QueryPatch) {
        if let Some(search_term) = patch.search_term {
            self.search_term = search_term;
        }
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(specialties) = patch.specialties {
            self.selected_specialties = specialties;
        }
    }
}
