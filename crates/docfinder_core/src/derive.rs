//! Pure derivation of the visible doctor list from raw data plus filter
//! state, and the facet/suggestion helpers the filter panel feeds on.

use std::cmp::Reverse;

use crate::doctor::{experience_value, fee_value, Doctor};
use crate::filters::{ConsultationMode, FilterState, SortKey};

/// How many name suggestions the search dropdown shows.
pub const SUGGESTION_LIMIT: usize = 5;

/// Applies search, mode and specialty filters in that order, then the
/// sort. Pure: never mutates the source records, deterministic for equal
/// inputs, and stable for equal sort keys.
pub fn derive_visible(doctors: &[Doctor], filters: &FilterState) -> Vec<Doctor> {
    let needle = filters.search_term.to_lowercase();

    let mut result: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| needle.is_empty() || doctor.name.to_lowercase().contains(&needle))
        .filter(|doctor| matches_mode(doctor, &filters.mode))
        .filter(|doctor| matches_specialties(doctor, &filters.selected_specialties))
        .cloned()
        .collect();

    match filters.sort {
        SortKey::Fees => result.sort_by_key(|doctor| fee_value(&doctor.fees)),
        SortKey::Experience => {
            result.sort_by_key(|doctor| Reverse(experience_value(&doctor.experience)))
        }
        SortKey::Unset | SortKey::Unrecognized(_) => {}
    }

    result
}

/// Deduplicated, lexically sorted specialty names across the whole
/// collection.
pub fn specialty_facets(doctors: &[Doctor]) -> Vec<String> {
    let mut names: Vec<String> = doctors
        .iter()
        .flat_map(|doctor| doctor.specialities.iter().map(|s| s.name.clone()))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// The first `limit` doctors whose name contains the term,
/// case-insensitively. Blank input suggests nothing.
pub fn search_suggestions<'a>(doctors: &'a [Doctor], term: &str, limit: usize) -> Vec<&'a Doctor> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    doctors
        .iter()
        .filter(|doctor| doctor.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

fn matches_mode(doctor: &Doctor, mode: &ConsultationMode) -> bool {
    match mode {
        ConsultationMode::VideoConsult => doctor.video_consult,
        ConsultationMode::InClinic => doctor.in_clinic,
        ConsultationMode::Unset | ConsultationMode::All | ConsultationMode::Unrecognized(_) => true,
    }
}

fn matches_specialties(doctor: &Doctor, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    doctor
        .specialities
        .iter()
        .any(|speciality| selected.iter().any(|name| *name == speciality.name))
}
