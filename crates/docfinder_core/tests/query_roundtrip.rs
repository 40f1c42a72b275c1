use std::sync::Once;

use docfinder_core::{
    decode_query, encode_query, ConsultationMode, FilterState, QueryPatch, SortKey,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn full_state() -> FilterState {
    FilterState {
        search_term: "dr. rao".to_string(),
        mode: ConsultationMode::VideoConsult,
        selected_specialties: vec!["Cardiologist".to_string(), "ENT".to_string()],
        sort: SortKey::Fees,
    }
}

#[test]
fn default_state_encodes_to_empty_query() {
    init_logging();
    assert_eq!(encode_query(&FilterState::default()), "");
}

#[test]
fn decode_of_encode_restores_every_non_default_field() {
    init_logging();
    let original = full_state();
    let query = encode_query(&original);

    let mut restored = FilterState::default();
    restored.apply(decode_query(&query));
    assert_eq!(restored, original);
}

#[test]
fn reapplying_own_query_is_a_no_op() {
    init_logging();
    let mut state = full_state();
    let snapshot = state.clone();
    state.apply(decode_query(&encode_query(&snapshot)));
    assert_eq!(state, snapshot);
}

#[test]
fn absent_fields_leave_state_untouched() {
    init_logging();
    let mut state = full_state();
    state.apply(decode_query("sort=experience"));

    assert_eq!(state.search_term, "dr. rao");
    assert_eq!(state.mode, ConsultationMode::VideoConsult);
    assert_eq!(state.selected_specialties.len(), 2);
    assert_eq!(state.sort, SortKey::Experience);
}

#[test]
fn last_value_wins_for_repeated_scalar_keys() {
    init_logging();
    let patch = decode_query("search=first&search=second&sort=fees&sort=experience");
    assert_eq!(patch.search_term.as_deref(), Some("second"));
    assert_eq!(patch.sort, Some(SortKey::Experience));
}

#[test]
fn specialty_keys_collect_in_order_without_duplicates() {
    init_logging();
    let patch = decode_query("specialty=ENT&specialty=Cardiologist&specialty=ENT");
    assert_eq!(
        patch.specialties,
        Some(vec!["ENT".to_string(), "Cardiologist".to_string()])
    );
}

#[test]
fn empty_valued_and_unknown_keys_patch_nothing() {
    init_logging();
    assert!(decode_query("").is_empty());
    assert!(decode_query("search=&mode=&sort=&specialty=").is_empty());
    assert!(decode_query("page=3&utm_source=mail").is_empty());
}

#[test]
fn leading_question_mark_is_tolerated() {
    init_logging();
    let patch = decode_query("?search=rao");
    assert_eq!(patch.search_term.as_deref(), Some("rao"));
}

#[test]
fn unrecognized_mode_and_sort_round_trip_verbatim() {
    init_logging();
    let mut state = FilterState::default();
    state.apply(decode_query("mode=Home+Visit&sort=rating"));

    assert_eq!(
        state.mode,
        ConsultationMode::Unrecognized("Home Visit".to_string())
    );
    assert_eq!(state.sort, SortKey::Unrecognized("rating".to_string()));
    assert_eq!(encode_query(&state), "mode=Home+Visit&sort=rating");
}

#[test]
fn spaces_survive_the_round_trip() {
    init_logging();
    let state = FilterState {
        mode: ConsultationMode::InClinic,
        search_term: "dr a".to_string(),
        ..FilterState::default()
    };
    let query = encode_query(&state);
    assert_eq!(query, "search=dr+a&mode=In+Clinic");

    // Percent-escaped spaces decode the same way as plus signs.
    let patch = decode_query("search=dr%20a&mode=In%20Clinic");
    assert_eq!(patch.search_term.as_deref(), Some("dr a"));
    assert_eq!(patch.mode, Some(ConsultationMode::InClinic));
}

#[test]
fn recognized_query_content_survives_encode_after_decode() {
    init_logging();
    let query = "search=rao&mode=Video+Consult&sort=fees&specialty=ENT&specialty=Cardiologist";
    let mut state = FilterState::default();
    state.apply(decode_query(query));
    assert_eq!(encode_query(&state), query);
}

#[test]
fn patch_emptiness_reflects_recognized_content() {
    init_logging();
    assert!(QueryPatch::default().is_empty());
    assert!(!decode_query("search=x").is_empty());
}
