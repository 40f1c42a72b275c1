use std::sync::Once;

use docfinder_core::{
    init, update, AppState, ConsultationMode, Effect, Msg, SortKey,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn sync_effect(query: &str) -> Vec<Effect> {
    vec![Effect::SyncLocation {
        query: query.to_string(),
    }]
}

#[test]
fn init_starts_loading_and_fetches() {
    init_logging();
    let (state, effects) = init("");
    assert!(state.is_loading());
    assert_eq!(effects, vec![Effect::FetchDoctors]);
}

#[test]
fn init_seeds_filters_from_a_shared_link() {
    init_logging();
    let (state, effects) = init("search=rao&mode=Video+Consult&specialty=ENT");
    assert_eq!(state.filters().search_term, "rao");
    assert_eq!(state.filters().mode, ConsultationMode::VideoConsult);
    assert_eq!(state.filters().selected_specialties, ["ENT"]);
    // Already canonical: nothing to normalize.
    assert_eq!(effects, vec![Effect::FetchDoctors]);
}

#[test]
fn init_normalizes_a_non_canonical_seed() {
    init_logging();
    let (state, effects) = init("?utm_source=mail&search=rao");
    assert_eq!(state.filters().search_term, "rao");
    assert_eq!(
        effects,
        vec![
            Effect::FetchDoctors,
            Effect::SyncLocation {
                query: "search=rao".to_string(),
            },
        ]
    );
}

#[test]
fn search_change_syncs_the_location() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = update(state, Msg::SearchChanged("rao".to_string()));

    assert_eq!(state.filters().search_term, "rao");
    assert_eq!(effects, sync_effect("search=rao"));
    assert!(state.consume_dirty());
}

#[test]
fn unchanged_search_emits_nothing() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("rao".to_string()));
    let (mut state, effects) = update(state, Msg::SearchChanged("rao".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty()); // still dirty from the first change
}

#[test]
fn suggestion_pick_replaces_the_search_term() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("ra".to_string()));
    let (state, effects) = update(state, Msg::SuggestionPicked("Dr. Rao".to_string()));
    assert_eq!(state.filters().search_term, "Dr. Rao");
    assert_eq!(effects, sync_effect("search=Dr.+Rao"));
}

#[test]
fn mode_reselection_toggles_off() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::ModeSelected(ConsultationMode::VideoConsult),
    );
    assert_eq!(state.filters().mode, ConsultationMode::VideoConsult);
    assert_eq!(effects, sync_effect("mode=Video+Consult"));

    let (state, effects) = update(state, Msg::ModeSelected(ConsultationMode::VideoConsult));
    assert_eq!(state.filters().mode, ConsultationMode::Unset);
    assert_eq!(effects, sync_effect(""));
}

#[test]
fn sort_reselection_toggles_off() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SortSelected(SortKey::Fees));
    assert_eq!(state.filters().sort, SortKey::Fees);

    let (state, effects) = update(state, Msg::SortSelected(SortKey::Fees));
    assert_eq!(state.filters().sort, SortKey::Unset);
    assert_eq!(effects, sync_effect(""));
}

#[test]
fn specialty_toggle_adds_then_removes() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SpecialtyToggled("ENT".to_string()));
    assert_eq!(state.filters().selected_specialties, ["ENT"]);
    assert_eq!(effects, sync_effect("specialty=ENT"));

    let (state, effects) = update(state, Msg::SpecialtyToggled("ENT".to_string()));
    assert!(state.filters().selected_specialties.is_empty());
    assert_eq!(effects, sync_effect(""));
}

#[test]
fn specialties_can_be_replaced_wholesale() {
    init_logging();
    let msg = Msg::SpecialtiesSelected(vec!["ENT".to_string(), "Cardiologist".to_string()]);
    let (state, effects) = update(AppState::new(), msg);
    assert_eq!(state.filters().selected_specialties, ["ENT", "Cardiologist"]);
    assert_eq!(effects, sync_effect("specialty=ENT&specialty=Cardiologist"));
}

#[test]
fn clear_filters_keeps_the_search_term() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("rao".to_string()));
    let (state, _) = update(state, Msg::ModeSelected(ConsultationMode::InClinic));
    let (state, _) = update(state, Msg::SpecialtyToggled("ENT".to_string()));

    let (state, effects) = update(state, Msg::ClearFilters);
    assert_eq!(state.filters().search_term, "rao");
    assert_eq!(state.filters().mode, ConsultationMode::Unset);
    assert!(state.filters().selected_specialties.is_empty());
    assert_eq!(effects, sync_effect("search=rao"));
}

#[test]
fn location_change_overwrites_only_present_fields() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("rao".to_string()));
    let (state, _) = update(state, Msg::SortSelected(SortKey::Fees));

    let (state, effects) = update(
        state,
        Msg::LocationChanged("mode=In+Clinic".to_string()),
    );
    assert_eq!(state.filters().search_term, "rao");
    assert_eq!(state.filters().mode, ConsultationMode::InClinic);
    assert_eq!(state.filters().sort, SortKey::Fees);
    assert_eq!(effects, sync_effect("search=rao&mode=In+Clinic&sort=fees"));
}

#[test]
fn reapplying_the_canonical_location_is_silent() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchChanged("rao".to_string()));
    let Effect::SyncLocation { query } = effects[0].clone() else {
        panic!("expected a location sync");
    };

    // The environment echoing our own update back must not loop.
    let (mut state, effects) = update(state, Msg::LocationChanged(query));
    assert!(effects.is_empty());
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::Tick);
    assert!(!state.consume_dirty());
}

#[test]
fn ticks_and_noops_change_nothing() {
    init_logging();
    let mut state = AppState::new();
    state.consume_dirty();
    let before = state.clone();

    let (state, effects) = update(state, Msg::Tick);
    assert_eq!(state, before);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::NoOp);
    assert_eq!(state, before);
    assert!(effects.is_empty());
}
