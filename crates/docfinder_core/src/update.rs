use crate::query::encode_query;
use crate::{AppState, ConsultationMode, Effect, LoadError, Msg, SortKey};

/// Builds the session state from the seed query (a shared link, possibly
/// empty) and kicks off the first fetch. If the seed is not already in
/// canonical form, a location sync normalizes it.
pub fn init(initial_query: &str) -> (AppState, Vec<Effect>) {
    let mut state = AppState::new();
    state.apply_query(initial_query);

    let mut effects = vec![Effect::FetchDoctors];
    let canonical = encode_query(state.filters());
    if canonical != initial_query.strip_prefix('?').unwrap_or(initial_query) {
        effects.push(Effect::SyncLocation { query: canonical });
    }
    (state, effects)
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(term) => sync_filters(&mut state, |s| s.set_search_term(term)),
        Msg::SuggestionPicked(name) => sync_filters(&mut state, |s| s.set_search_term(name)),
        Msg::ModeSelected(mode) => {
            // Re-selecting the active mode clears the filter.
            let next = if state.filters().mode == mode {
                ConsultationMode::Unset
            } else {
                mode
            };
            sync_filters(&mut state, |s| s.set_mode(next))
        }
        Msg::SpecialtyToggled(name) => sync_filters(&mut state, |s| s.toggle_specialty(&name)),
        Msg::SpecialtiesSelected(specialties) => {
            sync_filters(&mut state, |s| s.set_selected_specialties(specialties))
        }
        Msg::SortSelected(sort) => {
            let next = if state.filters().sort == sort {
                SortKey::Unset
            } else {
                sort
            };
            sync_filters(&mut state, |s| s.set_sort(next))
        }
        Msg::ClearFilters => sync_filters(&mut state, AppState::clear_filters),
        Msg::LocationChanged(query) => sync_filters(&mut state, |s| s.apply_query(&query)),
        Msg::DoctorsLoaded(doctors) => {
            state.set_doctors(doctors);
            Vec::new()
        }
        Msg::FetchFailed { kind, message } => {
            state.fail_load(LoadError { kind, message });
            Vec::new()
        }
        Msg::RetryRequested => {
            if state.is_loading() {
                Vec::new()
            } else {
                state.start_load();
                vec![Effect::FetchDoctors]
            }
        }
        Msg::ConnectivityChanged(true) => {
            state.clear_error();
            state.start_load();
            vec![Effect::FetchDoctors]
        }
        Msg::ConnectivityChanged(false) => {
            state.set_offline();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Runs a filter mutation and emits a location sync only when the
/// canonical query actually changed. Re-applying `decode(encode(state))`
/// is therefore a no-op, which is what keeps the two synchronization
/// directions from feeding each other forever.
fn sync_filters(state: &mut AppState, mutate: impl FnOnce(&mut AppState)) -> Vec<Effect> {
    let before = encode_query(state.filters());
    mutate(state);
    let after = encode_query(state.filters());
    if before == after {
        Vec::new()
    } else {
        vec![Effect::SyncLocation { query: after }]
    }
}
