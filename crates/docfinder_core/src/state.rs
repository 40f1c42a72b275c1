use crate::derive::{derive_visible, search_suggestions, specialty_facets, SUGGESTION_LIMIT};
use crate::doctor::Doctor;
use crate::filters::{ConsultationMode, FilterState, SortKey};
use crate::query::{decode_query, encode_query};
use crate::view_model::{AppViewModel, DoctorRowView, FacetView};

/// Error message shown when connectivity is lost.
pub const OFFLINE_MESSAGE: &str =
    "You are currently offline. Please check your internet connection.";

/// Classification of a failed load, mirrored from the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NetworkUnavailable,
    Timeout,
    Http,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

/// The whole application state: the raw collection, the filter state and
/// the load status. Mutated only through the setters below, which keep
/// the dirty flag honest so the shell knows when to re-render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    doctors: Vec<Doctor>,
    filters: FilterState,
    loading: bool,
    error: Option<LoadError>,
    dirty: bool,
}

impl AppState {
    /// A fresh session: no data yet, the initial fetch pending.
    pub fn new() -> Self {
        Self {
            loading: true,
            dirty: true,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn set_search_term(&mut self, term: String) {
        if self.filters.search_term != term {
            self.filters.search_term = term;
            self.dirty = true;
        }
    }

    pub fn set_mode(&mut self, mode: ConsultationMode) {
        if self.filters.mode != mode {
            self.filters.mode = mode;
            self.dirty = true;
        }
    }

    pub fn set_selected_specialties(&mut self, specialties: Vec<String>) {
        if self.filters.selected_specialties != specialties {
            self.filters.selected_specialties = specialties;
            self.dirty = true;
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.filters.sort != sort {
            self.filters.sort = sort;
            self.dirty = true;
        }
    }

    pub fn toggle_specialty(&mut self, name: &str) {
        self.filters.toggle_specialty(name);
        self.dirty = true;
    }

    /// Resets mode and specialties; the search term survives, matching
    /// the panel's "Clear All" which lives below the search box.
    pub fn clear_filters(&mut self) {
        self.set_mode(ConsultationMode::Unset);
        self.set_selected_specialties(Vec::new());
    }

    /// Merges a query string into the filter state. Only fields present
    /// in the query are overwritten.
    pub fn apply_query(&mut self, query: &str) {
        let patch = decode_query(query);
        if patch.is_empty() {
            return;
        }
        let before = self.filters.clone();
        self.filters.apply(patch);
        if self.filters != before {
            self.dirty = true;
        }
    }

    /// Replaces the collection wholesale after a successful fetch.
    pub fn set_doctors(&mut self, doctors: Vec<Doctor>) {
        self.doctors = doctors;
        self.loading = false;
        self.error = None;
        self.dirty = true;
    }

    pub fn start_load(&mut self) {
        self.loading = true;
        self.dirty = true;
    }

    pub fn fail_load(&mut self, error: LoadError) {
        self.loading = false;
        self.error = Some(error);
        self.dirty = true;
    }

    /// Connectivity lost: surface the offline message but keep whatever
    /// data is already loaded.
    pub fn set_offline(&mut self) {
        self.loading = false;
        self.error = Some(LoadError {
            kind: LoadErrorKind::NetworkUnavailable,
            message: OFFLINE_MESSAGE.to_string(),
        });
        self.dirty = true;
    }

    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.dirty = true;
        }
    }

    /// Returns the dirty flag and lowers it. The shell renders when this
    /// reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Projects the state into everything the presentation layer needs.
    /// Recomputed on demand; purely a function of the fields above.
    pub fn view(&self) -> AppViewModel {
        let visible = derive_visible(&self.doctors, &self.filters);
        let facets = specialty_facets(&self.doctors)
            .into_iter()
            .map(|name| FacetView {
                selected: self.filters.selected_specialties.contains(&name),
                name,
            })
            .collect();
        let suggestions =
            search_suggestions(&self.doctors, &self.filters.search_term, SUGGESTION_LIMIT)
                .into_iter()
                .map(|doctor| doctor.name.clone())
                .collect();

        AppViewModel {
            loading: self.loading,
            error: self.error.as_ref().map(|error| error.message.clone()),
            search_term: self.filters.search_term.clone(),
            mode: self.filters.mode.clone(),
            sort: self.filters.sort.clone(),
            facets,
            suggestions,
            total_count: self.doctors.len(),
            visible_count: visible.len(),
            doctors: visible.into_iter().map(DoctorRowView::from).collect(),
            share_query: encode_query(&self.filters),
            dirty: self.dirty,
        }
    }
}
