#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input.
    SearchChanged(String),
    /// User picked a doctor name from the suggestion dropdown.
    SuggestionPicked(String),
    /// User selected a consultation mode; re-selecting the current one
    /// clears it.
    ModeSelected(crate::ConsultationMode),
    /// User toggled one specialty checkbox.
    SpecialtyToggled(String),
    /// Wholesale replacement of the selected specialties.
    SpecialtiesSelected(Vec<String>),
    /// User selected a sort key; re-selecting the current one clears it.
    SortSelected(crate::SortKey),
    /// User cleared the mode and specialty filters.
    ClearFilters,
    /// The environment's location changed to a new query string.
    LocationChanged(String),
    /// The data source delivered a fresh doctor collection.
    DoctorsLoaded(Vec<crate::Doctor>),
    /// The data source gave up with a terminal failure.
    FetchFailed {
        kind: crate::LoadErrorKind,
        message: String,
    },
    /// User asked for a re-fetch after an error.
    RetryRequested,
    /// Connectivity was lost (`false`) or restored (`true`).
    ConnectivityChanged(bool),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
