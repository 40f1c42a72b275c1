/// Consultation-mode filter value. `Unset` and `All` both match every
/// doctor but are distinct states so a shared query round-trips exactly.
/// Unrecognized values arriving from a query are carried verbatim and
/// match no filtering branch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConsultationMode {
    #[default]
    Unset,
    VideoConsult,
    InClinic,
    All,
    Unrecognized(String),
}

impl ConsultationMode {
    pub fn from_param(value: &str) -> Self {
        match value {
            "" => ConsultationMode::Unset,
            "Video Consult" => ConsultationMode::VideoConsult,
            "In Clinic" => ConsultationMode::InClinic,
            "All" => ConsultationMode::All,
            other => ConsultationMode::Unrecognized(other.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            ConsultationMode::Unset => "",
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
            ConsultationMode::All => "All",
            ConsultationMode::Unrecognized(value) => value,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ConsultationMode::Unset)
    }
}

/// Sort order for the derived list. Unrecognized values behave like
/// `Unset` (original order) but round-trip through the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unset,
    Fees,
    Experience,
    Unrecognized(String),
}

impl SortKey {
    pub fn from_param(value: &str) -> Self {
        match value {
            "" => SortKey::Unset,
            "fees" => SortKey::Fees,
            "experience" => SortKey::Experience,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            SortKey::Unset => "",
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
            SortKey::Unrecognized(value) => value,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, SortKey::Unset)
    }
}

/// The live filter state. One instance per session, owned by `AppState`
/// and mutated only through its setters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub mode: ConsultationMode,
    /// Order-preserving, duplicate-free; order matters for the query
    /// round-trip, not for filtering.
    pub selected_specialties: Vec<String>,
    pub sort: SortKey,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self == &FilterState::default()
    }

    /// Adds the specialty if absent, removes it if present.
    pub fn toggle_specialty(&mut self, name: &str) {
        if let Some(position) = self.selected_specialties.iter().position(|s| s == name) {
            self.selected_specialties.remove(position);
        } else {
            self.selected_specialties.push(name.to_string());
        }
    }
}
