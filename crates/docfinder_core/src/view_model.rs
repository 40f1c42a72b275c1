use crate::doctor::{Clinic, Doctor};
use crate::filters::{ConsultationMode, SortKey};

/// Everything the presentation layer needs for one frame: the derived
/// list, the facet panel, the current filter values and the load status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub loading: bool,
    /// User-facing failure message; `None` renders the normal screen.
    pub error: Option<String>,
    pub search_term: String,
    pub mode: ConsultationMode,
    pub sort: SortKey,
    pub facets: Vec<FacetView>,
    /// Name suggestions for the search dropdown.
    pub suggestions: Vec<String>,
    pub doctors: Vec<DoctorRowView>,
    pub total_count: usize,
    pub visible_count: usize,
    /// The canonical query string for the current filters, shown as the
    /// shareable link.
    pub share_query: String,
    pub dirty: bool,
}

/// One specialty checkbox in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetView {
    pub name: String,
    pub selected: bool,
}

/// One doctor row of the derived list, projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRowView {
    pub id: String,
    pub name: String,
    pub specialities: Vec<String>,
    pub experience: String,
    pub fees: String,
    pub video_consult: bool,
    pub in_clinic: bool,
    pub clinic: Option<Clinic>,
    pub languages: Vec<String>,
}

impl From<Doctor> for DoctorRowView {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            specialities: doctor
                .specialities
                .into_iter()
                .map(|speciality| speciality.name)
                .collect(),
            experience: doctor.experience,
            fees: doctor.fees,
            video_consult: doctor.video_consult,
            in_clinic: doctor.in_clinic,
            clinic: doctor.clinic,
            languages: doctor.languages,
        }
    }
}
