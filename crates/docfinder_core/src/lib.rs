//! Docfinder core: pure state machine and view-model helpers.
mod derive;
mod doctor;
mod effect;
mod filters;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use derive::{derive_visible, search_suggestions, specialty_facets, SUGGESTION_LIMIT};
pub use doctor::{experience_value, fee_value, Clinic, Doctor, Speciality};
pub use effect::Effect;
pub use filters::{ConsultationMode, FilterState, SortKey};
pub use msg::Msg;
pub use query::{decode_query, encode_query, QueryPatch};
pub use state::{AppState, LoadError, LoadErrorKind, OFFLINE_MESSAGE};
pub use update::{init, update};
pub use view_model::{AppViewModel, DoctorRowView, FacetView};
