//! Docfinder engine: the remote data source client.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{
    ChannelProgressSink, DoctorSource, FetchSettings, ProgressSink, ReqwestSource,
    DEFAULT_ENDPOINT,
};
pub use types::{
    AddressRecord, ClinicRecord, DoctorRecord, EngineEvent, FailureKind, FetchError,
    FetchProgress, SpecialityRecord,
};
