use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// One doctor as published by the remote directory. Only `id` and `name`
/// are required; every other field falls back to its default so a sparse
/// record still loads. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialities: Vec<SpecialityRecord>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub video_consult: bool,
    #[serde(default)]
    pub in_clinic: bool,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub clinic: Option<ClinicRecord>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SpecialityRecord {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ClinicRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: AddressRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct AddressRecord {
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub city: String,
}

/// Events the engine pushes while a fetch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(FetchProgress),
    FetchCompleted {
        result: Result<Vec<DoctorRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchProgress {
    /// A request attempt is starting.
    Attempt { number: u32, max: u32 },
    /// The previous attempt failed; the next starts after `delay`.
    RetryScheduled { delay: Duration },
    /// A response body arrived and is being decoded.
    Decoding { bytes: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    NetworkUnavailable,
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::NetworkUnavailable => write!(f, "network unavailable"),
            FailureKind::Parse => write!(f, "malformed response body"),
        }
    }
}
