use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use docfinder_core::{Clinic, Doctor, Effect, LoadErrorKind, Msg, Speciality};
use docfinder_engine::{
    DoctorRecord, EngineEvent, EngineHandle, FailureKind, FetchProgress, FetchSettings,
};
use finder_logging::{finder_info, finder_warn};

use super::location::SessionLocation;

/// Executes core effects against the real world: the fetch engine and
/// the session location.
pub struct EffectRunner {
    engine: EngineHandle,
    location: Arc<Mutex<SessionLocation>>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, location: Arc<Mutex<SessionLocation>>) -> Self {
        let engine = EngineHandle::new(FetchSettings::default());
        let runner = Self { engine, location };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDoctors => {
                    finder_info!("FetchDoctors: requesting directory refresh");
                    self.engine.fetch();
                }
                Effect::SyncLocation { query } => {
                    if let Ok(mut location) = self.location.lock() {
                        if location.replace(&query) {
                            finder_info!("location replaced with \"{}\"", query);
                        }
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::Progress(progress) => log_progress(&progress),
                    EngineEvent::FetchCompleted { result } => {
                        let msg = match result {
                            Ok(records) => {
                                Msg::DoctorsLoaded(records.into_iter().map(map_record).collect())
                            }
                            Err(error) => {
                                finder_warn!("doctor fetch failed: {}", error);
                                Msg::FetchFailed {
                                    kind: map_failure(&error.kind),
                                    message: error.message,
                                }
                            }
                        };
                        if msg_tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn log_progress(progress: &FetchProgress) {
    match progress {
        FetchProgress::Attempt { number, max } => {
            finder_info!("fetch attempt {}/{}", number, max);
        }
        FetchProgress::RetryScheduled { delay } => {
            finder_info!("retrying in {:?}", delay);
        }
        FetchProgress::Decoding { bytes } => {
            finder_info!("decoding {} bytes", bytes);
        }
    }
}

fn map_record(record: DoctorRecord) -> Doctor {
    Doctor {
        id: record.id,
        name: record.name,
        specialities: record
            .specialities
            .into_iter()
            .map(|speciality| Speciality {
                name: speciality.name,
            })
            .collect(),
        experience: record.experience,
        fees: record.fees,
        video_consult: record.video_consult,
        in_clinic: record.in_clinic,
        photo: record.photo,
        clinic: record.clinic.map(|clinic| Clinic {
            name: clinic.name,
            locality: clinic.address.locality,
            city: clinic.address.city,
        }),
        languages: record.languages,
    }
}

fn map_failure(kind: &FailureKind) -> LoadErrorKind {
    match kind {
        FailureKind::Timeout => LoadErrorKind::Timeout,
        FailureKind::NetworkUnavailable => LoadErrorKind::NetworkUnavailable,
        FailureKind::HttpStatus(_) | FailureKind::InvalidEndpoint => LoadErrorKind::Http,
        FailureKind::Parse => LoadErrorKind::Parse,
    }
}
