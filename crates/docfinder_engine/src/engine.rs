use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::fetch::{ChannelProgressSink, DoctorSource, FetchSettings, ReqwestSource};
use crate::EngineEvent;

enum EngineCommand {
    Fetch,
}

/// Handle to the background fetch runtime. Clones share one command
/// queue and one event stream.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let source = Arc::new(ReqwestSource::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Requests a fetch. Overlapping requests are not coordinated; the
    /// last completion to arrive wins downstream.
    pub fn fetch(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn DoctorSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = source.fetch(&sink).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}
