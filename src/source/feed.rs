//! Hintergrund-Poller: holt periodisch Snapshots und reicht sie per Channel
//! an den UI-Thread weiter. Der Baum wird ausschließlich dort verändert.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::ItemSource;
use crate::app::AppIntent;
use crate::core::Snapshot;

/// Laufender Refresh-Worker. Drop stoppt den Worker und verwirft ausstehende Ergebnisse.
pub struct RefreshFeed {
    results: Receiver<Result<Snapshot, String>>,
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl RefreshFeed {
    /// Startet den Worker; der erste Abruf erfolgt sofort.
    pub fn spawn(source: Arc<dyn ItemSource>, interval: Duration) -> Self {
        let (tx, results) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();

        let worker = thread::spawn(move || loop {
            let result = source.fetch_snapshot().map_err(|e| format!("{:#}", e));
            if tx.send(result).is_err() {
                break;
            }
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        log::info!("Refresh-Feed gestartet (Intervall {:?})", interval);

        Self {
            results,
            stop: Some(stop),
            worker: Some(worker),
        }
    }

    /// Holt alle bisher eingegangenen Ergebnisse als Intents (nicht blockierend)
    pub fn drain(&self) -> Vec<AppIntent> {
        self.results
            .try_iter()
            .map(|result| match result {
                Ok(snapshot) => AppIntent::SnapshotReceived { snapshot },
                Err(reason) => AppIntent::RefreshFailed { reason },
            })
            .collect()
    }
}

impl Drop for RefreshFeed {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Refresh-Feed: Worker-Thread ist abgestürzt");
            }
        }
        log::info!("Refresh-Feed gestoppt");
    }
}
