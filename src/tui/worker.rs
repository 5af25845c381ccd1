//! Background fetch worker thread

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::product::Product;
use crate::view::{RequestKind, RequestSeq};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Request sent to the worker thread
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub seq: RequestSeq,
    pub kind: RequestKind,
}

/// Result from the worker thread
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: RequestSeq,
    pub kind: RequestKind,
    pub result: Result<Vec<Product>>,
}

/// Spawn the fetch worker. It runs requests in the order received and exits
/// once the request channel is closed.
pub fn spawn_worker(
    source: Arc<dyn CatalogSource>,
    request_rx: Receiver<FetchRequest>,
    outcome_tx: Sender<FetchOutcome>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let start = Instant::now();
            let result = match &request.kind {
                RequestKind::LoadAll => source.load_all(),
                RequestKind::Search(query) => source.search(query),
            };
            tracing::debug!(
                seq = request.seq.get(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                ok = result.is_ok(),
                "fetch finished"
            );

            if outcome_tx
                .send(FetchOutcome {
                    seq: request.seq,
                    kind: request.kind,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("fetch worker stopped");
    })
}
