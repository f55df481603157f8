use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::client::ListClient;
use crate::error::GenerationError;
use crate::models::{GenerationRequest, GenerationResult, PendingGeneration};

// Background worker -> runs dispatched requests one by one
pub async fn generation_worker(
    mut rx: mpsc::Receiver<PendingGeneration>,
    client: Arc<ListClient>,
    reveal_delay: Duration,
) {
    info!(endpoint = client.endpoint(), "generation worker started");

    while let Some(pending) = rx.recv().await {
        let started = std::time::Instant::now();
        let result = client.generate(&pending.request).await;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, ok = result.is_ok(), "generation finished");

        // Hold the answer a moment before showing it
        if !reveal_delay.is_zero() {
            tokio::time::sleep(reveal_delay).await;
        }

        // Receiver may be gone if the UI quit
        let _ = pending.response_tx.send(result);
    }

    info!("generation worker stopped");
}

/// Queue a request and hand back the channel its single answer arrives on.
pub async fn dispatch(
    tx: &mpsc::Sender<PendingGeneration>,
    request: GenerationRequest,
) -> oneshot::Receiver<GenerationResult> {
    let (response_tx, response_rx) = oneshot::channel();
    let pending = PendingGeneration { request, response_tx };

    if let Err(mpsc::error::SendError(pending)) = tx.send(pending).await {
        let _ = pending
            .response_tx
            .send(Err(GenerationError::Transport("generation worker is not running".to_string())));
    }
    response_rx
}

/// Wait for a dispatched answer; a dropped sender counts as a transport failure.
pub async fn await_answer(rx: oneshot::Receiver<GenerationResult>) -> GenerationResult {
    rx.await
        .unwrap_or_else(|_| Err(GenerationError::Transport("worker failed to respond".to_string())))
}
