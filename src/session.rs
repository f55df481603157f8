use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::client::ListClient;
use crate::error::GenerationError;
use crate::handlers::{handle_line, Outcome};
use crate::models::{GenerationResult, PendingGeneration};
use crate::state::{AppState, FormState, ViewState};
use crate::stepper::Stepper;
use crate::views::{render, LoadingMessages, LOADING_ROTATION};
use crate::worker::{await_answer, dispatch, generation_worker};

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub splash: Duration,
    pub reveal_delay: Duration,
}

enum Event {
    Input(Option<String>),
    Answer(GenerationResult),
    Tick,
}

fn draw<W: Write>(out: &mut W, app: &AppState, messages: &LoadingMessages) -> Result<()> {
    writeln!(out, "------------------------------------------------")?;
    write!(out, "{}", render(app, messages))?;
    out.flush()?;
    Ok(())
}

// Parks forever when nothing is outstanding
async fn next_answer(pending: &mut Option<oneshot::Receiver<GenerationResult>>) -> GenerationResult {
    match pending.as_mut() {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(GenerationError::Transport("worker failed to respond".to_string()))),
        None => std::future::pending().await,
    }
}

/// Interactive session. Reads commands line by line until `quit` or end of
/// input; a request still outstanding at end of input is waited for.
pub async fn run_interactive<R, W>(
    input: R,
    mut out: W,
    client: Arc<ListClient>,
    settings: SessionSettings,
) -> Result<AppState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (batch_tx, batch_rx) = mpsc::channel::<PendingGeneration>(1);
    let worker = tokio::spawn(generation_worker(batch_rx, client, settings.reveal_delay));

    let mut app = AppState::default();
    let mut messages = LoadingMessages::default();

    draw(&mut out, &app, &messages)?;
    tokio::time::sleep(settings.splash).await;
    app.splash_elapsed();
    draw(&mut out, &app, &messages)?;

    let mut lines = input.lines();
    let mut pending: Option<oneshot::Receiver<GenerationResult>> = None;
    let mut ticker = tokio::time::interval(LOADING_ROTATION);

    let mut input_open = true;

    loop {
        let event = tokio::select! {
            line = lines.next_line(), if input_open => Event::Input(line.context("reading input")?),
            result = next_answer(&mut pending), if pending.is_some() => Event::Answer(result),
            _ = ticker.tick(), if app.view() == ViewState::Loading => Event::Tick,
        };

        match event {
            Event::Input(None) => {
                if pending.is_none() {
                    break;
                }
                debug!("input closed, waiting for outstanding generation");
                input_open = false;
            }
            Event::Input(Some(line)) => match handle_line(&mut app, &line) {
                Outcome::Redraw => draw(&mut out, &app, &messages)?,
                Outcome::Dispatch(request) => {
                    pending = Some(dispatch(&batch_tx, request).await);
                    messages.reset();
                    ticker.reset();
                    draw(&mut out, &app, &messages)?;
                }
                Outcome::Notice(text) => {
                    writeln!(out, "{}", text)?;
                    out.flush()?;
                }
                Outcome::Quit => break,
            },
            Event::Answer(result) => {
                pending = None;
                app.complete(result);
                draw(&mut out, &app, &messages)?;
                if !input_open {
                    break;
                }
            }
            Event::Tick => {
                messages.advance();
                draw(&mut out, &app, &messages)?;
            }
        }
    }

    // No cancellation: an in-flight call is simply abandoned
    drop(batch_tx);
    worker.abort();
    info!(view = ?app.view(), "session ended");
    Ok(app)
}

/// One-shot generation from command line values, through the same worker
/// as the interactive session.
pub async fn run_once(
    client: Arc<ListClient>,
    recipe: String,
    people: u32,
    budget: f64,
    tags: &[String],
    reveal_delay: Duration,
) -> Result<AppState> {
    let mut form = FormState::default();
    form.recipe = recipe;
    form.people = Stepper::new(people);
    form.set_budget(budget);
    for tag in tags {
        form.tags
            .toggle(&tag.to_uppercase())
            .with_context(|| format!("invalid --tag {}", tag))?;
    }

    let mut app = AppState::new(form);
    app.splash_elapsed();
    let request = app
        .submit()
        .map_err(|reason| anyhow::anyhow!("could not submit: {:?}", reason))?;

    let (batch_tx, batch_rx) = mpsc::channel::<PendingGeneration>(1);
    let worker = tokio::spawn(generation_worker(batch_rx, client, reveal_delay));
    let result = await_answer(dispatch(&batch_tx, request).await).await;
    drop(batch_tx);
    let _ = worker.await;

    app.complete(result);
    Ok(app)
}
