mod form;
mod result;

use tracing::debug;

use crate::models::GenerationRequest;
use crate::state::{AppState, SubmitRejected, ViewState};

pub use form::FormCommand;
pub use result::ResultCommand;

// What the UI loop should do after a line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Redraw,
    Dispatch(GenerationRequest),
    Notice(String),
    Quit,
}

pub const LOADING_NOTICE: &str = "Génération en cours, merci de patienter";

pub fn handle_line(app: &mut AppState, line: &str) -> Outcome {
    let line = line.trim();
    if line == "quit" || line == "q" {
        return Outcome::Quit;
    }
    debug!(view = ?app.view(), input = line, "handling input");

    match app.view() {
        ViewState::Splash => Outcome::Redraw,
        ViewState::Form => form::handle(app, line),
        ViewState::Loading => {
            if line == "help" {
                Outcome::Notice("quit".to_string())
            } else {
                Outcome::Notice(LOADING_NOTICE.to_string())
            }
        }
        ViewState::Result => result::handle(app, line),
        ViewState::Error => match line {
            "back" | "regenerate" | "r" => {
                app.regenerate();
                Outcome::Redraw
            }
            _ => Outcome::Notice("back | quit".to_string()),
        },
    }
}

pub(crate) fn rejected(reason: SubmitRejected) -> Outcome {
    match reason {
        SubmitRejected::AlreadyLoading => Outcome::Notice(LOADING_NOTICE.to_string()),
        SubmitRejected::NotOnForm(view) => Outcome::Notice(format!("cannot submit from {:?}", view)),
    }
}
