use crate::error::CommandError;
use crate::handlers::{rejected, Outcome};
use crate::state::AppState;

const HELP: &str = "recipe <texte> | people + | people - | budget <0-100> | tag <n|nom> | submit | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Recipe(String),
    MorePeople,
    FewerPeople,
    Budget(f64),
    TagPosition(usize),
    TagName(String),
    Submit,
    Help,
}

impl FormCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(CommandError::Empty),
            "recipe" => Ok(FormCommand::Recipe(rest.to_string())),
            "people" => match rest {
                "+" => Ok(FormCommand::MorePeople),
                "-" => Ok(FormCommand::FewerPeople),
                _ => Err(CommandError::BadArgument {
                    command: "people",
                    expected: "`+` or `-`",
                }),
            },
            "budget" => rest
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|b| b.is_finite())
                .map(FormCommand::Budget)
                .ok_or(CommandError::BadArgument {
                    command: "budget",
                    expected: "a number",
                }),
            "tag" if rest.is_empty() => Err(CommandError::BadArgument {
                command: "tag",
                expected: "a tag number or name",
            }),
            "tag" => Ok(match rest.parse::<usize>() {
                Ok(n) => FormCommand::TagPosition(n),
                Err(_) => FormCommand::TagName(rest.to_uppercase()),
            }),
            "submit" | "s" => Ok(FormCommand::Submit),
            "help" | "?" => Ok(FormCommand::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub(super) fn handle(app: &mut AppState, line: &str) -> Outcome {
    let command = match FormCommand::parse(line) {
        Ok(c) => c,
        Err(CommandError::Empty) => return Outcome::Redraw,
        Err(e) => return Outcome::Notice(e.to_string()),
    };

    match command {
        FormCommand::Recipe(text) => app.form.recipe = text,
        FormCommand::MorePeople => {
            app.form.people.increment();
        }
        FormCommand::FewerPeople => {
            app.form.people.decrement();
        }
        FormCommand::Budget(b) => {
            app.form.set_budget(b);
        }
        FormCommand::TagPosition(n) => {
            if let Err(e) = app.form.tags.toggle_position(n) {
                return Outcome::Notice(e.to_string());
            }
        }
        FormCommand::TagName(name) => {
            if let Err(e) = app.form.tags.toggle(&name) {
                return Outcome::Notice(e.to_string());
            }
        }
        FormCommand::Submit => {
            return match app.submit() {
                Ok(request) => Outcome::Dispatch(request),
                Err(reason) => rejected(reason),
            };
        }
        FormCommand::Help => return Outcome::Notice(HELP.to_string()),
    }
    Outcome::Redraw
}
