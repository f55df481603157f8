use crate::error::CommandError;
use crate::handlers::Outcome;
use crate::state::AppState;

const HELP: &str = "+ <n> | - <n> | regenerate | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCommand {
    // 0-based entry index
    Increase(usize),
    Decrease(usize),
    Regenerate,
    Help,
}

impl ResultCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(CommandError::Empty),
            "+" => entry_index("+", rest).map(ResultCommand::Increase),
            "-" => entry_index("-", rest).map(ResultCommand::Decrease),
            "regenerate" | "r" => Ok(ResultCommand::Regenerate),
            "help" | "?" => Ok(ResultCommand::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

// Entries are shown 1-based
fn entry_index(command: &'static str, raw: &str) -> Result<usize, CommandError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or(CommandError::BadArgument {
            command,
            expected: "an entry number",
        })
}

pub(super) fn handle(app: &mut AppState, line: &str) -> Outcome {
    let command = match ResultCommand::parse(line) {
        Ok(c) => c,
        Err(CommandError::Empty) => return Outcome::Redraw,
        Err(e) => return Outcome::Notice(e.to_string()),
    };

    let changed = match command {
        ResultCommand::Regenerate => {
            app.regenerate();
            return Outcome::Redraw;
        }
        ResultCommand::Help => return Outcome::Notice(HELP.to_string()),
        ResultCommand::Increase(i) => app.shopping_list_mut().and_then(|list| list.increase(i)),
        ResultCommand::Decrease(i) => app.shopping_list_mut().and_then(|list| list.decrease(i)),
    };

    match changed {
        Some(_) => Outcome::Redraw,
        None => Outcome::Notice("no such entry".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListResponse;
    use crate::shopping_list::product;

    fn with_products() -> AppState {
        let mut app = AppState::default();
        app.splash_elapsed();
        app.submit().unwrap();
        app.complete(Ok(ListResponse::Products(vec![
            product("oeufs", 2.9, false),
            product("lardons", 3.4, true),
        ])));
        app
    }

    #[test]
    fn parses_result_commands() {
        assert_eq!(ResultCommand::parse("+ 1"), Ok(ResultCommand::Increase(0)));
        assert_eq!(ResultCommand::parse("- 2"), Ok(ResultCommand::Decrease(1)));
        assert_eq!(ResultCommand::parse("r"), Ok(ResultCommand::Regenerate));
        assert!(ResultCommand::parse("+ 0").is_err());
        assert!(ResultCommand::parse("+").is_err());
        assert!(ResultCommand::parse("buy").is_err());
    }

    #[test]
    fn steppers_are_independent_per_entry() {
        let mut app = with_products();
        handle(&mut app, "+ 2");
        handle(&mut app, "+ 2");
        handle(&mut app, "- 1");
        let list = app.shopping_list_mut().unwrap();
        assert_eq!(list.entries()[0].quantity(), 1);
        assert_eq!(list.entries()[1].quantity(), 3);
    }

    #[test]
    fn missing_entry_is_reported() {
        let mut app = with_products();
        assert_eq!(
            handle(&mut app, "+ 3"),
            Outcome::Notice("no such entry".into())
        );
    }

    #[test]
    fn text_result_has_no_steppers() {
        let mut app = AppState::default();
        app.splash_elapsed();
        app.submit().unwrap();
        app.complete(Ok(ListResponse::Text("liste".into())));
        assert!(matches!(handle(&mut app, "+ 1"), Outcome::Notice(_)));
    }
}
