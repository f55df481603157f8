//! Text rendering of each screen. Everything here is pure: state in, string out.

use std::fmt::Write;
use std::time::Duration;

use crate::shopping_list::{format_cost, ShoppingList};
use crate::state::{AppState, FormState, Generated, Listing, ViewState};
use crate::stepper::Stepper;

pub const LOADING_ROTATION: Duration = Duration::from_secs(10);

const WAIT_MESSAGES: [&str; 2] = [
    "Merci de patienter, nous sommes entrain de générer un liste de course compatible avec tous vos paramètres",
    "Cette operation peut prendre quelque secondes, merci de patienter",
];

pub const AI_SUGGESTION_LABEL: &str = "Suggestion : Achat régulier";

/// Alternating message under the loading spinner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingMessages {
    index: usize,
}

impl LoadingMessages {
    pub fn current(&self) -> &'static str {
        WAIT_MESSAGES[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % WAIT_MESSAGES.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

pub fn render(app: &AppState, messages: &LoadingMessages) -> String {
    match app.view() {
        ViewState::Splash => render_splash(),
        ViewState::Form => render_form(&app.form),
        ViewState::Loading => {
            let recipe = app.in_flight().map(|r| r.recipe_text.as_str()).unwrap_or_default();
            render_loading(recipe, messages.current())
        }
        ViewState::Result => match app.generated() {
            Some(generated) => render_result(generated),
            None => render_form(&app.form),
        },
        ViewState::Error => render_error(app.error().unwrap_or(crate::error::GENERIC_ERROR)),
    }
}

pub fn render_splash() -> String {
    "\n        ScanIT\n\n".to_string()
}

fn stepper_line(stepper: &Stepper, label: &str) -> String {
    let minus = if stepper.can_decrement() { "[-]" } else { "[ ]" };
    format!("{} {}{} [+]", minus, stepper.value(), label)
}

pub fn render_form(form: &FormState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Que voulez-vous cuisiner ?");
    let _ = writeln!(out, "Entrez le plat pour lequel vous voulez générer votre liste de courses");
    if form.recipe.is_empty() {
        let _ = writeln!(out, "  > (vide)");
    } else {
        let _ = writeln!(out, "  > {}", form.recipe);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", stepper_line(&form.people, " personnes"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Pour quel budget ?");
    let _ = writeln!(out, "  {} €", form.budget().trunc() as u64);
    let _ = writeln!(out);
    let _ = writeln!(out, "Des besoins particuliers ?");

    let mut position = 1;
    for row in form.tags.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|tag| {
                let mark = if form.tags.is_selected(tag) { 'x' } else { ' ' };
                let cell = format!("{}.[{}] {}", position, mark, tag);
                position += 1;
                cell
            })
            .collect();
        let _ = writeln!(out, "  {}", cells.join("   "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Générer ma liste de courses : `submit`");
    out
}

pub fn render_loading(recipe: &str, message: &str) -> String {
    format!("\n{}\n\nGénération en cours...\n{}\n", recipe, message)
}

pub fn render_result(generated: &Generated) -> String {
    let mut out = String::new();
    match &generated.listing {
        Listing::Text(text) => {
            let _ = writeln!(out, "Résultat");
            let _ = writeln!(out, "{}", text);
        }
        Listing::Products(list) => {
            let _ = writeln!(out, "Liste de courses");
            render_entries(&mut out, list);
            let _ = writeln!(out);
            let _ = writeln!(out, "TOTAL  {} €", list.formatted_total());
        }
    }
    let _ = writeln!(out, "(générée à {})", generated.generated_at.format("%H:%M"));
    let _ = writeln!(out, "Regénérer une liste : `regenerate`");
    out
}

fn render_entries(out: &mut String, list: &ShoppingList) {
    for (i, entry) in list.entries().iter().enumerate() {
        let p = &entry.product;
        let minus = if entry.can_decrease() { "[-]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{:>2}. {} - {} ({}) {} €   {} {} [+]",
            i + 1,
            p.name,
            p.brand,
            p.volume_label,
            format_cost(p.unit_cost),
            minus,
            entry.quantity()
        );
        if p.ai_suggested {
            let _ = writeln!(out, "    {}", AI_SUGGESTION_LABEL);
        }
    }
}

pub fn render_error(message: &str) -> String {
    format!("{}\nRetour au formulaire : `back`\n", message)
}
