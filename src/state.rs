use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::models::{
    clamp_budget, GenerationRequest, GenerationResult, ListResponse, DEFAULT_BUDGET, DEFAULT_PEOPLE,
};
use crate::shopping_list::ShoppingList;
use crate::stepper::Stepper;
use crate::tags::TagSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Splash,
    Form,
    Loading,
    Result,
    Error,
}

// Form inputs, kept across regenerations
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub recipe: String,
    pub people: Stepper,
    budget: f64,
    pub tags: TagSelector,
}

impl FormState {
    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn set_budget(&mut self, budget: f64) -> f64 {
        self.budget = clamp_budget(budget);
        self.budget
    }

    pub fn build_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.recipe.clone(),
            self.people.value(),
            self.budget,
            self.tags.selected().to_vec(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            recipe: String::new(),
            people: Stepper::new(DEFAULT_PEOPLE),
            budget: DEFAULT_BUDGET,
            tags: TagSelector::default(),
        }
    }
}

/// What the result screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Text(String),
    Products(ShoppingList),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub listing: Listing,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadyLoading,
    NotOnForm(ViewState),
}

/// Single owner of everything the screens display.
#[derive(Debug, Clone)]
pub struct AppState {
    view: ViewState,
    pub form: FormState,
    // recipe as it was when the request left
    in_flight: Option<GenerationRequest>,
    generated: Option<Generated>,
    error: Option<&'static str>,
}

impl AppState {
    pub fn new(form: FormState) -> Self {
        Self {
            view: ViewState::Splash,
            form,
            in_flight: None,
            generated: None,
            error: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn in_flight(&self) -> Option<&GenerationRequest> {
        self.in_flight.as_ref()
    }

    pub fn generated(&self) -> Option<&Generated> {
        self.generated.as_ref()
    }

    pub fn shopping_list_mut(&mut self) -> Option<&mut ShoppingList> {
        match self.generated.as_mut().map(|g| &mut g.listing) {
            Some(Listing::Products(list)) => Some(list),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn splash_elapsed(&mut self) {
        if self.view == ViewState::Splash {
            self.view = ViewState::Form;
        }
    }

    /// Freeze the form into a request and enter Loading.
    ///
    /// The caller must dispatch the returned request; Loading is left only
    /// through [`AppState::complete`].
    pub fn submit(&mut self) -> Result<GenerationRequest, SubmitRejected> {
        match self.view {
            ViewState::Form => {}
            ViewState::Loading => return Err(SubmitRejected::AlreadyLoading),
            other => return Err(SubmitRejected::NotOnForm(other)),
        }
        let request = self.form.build_request();
        debug!(people = request.people_count, tags = request.tags.len(), "submitting generation request");
        self.in_flight = Some(request.clone());
        self.error = None;
        self.view = ViewState::Loading;
        Ok(request)
    }

    /// Deliver the answer to the outstanding request. Returns false and
    /// changes nothing when no request is outstanding.
    pub fn complete(&mut self, result: GenerationResult) -> bool {
        if self.view != ViewState::Loading {
            warn!("dropping generation result that arrived outside Loading");
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(response) => {
                let listing = match response {
                    ListResponse::Text(text) => Listing::Text(text),
                    ListResponse::Products(products) => {
                        Listing::Products(ShoppingList::from_products(products))
                    }
                };
                self.generated = Some(Generated {
                    listing,
                    generated_at: Local::now(),
                });
                self.view = ViewState::Result;
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                self.generated = None;
                self.error = Some(e.user_message());
                self.view = ViewState::Error;
            }
        }
        true
    }

    /// Back to the form from Result or Error, dropping the generated list.
    pub fn regenerate(&mut self) -> bool {
        match self.view {
            ViewState::Result | ViewState::Error => {
                self.generated = None;
                self.error = None;
                self.view = ViewState::Form;
                true
            }
            _ => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}
