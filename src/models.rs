use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::error::GenerationError;

pub const DEFAULT_PEOPLE: u32 = 2;
pub const DEFAULT_BUDGET: f64 = 50.0;
pub const MAX_BUDGET: f64 = 100.0;

// What the user asked for, frozen at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub recipe_text: String,
    pub people_count: u32,
    pub budget_ceiling: f64,
    pub tags: Vec<String>,
}

impl GenerationRequest {
    pub fn new(
        recipe_text: impl Into<String>,
        people_count: u32,
        budget_ceiling: f64,
        tags: Vec<String>,
    ) -> Self {
        Self {
            recipe_text: recipe_text.into(),
            people_count: people_count.max(1),
            budget_ceiling: clamp_budget(budget_ceiling),
            tags,
        }
    }

    pub fn payload(&self, whole_budget: bool) -> ListPayload<'_> {
        let budget = if whole_budget {
            Budget::Whole(self.budget_ceiling.trunc() as u64)
        } else {
            Budget::Exact(self.budget_ceiling)
        };
        ListPayload {
            recipe: &self.recipe_text,
            people: self.people_count,
            budget,
            tags: &self.tags,
        }
    }
}

pub fn clamp_budget(budget: f64) -> f64 {
    if budget.is_nan() {
        return 0.0;
    }
    budget.clamp(0.0, MAX_BUDGET)
}

// Request body as the backend reads it
#[derive(Serialize, Debug)]
pub struct ListPayload<'a> {
    pub recipe: &'a str,
    pub people: u32,
    pub budget: Budget,
    pub tags: &'a [String],
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Budget {
    Whole(u64),
    Exact(f64),
}

// Product as returned by the current backend
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    #[serde(rename = "productName")]
    pub name: String,
    pub brand: String,
    #[serde(rename = "cost")]
    pub unit_cost: f64,
    #[serde(rename = "volume")]
    pub volume_label: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "AIProposition")]
    pub ai_suggested: bool,
}

// Decoded backend answer
#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse {
    Text(String),
    Products(Vec<Product>),
}

pub type GenerationResult = Result<ListResponse, GenerationError>;

// Dispatched request - holds request + one-time channel for the answer
pub struct PendingGeneration {
    pub request: GenerationRequest,
    pub response_tx: oneshot::Sender<GenerationResult>,
}
