//! Shopping list generator client.
//!
//! A recipe description, a head count, a budget and a few tags go to a
//! generation backend; the answer comes back as a product list the user can
//! adjust before shopping.
//!
//! The screens follow one state machine ([`state::ViewState`]):
//! splash, form, loading, then result or error. The single network call runs
//! on a background worker ([`worker`]) and its answer is delivered once.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod session;
pub mod shopping_list;
pub mod state;
pub mod stepper;
pub mod tags;
pub mod views;
pub mod worker;

#[cfg(test)]
mod testing;
