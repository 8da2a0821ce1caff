//! Shopfront server library.
//!
//! This crate provides the server functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dummyjson;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;

use state::AppState;

/// Build the complete application router for the given state.
///
/// Used by `main` and by the black-box tests.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}
