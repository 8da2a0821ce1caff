//! Shopfront core library.
//!
//! Shared domain types used across the Shopfront workspace: type-safe ID
//! newtypes and the per-customer cart model.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::{Cart, CustomerId, LineItem, ProductId};
