//! Core domain types.
//!
//! These types are shared between the server crate and its tests.

mod cart;
mod id;

pub use cart::{Cart, LineItem};
pub use id::{CustomerId, ProductId};
