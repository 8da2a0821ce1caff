//! In-memory cart storage keyed by customer.
//!
//! Pure state holder with no business rules. Lives for the process lifetime;
//! carts are created by the first successful add and never expire.
//!
//! # Concurrency
//!
//! Two sync maps, each behind its own short-lived `std` mutex:
//!
//! - `carts` holds the committed cart state (`get`/`upsert`)
//! - `locks` hands out one async mutex per customer
//!
//! Neither `std` mutex is ever held across an await, so requests for
//! different customers never contend beyond a map access. The per-customer
//! async mutex is what serializes the cart service's read-check-resolve-write
//! sequence for a single customer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use shopfront_core::{Cart, CustomerId};

/// In-memory cart table keyed by customer ID.
#[derive(Default)]
pub struct CartStore {
    carts: Mutex<HashMap<CustomerId, Cart>>,
    locks: Mutex<HashMap<CustomerId, Arc<tokio::sync::Mutex<()>>>>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of a customer's cart, if one exists.
    #[must_use]
    pub fn get(&self, customer: &CustomerId) -> Option<Cart> {
        self.carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(customer)
            .cloned()
    }

    /// Insert or replace a customer's cart.
    pub fn upsert(&self, customer: &CustomerId, cart: Cart) {
        self.carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(customer.clone(), cart);
    }

    /// Get the per-customer mutation lock, creating it on first use.
    ///
    /// Holding the returned mutex serializes mutations for `customer`
    /// without blocking any other customer.
    pub(crate) fn entry_lock(&self, customer: &CustomerId) -> Arc<tokio::sync::Mutex<()>> {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(customer.clone())
            .or_default()
            .clone()
    }
}
