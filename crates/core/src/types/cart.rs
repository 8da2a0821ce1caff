//! Per-customer cart model.
//!
//! A [`Cart`] accumulates [`LineItem`]s for one customer together with a
//! running total. Two invariants hold at every observable point:
//!
//! - `grand_total` equals the sum of all line item prices
//! - no two line items share a product ID
//!
//! Mutation goes through [`Cart::push`], which maintains both; callers check
//! [`Cart::contains`] before resolving an item so a duplicate never costs a
//! catalog round trip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product attached to a cart.
///
/// Immutable once added. Title and price come from the server-side catalog
/// lookup, never from client input, so a client cannot tamper with pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog product ID.
    pub id: ProductId,
    /// Product title as resolved from the catalog.
    pub title: String,
    /// Product description as resolved from the catalog.
    pub description: String,
    /// Unit price as resolved from the catalog. Non-negative.
    pub price: Decimal,
    /// Product thumbnail URL.
    pub thumbnail: String,
}

/// One customer's accumulated cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Sum of all line item prices.
    pub grand_total: Decimal,
    /// Line items in insertion order, no duplicate product IDs.
    pub product_list: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grand_total: Decimal::ZERO,
            product_list: Vec::new(),
        }
    }

    /// Whether the cart already holds a line item for `id`.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.product_list.iter().any(|item| item.id == id)
    }

    /// Append a line item and fold its price into the running total.
    ///
    /// Both updates happen together; callers never see a list/total mismatch.
    /// The caller is responsible for checking [`Cart::contains`] first.
    pub fn push(&mut self, item: LineItem) {
        self.grand_total += item.price;
        self.product_list.push(item);
    }

    /// Number of line items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.product_list.len()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_list.is_empty()
    }
}
