//! Cart service: the add-item operation.
//!
//! Orchestrates the cart store with the upstream catalog lookup. The whole
//! read-check-resolve-write sequence runs under the customer's store lock,
//! so concurrent adds for one customer serialize while different customers
//! proceed independently.

mod store;

pub use store::CartStore;

use thiserror::Error;
use tracing::instrument;

use shopfront_core::{Cart, CustomerId, LineItem, ProductId};

use crate::dummyjson::{UpstreamClient, UpstreamError, types::Product};

/// Errors that can occur while adding an item to a cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart already holds this product.
    #[error("product {0} is already in the cart")]
    DuplicateItem(ProductId),

    /// The catalog has no product with this ID.
    #[error("product {0} not found")]
    ItemNotFound(ProductId),

    /// The catalog lookup failed for another reason.
    #[error("catalog lookup failed")]
    CatalogLookupFailed(#[source] UpstreamError),
}

/// Service coordinating cart mutations with catalog lookups.
pub struct CartService {
    store: CartStore,
    upstream: UpstreamClient,
}

impl CartService {
    /// Create a new cart service with an empty store.
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            store: CartStore::new(),
            upstream,
        }
    }

    /// Snapshot a customer's cart, if one exists.
    #[must_use]
    pub fn cart(&self, customer: &CustomerId) -> Option<Cart> {
        self.store.get(customer)
    }

    /// Add a catalog product to a customer's cart.
    ///
    /// The duplicate check runs before the catalog round trip, so a
    /// duplicate add never costs an upstream call. The line item is built
    /// from the catalog response, never from client input. Either the whole
    /// add commits (append plus total update) or nothing does.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the product is already in the cart,
    /// `ItemNotFound` if the catalog has no such product, and
    /// `CatalogLookupFailed` for any other catalog failure.
    #[instrument(skip(self), fields(customer = %customer, product_id = %product_id))]
    pub async fn add_item(
        &self,
        customer: &CustomerId,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        let lock = self.store.entry_lock(customer);
        let _guard = lock.lock().await;

        // Lazily start from an empty cart; it is only persisted on success,
        // so a failed first add leaves no cart behind.
        let mut cart = self.store.get(customer).unwrap_or_default();

        if cart.contains(product_id) {
            return Err(CartError::DuplicateItem(product_id));
        }

        let product = match self.upstream.get_product(product_id).await {
            Ok(product) => product,
            Err(UpstreamError::NotFound(_)) => return Err(CartError::ItemNotFound(product_id)),
            Err(e) => return Err(CartError::CatalogLookupFailed(e)),
        };

        cart.push(line_item_from(product));
        self.store.upsert(customer, cart.clone());

        tracing::debug!(total = %cart.grand_total, items = cart.len(), "Cart updated");
        Ok(cart)
    }
}

/// Build a line item from a catalog product.
fn line_item_from(product: Product) -> LineItem {
    LineItem {
        id: product.id,
        title: product.title,
        description: product.description,
        price: product.price,
        thumbnail: product.thumbnail,
    }
}
