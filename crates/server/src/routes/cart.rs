//! Cart route handlers.
//!
//! The add-item endpoint is protected: the [`RequireCustomer`] extractor
//! verifies the bearer credential before this handler runs, and the customer
//! ID it yields is the only identity the cart service ever sees.

use axum::{Json, extract::State};
use serde::Deserialize;
use shopfront_core::{Cart, ProductId};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireCustomer;
use crate::state::AppState;

/// Add-to-cart request payload.
///
/// Only the product ID is read; pricing always comes from the server-side
/// catalog lookup, never from the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: ProductId,
}

/// Add a catalog product to the authenticated customer's cart.
///
/// Responds with the updated cart: `{grandTotal, productList}`.
#[instrument(skip(state), fields(customer = %customer))]
pub async fn add_item(
    State(state): State<AppState>,
    RequireCustomer(customer): RequireCustomer,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<Cart>> {
    let cart = state.carts().add_item(&customer, request.product_id).await?;

    Ok(Json(cart))
}
