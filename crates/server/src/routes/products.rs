//! Product catalog passthrough.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::dummyjson::types::Product;
use crate::error::Result;
use crate::state::AppState;

/// List catalog products, sorted case-insensitively by title.
///
/// Straight passthrough to the upstream catalog; the only transformation is
/// the sort, so clients get a stable alphabetical listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let mut products = state.upstream().list_products().await?;

    products.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));

    Ok(Json(products))
}
