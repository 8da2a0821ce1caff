//! Business services sitting between the routes and the upstream API.

pub mod cart;
pub mod identity;

pub use cart::{CartError, CartService, CartStore};
pub use identity::{IdentityVerifier, VerifyError};
