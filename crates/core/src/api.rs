//! The seam between the form and the remote catalog service.
//!
//! The form only ever performs one remote operation: handing a finished
//! [`FoodItemRecord`] to `create_food_item`. Everything about how that call is
//! transported lives behind the [`CatalogApi`] trait; `foodpad-api` provides
//! the HTTP implementation, tests provide recording stubs.

use async_trait::async_trait;
use foodpad_types::FoodItemRecord;

/// Errors returned by a catalog service implementation.
///
/// The form does not inspect or classify these beyond propagating them to its
/// caller; no retry is performed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("catalog rejected the food item (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to serialise food item: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One-operation client for the remote food catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Persist a finished food item. Completion means the catalog accepted it.
    async fn create_food_item(&self, record: &FoodItemRecord) -> Result<(), CatalogError>;
}
