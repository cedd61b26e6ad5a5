//! Domain error types for Stockroom.
//!
//! `ProductError` is what the persistence layer hands back; `FormError` is
//! raised by the form before anything reaches storage. Both are translated
//! into user-facing notices by the UI store.

use thiserror::Error;

use super::ProductId;

/// Errors from product persistence operations.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Duplicate ID: {0}")]
    DuplicateId(ProductId),

    #[error("ID does not exist: {0}")]
    NotFound(ProductId),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Product operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

impl ProductError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }

    /// Failures of the store itself rather than of the requested id.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            ProductError::Storage(_) | ProductError::OperationFailed(_)
        )
    }
}

/// Errors found while turning form input into a product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("None of the fields can be empty.")]
    EmptyFields,

    #[error("Quantity {0:?} is not a whole number between 0 and {max}.", max = u32::MAX)]
    InvalidQuantity(String),

    #[error("No product ID was given.")]
    MissingId,
}
