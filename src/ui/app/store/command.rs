use crate::domain::{Product, ProductId};

/// Persistence side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadProducts { query: String },
    LoadProduct { id: ProductId },
    InsertProduct(Product),
    UpdateProduct(Product),
    DeleteProduct { id: ProductId },
}
