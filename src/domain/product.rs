use chrono::NaiveDate;

pub type ProductId = String;

/// A stocked product, keyed by a user-supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub date_created: NaiveDate,
    pub date_updated: NaiveDate,
}

impl Product {
    /// Builds a product whose created and updated dates are both `date`.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            quantity,
            date_created: date,
            date_updated: date,
        }
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// An empty query matches every product.
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
