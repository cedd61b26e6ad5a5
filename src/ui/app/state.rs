use chrono::NaiveDate;

use crate::domain::{FormError, Product, ProductError, ProductId};

/// Raw contents of the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Digits only; enforced by the reducer.
    pub quantity: String,
    pub date: Option<NaiveDate>,
}

impl FormState {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity.to_string(),
            date: Some(product.date_updated),
        }
    }

    /// Build a product from the form. The picked date is used for both the
    /// created and the updated date.
    pub fn to_product(&self) -> Result<Product, FormError> {
        let Some(date) = self.date else {
            return Err(FormError::EmptyFields);
        };
        if self.id.is_empty()
            || self.name.is_empty()
            || self.description.is_empty()
            || self.quantity.is_empty()
        {
            return Err(FormError::EmptyFields);
        }

        let quantity = self
            .quantity
            .parse::<u32>()
            .map_err(|_| FormError::InvalidQuantity(self.quantity.clone()))?;

        Ok(Product::new(
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            quantity,
            date,
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A modal message shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn duplicate_id() -> Self {
        Self::new("Product already exists", "A product with that ID already exists.")
    }

    pub fn not_found() -> Self {
        Self::new(
            "Product does not exist",
            "There is no product saved with that ID.",
        )
    }

    pub fn storage(err: &ProductError) -> Self {
        Self::new("Storage error", err.to_string())
    }
}

impl From<&FormError> for Notice {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::EmptyFields => Self::new("Empty fields", err.to_string()),
            FormError::InvalidQuantity(_) => Self::new("Invalid quantity", err.to_string()),
            FormError::MissingId => Self::new(
                "No ID input",
                "You should input the ID of the product that you want to delete.",
            ),
        }
    }
}

impl From<&ProductError> for Notice {
    fn from(err: &ProductError) -> Self {
        match err {
            ProductError::DuplicateId(_) => Self::duplicate_id(),
            ProductError::NotFound(_) => Self::not_found(),
            ProductError::Storage(_) | ProductError::OperationFailed(_) => Self::storage(err),
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormState,
    /// Grid row the form was last filled from.
    pub selected_id: Option<ProductId>,

    pub search_query: String,
    /// Products currently shown in the grid.
    pub products: Vec<Product>,

    pub notice: Option<Notice>,
    /// Id awaiting the user's yes/no before it is deleted.
    pub pending_delete: Option<ProductId>,
}

impl AppState {
    /// True while a notice or confirmation blocks the rest of the window.
    pub fn is_modal_open(&self) -> bool {
        self.notice.is_some() || self.pending_delete.is_some()
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
        self.selected_id = None;
    }
}
