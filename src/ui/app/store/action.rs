use chrono::NaiveDate;

use crate::domain::{Product, ProductError, ProductId};

#[derive(Debug)]
pub enum Action {
    Form(FormAction),
    Search(SearchAction),
    Dialog(DialogAction),
    Store(StoreAction),
}

#[derive(Debug)]
pub enum FormAction {
    SetId(String),
    SetName(String),
    SetDescription(String),
    /// Ignored unless the text is all ASCII digits.
    SetQuantity(String),
    SetDate(Option<NaiveDate>),
    Clear,
    Add,
    Update,
    Remove,
}

#[derive(Debug)]
pub enum SearchAction {
    SetQuery(String),
    Refresh,
    /// Fill the form from a grid row.
    SelectProduct { id: ProductId },
}

#[derive(Debug)]
pub enum DialogAction {
    DismissNotice,
    ConfirmDelete,
    CancelDelete,
}

/// Outcomes of persistence commands, fed back into the reducer.
#[derive(Debug)]
pub enum StoreAction {
    ProductsLoaded(Result<Vec<Product>, ProductError>),
    ProductLoaded(Result<Product, ProductError>),
    ProductInserted(Result<ProductId, ProductError>),
    ProductUpdated(Result<ProductId, ProductError>),
    ProductDeleted(Result<ProductId, ProductError>),
}
