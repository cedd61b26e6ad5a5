//! Root egui app struct.

use crate::infra::db::ProductRepository;

use super::state::AppState;
use super::{Action, SearchAction};

/// Root egui application for Stockroom.
pub struct InventoryApp {
    pub(super) state: AppState,
    pub(super) products: ProductRepository,
}

impl InventoryApp {
    /// Build the app and load the full product list.
    pub fn new(products: ProductRepository) -> Self {
        let mut app = Self {
            state: AppState::default(),
            products,
        };
        app.dispatch(Action::Search(SearchAction::Refresh));
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
