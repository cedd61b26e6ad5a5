//! Main application state and UI logic for Stockroom.
//!
//! This module contains the form state, the reducer store that turns user
//! actions into persistence commands, and the root `eframe::App`
//! implementation.

mod init;
mod overlay;
mod root;
mod state;
mod store;
mod update;

pub use root::InventoryApp;
pub use state::{AppState, FormState, Notice};
pub use store::{Action, Command, DialogAction, FormAction, SearchAction, StoreAction};
