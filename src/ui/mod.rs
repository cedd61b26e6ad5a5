//! UI layer - egui window, form store and views

pub mod app;
pub mod spacing;
pub mod views;
