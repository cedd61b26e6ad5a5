use eframe::egui;

use super::{Action, InventoryApp};
use crate::ui::{spacing, views};

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = !self.state.is_modal_open();

        egui::SidePanel::left("product_form_panel")
            .resizable(false)
            .exact_width(spacing::FORM_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(spacing::SPACING_MD);
                let action = ui
                    .add_enabled_ui(enabled, |ui| {
                        views::render_product_form(ui, &self.state.form)
                    })
                    .inner;
                if let Some(action) = action {
                    self.dispatch(Action::Form(action));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let action = ui
                .add_enabled_ui(enabled, |ui| {
                    views::render_product_grid(
                        ui,
                        &self.state.search_query,
                        &self.state.products,
                        self.state.selected_id.as_deref(),
                    )
                })
                .inner;
            if let Some(action) = action {
                self.dispatch(Action::Search(action));
            }
        });

        self.render_notice_overlay(ctx);
        self.render_delete_confirmation(ctx);
    }
}
