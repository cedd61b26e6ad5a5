use super::{Action, DialogAction, InventoryApp};
use crate::ui::spacing;
use eframe::egui;

impl InventoryApp {
    pub(super) fn render_notice_overlay(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.state.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_overlay"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(notice.body.as_str());
                ui.add_space(spacing::SPACING_SM);
                if ui.button("Okay").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dispatch(Action::Dialog(DialogAction::DismissNotice));
        }
    }

    pub(super) fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        if self.state.pending_delete.is_none() || self.state.notice.is_some() {
            return;
        }

        let mut answer = None;
        egui::Window::new("Delete product")
            .id(egui::Id::new("delete_confirmation"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this product?");
                ui.add_space(spacing::SPACING_SM);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(DialogAction::ConfirmDelete);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(DialogAction::CancelDelete);
                    }
                });
            });

        if let Some(action) = answer {
            self.dispatch(Action::Dialog(action));
        }
    }
}
