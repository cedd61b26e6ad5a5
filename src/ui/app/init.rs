use eframe::egui;

use crate::infra::db::ProductRepository;
use crate::ui::spacing;

use super::InventoryApp;

impl InventoryApp {
    pub fn new_egui(cc: &eframe::CreationContext<'_>, products: ProductRepository) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        cc.egui_ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(spacing::ITEM_SPACING.0, spacing::ITEM_SPACING.1);
            style.spacing.button_padding =
                egui::vec2(spacing::BUTTON_PADDING.0, spacing::BUTTON_PADDING.1);
        });

        Self::new(products)
    }
}
