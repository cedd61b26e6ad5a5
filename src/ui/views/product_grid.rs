use crate::domain::Product;
use crate::ui::app::SearchAction;
use crate::ui::spacing;
use eframe::egui;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders the search box and the product grid.
///
/// Double-clicking any cell of a row selects that product.
pub(crate) fn render_product_grid(
    ui: &mut egui::Ui,
    search_query: &str,
    products: &[Product],
    selected_id: Option<&str>,
) -> Option<SearchAction> {
    let mut action_out = None;

    ui.horizontal(|ui| {
        ui.label("Search");
        let mut query = search_query.to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Filter by name")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            action_out = Some(SearchAction::SetQuery(query));
        }
    });

    ui.add_space(spacing::SPACING_SM);

    if products.is_empty() {
        ui.weak(if search_query.is_empty() {
            "No products yet."
        } else {
            "No products match the search."
        });
        return action_out;
    }

    egui::ScrollArea::vertical()
        .id_salt("product_grid_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("product_grid")
                .num_columns(6)
                .striped(true)
                .spacing([spacing::SPACING_LG, spacing::SPACING_SM])
                .show(ui, |ui| {
                    for header in ["ID", "Name", "Description", "Quantity", "Created", "Updated"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for product in products {
                        let selected = selected_id == Some(product.id.as_str());
                        let mut double_clicked =
                            ui.selectable_label(selected, product.id.as_str()).double_clicked();

                        let cells = [
                            product.name.clone(),
                            product.description.clone(),
                            product.quantity.to_string(),
                            product.date_created.format(DATE_FORMAT).to_string(),
                            product.date_updated.format(DATE_FORMAT).to_string(),
                        ];
                        for cell in cells {
                            double_clicked |= ui
                                .add(egui::Label::new(cell).sense(egui::Sense::click()))
                                .double_clicked();
                        }
                        ui.end_row();

                        if double_clicked {
                            action_out = Some(SearchAction::SelectProduct {
                                id: product.id.clone(),
                            });
                        }
                    }
                });
        });

    action_out
}
