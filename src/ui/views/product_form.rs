use crate::ui::app::{FormAction, FormState};
use crate::ui::spacing;
use eframe::egui;

/// Renders the product form and its buttons.
///
/// Returns the action triggered this frame, if any. Text fields report
/// their edited value and the reducer decides whether to keep it.
pub(crate) fn render_product_form(ui: &mut egui::Ui, form: &FormState) -> Option<FormAction> {
    let mut action_out = None;

    ui.heading("Product");
    ui.add_space(spacing::SPACING_SM);

    egui::Grid::new("product_form_fields")
        .num_columns(2)
        .spacing([spacing::SPACING_MD, spacing::SPACING_SM])
        .show(ui, |ui| {
            if let Some(text) = text_row(ui, "ID", &form.id, "e.g. SKU-0001") {
                action_out = Some(FormAction::SetId(text));
            }
            if let Some(text) = text_row(ui, "Name", &form.name, "Display name") {
                action_out = Some(FormAction::SetName(text));
            }
            if let Some(text) = text_row(ui, "Description", &form.description, "Description") {
                action_out = Some(FormAction::SetDescription(text));
            }
            if let Some(text) = text_row(ui, "Quantity", &form.quantity, "0") {
                action_out = Some(FormAction::SetQuantity(text));
            }

            ui.label("Date");
            ui.horizontal(|ui| match form.date {
                Some(current) => {
                    let mut date = current;
                    let response = ui.add(
                        egui_extras::DatePickerButton::new(&mut date).id_salt("product_date"),
                    );
                    if response.changed() || date != current {
                        action_out = Some(FormAction::SetDate(Some(date)));
                    }
                    if ui.small_button("✕").on_hover_text("Clear date").clicked() {
                        action_out = Some(FormAction::SetDate(None));
                    }
                }
                None => {
                    if ui.button("Pick date").clicked() {
                        let today = chrono::Local::now().date_naive();
                        action_out = Some(FormAction::SetDate(Some(today)));
                    }
                }
            });
            ui.end_row();
        });

    ui.add_space(spacing::SPACING_LG);

    ui.horizontal(|ui| {
        if ui.button("Add").clicked() {
            action_out = Some(FormAction::Add);
        }
        if ui.button("Update").clicked() {
            action_out = Some(FormAction::Update);
        }
        if ui.button("Remove").clicked() {
            action_out = Some(FormAction::Remove);
        }
        if ui.button("Clear").clicked() {
            action_out = Some(FormAction::Clear);
        }
    });

    action_out
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &str, hint: &str) -> Option<String> {
    ui.label(label);
    let mut output = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut output)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();

    response.changed().then_some(output)
}
