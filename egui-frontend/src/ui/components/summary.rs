//! # Summary Panel
//!
//! Drawer total, expected amount, the color-coded variance chip, the
//! suggested cash to remove, and the cash-taken / new-drawer fields.

use eframe::egui;

use crate::backend::domain::ledger_service::{format_currency, DrawerTotals, DRAWER_TARGET};
use crate::ui::app_state::CashDrawerApp;
use crate::ui::components::styling::variance_colors;

impl CashDrawerApp {
    pub fn render_summary(&mut self, ui: &mut egui::Ui, totals: &DrawerTotals) {
        ui.group(|ui| {
            egui::Grid::new("summary_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Total in drawer");
                    ui.label(
                        egui::RichText::new(format_currency(totals.total))
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong(),
                    );
                    ui.end_row();

                    ui.label("Expected amount");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.expected_amount)
                            .desired_width(90.0)
                            .hint_text("0.00"),
                    );
                    ui.end_row();

                    ui.label("Variance");
                    let (background, foreground) = variance_colors(totals.variance_state);
                    egui::Frame::none()
                        .fill(background)
                        .rounding(egui::Rounding::same(4.0))
                        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(format_currency(totals.variance))
                                    .color(foreground)
                                    .strong(),
                            );
                        });
                    ui.end_row();

                    ui.label("Cash to remove")
                        .on_hover_text(format!("Leaves a {} float in the drawer", format_currency(DRAWER_TARGET)));
                    ui.label(format_currency(totals.cash_to_remove));
                    ui.end_row();

                    ui.label("Cash taken");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.cash_taken)
                            .desired_width(90.0)
                            .hint_text("0.00"),
                    );
                    ui.end_row();

                    ui.label("New drawer");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.new_drawer)
                            .desired_width(90.0)
                            .hint_text("0.00"),
                    );
                    ui.end_row();
                });
        });
    }
}
