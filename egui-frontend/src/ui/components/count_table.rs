//! # Count Table
//!
//! The denomination grid: one editable count field per denomination with its
//! unit value and extended value alongside. Totals are recomputed from the
//! field text every frame, so this component only edits strings and displays
//! the figures it is handed.

use eframe::egui;

use crate::backend::domain::ledger_service::{format_currency, DrawerTotals};
use crate::backend::domain::models::DENOMINATIONS;
use crate::ui::app_state::CashDrawerApp;

impl CashDrawerApp {
    pub fn render_count_table(&mut self, ui: &mut egui::Ui, totals: &DrawerTotals) {
        ui.group(|ui| {
            egui::Grid::new("denomination_grid")
                .num_columns(4)
                .spacing([24.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Denomination");
                    ui.strong("Unit");
                    ui.strong("Count");
                    ui.strong("Value");
                    ui.end_row();

                    for (index, denomination) in DENOMINATIONS.iter().enumerate() {
                        ui.label(denomination.label);
                        ui.label(format_currency(denomination.unit_value));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form.counts[index])
                                .desired_width(72.0)
                                .hint_text("0"),
                        );
                        ui.label(format_currency(totals.rows[index].extended));
                        ui.end_row();
                    }
                });
        });
    }
}
