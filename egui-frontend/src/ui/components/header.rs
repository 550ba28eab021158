use eframe::egui;

use crate::backend::domain::ledger_service::{format_currency, DrawerTotals};
use crate::ui::app_state::CashDrawerApp;

impl CashDrawerApp {
    /// Title row with the live drawer total on the right.
    pub fn render_header(&self, ui: &mut egui::Ui, totals: &DrawerTotals) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💵 Cash Drawer Counter")
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("Total: {}", format_currency(totals.total)))
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong(),
                );
            });
        });
    }
}
