//! # App Implementation
//!
//! The `eframe::App` implementation: recomputes the drawer totals from the
//! current field contents every frame, renders the form, and dispatches the
//! action buttons (save, export, reset).

use eframe::egui;
use log::{error, info};

use shared::DrawerSnapshot;

use crate::backend::domain::ledger_service::parse_or_zero;
use crate::ui::app_state::CashDrawerApp;

impl eframe::App for CashDrawerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Recompute everything from the raw field text. Pure and idempotent,
        // so running it once per frame is the whole event model.
        let totals = self.backend.ledger_service.compute(&self.form);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_header(ui, &totals);

                    ui.separator();

                    self.render_messages(ui);

                    self.render_count_table(ui, &totals);

                    ui.add_space(12.0);

                    self.render_summary(ui, &totals);

                    ui.add_space(12.0);

                    self.render_action_buttons(ui);
                });
        });

        // Overlay modals
        self.render_export_modal(ctx, &totals);
        self.render_reset_confirm_modal(ctx);
    }
}

impl CashDrawerApp {
    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::from_rgb(248, 142, 153), format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::from_rgb(76, 175, 80), format!("✅ {}", success));
        }
    }

    /// Render the save / export / reset button row
    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        let mut should_save = false;
        let mut should_export = false;
        let mut should_reset = false;

        ui.horizontal(|ui| {
            if ui.button("💾 Save Count").clicked() {
                should_save = true;
            }
            if ui.button("📄 Export…").clicked() {
                should_export = true;
            }
            if ui.button("🔄 Reset").clicked() {
                should_reset = true;
            }
        });

        // Resolve clicks outside the layout closure to avoid borrow conflicts
        if should_save {
            self.save_current_count();
        }
        if should_export {
            self.clear_messages();
            self.show_export_modal = true;
        }
        if should_reset {
            self.show_reset_confirm = true;
        }
    }

    /// Append a snapshot of the current form to the saved-counts file.
    fn save_current_count(&mut self) {
        self.clear_messages();

        let snapshot = DrawerSnapshot::new(
            self.form.parsed_counts(),
            parse_or_zero(&self.form.expected_amount),
            parse_or_zero(&self.form.cash_taken),
            parse_or_zero(&self.form.new_drawer),
        );

        match self.backend.snapshot_repository.append(snapshot) {
            Ok(total_saved) => {
                info!("Cash drawer count saved ({} on file)", total_saved);
                self.success_message = Some(format!(
                    "Cash drawer count saved successfully! ({} on file)",
                    total_saved
                ));
            }
            Err(e) => {
                error!("Failed to save drawer count: {}", e);
                self.error_message = Some(format!("Failed to save count: {}", e));
            }
        }
    }
}
