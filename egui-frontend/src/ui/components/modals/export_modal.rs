//! # Export Modal
//!
//! Three-way export choice: CSV file, printable report (for PDF via the
//! system print dialog), or cancel. Exactly one handler fires per opening,
//! and the overlay is dismissed after any choice.

use eframe::egui;
use log::{error, info};

use crate::backend::domain::ledger_service::DrawerTotals;
use crate::ui::app_state::CashDrawerApp;

/// The user's pick in the export modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Csv,
    Pdf,
    Cancel,
}

impl CashDrawerApp {
    /// Render the export choice modal
    pub fn render_export_modal(&mut self, ctx: &egui::Context, totals: &DrawerTotals) {
        if !self.show_export_modal {
            return;
        }

        let mut choice: Option<ExportChoice> = None;

        // Area with Foreground order so the overlay sits above everything
        egui::Area::new(egui::Id::new("export_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent backdrop
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .rounding(egui::Rounding::same(10.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(360.0, 180.0));
                                ui.set_max_size(egui::vec2(360.0, 180.0));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);

                                    ui.label(
                                        egui::RichText::new("📄 Export Drawer Count")
                                            .font(egui::FontId::new(
                                                22.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong(),
                                    );

                                    ui.add_space(8.0);

                                    ui.label("Choose an export format");

                                    ui.add_space(16.0);

                                    ui.horizontal(|ui| {
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                if ui.button("Cancel").clicked() {
                                                    choice = Some(ExportChoice::Cancel);
                                                }
                                                ui.add_space(8.0);
                                                if ui.button("🖨 PDF / Print").clicked() {
                                                    choice = Some(ExportChoice::Pdf);
                                                }
                                                ui.add_space(8.0);
                                                if ui.button("📄 CSV File").clicked() {
                                                    choice = Some(ExportChoice::Csv);
                                                }
                                            },
                                        );
                                    });

                                    ui.add_space(10.0);
                                });
                            });
                    });
                });
            });

        // Resolve the choice outside the UI closures; the modal closes on
        // any of the three.
        if let Some(choice) = choice {
            self.show_export_modal = false;
            match choice {
                ExportChoice::Csv => self.export_as_csv(totals),
                ExportChoice::Pdf => self.export_as_print_report(totals),
                ExportChoice::Cancel => info!("Export cancelled"),
            }
        }
    }

    fn export_as_csv(&mut self, totals: &DrawerTotals) {
        self.clear_messages();
        match self.backend.export_service.export_csv(totals) {
            Ok(response) => {
                info!("CSV export complete: {}", response.file_path);
                self.success_message = Some(response.message);
            }
            Err(e) => {
                error!("CSV export failed: {}", e);
                self.error_message = Some(format!("CSV export failed: {}", e));
            }
        }
    }

    fn export_as_print_report(&mut self, totals: &DrawerTotals) {
        self.clear_messages();
        match self.backend.export_service.export_print_report(totals) {
            Ok(response) => {
                info!("Print report ready: {}", response.file_path);
                self.success_message = Some(response.message);
            }
            Err(e) => {
                error!("Print export failed: {}", e);
                self.error_message = Some(format!("Print export failed: {}", e));
            }
        }
    }
}
