//! # Reset Confirmation
//!
//! Confirmation overlay for the reset button. On confirm every tracked field
//! goes back to blank and the next recompute yields zero totals. No undo.

use eframe::egui;
use log::info;

use crate::ui::app_state::CashDrawerApp;

impl CashDrawerApp {
    pub fn render_reset_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.show_reset_confirm {
            return;
        }

        let mut should_reset = false;
        let mut should_cancel = false;

        egui::Area::new(egui::Id::new("reset_confirm_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
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
                                ui.set_min_size(egui::vec2(340.0, 140.0));
                                ui.set_max_size(egui::vec2(340.0, 140.0));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);

                                    ui.label(
                                        egui::RichText::new("🔄 Reset all values?")
                                            .font(egui::FontId::new(
                                                20.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong(),
                                    );

                                    ui.add_space(8.0);

                                    ui.label("Every count and amount field will be cleared.");

                                    ui.add_space(14.0);

                                    ui.horizontal(|ui| {
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                if ui.button("Cancel").clicked() {
                                                    should_cancel = true;
                                                }
                                                ui.add_space(8.0);
                                                if ui.button("Yes, reset").clicked() {
                                                    should_reset = true;
                                                }
                                            },
                                        );
                                    });
                                });
                            });
                    });
                });
            });

        if should_reset {
            info!("Reset confirmed, clearing all fields");
            self.form.clear();
            self.clear_messages();
            self.show_reset_confirm = false;
        }
        if should_cancel {
            self.show_reset_confirm = false;
        }
    }
}
