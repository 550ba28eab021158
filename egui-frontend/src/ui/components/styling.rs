//! # Styling
//!
//! Global style setup and the variance color mapping. The app keeps the dark
//! palette of the page it replaces; the exact shades are cosmetic.

use eframe::egui;

use shared::VarianceState;

/// Configure global egui styling for the drawer counter.
pub fn setup_drawer_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);

        style
    });
}

/// (background, text) pair for the variance chip, selected by the sign of
/// the variance. Shades match the original dark-mode page.
pub fn variance_colors(state: VarianceState) -> (egui::Color32, egui::Color32) {
    match state {
        VarianceState::Short => (
            egui::Color32::from_rgb(0x4a, 0x1c, 0x24),
            egui::Color32::from_rgb(0xf8, 0x8e, 0x99),
        ),
        VarianceState::Over => (
            egui::Color32::from_rgb(0x4d, 0x38, 0x00),
            egui::Color32::from_rgb(0xff, 0xd5, 0x4f),
        ),
        VarianceState::Balanced => (
            egui::Color32::from_rgb(0x1e, 0x46, 0x20),
            egui::Color32::from_rgb(0x4c, 0xaf, 0x50),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_state_gets_a_distinct_pair() {
        let short = variance_colors(VarianceState::Short);
        let over = variance_colors(VarianceState::Over);
        let balanced = variance_colors(VarianceState::Balanced);
        assert_ne!(short, over);
        assert_ne!(over, balanced);
        assert_ne!(short, balanced);
    }
}
