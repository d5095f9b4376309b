//! # Header Module
//!
//! This module renders the application header: the app title on the
//! left, the dark-mode toggle on the right, and the transient
//! success/error message strip underneath.

use eframe::egui;

use crate::ui::app_state::PocketLedgerApp;

impl PocketLedgerApp {
    /// Render the header bar.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme();

        let frame = egui::Frame::none()
            .fill(theme.card_background)
            .inner_margin(egui::Margin::symmetric(16.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Pocket Ledger")
                            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(theme.text_primary),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.backend.theme_service.is_dark() {
                        "☀"
                    } else {
                        "🌙"
                    };
                    let toggle = egui::Button::new(
                        egui::RichText::new(icon)
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                    )
                    .fill(theme.background)
                    .rounding(16.0);
                    if ui.add(toggle).on_hover_text("Toggle dark mode").clicked() {
                        self.backend.theme_service.toggle();
                    }

                    ui.add_space(8.0);
                    let balance_color = if self.current_balance >= 0.0 {
                        theme.income
                    } else {
                        theme.expense
                    };
                    ui.label(
                        egui::RichText::new(format!("${:.2}", self.current_balance))
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .color(balance_color),
                    );
                });
            });
        });
    }

    /// Render error and success messages.
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme();
        if let Some(error) = &self.error_message {
            ui.colored_label(theme.expense, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(theme.income, format!("✅ {}", success));
        }
    }
}
