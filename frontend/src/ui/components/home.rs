//! # Home Screen Module
//!
//! The landing screen: the launch quote, the balance card, and the
//! button that opens the add-transaction modal.

use eframe::egui;

use crate::ui::app_state::PocketLedgerApp;

impl PocketLedgerApp {
    /// Render the home screen inside the swipeable content area.
    pub fn render_home_screen(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme();

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.quote)
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                        .italics()
                        .color(theme.text_muted),
                )
                .selectable(false),
            );

            ui.add_space(24.0);
            self.render_balance_card(ui);
            ui.add_space(24.0);

            let add_button = egui::Button::new(
                egui::RichText::new("＋")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .color(egui::Color32::WHITE),
            )
            .fill(theme.accent)
            .rounding(28.0)
            .min_size(egui::vec2(56.0, 56.0));
            if ui.add(add_button).on_hover_text("Add a transaction").clicked() {
                self.reset_money_form();
                self.show_money_modal = true;
            }
        });

        // Pin the footer to the bottom of the screen area.
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(12.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("made with ❤")
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(theme.text_muted),
                )
                .selectable(false),
            );
        });
    }

    /// The balance card: the magnitude is always shown unsigned, the
    /// color carries the sign.
    fn render_balance_card(&self, ui: &mut egui::Ui) {
        let theme = self.theme();
        let balance_color = if self.current_balance >= 0.0 {
            theme.income
        } else {
            theme.expense
        };

        egui::Frame::none()
            .fill(theme.card_background)
            .rounding(16.0)
            .inner_margin(egui::Margin::symmetric(40.0, 24.0))
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 2.0),
                blur: 8.0,
                spread: 0.0,
                color: egui::Color32::from_black_alpha(20),
            })
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Current Balance")
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(theme.text_muted),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("${:.2}", self.current_balance.abs()))
                            .font(egui::FontId::new(36.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(balance_color),
                    );
                });
            });
    }
}
