//! # Tab Bar Module
//!
//! The bottom tab bar: two buttons, Home and History. Tapping one is
//! the non-gesture way to navigate; it goes through the same
//! `navigate_to` path a committed swipe uses, so any in-flight drag on
//! the old screen is dropped and the new screen mounts at rest.

use eframe::egui;

use crate::ui::app_state::{MainTab, PocketLedgerApp};

impl PocketLedgerApp {
    /// Render the bottom tab bar.
    pub fn render_tab_bar(&mut self, ctx: &egui::Context) {
        let theme = self.theme();

        egui::TopBottomPanel::bottom("tab_bar")
            .frame(
                egui::Frame::none()
                    .fill(theme.card_background)
                    .inner_margin(egui::Margin::symmetric(0.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    for (column, tab) in columns
                        .iter_mut()
                        .zip([MainTab::Home, MainTab::History])
                    {
                        column.vertical_centered(|ui| {
                            let active = self.current_tab == tab;
                            let color = if active { theme.accent } else { theme.text_muted };
                            let label = egui::RichText::new(tab.title())
                                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                .color(color);
                            let label = if active { label.strong() } else { label };

                            let button = egui::Button::new(label)
                                .fill(egui::Color32::TRANSPARENT)
                                .min_size(egui::vec2(ui.available_width(), 32.0));
                            if ui.add(button).clicked() {
                                self.navigate_to(tab);
                            }
                        });
                    }
                });
            });
    }
}
