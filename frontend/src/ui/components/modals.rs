//! # Modals Module
//!
//! Modal dialogs: the add-transaction form and the delete confirmation.
//! Both are centered windows over a dimmed backdrop; while one is open
//! the swipe layer underneath receives no pointer input.

use eframe::egui;
use shared::TransactionType;

use crate::ui::app_state::PocketLedgerApp;

impl PocketLedgerApp {
    /// Render whichever modal is open, if any.
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if self.show_money_modal {
            self.render_money_modal(ctx);
        }
        if self.confirm_delete.is_some() {
            self.render_delete_confirmation(ctx);
        }
    }

    fn dim_backdrop(&self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
                // Swallow clicks so the content underneath stays inert.
                ui.allocate_rect(screen, egui::Sense::click());
            });
    }

    fn render_money_modal(&mut self, ctx: &egui::Context) {
        let theme = self.theme();
        self.dim_backdrop(ctx);

        egui::Window::new("Add Transaction")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(theme.card_background)
                    .rounding(12.0),
            )
            .show(ctx, |ui| {
                ui.set_width(280.0);

                // Income / Expense toggle.
                ui.horizontal(|ui| {
                    for (label, kind, color) in [
                        ("Income", TransactionType::Credit, theme.income),
                        ("Expense", TransactionType::Debit, theme.expense),
                    ] {
                        let active = self.form_transaction_type == kind;
                        let fill = if active { color } else { theme.background };
                        let text_color = if active {
                            egui::Color32::WHITE
                        } else {
                            theme.text_muted
                        };
                        let button = egui::Button::new(
                            egui::RichText::new(label).color(text_color),
                        )
                        .fill(fill)
                        .rounding(8.0)
                        .min_size(egui::vec2(130.0, 32.0));
                        if ui.add(button).clicked() {
                            self.form_transaction_type = kind;
                        }
                    }
                });

                ui.add_space(12.0);
                ui.label(egui::RichText::new("Amount").color(theme.text_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut self.form_amount)
                        .hint_text("0.00")
                        .desired_width(f32::INFINITY),
                );
                if let Some(error) = &self.form_amount_error {
                    ui.colored_label(theme.expense, error);
                }

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Note (optional)").color(theme.text_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut self.form_note)
                        .hint_text("What was it for?")
                        .desired_width(f32::INFINITY),
                );
                if let Some(error) = &self.form_note_error {
                    ui.colored_label(theme.expense, error);
                }

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new("Cancel").min_size(egui::vec2(130.0, 32.0)))
                        .clicked()
                    {
                        self.show_money_modal = false;
                        self.reset_money_form();
                    }
                    let add = egui::Button::new(
                        egui::RichText::new("Add").color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent)
                    .rounding(8.0)
                    .min_size(egui::vec2(130.0, 32.0));
                    if ui.add(add).clicked() {
                        self.submit_transaction();
                    }
                });
            });
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let theme = self.theme();
        self.dim_backdrop(ctx);

        egui::Window::new("Delete transaction?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(theme.card_background)
                    .rounding(12.0),
            )
            .show(ctx, |ui| {
                ui.set_width(260.0);
                ui.label(
                    egui::RichText::new("This cannot be undone.").color(theme.text_muted),
                );
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new("Cancel").min_size(egui::vec2(120.0, 32.0)))
                        .clicked()
                    {
                        self.confirm_delete = None;
                    }
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(egui::Color32::WHITE),
                    )
                    .fill(theme.expense)
                    .rounding(8.0)
                    .min_size(egui::vec2(120.0, 32.0));
                    if ui.add(delete).clicked() {
                        if let Some(id) = self.confirm_delete.take() {
                            self.delete_transaction(&id);
                        }
                    }
                });
            });
    }
}
