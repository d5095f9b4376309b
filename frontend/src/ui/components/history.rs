//! # History Screen Module
//!
//! The transaction list: most recent first, one row per entry with the
//! note, a friendly timestamp, the signed amount, and a delete action.

use chrono::{DateTime, Local};
use eframe::egui;
use shared::{Transaction, TransactionType};

use crate::ui::app_state::PocketLedgerApp;

impl PocketLedgerApp {
    /// Render the history screen inside the swipeable content area.
    pub fn render_history_screen(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme();

        if self.transactions.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(
                    egui::RichText::new("No transactions yet")
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(theme.text_muted),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Swipe right to go back and add one")
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(theme.text_muted),
                );
            });
            return;
        }

        let transactions = self.transactions.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, transaction) in transactions.iter().enumerate() {
                    if index > 0 {
                        let rect = ui.available_rect_before_wrap();
                        ui.painter().hline(
                            rect.x_range(),
                            rect.top(),
                            egui::Stroke::new(1.0, theme.divider),
                        );
                    }
                    self.render_transaction_row(ui, transaction);
                }
            });
    }

    fn render_transaction_row(&mut self, ui: &mut egui::Ui, transaction: &Transaction) {
        let theme = self.theme();
        let is_credit = transaction.transaction_type == TransactionType::Credit;
        let amount_color = if is_credit { theme.income } else { theme.expense };
        let sign = if is_credit { "+" } else { "-" };
        let icon = if is_credit { "⬆" } else { "⬇" };

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(icon)
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .color(amount_color),
                    );
                    ui.add_space(6.0);

                    ui.vertical(|ui| {
                        let note = if transaction.note.is_empty() {
                            "No description"
                        } else {
                            &transaction.note
                        };
                        ui.label(
                            egui::RichText::new(note)
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .color(theme.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(format_timestamp(&transaction.created_at))
                                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                .color(theme.text_muted),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new(
                            egui::RichText::new("🗑")
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
                        )
                        .fill(egui::Color32::TRANSPARENT);
                        if ui.add(delete).on_hover_text("Delete").clicked() {
                            self.confirm_delete = Some(transaction.id.clone());
                        }

                        ui.label(
                            egui::RichText::new(format!("{}${:.2}", sign, transaction.amount))
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(amount_color),
                        );
                    });
                });
            });
    }
}

/// Friendly timestamp for list rows: "Today" and "Yesterday" with the
/// time, a plain date for anything older. Falls back to the raw string
/// if it does not parse.
fn format_timestamp(created_at: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };
    let local = parsed.with_timezone(&Local);
    let date = local.date_naive();
    let today = Local::now().date_naive();

    if date == today {
        format!("Today, {}", local.format("%H:%M"))
    } else if today.pred_opt() == Some(date) {
        format!("Yesterday, {}", local.format("%H:%M"))
    } else {
        local.format("%b %-d, %Y").to_string()
    }
}
