use eframe::egui;

use crate::ui::app_state::PocketLedgerApp;

impl eframe::App for PocketLedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load the ledger on first run
        if self.loading {
            self.load_initial_data();
        }

        // Clear messages after a delay
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        let theme = self.theme();

        // Bottom tab bar claims its space before the central panel
        self.render_tab_bar(ctx);

        // Main UI
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme.background))
            .show(ctx, |ui| {
                if self.loading {
                    self.render_loading_screen(ui);
                    return;
                }

                self.render_header(ui);
                self.render_messages(ui);
                self.render_main_content(ui);
            });

        // Render modals on top of everything
        self.render_modals(ctx);
    }
}

impl PocketLedgerApp {
    /// Render the loading screen
    fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.spinner();
            ui.label("Loading...");
        });
    }
}
