//! # Tab Manager Module
//!
//! This module hosts the swipeable main content area: it feeds pointer
//! input and frame ticks into the swipe controller, applies the visual
//! transform (translation, scale, opacity, overlay) the controller
//! derives from the drag offset, and routes to the screen for the
//! current tab.
//!
//! ## Tab Flow:
//! - MainTab::Home -> the balance card and quote
//! - MainTab::History -> the transaction list
//! - A committed swipe or a tab-bar tap switches between the two; both
//!   paths go through `navigate_to` so the gesture state is remounted.

use eframe::egui;

use crate::ui::app_state::{MainTab, PocketLedgerApp};
use crate::ui::swipe::{SwipeEffect, SwipeEvent};

impl PocketLedgerApp {
    /// Render the main content area with the swipe transform applied.
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        let content_rect = ui.available_rect_before_wrap();
        self.swipe.set_screen_width(content_rect.width());

        // Modals own the pointer while they are open; the gesture layer
        // underneath must not see those events.
        let modal_open = self.show_money_modal || self.confirm_delete.is_some();
        if !modal_open {
            self.pump_swipe_pointer(ui.ctx(), content_rect);
        }

        // Advance any settle animation. A finished commit navigates here,
        // before this frame renders, so the new screen appears at rest.
        let time = ui.ctx().input(|i| i.time);
        if let SwipeEffect::Navigate(target) = self.swipe.handle_event(SwipeEvent::Tick { time })
        {
            self.navigate_to(target);
        }
        if self.swipe.is_animating() {
            ui.ctx().request_repaint();
        }

        let params = self.swipe.visual_params();
        let theme = self.theme();

        // Translate with the drag, shrink towards the center.
        let translated = content_rect.translate(egui::vec2(params.translate_x, 0.0));
        let screen_rect =
            egui::Rect::from_center_size(translated.center(), translated.size() * params.scale);

        ui.allocate_ui_at_rect(screen_rect, |ui| {
            ui.set_opacity(params.opacity);
            ui.set_clip_rect(screen_rect.expand(2.0));
            ui.painter()
                .rect_filled(screen_rect, 8.0, theme.screen_background(self.current_tab));
            match self.current_tab {
                MainTab::Home => self.render_home_screen(ui),
                MainTab::History => self.render_history_screen(ui),
            }
        });

        // The destination's background fades in over the receding screen
        // as the drag deepens. Painted over the untransformed area so it
        // covers the edges the shrink exposes.
        if params.overlay_opacity > 0.0 {
            let destination = self.swipe.current_tab().other();
            ui.painter().rect_filled(
                content_rect,
                0.0,
                theme
                    .screen_background(destination)
                    .gamma_multiply(params.overlay_opacity),
            );
        }
    }

    /// Translate egui pointer state into swipe events. One sample per
    /// frame is enough; the velocity tracker interpolates over its own
    /// time window.
    fn pump_swipe_pointer(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        struct PointerSample {
            time: f64,
            pos: Option<egui::Pos2>,
            pressed: bool,
            down: bool,
            released: bool,
        }

        let sample = ctx.input(|i| PointerSample {
            time: i.time,
            pos: i.pointer.latest_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
        });

        if sample.pressed {
            if let Some(pos) = sample.pos {
                if rect.contains(pos) {
                    let _ = self.swipe.handle_event(SwipeEvent::PointerDown {
                        x: pos.x,
                        y: pos.y,
                        time: sample.time,
                    });
                }
            }
        } else if sample.down {
            match sample.pos {
                Some(pos) => {
                    let _ = self.swipe.handle_event(SwipeEvent::PointerMove {
                        x: pos.x,
                        y: pos.y,
                        time: sample.time,
                    });
                }
                // Pointer vanished mid-press (left the window, focus
                // change). Treat as a terminated gesture.
                None => {
                    let _ = self.swipe.handle_event(SwipeEvent::PointerLost);
                }
            }
        } else if sample.released {
            let _ = self.swipe.handle_event(SwipeEvent::PointerUp { time: sample.time });
        }
    }
}
