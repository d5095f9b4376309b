//! # Theme Configuration
//!
//! Centralized color configuration for the pocket ledger app. All visual
//! styling goes through a `Theme` value so the light and dark palettes stay
//! consistent and switching between them is a single lookup.
//!
//! ## Usage
//! ```rust,ignore
//! let theme = Theme::for_mode(app.backend.theme_service.is_dark());
//! ui.painter().rect_filled(rect, 0.0, theme.background);
//! ```

use eframe::egui::Color32;

use crate::ui::app_state::MainTab;

/// One complete palette. The app holds whichever variant matches the
/// persisted dark-mode preference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Base window background.
    pub background: Color32,
    /// Home screen background (also the overlay color when swiping
    /// towards Home).
    pub home_background: Color32,
    /// History screen background, a step away from Home so the swipe
    /// overlay reads as the destination arriving.
    pub history_background: Color32,
    /// Card and panel surfaces.
    pub card_background: Color32,
    /// Primary text on surfaces.
    pub text_primary: Color32,
    /// Secondary text (dates, hints, footers).
    pub text_muted: Color32,
    /// Accent for interactive elements and the active tab.
    pub accent: Color32,
    /// Positive amounts and the income toggle.
    pub income: Color32,
    /// Negative amounts, the expense toggle, and destructive actions.
    pub expense: Color32,
    /// Hairline separators between list rows.
    pub divider: Color32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            home_background: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            history_background: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            card_background: Color32::from_rgb(0xff, 0xff, 0xff),
            text_primary: Color32::from_rgb(0x1e, 0x29, 0x3b),
            text_muted: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x3b, 0x82, 0xf6),
            income: Color32::from_rgb(0x10, 0xb9, 0x81),
            expense: Color32::from_rgb(0xef, 0x44, 0x44),
            divider: Color32::from_rgb(0xe2, 0xe8, 0xf0),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x0f, 0x17, 0x2a),
            home_background: Color32::from_rgb(0x0f, 0x17, 0x2a),
            history_background: Color32::from_rgb(0x16, 0x20, 0x38),
            card_background: Color32::from_rgb(0x1e, 0x29, 0x3b),
            text_primary: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            text_muted: Color32::from_rgb(0x94, 0xa3, 0xb8),
            accent: Color32::from_rgb(0x60, 0xa5, 0xfa),
            income: Color32::from_rgb(0x34, 0xd3, 0x99),
            expense: Color32::from_rgb(0xf8, 0x71, 0x71),
            divider: Color32::from_rgb(0x33, 0x41, 0x55),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// The background a given tab's screen is painted with.
    pub fn screen_background(&self, tab: MainTab) -> Color32 {
        match tab {
            MainTab::Home => self.home_background,
            MainTab::History => self.history_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_selects_palette() {
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::for_mode(true), Theme::dark());
    }

    #[test]
    fn test_screen_backgrounds_are_distinguishable() {
        for theme in [Theme::light(), Theme::dark()] {
            assert_ne!(
                theme.screen_background(MainTab::Home),
                theme.screen_background(MainTab::History)
            );
        }
    }
}
