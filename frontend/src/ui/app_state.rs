//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the pocket ledger app.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining the two screens (Home, History)
//! - `PocketLedgerApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize a new app instance with the embedded backend
//! - `clear_messages()` - Clear success/error messages
//!
//! ## State Management:
//! The PocketLedgerApp struct holds all application state in a single
//! location: the backend connection, the active tab and its swipe
//! controller, cached transaction data, modal visibility, and form
//! inputs. This keeps a single source of truth for the whole UI.

use log::info;
use shared::{Transaction, TransactionType};

use crate::backend::Backend;
use crate::ui::components::theme::Theme;
use crate::ui::swipe::{SwipeConfig, SwipeController};

/// Tabs available in the main interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Home,
    History,
}

impl MainTab {
    /// The only other tab; swiping always moves between the two.
    pub fn other(self) -> Self {
        match self {
            MainTab::Home => MainTab::History,
            MainTab::History => MainTab::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MainTab::Home => "Home",
            MainTab::History => "History",
        }
    }
}

/// Motivational quotes for the home screen; one is picked per launch.
pub const QUOTES: &[&str] = &[
    "All Roads Lead to Rome",
    "Once a spectator, always a spectator",
    "Omniscience is equal to omnipotence",
];

/// Main application struct for the egui pocket ledger.
pub struct PocketLedgerApp {
    pub backend: Backend,

    // Application state
    pub transactions: Vec<Transaction>,
    pub current_balance: f64,

    // UI state
    pub loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub current_tab: MainTab,
    pub swipe: SwipeController,
    pub quote: &'static str,

    // Modal states
    pub show_money_modal: bool,
    pub confirm_delete: Option<String>,

    // Form states
    pub form_transaction_type: TransactionType,
    pub form_amount: String,
    pub form_note: String,
    pub form_amount_error: Option<String>,
    pub form_note_error: Option<String>,
}

impl PocketLedgerApp {
    /// Create a new PocketLedgerApp with default values.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing PocketLedgerApp");

        let mut backend = Backend::new()?;
        backend
            .theme_service
            .subscribe(|dark| info!("🎨 Theme changed: dark_mode={}", dark));

        // Pick the launch quote once; it stays fixed until restart.
        let quote_index = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as usize)
            .unwrap_or(0)
            % QUOTES.len();

        let screen_width = cc.egui_ctx.screen_rect().width().max(1.0);

        Ok(Self {
            backend,

            // Application state
            transactions: Vec::new(),
            current_balance: 0.0,

            // UI state
            loading: true,
            error_message: None,
            success_message: None,
            current_tab: MainTab::Home,
            swipe: SwipeController::new(MainTab::Home, SwipeConfig::new(screen_width)),
            quote: QUOTES[quote_index],

            // Modal states
            show_money_modal: false,
            confirm_delete: None,

            // Form states
            form_transaction_type: TransactionType::Credit,
            form_amount: String::new(),
            form_note: String::new(),
            form_amount_error: None,
            form_note_error: None,
        })
    }

    /// The palette matching the persisted dark-mode preference.
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.backend.theme_service.is_dark())
    }

    /// Switch tabs, remounting the swipe controller on the new screen.
    /// Used by swipe commits and by the tab bar alike.
    pub fn navigate_to(&mut self, tab: MainTab) {
        if self.current_tab != tab {
            info!("🧭 Navigating to {:?}", tab);
            self.current_tab = tab;
            self.clear_messages();
        }
        self.swipe.set_tab(tab);
    }

    /// Clear any error or success messages.
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Reset the add-money form to its pristine state.
    pub fn reset_money_form(&mut self) {
        self.form_transaction_type = TransactionType::Credit;
        self.form_amount.clear();
        self.form_note.clear();
        self.form_amount_error = None;
        self.form_note_error = None;
    }
}
