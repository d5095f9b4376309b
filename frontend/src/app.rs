//! # App Module
//!
//! This module serves as the main entry point for the pocket ledger
//! application, re-exporting the app type for the binary.
//!
//! ## Usage:
//! ```rust,ignore
//! use app::PocketLedgerApp;
//! ```

pub use crate::ui::app_state::PocketLedgerApp;
