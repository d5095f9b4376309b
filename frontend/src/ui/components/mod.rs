//! # UI Components Module
//!
//! This module organizes all UI components for the pocket ledger
//! application. Each submodule handles a specific aspect of the user
//! interface.
//!
//! ## Module Organization:
//! - `data_loading` - Backend data operations and state refresh
//! - `theme` - Light and dark color palettes
//! - `header` - Application header with the dark-mode toggle
//! - `tab_manager` - Swipe gesture host and content routing
//! - `tab_bar` - Bottom tab navigation
//! - `home` - Home screen with the balance card
//! - `history` - Transaction list screen
//! - `modals` - Add-transaction form and delete confirmation

pub mod data_loading;
pub mod header;
pub mod history;
pub mod home;
pub mod modals;
pub mod tab_bar;
pub mod tab_manager;
pub mod theme;

pub use theme::*;
