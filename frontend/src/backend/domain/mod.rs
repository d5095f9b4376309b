//! # Domain Module
//!
//! Business logic sitting between storage and the UI: ledger operations
//! (create/list/delete/balance) and the theme state broadcast.

pub mod ledger_service;
pub mod theme_service;

pub use ledger_service::{DomainError, LedgerService};
pub use theme_service::ThemeService;
