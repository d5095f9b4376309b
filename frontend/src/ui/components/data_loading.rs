//! # Data Loading Module
//!
//! This module handles all data operations for the pocket ledger app,
//! interfacing with the embedded backend to fetch and update state.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Load the ledger on app startup
//! - `reload_ledger()` - Refresh the transaction list and balance
//! - `submit_transaction()` - Validate the form and persist a new entry
//! - `delete_transaction()` - Remove an entry and refresh
//!
//! ## Data Flow:
//! 1. UI triggers an operation
//! 2. Module calls the appropriate backend service
//! 3. Updates application state with the result
//! 4. Handles any errors and provides user feedback

use log::{info, warn};
use shared::validate_amount;

use crate::ui::app_state::PocketLedgerApp;

impl PocketLedgerApp {
    /// Load initial data on first frame.
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial ledger data");
        self.reload_ledger();
        self.loading = false;
    }

    /// Refresh the cached transaction list and balance from storage.
    pub fn reload_ledger(&mut self) {
        match self.backend.ledger_service.list_transactions() {
            Ok(transactions) => {
                self.transactions = transactions;
            }
            Err(e) => {
                warn!("failed to load transactions: {}", e);
                self.error_message = Some(format!("Failed to load transactions: {}", e));
                return;
            }
        }
        match self.backend.ledger_service.balance() {
            Ok(balance) => self.current_balance = balance,
            Err(e) => {
                warn!("failed to compute balance: {}", e);
                self.error_message = Some(format!("Failed to compute balance: {}", e));
            }
        }
    }

    /// Validate the money form and, if valid, persist the transaction.
    /// Validation errors land next to the offending field, not in the
    /// global message area.
    pub fn submit_transaction(&mut self) {
        self.form_amount_error = None;
        self.form_note_error = None;

        let amount = match validate_amount(&self.form_amount) {
            Ok(amount) => amount,
            Err(message) => {
                self.form_amount_error = Some(message);
                return;
            }
        };

        match self.backend.ledger_service.create_transaction(
            self.form_transaction_type,
            amount,
            &self.form_note,
        ) {
            Ok(transaction) => {
                info!("💾 Saved transaction {}", transaction.id);
                self.success_message = Some("Transaction added".to_string());
                self.show_money_modal = false;
                self.reset_money_form();
                self.reload_ledger();
            }
            Err(e) => {
                // Note validation is the only field the service can still
                // reject after the amount check above.
                self.form_note_error = Some(e.to_string());
            }
        }
    }

    /// Delete a transaction by id and refresh the ledger.
    pub fn delete_transaction(&mut self, id: &str) {
        match self.backend.ledger_service.delete_transaction(id) {
            Ok(()) => {
                info!("🗑 Deleted transaction {}", id);
                self.success_message = Some("Transaction deleted".to_string());
                self.reload_ledger();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to delete transaction: {}", e));
            }
        }
    }
}
