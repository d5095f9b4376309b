//! Ledger domain logic: validation, id assignment, ordering and balance.

use crate::backend::storage::traits::{StorageError, TransactionStorage};
use chrono::Local;
use log::info;
use shared::{validate_note, Transaction, TransactionType};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service wrapping a [`TransactionStorage`] backend with the app's
/// business rules.
pub struct LedgerService<S: TransactionStorage> {
    repository: Arc<S>,
}

impl<S: TransactionStorage> LedgerService<S> {
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new transaction. Returns the stored record
    /// with its assigned id and timestamp.
    pub fn create_transaction(
        &self,
        transaction_type: TransactionType,
        amount: f64,
        note: &str,
    ) -> Result<Transaction, DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }
        let note = validate_note(note).map_err(DomainError::Validation)?;

        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let transaction = Transaction {
            id: Transaction::generate_id(now_millis),
            transaction_type,
            amount,
            note,
            created_at: Local::now().to_rfc3339(),
        };

        self.repository.store_transaction(&transaction)?;
        info!("created transaction {} ({:?} {:.2})", transaction.id, transaction_type, amount);
        Ok(transaction)
    }

    /// All transactions, most recent first (`created_at` descending, id
    /// as tie-break for same-instant entries).
    pub fn list_transactions(&self) -> Result<Vec<Transaction>, DomainError> {
        let mut transactions = self.repository.list_transactions()?;
        transactions.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(transactions)
    }

    /// Running balance: credits minus debits over the whole ledger.
    pub fn balance(&self) -> Result<f64, DomainError> {
        let transactions = self.repository.list_transactions()?;
        Ok(transactions.iter().map(|t| t.signed_amount()).sum())
    }

    /// Delete by id. Deleting an absent id is a no-op.
    pub fn delete_transaction(&self, id: &str) -> Result<(), DomainError> {
        let deleted = self.repository.delete_transaction(id)?;
        if deleted {
            info!("deleted transaction {}", id);
        }
        Ok(())
    }
}
