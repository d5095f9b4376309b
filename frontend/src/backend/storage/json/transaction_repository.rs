//! JSON-backed transaction repository.

use crate::backend::storage::json::JsonConnection;
use crate::backend::storage::traits::{StorageError, TransactionStorage};
use log::debug;
use shared::Transaction;
use std::sync::Arc;

#[derive(Clone)]
pub struct TransactionRepository {
    connection: Arc<JsonConnection>,
}

impl TransactionRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Transaction>, StorageError> {
        self.connection
            .read_blob(&self.connection.transactions_file(), Vec::new())
    }

    fn write_all(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        self.connection
            .write_blob(&self.connection.transactions_file(), &transactions)
    }
}

impl TransactionStorage for TransactionRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>, StorageError> {
        self.read_all()
    }

    fn store_transaction(&self, transaction: &Transaction) -> Result<(), StorageError> {
        let mut transactions = self.read_all()?;
        transactions.push(transaction.clone());
        self.write_all(&transactions)?;
        debug!("stored transaction {}", transaction.id);
        Ok(())
    }

    fn delete_transaction(&self, id: &str) -> Result<bool, StorageError> {
        let mut transactions = self.read_all()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            // Absent id: nothing to rewrite.
            return Ok(false);
        }
        self.write_all(&transactions)?;
        debug!("deleted transaction {}", id);
        Ok(true)
    }
}
