//! Shared data types for the Pocket Ledger app.
//!
//! These are the types that cross the boundary between the storage layer
//! and the UI: the persisted transaction record plus the form validation
//! helpers both sides agree on.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum accepted note length for a transaction.
pub const MAX_NOTE_LENGTH: usize = 256;

/// Whether a transaction adds money to the pool or removes it.
///
/// Serialized lowercase (`"credit"` / `"debit"`) to match the on-disk
/// blob layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

/// A single ledger entry.
///
/// `id` is timestamp-based ("tx-<epoch_millis>-<suffix>") which is
/// monotonic-enough for uniqueness in a single-user app, and `created_at`
/// is an RFC 3339 timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Always positive; the sign is carried by `transaction_type`.
    pub amount: f64,
    pub note: String,
    pub created_at: String,
}

impl Transaction {
    /// Generate a unique transaction ID for the given epoch-millis timestamp.
    /// Format: `tx-<timestamp_ms>-<4 hex chars>`.
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("tx-{}-{}", timestamp_ms, Self::generate_random_suffix(4))
    }

    /// Parse a transaction ID back into its timestamp component.
    pub fn parse_id(id: &str) -> Result<u64, String> {
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 3 || parts[0] != "tx" {
            return Err(format!("Invalid transaction ID format: {}", id));
        }
        parts[1]
            .parse::<u64>()
            .map_err(|_| format!("Invalid timestamp in ID: {}", parts[1]))
    }

    /// The amount with its sign applied: credits positive, debits negative.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }

    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}

/// Validate a raw amount string from the entry form.
///
/// Returns the parsed amount or a user-facing error message.
pub fn validate_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please enter an amount".to_string());
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| "Please enter a valid amount".to_string())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(amount)
}

/// Validate a raw note string from the entry form. Notes are optional;
/// an all-whitespace input is stored as an empty note.
///
/// Returns the trimmed note or a user-facing error message.
pub fn validate_note(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.len() > MAX_NOTE_LENGTH {
        return Err(format!("Note must be {} characters or fewer", MAX_NOTE_LENGTH));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_parse_id() {
        let id = Transaction::generate_id(1702516122000);
        assert!(id.starts_with("tx-1702516122000-"));
        assert_eq!(Transaction::parse_id(&id).unwrap(), 1702516122000);

        assert!(Transaction::parse_id("tx-123").is_err());
        assert!(Transaction::parse_id("child-123-abcd").is_err());
        assert!(Transaction::parse_id("tx-notanumber-abcd").is_err());
    }

    #[test]
    fn test_signed_amount() {
        let mut tx = Transaction {
            id: "tx-1-0000".to_string(),
            transaction_type: TransactionType::Credit,
            amount: 500.0,
            note: "Salary".to_string(),
            created_at: "2024-01-15T10:30:00+00:00".to_string(),
        };
        assert_eq!(tx.signed_amount(), 500.0);
        tx.transaction_type = TransactionType::Debit;
        assert_eq!(tx.signed_amount(), -500.0);
    }

    #[test]
    fn test_serialized_blob_shape() {
        // The on-disk layout uses a lowercase "type" field; keep it stable.
        let tx = Transaction {
            id: "tx-1702516122000-af3c".to_string(),
            transaction_type: TransactionType::Debit,
            amount: 200.0,
            note: "Groceries".to_string(),
            created_at: "2023-12-14T01:02:02+00:00".to_string(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "debit");
        assert_eq!(json["amount"], 200.0);
        assert_eq!(json["note"], "Groceries");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("500").unwrap(), 500.0);
        assert_eq!(validate_amount(" 12.50 ").unwrap(), 12.5);
        assert!(validate_amount("").is_err());
        assert!(validate_amount("abc").is_err());
        assert!(validate_amount("0").is_err());
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("inf").is_err());
    }

    #[test]
    fn test_validate_note() {
        assert_eq!(validate_note("  Groceries ").unwrap(), "Groceries");
        assert_eq!(validate_note("   ").unwrap(), "");
        assert!(validate_note(&"x".repeat(MAX_NOTE_LENGTH + 1)).is_err());
    }
}
