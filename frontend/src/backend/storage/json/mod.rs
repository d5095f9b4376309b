//! # JSON Storage Module
//!
//! JSON-file storage implementation. The whole collection is serialized
//! on every write, mirroring the layout of the app's persisted state:
//!
//! ```json
//! [
//!   {"id":"tx-1702516122000-af3c","type":"credit","amount":500.0,
//!    "note":"Salary","created_at":"2023-12-14T01:02:02+00:00"}
//! ]
//! ```
//!
//! Writes go through a temp file + rename so an interrupted write never
//! clobbers existing data.

pub mod connection;
pub mod settings_repository;
pub mod transaction_repository;

pub use connection::JsonConnection;
pub use settings_repository::SettingsRepository;
pub use transaction_repository::TransactionRepository;
