//! # freezo-database
//!
//! SQLite connection management, repository implementations, and the
//! [`RecordStore`] abstraction the service layer plans against.
//!
//! Two stores are provided: [`SqliteRecordStore`] for persistent use and
//! [`MemoryRecordStore`] with identical semantics for tests and
//! throwaway sessions.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryRecordStore, RecordStore, SqliteRecordStore};
