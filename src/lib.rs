pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod models;
pub mod service;
pub mod storage;
pub mod tools;

pub use error::LedgerError;
pub use logger::in_memory::InMemoryAuditLog;
pub use service::LedgerService;
pub use storage::in_memory::InMemoryStore;
pub use storage::json_file::JsonFileStore;

#[cfg(test)]
mod tests;
