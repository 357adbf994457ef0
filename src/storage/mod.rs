//! Storage module for the key-value store and configuration.

pub mod config;
pub mod keys;
pub mod kv;
pub mod repository;

pub use config::{AppConfig, ConfigError};
pub use kv::{KvStore, StorageError};
pub use repository::{AppStore, RawProfile};
