//! Error types for the record model

use thiserror::Error;

use crate::key::FormKey;

/// Result type alias for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// Main error type for record and load-order operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A plugin with the same name is already present in the load order
    #[error("Duplicate plugin in load order: {0}")]
    DuplicatePlugin(String),

    /// A record with the same form key is already present in the plugin
    #[error("Duplicate record {key} in plugin {plugin}")]
    DuplicateRecord {
        /// Plugin that rejected the record
        plugin: String,
        /// Colliding form key
        key: FormKey,
    },
}
