//! Frontend Models
//!
//! Data structures matching the remote collection's documents.

use serde::{Deserialize, Serialize};

/// A ledger entry as reported by the remote collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned document id, unique and immutable
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in whatever unit the user types (no currency handling)
    pub price: f64,
    /// Store-assigned ordering key; never interpreted or re-sorted here
    #[serde(default)]
    pub timestamp: i64,
}

/// Insert payload; the store assigns id and timestamp
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

/// The not-yet-submitted new-item form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub price: f64,
}

impl Draft {
    /// A draft may be submitted only with a non-empty name and a positive price
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.price > 0.0
    }
}
