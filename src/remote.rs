//! Remote Store Client
//!
//! The seam between the controller and the hosted document collection:
//! insert, delete, and a standing subscription with an unsubscribe handle.

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, NewItem};

#[cfg(target_arch = "wasm32")]
pub mod http;

/// Failure talking to the remote store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Callback invoked with the full ordered item list on every change
pub type SnapshotFn = Rc<dyn Fn(&[Item])>;

/// Client for the hosted item collection.
///
/// Futures here are not `Send`: everything runs on the wasm UI thread.
#[async_trait(?Send)]
pub trait ItemStore {
    /// Insert a document; the store assigns and returns its id
    async fn insert(&self, new: NewItem) -> Result<String, StoreError>;

    /// Delete a document by id
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Open a standing query ordered by creation timestamp ascending.
    ///
    /// The callback receives the initial snapshot and every subsequent
    /// change until the returned handle is dropped or unsubscribed.
    fn subscribe(&self, on_change: SnapshotFn) -> Subscription;
}

/// Handle for a standing subscription; cancels exactly once,
/// on explicit unsubscribe or on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}
