//! Hosted Store Client
//!
//! REST calls for insert/delete plus a WebSocket watch that delivers the
//! full ordered collection on every change.

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::logging;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use super::{ItemStore, SnapshotFn, StoreError, Subscription};
use crate::models::{Item, NewItem};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

const API_BASE_KEY: &str = "ledger_api_url";

/// Get the API base URL from local storage or use the default
pub fn stored_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn store_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(API_BASE_KEY, url);
    }
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

/// Server messages on the watch socket
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsMessage {
    Snapshot { items: Vec<Item> },
    Error { message: String },
}

/// Store client backed by the hosted collection's HTTP + WebSocket API
#[derive(Clone)]
pub struct HttpItemStore {
    base: String,
}

impl HttpItemStore {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Build a client from the browser-stored base URL
    pub fn from_browser_config() -> Self {
        Self::new(stored_api_base())
    }

    fn watch_url(&self) -> String {
        let ws = self
            .base
            .replace("http://", "ws://")
            .replace("https://", "wss://");
        format!("{}/items/watch", ws)
    }
}

#[async_trait(?Send)]
impl ItemStore for HttpItemStore {
    async fn insert(&self, new: NewItem) -> Result<String, StoreError> {
        let response = Request::post(&format!("{}/items", self.base))
            .json(&new)
            .map_err(|e| StoreError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !response.ok() {
            return Err(StoreError::Request(format!(
                "insert returned status {}",
                response.status()
            )));
        }
        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(created.id)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = Request::delete(&format!("{}/items/{}", self.base, id))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !response.ok() {
            return Err(StoreError::Request(format!(
                "delete returned status {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn subscribe(&self, on_change: SnapshotFn) -> Subscription {
        let url = self.watch_url();
        let ws = match WebSocket::new(&url) {
            Ok(ws) => ws,
            Err(err) => {
                // No reconnect policy anywhere; the page reload is the retry
                logging::error!("failed to open watch socket {url}: {err:?}");
                return Subscription::new(|| {});
            }
        };

        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Ok(text) = event.data().dyn_into::<js_sys::JsString>() else {
                return;
            };
            let text: String = text.into();
            match serde_json::from_str::<WsMessage>(&text) {
                Ok(WsMessage::Snapshot { items }) => on_change(&items),
                Ok(WsMessage::Error { message }) => {
                    logging::error!("watch error from server: {message}");
                }
                Err(err) => logging::error!("malformed watch message: {err}"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_error = Closure::wrap(Box::new(move |err: JsValue| {
            logging::error!("watch socket error: {err:?}");
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Subscription::new(move || {
            ws.set_onmessage(None);
            ws.set_onerror(None);
            let _ = ws.close();
            drop(on_message);
            drop(on_error);
        })
    }
}
