//! Ledger Controller
//!
//! Owns the mirrored item list, the in-progress draft, and the derived
//! total. The list is never mutated locally: every change arrives as a
//! full snapshot from the store's standing subscription, and `items` and
//! `total` are always set together from the same payload.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging;
use leptos::prelude::*;

use crate::models::{Draft, Item, NewItem};
use crate::remote::{ItemStore, Subscription};

/// View controller for the expense ledger
pub struct Ledger<S> {
    store: S,
    /// Items in the order the store reports them (ascending creation time)
    pub items: RwSignal<Vec<Item>>,
    /// Sum of `price` over `items`, recomputed from scratch on every snapshot
    pub total: RwSignal<f64>,
    /// New-item form state
    pub draft: RwSignal<Draft>,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl<S: Clone> Clone for Ledger<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            items: self.items,
            total: self.total,
            draft: self.draft,
            subscription: Rc::clone(&self.subscription),
        }
    }
}

impl<S: ItemStore + Clone + 'static> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0.0),
            draft: RwSignal::new(Draft::default()),
            subscription: Rc::new(RefCell::new(None)),
        }
    }

    /// Open the standing subscription. Any previous subscription is
    /// released first, so exactly one is ever live.
    pub fn activate(&self) {
        self.deactivate();
        let items = self.items;
        let total = self.total;
        let sub = self.store.subscribe(Rc::new(move |snapshot: &[Item]| {
            // Full replace, then recompute; both set synchronously from
            // the same payload so they are never observed inconsistent.
            let next = snapshot.to_vec();
            let sum: f64 = next.iter().map(|item| item.price).sum();
            items.set(next);
            total.set(sum);
        }));
        *self.subscription.borrow_mut() = Some(sub);
    }

    /// Release the subscription; no callback may fire afterwards.
    pub fn deactivate(&self) {
        self.subscription.borrow_mut().take();
    }

    /// Submit the current draft.
    ///
    /// Invalid drafts are a silent no-op, left untouched. Otherwise the
    /// insert is sent and the draft clears whether or not it succeeded;
    /// the list itself only updates via the next snapshot.
    pub async fn submit(&self) {
        let draft = self.draft.get_untracked();
        if !draft.is_valid() {
            return;
        }
        let new = NewItem {
            name: draft.name,
            price: draft.price,
        };
        match self.store.insert(new).await {
            Ok(id) => logging::log!("item created with id {id}"),
            Err(err) => logging::error!("failed to create item: {err}"),
        }
        self.draft.set(Draft::default());
    }

    /// Request deletion of an item. No optimistic removal: the row
    /// disappears only when a snapshot arrives without it.
    pub async fn delete(&self, id: &str) {
        if let Err(err) = self.store.delete(id).await {
            logging::error!("failed to delete item {id}: {err}");
        }
    }
}
