//! Expense Tracker App
//!
//! Wires the hosted store into the ledger controller. The subscription is
//! acquired when the component mounts and released on cleanup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ExpenseForm, ExpenseList};
use crate::ledger::Ledger;
use crate::remote::http::HttpItemStore;

#[component]
pub fn App() -> impl IntoView {
    let ledger = Ledger::new(HttpItemStore::from_browser_config());
    ledger.activate();
    on_cleanup({
        let ledger = ledger.clone();
        move || ledger.deactivate()
    });

    let submit_ledger = ledger.clone();
    let on_submit = Callback::new(move |()| {
        let ledger = submit_ledger.clone();
        spawn_local(async move { ledger.submit().await });
    });

    let delete_ledger = ledger.clone();
    let on_delete = Callback::new(move |id: String| {
        let ledger = delete_ledger.clone();
        spawn_local(async move { ledger.delete(&id).await });
    });

    view! {
        <main class="app-shell">
            <h1>"Expense Tracker"</h1>
            <div class="ledger-panel">
                <ExpenseForm draft=ledger.draft on_submit=on_submit />
                <ExpenseList items=ledger.items total=ledger.total on_delete=on_delete />
            </div>
        </main>
    }
}
