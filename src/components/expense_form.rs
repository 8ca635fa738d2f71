//! Expense Form Component
//!
//! Two-field form for drafting a new expense.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Draft;

/// New-expense form bound to the ledger's draft
#[component]
pub fn ExpenseForm(
    draft: RwSignal<Draft>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="expense-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter item"
                prop:value=move || draft.get().name
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let name = input.value();
                    draft.update(|d| d.name = name);
                }
            />
            <input
                type="number"
                placeholder="Enter price"
                prop:value=move || draft.get().price.to_string()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    // Unparseable input reads as zero, which submit rejects
                    let price = input.value().parse().unwrap_or(0.0);
                    draft.update(|d| d.price = price);
                }
            />
            <button type="submit">"+"</button>
        </form>
    }
}
