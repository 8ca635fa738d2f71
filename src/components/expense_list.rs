//! Expense List Component
//!
//! Rows of name / price / delete, with a running total footer.
//! Hidden entirely while the list is empty.

use leptos::prelude::*;

use crate::models::Item;

/// Mirrored item list with total footer
#[component]
pub fn ExpenseList(
    items: RwSignal<Vec<Item>>,
    total: RwSignal<f64>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show when=move || !items.get().is_empty()>
            <ul class="expense-list">
                {move || items.get().into_iter().map(|item| {
                    let id = item.id.clone();
                    view! {
                        <li class="expense-row">
                            <span class="expense-name">{item.name.clone()}</span>
                            <span class="expense-price">{item.price}</span>
                            <button
                                class="delete-btn"
                                on:click=move |_| on_delete.run(id.clone())
                            >
                                "-"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <div class="total-row">
                <span>"Total:"</span>
                <span class="total-value">{move || total.get()}</span>
            </div>
        </Show>
    }
}
