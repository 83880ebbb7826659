//! Item List Component
//!
//! Renders an ordered sequence of items, one row per item keyed by id.

use leptos::prelude::*;

use crate::models::Item;

/// Item list component
///
/// Rows keep the input order.
#[component]
pub fn ItemList(
    items: Vec<Item>,
) -> impl IntoView {
    view! {
        <ul class="item-list">
            <For
                each=move || items.clone()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <li class="item-row" data-id=item.id.to_string()>
                            {item.text}
                        </li>
                    }
                }
            />
        </ul>
    }
}
