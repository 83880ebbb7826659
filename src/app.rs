//! List Example App
//!
//! Root component: a heading plus the static item list.

use leptos::prelude::*;

use crate::models::ITEMS;
use crate::components::ItemList;

/// Page heading
pub const HEADING: &str = "List Example";

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <h1>{HEADING}</h1>
            <ItemList items=ITEMS.to_vec() />
        </div>
    }
}
