//! UI Components
//!
//! Reusable Leptos components.

mod item_list;

pub use item_list::ItemList;
