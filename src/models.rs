//! Frontend Models
//!
//! Data structures rendered by the list example.

/// Item data structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub text: &'static str,
}

impl Item {
    pub const fn new(id: u32, text: &'static str) -> Self {
        Self { id, text }
    }
}

/// Static items shown on the page
pub static ITEMS: [Item; 3] = [
    Item::new(1, "Item 1"),
    Item::new(2, "Item 2"),
    Item::new(3, "Item 3"),
];
