//! Item holders.
//!
//! Items are bare labels: an item *is* its name. What the engine tracks is
//! which holder (a room or the player) currently owns each label.

/// Anything that can hold items, in insertion order.
pub trait ItemHolder {
    fn items(&self) -> &[String];
    fn add_item(&mut self, item: String);
    /// Remove the first entry equal to `item` and return it.
    fn remove_item(&mut self, item: &str) -> Option<String>;

    fn contains_item(&self, item: &str) -> bool {
        self.items().iter().any(|held| held == item)
    }

    /// Held item labels, oldest first.
    fn item_labels(&self) -> impl Iterator<Item = &str> {
        self.items().iter().map(String::as_str)
    }
}

/// Shared `remove_item` body for `Vec`-backed holders.
pub(crate) fn remove_first(items: &mut Vec<String>, item: &str) -> Option<String> {
    let index = items.iter().position(|held| held == item)?;
    Some(items.remove(index))
}
