use serde::{Deserialize, Serialize};

// ============================================================================
// Item Stack
// ============================================================================

/// A quantity of a single item kind.
///
/// Quantities never go below zero; a stack with quantity 0 counts as
/// empty/absent. The grid uses [`ItemStack::none`] as the explicit
/// placeholder for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    item_id: String,
    quantity: i32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: quantity.max(0),
        }
    }

    /// The empty placeholder stack: no kind, quantity 0.
    pub fn none() -> Self {
        Self {
            item_id: String::new(),
            quantity: 0,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity.max(0);
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Whether both stacks hold the same item kind, regardless of how many
    /// units each holds.
    pub fn same_kind(&self, other: &ItemStack) -> bool {
        self.item_id == other.item_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_clamped_to_zero() {
        let mut stack = ItemStack::new("plank", -3);
        assert_eq!(stack.quantity(), 0);
        assert!(stack.is_empty());

        stack.set_quantity(5);
        assert_eq!(stack.quantity(), 5);
        stack.set_quantity(-1);
        assert_eq!(stack.quantity(), 0);
    }

    #[test]
    fn test_same_kind_ignores_quantity() {
        let a = ItemStack::new("plank", 1);
        let b = ItemStack::new("plank", 64);
        let c = ItemStack::new("stone", 1);

        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn test_none_is_empty() {
        assert!(ItemStack::none().is_empty());
        assert_eq!(ItemStack::none(), ItemStack::none());
    }
}
