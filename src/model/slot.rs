//! Container slots and per-redraw snapshots.

use super::item::ItemStack;
use serde::{Deserialize, Serialize};

/// One observed container slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Screen x of the slot's top-left corner, relative to the container.
    pub x: i32,
    /// Screen y of the slot's top-left corner, relative to the container.
    pub y: i32,
    /// Stack in the slot; `None` for an empty slot.
    pub stack: Option<ItemStack>,
}

impl Slot {
    /// Slot at `(x, y)` with nothing in it.
    pub fn empty(x: i32, y: i32) -> Self {
        Self { x, y, stack: None }
    }

    /// Slot at `(x, y)` holding `stack`.
    pub fn with_stack(x: i32, y: i32, stack: ItemStack) -> Self {
        Self {
            x,
            y,
            stack: Some(stack),
        }
    }
}

/// Ordered slots of the open container, as handed over on a redraw.
///
/// Compared structurally to decide whether the visible inventory changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    slots: Vec<Slot>,
}

impl SlotSnapshot {
    /// Snapshot of `slots` in container order.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the container has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in container order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Stack at `index`, or `None` when the slot is missing or empty.
    pub fn stack(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(|slot| slot.stack.as_ref())
    }
}

impl From<Vec<Slot>> for SlotSnapshot {
    fn from(slots: Vec<Slot>) -> Self {
        Self::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{ItemKind, GRAY_DYE_VARIANT};

    #[test]
    fn stack_lookup_treats_missing_and_empty_alike() {
        let snapshot = SlotSnapshot::new(vec![
            Slot::empty(0, 0),
            Slot::with_stack(18, 0, ItemStack::new(ItemKind::Dye, GRAY_DYE_VARIANT)),
        ]);

        assert!(snapshot.stack(0).is_none());
        assert!(snapshot.stack(1).is_some());
        assert!(snapshot.stack(99).is_none());
    }

    #[test]
    fn snapshots_compare_structurally() {
        let a = SlotSnapshot::new(vec![Slot::empty(0, 0)]);
        let b = SlotSnapshot::new(vec![Slot::empty(0, 0)]);
        let c = SlotSnapshot::new(vec![Slot::with_stack(
            0,
            0,
            ItemStack::new(ItemKind::Arrow, 0),
        )]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
