//! # Inventory Module
//!
//! Stacks of picked-up blocks, in one indexed slot space: the first
//! [`QUICK_SLOT_SIZE`] slots are the quick slots, the remaining [`BAG_SIZE`] the bag.
//!
//! Each block type keeps an ordered index of the slots holding it, so topping up and
//! draining always walk that type's stacks lowest slot first.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use super::voxels::block::block_type::BlockType;

pub mod quick_slot;

pub use quick_slot::QuickSlotManager;

/// Number of quick slots.
pub const QUICK_SLOT_SIZE: usize = 10;

/// Number of bag slots.
pub const BAG_SIZE: usize = 40;

/// Total slots.
pub const INVENTORY_SIZE: usize = QUICK_SLOT_SIZE + BAG_SIZE;

/// Largest stack one slot can hold.
pub const MAX_STACK: u32 = 64;

/// One stack of a single block type in one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Slot the stack sits in.
    pub inventory_index: usize,
    /// What the stack is made of.
    pub item_type: BlockType,
    /// How many are stacked.
    pub stack: u32,
}

impl Item {
    /// An empty stack of `item_type` in slot `inventory_index`.
    pub fn new(inventory_index: usize, item_type: BlockType) -> Self {
        Self {
            inventory_index,
            item_type,
            stack: 0,
        }
    }

    /// Whether nothing is left in the stack.
    pub fn is_empty(&self) -> bool {
        self.stack == 0
    }

    /// Adds up to [`MAX_STACK`]; returns what did not fit.
    pub fn add(&mut self, count: u32) -> u32 {
        let room = MAX_STACK.saturating_sub(self.stack);
        let added = count.min(room);
        self.stack += added;
        count - added
    }

    /// Removes up to `count`; returns how many could not be taken.
    pub fn take(&mut self, count: u32) -> u32 {
        let taken = count.min(self.stack);
        self.stack -= taken;
        count - taken
    }
}

/// The player's item storage.
#[derive(Debug, Clone)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
    slots_by_type: BTreeMap<BlockType, BTreeSet<usize>>,
    counts: BTreeMap<BlockType, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: vec![None; INVENTORY_SIZE],
            slots_by_type: BTreeMap::new(),
            counts: BTreeMap::new(),
        }
    }
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack in slot `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// The stack in quick slot `index`, if any.
    pub fn quick_slot(&self, index: usize) -> Option<&Item> {
        if index < QUICK_SLOT_SIZE {
            self.slot(index)
        } else {
            None
        }
    }

    /// Total held of `item_type` across all slots.
    pub fn count(&self, item_type: BlockType) -> u32 {
        self.counts.get(&item_type).copied().unwrap_or(0)
    }

    /// Slots holding `item_type`, lowest first.
    pub fn slots_holding(&self, item_type: BlockType) -> Vec<usize> {
        self.slots_by_type
            .get(&item_type)
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Adds `count` of `item_type`: existing stacks are topped up in slot order, then
    /// new stacks open in the first empty quick slot, then the bag. Returns how many did
    /// not fit.
    pub fn add_item(&mut self, item_type: BlockType, count: u32) -> u32 {
        let mut remaining = count;

        for index in self.slots_holding(item_type) {
            if remaining == 0 {
                break;
            }
            if let Some(item) = self.slots[index].as_mut() {
                remaining = item.add(remaining);
            }
        }

        while remaining > 0 {
            let Some(index) = self.first_empty_slot() else {
                break;
            };
            debug!("New {:?} stack in slot {}", item_type, index);
            let mut item = Item::new(index, item_type);
            remaining = item.add(remaining);
            self.insert(item);
        }

        *self.counts.entry(item_type).or_insert(0) += count - remaining;
        remaining
    }

    /// Uses up to `count` of `item_type`, draining stacks in slot order and freeing
    /// slots that empty. Returns how many were used.
    pub fn use_item(&mut self, item_type: BlockType, count: u32) -> u32 {
        let mut remaining = count;

        for index in self.slots_holding(item_type) {
            if remaining == 0 {
                break;
            }
            remaining = self.drain_slot(index, remaining);
        }

        count - remaining
    }

    /// Uses up to `count` from the stack in slot `index`, freeing the slot if it
    /// empties. Returns how many were taken.
    pub fn take_from_slot(&mut self, index: usize, count: u32) -> u32 {
        count - self.drain_slot(index, count)
    }

    /// Takes from one slot and keeps the indexes in step. Returns the shortfall.
    fn drain_slot(&mut self, index: usize, count: u32) -> u32 {
        let Some(item) = self.slots.get_mut(index).and_then(Option::as_mut) else {
            return count;
        };
        let item_type = item.item_type;
        let shortfall = item.take(count);
        let emptied = item.is_empty();

        if let Some(total) = self.counts.get_mut(&item_type) {
            *total -= count - shortfall;
        }
        if emptied {
            self.remove(index);
        }
        shortfall
    }

    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn insert(&mut self, item: Item) {
        self.slots_by_type
            .entry(item.item_type)
            .or_default()
            .insert(item.inventory_index);
        self.slots[item.inventory_index] = Some(item);
    }

    fn remove(&mut self, index: usize) {
        if let Some(item) = self.slots[index].take() {
            if let Some(slots) = self.slots_by_type.get_mut(&item.item_type) {
                slots.remove(&index);
                if slots.is_empty() {
                    self.slots_by_type.remove(&item.item_type);
                }
            }
        }
    }
}
