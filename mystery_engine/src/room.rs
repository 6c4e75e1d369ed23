//! Room definitions and lookup helpers.
//!
//! Rooms are fixed at build time; the only runtime-mutable field is the
//! lock flag on rooms that were authored locked.

use std::collections::{BTreeSet, HashMap};

use mystery_data::{Direction, ItemKind, RoomDef, RoomId};
use serde::{Deserialize, Serialize};

use crate::{ItemHolder, View, ViewItem};

/// Any visitable location in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub exits: HashMap<Direction, RoomId>,
    pub dark: bool,
    pub locked: bool,
    /// Present iff the room was authored with a lock; shown on denied entry.
    pub lock_msg: Option<String>,
    /// The key that fits this room's lock.
    pub key: Option<ItemKind>,
    pub contents: BTreeSet<ItemKind>,
}

impl Room {
    pub fn from_def(def: &RoomDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            description: def.desc.clone(),
            exits: def.exits.iter().map(|e| (e.direction, e.to)).collect(),
            dark: def.dark,
            locked: def.locked,
            lock_msg: def.lock_msg.clone(),
            key: def.key,
            contents: def.items.iter().copied().collect(),
        }
    }

    /// The room this one's exit leads to in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// True if any exit of this room leads to `target`.
    pub fn adjacent_to(&self, target: RoomId) -> bool {
        self.exits.values().any(|&to| to == target)
    }

    /// Push the full room display (name, description, items, exits) for
    /// this turn's view.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        if !self.contents.is_empty() {
            view.push(ViewItem::RoomItems(self.contents.iter().copied().collect()));
        }
        let exits: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| self.exits.contains_key(dir))
            .collect();
        view.push(ViewItem::RoomExits(exits));
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item: ItemKind) {
        self.contents.insert(item);
    }

    fn remove_item(&mut self, item: ItemKind) {
        self.contents.remove(&item);
    }

    fn contains_item(&self, item: ItemKind) -> bool {
        self.contents.contains(&item)
    }
}
