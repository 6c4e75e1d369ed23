//! Item placement seam shared by rooms and the player.
//!
//! Every item has exactly one holder at any time. The take handler is the
//! only code that moves an item between holders, so it removes from one
//! `ItemHolder` and adds to the other in the same turn.

use mystery_data::ItemKind;

/// Methods common to anything that can hold items.
pub trait ItemHolder {
    fn add_item(&mut self, item: ItemKind);
    fn remove_item(&mut self, item: ItemKind);
    fn contains_item(&self, item: ItemKind) -> bool;
}
