//! `repl::look` module
//!
//! Handlers for observation commands; none of them modify world state.

use anyhow::Result;
use log::info;
use mystery_data::ItemKind;

use crate::{ItemHolder, View, ViewItem, World};

/// Re-emit the current room's full description.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn look_handler(world: &World, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    info!("player looked around {} ({})", room.name, room.id);
    room.show(view);
    Ok(())
}

/// List held items; the flashlight line includes its power state.
pub fn inv_handler(world: &World, view: &mut View) {
    info!("player checked inventory");
    let lines = ItemKind::ALL
        .into_iter()
        .filter(|item| world.player.contains_item(*item))
        .map(|item| {
            if item == ItemKind::Flashlight {
                let state = if world.player.flashlight_on { "ON" } else { "OFF" };
                format!("{item} ({state})")
            } else {
                item.to_string()
            }
        })
        .collect();
    view.push(ViewItem::Inventory(lines));
}
