//! `repl::item` module
//!
//! Contains handlers for commands that move or use items.

use anyhow::Result;
use log::{debug, info};
use mystery_data::ItemKind;

use crate::status::inventory_mask;
use crate::{ItemHolder, View, ViewItem, World};

/// Remove an item from the current room and add it to inventory.
///
/// This is the only code path that changes an item's location, so the
/// one-holder-per-item invariant holds by construction.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn take_handler(world: &mut World, view: &mut View, item: ItemKind) -> Result<()> {
    let room = world.player_room_mut()?;
    if !room.contains_item(item) {
        view.push(ViewItem::ActionFailure(format!("No {item} here.")));
        info!("take {item} in room {} denied: not present", room.id);
        return Ok(());
    }

    room.remove_item(item);
    let room_id = room.id;
    world.player.add_item(item);
    view.push(ViewItem::ActionSuccess(format!("You take the {item}.")));
    info!("player took the {item} from room {room_id}");
    debug!("inventory mask now {:#05b}", inventory_mask(&world.player));
    Ok(())
}

/// Use an item from inventory: the flashlight toggles its power, a key
/// tries every door reachable from the current room.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn use_handler(world: &mut World, view: &mut View, item: ItemKind) -> Result<()> {
    if !world.player.contains_item(item) {
        view.push(ViewItem::ActionFailure(format!("You don't have the {item}.")));
        info!("use {item} denied: not in inventory");
        return Ok(());
    }

    if item == ItemKind::Flashlight {
        world.player.flashlight_on = !world.player.flashlight_on;
        let state = if world.player.flashlight_on { "ON" } else { "OFF" };
        view.push(ViewItem::ActionSuccess(format!("Flashlight {state}.")));
        info!("flashlight toggled {state}");
        return Ok(());
    }

    // keys: look for a still-locked adjacent door this key fits
    let current_room = world.player_room_ref()?;
    let target = current_room.exits.values().copied().find(|&to| {
        world
            .room(to)
            .is_some_and(|room| room.locked && room.key == Some(item))
    });

    if let Some(target_id) = target {
        world.unlock(target_id)?;
        let name = world
            .room(target_id)
            .map_or_else(|| "door".to_string(), |room| room.name.clone());
        view.push(ViewItem::ActionSuccess(format!("You unlock the {name}.")));
    } else {
        // covers no matching door nearby *and* a door already opened;
        // a cleared lock is never re-engaged
        view.push(ViewItem::ActionFailure(format!("Nothing here fits the {item}.")));
        info!("use {item} had no matching locked door nearby");
    }
    Ok(())
}
