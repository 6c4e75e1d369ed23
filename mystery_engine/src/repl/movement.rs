//! `repl::movement` module
//!
//! Contains the handler for commands that change player location.

use anyhow::{Result, anyhow};
use log::info;
use mystery_data::Direction;

use crate::{View, ViewItem, World};

/// Move the player to a neighboring room, if the exit exists and the
/// destination's lock/darkness gates allow entry.
///
/// Each denial has its own wording and leaves the world untouched.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn move_handler(world: &mut World, view: &mut View, direction: Direction) -> Result<()> {
    let current_room = world.player_room_ref()?;
    let Some(destination_id) = current_room.exit(direction) else {
        view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
        info!("move {direction} from room {} denied: no exit", current_room.id);
        return Ok(());
    };

    let destination = world
        .room(destination_id)
        .ok_or_else(|| anyhow!("exit {direction} leads to invalid room {destination_id}"))?;

    if destination.locked {
        let msg = destination
            .lock_msg
            .clone()
            .unwrap_or_else(|| "That door is locked.".to_string());
        view.push(ViewItem::ActionFailure(msg));
        info!("move into locked room {destination_id} ({}) denied", destination.name);
        return Ok(());
    }

    if destination.dark && !world.player.has_active_light() {
        view.push(ViewItem::ActionFailure(
            "It's too dark to go that way without a light.".to_string(),
        ));
        info!("move into dark room {destination_id} ({}) denied", destination.name);
        return Ok(());
    }

    world.player.location = destination_id;
    let new_room = world.player_room_ref()?;
    info!("player moved {direction} to {} ({destination_id})", new_room.name);
    new_room.show(view);
    Ok(())
}
