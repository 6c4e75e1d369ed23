//! Runtime state of the running game.
//!
//! [`World`] is the session context passed to every command handler: the
//! room table, the player, and the turn counter. There are no process-wide
//! singletons; both command front ends mutate the same `World`.

use std::collections::HashMap;

use anyhow::{Result, anyhow, bail};
use log::info;
use mystery_data::{Direction, RoomId, WorldDef, validate_world};
use serde::{Deserialize, Serialize};

use crate::{Player, Room};

/// Terminal outcomes of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Player reached the win room after unlocking it.
    Win,
    /// Vitality ran out (depletion variant only).
    Loss,
    /// Operator exit request.
    Quit,
}

/// Complete state of the running game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub rooms: HashMap<RoomId, Room>,
    pub player: Player,
    pub title: String,
    pub intro: String,
    pub win_room: RoomId,
    pub turn_count: usize,
}

impl World {
    /// Build the runtime world from a definition, validating it first.
    ///
    /// # Errors
    /// - if the definition fails validation (dangling exits, bad item
    ///   seeding, missing start/win room, ...)
    pub fn from_def(def: &WorldDef) -> Result<World> {
        let errors = validate_world(def);
        if !errors.is_empty() {
            let listing = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
            bail!("invalid world definition: {listing}");
        }
        let world = World {
            rooms: def.rooms.iter().map(|r| (r.id, Room::from_def(r))).collect(),
            player: Player::new(def.start_room, def.vitality),
            title: def.title.clone(),
            intro: def.intro.clone(),
            win_room: def.win_room,
            turn_count: 0,
        };
        info!("world '{}' built: {} rooms", world.title, world.rooms.len());
        Ok(world)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Target of `id`'s exit in `direction`, if that edge exists.
    pub fn exit(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.rooms.get(&id).and_then(|room| room.exit(direction))
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not in the world (a bug, not a
    ///   player-visible condition)
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room id ({}) not found in world", self.player.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not in the world
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let location = self.player.location;
        self.rooms
            .get_mut(&location)
            .ok_or_else(|| anyhow!("player's room id ({location}) not found in world"))
    }

    /// Clear the lock on a room that was authored locked.
    ///
    /// Idempotent once unlocked; the lock is never re-engaged.
    ///
    /// # Errors
    /// - if the room id is unknown or the room has no lock at all
    pub fn unlock(&mut self, id: RoomId) -> Result<()> {
        let room = self.rooms.get_mut(&id).ok_or_else(|| anyhow!("no room with id {id}"))?;
        if room.key.is_none() {
            bail!("room {id} ({}) has no lock", room.name);
        }
        if room.locked {
            room.locked = false;
            info!("room {id} ({}) unlocked", room.name);
        }
        Ok(())
    }

    /// Advance the turn clock, burning vitality when the depletion rule
    /// is enabled.
    pub fn tick(&mut self) {
        self.turn_count += 1;
        self.player.deplete();
    }

    /// True iff the player stands in the win room and its lock is cleared.
    /// Merely reaching the win room while it is still locked cannot happen
    /// through movement, but the check guards the lock state regardless.
    pub fn win_achieved(&self) -> bool {
        self.player.location == self.win_room
            && self.rooms.get(&self.win_room).is_some_and(|room| !room.locked)
    }

    /// Terminal outcome reached by state alone, if any.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.win_achieved() {
            Some(GameOutcome::Win)
        } else if self.player.exhausted() {
            Some(GameOutcome::Loss)
        } else {
            None
        }
    }
}
