use std::collections::HashSet;

use thiserror::Error;

use crate::{ItemKind, RoomId, WorldDef};

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate room id {id}")]
    DuplicateRoomId { id: RoomId },
    #[error("room {from} exit {direction} targets missing room {to}")]
    DanglingExit { from: RoomId, direction: &'static str, to: RoomId },
    #[error("missing room {id} ({context})")]
    MissingRoom { id: RoomId, context: &'static str },
    #[error("room {id} is locked but has no lock message")]
    LockWithoutMessage { id: RoomId },
    #[error("room {id} is locked but no key opens it")]
    LockWithoutKey { id: RoomId },
    #[error("item '{item}' seeded {count} times; must appear in exactly one room")]
    BadItemSeeding { item: ItemKind, count: usize },
}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Checks that room ids are unique, every exit targets an existing room,
/// the start and win rooms exist, locked rooms carry a lock message, and
/// each item of the closed item set is seeded in exactly one room.
///
/// ```
/// use mystery_data::{mystery_house, validate_world};
///
/// assert!(validate_world(&mystery_house()).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for room in &world.rooms {
        if !room_ids.insert(room.id) {
            errors.push(ValidationError::DuplicateRoomId { id: room.id });
        }
    }

    for room in &world.rooms {
        for exit in &room.exits {
            if !room_ids.contains(&exit.to) {
                errors.push(ValidationError::DanglingExit {
                    from: room.id,
                    direction: exit.direction.as_str(),
                    to: exit.to,
                });
            }
        }
        if room.locked && room.lock_msg.is_none() {
            errors.push(ValidationError::LockWithoutMessage { id: room.id });
        }
        if room.locked && room.key.is_none() {
            errors.push(ValidationError::LockWithoutKey { id: room.id });
        }
    }

    if !room_ids.contains(&world.start_room) {
        errors.push(ValidationError::MissingRoom {
            id: world.start_room,
            context: "start room",
        });
    }
    if !room_ids.contains(&world.win_room) {
        errors.push(ValidationError::MissingRoom {
            id: world.win_room,
            context: "win room",
        });
    }

    for item in ItemKind::ALL {
        let count = world.rooms.iter().filter(|r| r.items.contains(&item)).count();
        if count != 1 {
            errors.push(ValidationError::BadItemSeeding { item, count });
        }
    }

    errors
}
