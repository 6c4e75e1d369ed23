//! Player -- the single session-scoped character.

use mystery_data::{ItemKind, RoomId};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ItemHolder;

/// Player state for one play session.
///
/// Created at session start with an empty inventory, the light off, and
/// full vitality (when the depletion rule is active); mutated only by the
/// command handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub location: RoomId,
    pub inventory: HashSet<ItemKind>,
    /// Meaningful only while the flashlight is carried.
    pub flashlight_on: bool,
    /// `Some` iff the vitality depletion variant rule is enabled.
    pub vitality: Option<u32>,
}

impl Player {
    pub fn new(start_room: RoomId, vitality: Option<u32>) -> Self {
        Self {
            location: start_room,
            inventory: HashSet::new(),
            flashlight_on: false,
            vitality,
        }
    }

    /// True when the player carries the flashlight and it is switched on.
    pub fn has_active_light(&self) -> bool {
        self.flashlight_on && self.contains_item(ItemKind::Flashlight)
    }

    /// Burn one unit of vitality. Saturates at zero; no-op when the
    /// depletion rule is disabled.
    pub fn deplete(&mut self) {
        if let Some(v) = self.vitality.as_mut() {
            *v = v.saturating_sub(1);
        }
    }

    /// True once vitality has run out (never true when the rule is off).
    pub fn exhausted(&self) -> bool {
        self.vitality == Some(0)
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item: ItemKind) {
        self.inventory.insert(item);
    }

    fn remove_item(&mut self, item: ItemKind) {
        self.inventory.remove(&item);
    }

    fn contains_item(&self, item: ItemKind) -> bool {
        self.inventory.contains(&item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_light_requires_ownership_and_power() {
        let mut player = Player::new(0, None);
        player.flashlight_on = true;
        assert!(!player.has_active_light());

        player.add_item(ItemKind::Flashlight);
        assert!(player.has_active_light());

        player.flashlight_on = false;
        assert!(!player.has_active_light());
    }

    #[test]
    fn deplete_saturates_at_zero() {
        let mut player = Player::new(0, Some(1));
        assert!(!player.exhausted());
        player.deplete();
        assert!(player.exhausted());
        player.deplete();
        assert_eq!(player.vitality, Some(0));
    }

    #[test]
    fn deplete_is_noop_without_the_rule() {
        let mut player = Player::new(0, None);
        player.deplete();
        assert!(!player.exhausted());
    }
}
