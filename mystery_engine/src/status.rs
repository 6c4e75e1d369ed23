//! Status projection onto the hardware mirror.
//!
//! Pure functions from player state to the 10-bit LED mask. The panel loop
//! pushes the result through [`crate::ControlPanel::set_status_mask`] after
//! every turn.

use mystery_data::ItemKind;

use crate::{ItemHolder, Player, World};

/// Number of bits in the hardware status mirror.
pub const STATUS_BITS: u32 = 10;

/// Mask with every status bit lit -- shown when the game is over.
pub const ALL_LIT: u16 = (1 << STATUS_BITS) - 1;

/// Inventory membership as a 3-bit mask (bit = `ItemKind::led_bit`).
pub fn inventory_mask(player: &Player) -> u16 {
    ItemKind::ALL
        .into_iter()
        .filter(|item| player.contains_item(*item))
        .fold(0, |mask, item| mask | (1 << item.led_bit()))
}

/// Remaining vitality as a thermometer code: that many low bits set,
/// capped at the mirror's width.
pub fn vitality_mask(vitality: u32) -> u16 {
    let lit = vitality.min(STATUS_BITS);
    if lit == 0 { 0 } else { ((1u32 << lit) - 1) as u16 }
}

/// The mask the mirror should show for the current state: vitality when
/// the depletion rule is active, inventory otherwise.
pub fn status_mask(world: &World) -> u16 {
    match world.player.vitality {
        Some(v) => vitality_mask(v),
        None => inventory_mask(&world.player),
    }
}
