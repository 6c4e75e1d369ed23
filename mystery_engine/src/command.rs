//! Command module.
//!
//! Defines the closed set of internal actions and the text front end that
//! produces them. The switch-panel front end in [`crate::panel`] decodes
//! into the same set, so the rules engine never sees raw input.

use mystery_data::{Direction, ItemKind};

/// Actions that can be executed by the player.
///
/// Both input transports normalize to this set; the handlers consume it
/// uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Take(ItemKind),
    UseItem(ItemKind),
    Look,
    Inventory,
    Help,
    Quit,
    Unknown,
}

/// Parses an input line and returns the corresponding [`Action`].
///
/// Case-insensitive; leading/trailing whitespace is ignored. Anything that
/// fails to match the grammar comes back as `Action::Unknown` and must not
/// mutate state.
pub fn parse_command(input: &str) -> Action {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["look"] => Action::Look,
        ["inventory" | "inv" | "i"] => Action::Inventory,
        ["help" | "?"] => Action::Help,
        ["quit" | "exit"] => Action::Quit,
        ["go" | "move" | "walk", dir] => Direction::from_input(dir).map_or(Action::Unknown, Action::Move),
        ["take" | "get" | "grab", item @ ..] => parse_item(item).map_or(Action::Unknown, Action::Take),
        ["use", item @ ..] => parse_item(item).map_or(Action::Unknown, Action::UseItem),
        _ => Action::Unknown,
    }
}

/// Resolves item-name words (with synonyms) to an [`ItemKind`].
///
/// "key" alone denotes the silver key, the first one the player can find.
pub fn parse_item(words: &[&str]) -> Option<ItemKind> {
    match words {
        ["flashlight" | "light" | "torch"] => Some(ItemKind::Flashlight),
        ["silver", "key"] | ["silver"] | ["key"] => Some(ItemKind::SilverKey),
        ["brass", "key"] | ["brass"] => Some(ItemKind::BrassKey),
        _ => None,
    }
}
