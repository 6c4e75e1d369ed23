//! `repl::system` module
//!
//! Handlers for commands about the game itself rather than the world.

use crate::{View, ViewItem};

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}
