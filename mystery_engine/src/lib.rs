#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod item;
pub mod panel;
pub mod player;
pub mod repl;
pub mod room;
pub mod status;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Action, parse_command};
pub use item::ItemHolder;
pub use panel::{ControlPanel, run_panel};
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{GameOutcome, World};
