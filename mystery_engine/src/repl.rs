//! REPL and command handling utilities.
//!
//! The text transport runs a read-eval-print loop; the switch panel runs
//! its own loop in [`crate::panel`]. Both feed decoded [`Action`]s through
//! [`dispatch`], so the rule handlers in the submodules are shared.

pub mod input;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::Result;
use log::{debug, info};

use crate::command::{Action, parse_command};
use crate::status::status_mask;
use crate::style::GameStyle;
use crate::world::GameOutcome;
use crate::{View, ViewItem, World};

use input::{InputEvent, LineSource};

/// Control flow signal used by handlers to exit the loop.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Execute one decoded action against the world.
///
/// This is the single entry point for both input transports; every rule
/// of the game runs beneath it.
///
/// # Errors
/// - Propagates handler failures, such as a missing room for the player.
pub fn dispatch(world: &mut World, view: &mut View, action: Action) -> Result<ReplControl> {
    match action {
        Action::Move(direction) => move_handler(world, view, direction)?,
        Action::Take(item) => take_handler(world, view, item)?,
        Action::UseItem(item) => use_handler(world, view, item)?,
        Action::Look => look_handler(world, view)?,
        Action::Inventory => inv_handler(world, view),
        Action::Help => help_handler(view),
        Action::Quit => return Ok(ReplControl::Quit),
        Action::Unknown => {
            view.push(ViewItem::Error("I don't understand that.".to_string()));
        },
    }
    Ok(ReplControl::Continue)
}

/// Advance the turn clock after a dispatched action and report any
/// terminal outcome, pushing its message into the view.
pub fn settle_turn(world: &mut World, view: &mut View) -> Option<GameOutcome> {
    world.tick();
    debug!("turn {} settled, status mask {:#012b}", world.turn_count, status_mask(world));
    match world.outcome() {
        Some(GameOutcome::Win) => {
            info!("player escaped on turn {}", world.turn_count);
            view.push(ViewItem::GameOver(
                "You unlock the door and escape the Mystery House! We hope to see you again..."
                    .to_string(),
            ));
            Some(GameOutcome::Win)
        },
        Some(GameOutcome::Loss) => {
            info!("player ran out of warmth on turn {}", world.turn_count);
            view.push(ViewItem::GameOver(
                "The cold finally wins. You sink down against the wall, and the house goes quiet."
                    .to_string(),
            ));
            Some(GameOutcome::Loss)
        },
        _ => None,
    }
}

/// Run the main read-eval-print loop until the game ends or the player
/// quits.
///
/// Handles prompting, command parsing, dispatching to the handler modules,
/// and advancing world time. The caller supplies the [`LineSource`], the
/// same way [`crate::panel::run_panel`] takes a [`crate::ControlPanel`].
///
/// # Errors
/// - Propagates failures from handlers or from the line source.
pub fn run_repl<S: LineSource>(world: &mut World, input_manager: &mut S) -> Result<GameOutcome> {
    let mut view = View::new();

    world.player_room_ref()?.show(&mut view);
    view.flush();

    loop {
        let prompt = match world.player.vitality {
            Some(v) => format!("\n[Turn: {}|Warmth: {v}]>> ", world.turn_count),
            None => format!("\n[Turn: {}]>> ", world.turn_count),
        }
        .prompt_style()
        .to_string();

        let line = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(_) => {
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        let action = parse_command(&line);
        if let ReplControl::Quit = dispatch(world, &mut view, action)? {
            info!("player quit on turn {}", world.turn_count);
            view.push(ViewItem::EngineMessage("You give up and sit down in the dust.".to_string()));
            view.flush();
            return Ok(GameOutcome::Quit);
        }

        let outcome = settle_turn(world, &mut view);
        view.flush();
        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }
}
