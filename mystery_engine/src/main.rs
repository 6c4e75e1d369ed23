#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Mystery House **
//! Escape-the-house game with switch-panel and text front ends.

use mystery_engine::panel::ConsolePanel;
use mystery_engine::repl::input::InputManager;
use mystery_engine::style::GameStyle;
use mystery_engine::view::title_banner;
use mystery_engine::{GameOutcome, World, run_panel, run_repl};

use anyhow::{Context, Result};

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building the Mystery House world...");
    let def = mystery_data::mystery_house();
    let mut world = World::from_def(&def).context("while building the world")?;
    info!("world built and validated.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    println!("{}", title_banner(&world.title));
    println!("\n{}\n", world.intro.description_style());

    // one transport per session: the switch panel shim, or the line REPL
    let panel_mode = std::env::args().any(|arg| arg == "--panel");
    let outcome = if panel_mode {
        println!("{}", "Selector: bits 3..2 command, 1..0 argument; bit 9 exits.".engine_style());
        run_panel(&mut world, &mut ConsolePanel::new())?
    } else {
        run_repl(&mut world, &mut InputManager::new()?)?
    };

    info!("session over: {outcome:?} after {} turns", world.turn_count);
    if outcome == GameOutcome::Quit {
        println!("Goodbye.");
    }
    Ok(())
}
