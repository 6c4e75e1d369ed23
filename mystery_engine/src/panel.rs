//! Switch-panel front end.
//!
//! The hardware transport: a 10-bit selector (switches), a single confirm
//! trigger (push button), and a 10-bit status mirror (LEDs). The core only
//! sees the [`ControlPanel`] trait; register access, UART bytes, and real
//! timing live in the excluded board shim.
//!
//! Selector layout, low bits first:
//!
//! | bits | meaning |
//! |---|---|
//! | 1..0 | argument (direction, item, or misc action) |
//! | 3..2 | command class: 00 move, 01 take, 10 use, 11 misc |
//! | 9    | unconditional session-exit request |

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{info, warn};
use mystery_data::{Direction, ItemKind};
use thiserror::Error;

use crate::command::Action;
use crate::repl::{ReplControl, dispatch, settle_turn};
use crate::status::{ALL_LIT, status_mask};
use crate::world::GameOutcome;
use crate::{View, ViewItem, World};

/// Width of the selector and status registers.
pub const SELECTOR_MASK: u16 = 0x3FF;

/// Selector bit asserted to request an immediate session exit.
pub const EXIT_BIT: u16 = 9;

/// Contract with the board shim: trigger, selector, status mirror, and an
/// approximate sleep used only for polling pace and debounce.
pub trait ControlPanel {
    fn trigger_asserted(&mut self) -> bool;
    fn sample_selector(&mut self) -> u16;
    fn set_status_mask(&mut self, mask: u16);
    fn sleep(&mut self, units: u32);
}

/// A selector pattern that maps to no command.
///
/// This is a hard contract of the front end: the pattern is reported and
/// nothing in the world changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown selection (class {class:02b}, argument {arg:02b})")]
    UnknownSelection { class: u16, arg: u16 },
}

/// Decode a sampled selector into an [`Action`].
///
/// Only the low 4 bits select a command; the exit bit overrides them.
///
/// # Errors
/// - [`DecodeError::UnknownSelection`] for the unassigned argument codes
///   (take/use/misc with argument `11`)
pub fn decode_selector(selector: u16) -> Result<Action, DecodeError> {
    if selector & (1 << EXIT_BIT) != 0 {
        return Ok(Action::Quit);
    }
    let class = (selector >> 2) & 0b11;
    let arg = selector & 0b11;
    match class {
        0b00 => {
            // all four argument codes are directions
            Ok(Action::Move(Direction::from_code(arg).expect("two-bit arg")))
        },
        0b01 => ItemKind::from_code(arg)
            .map(Action::Take)
            .ok_or(DecodeError::UnknownSelection { class, arg }),
        0b10 => ItemKind::from_code(arg)
            .map(Action::UseItem)
            .ok_or(DecodeError::UnknownSelection { class, arg }),
        _ => match arg {
            0b00 => Ok(Action::Look),
            0b01 => Ok(Action::Inventory),
            0b10 => Ok(Action::Help),
            _ => Err(DecodeError::UnknownSelection { class, arg }),
        },
    }
}

/// Run the switch-panel loop until a terminal outcome.
///
/// Each turn: busy-wait on the trigger, sample the selector, debounce by
/// waiting for de-assertion, decode and dispatch exactly one action, then
/// refresh the status mirror and evaluate the end conditions. On game
/// over, every status bit is lit.
///
/// # Errors
/// - Propagates handler failures, such as a missing room for the player.
pub fn run_panel<P: ControlPanel>(world: &mut World, panel: &mut P) -> Result<GameOutcome> {
    let mut view = View::new();
    panel.set_status_mask(status_mask(world));
    world.player_room_ref()?.show(&mut view);
    view.flush();

    let outcome = loop {
        while !panel.trigger_asserted() {
            panel.sleep(1);
        }
        let selector = panel.sample_selector() & SELECTOR_MASK;
        // debounce: the trigger must be seen released before the next read
        while panel.trigger_asserted() {
            panel.sleep(1);
        }

        match decode_selector(selector) {
            Ok(action) => {
                if let ReplControl::Quit = dispatch(world, &mut view, action)? {
                    info!("operator exit request via selector {selector:#012b}");
                    view.push(ViewItem::EngineMessage("Session ended.".to_string()));
                    break GameOutcome::Quit;
                }
            },
            Err(err) => {
                warn!("selector {selector:#012b} rejected: {err}");
                view.push(ViewItem::Error(err.to_string()));
            },
        }

        let outcome = settle_turn(world, &mut view);
        panel.set_status_mask(status_mask(world));
        if let Some(outcome) = outcome {
            break outcome;
        }
        view.flush();
    };

    view.flush();
    panel.set_status_mask(ALL_LIT);
    Ok(outcome)
}

/// Host shim standing in for the physical panel: one line of input is one
/// press-and-release of the trigger, with the selector bits given as a
/// binary or decimal number.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    pending: Option<u16>,
    sampled: bool,
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_selector(&mut self) -> u16 {
        let stdin = io::stdin();
        loop {
            print!("SW> ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                // Eof: treat as the operator exit request
                Ok(0) => return 1 << EXIT_BIT,
                Ok(_) => {},
                Err(_) => return 1 << EXIT_BIT,
            }
            if let Some(value) = parse_selector(line.trim()) {
                return value;
            }
            println!("enter the selector as up to 10 binary digits (e.g. 0101) or a decimal number");
        }
    }
}

impl ControlPanel for ConsolePanel {
    fn trigger_asserted(&mut self) -> bool {
        if self.sampled {
            // line consumed: the "button" is released again
            self.sampled = false;
            self.pending = None;
            return false;
        }
        if self.pending.is_none() {
            let value = self.read_selector();
            self.pending = Some(value);
        }
        true
    }

    fn sample_selector(&mut self) -> u16 {
        self.sampled = true;
        self.pending.unwrap_or(0)
    }

    fn set_status_mask(&mut self, mask: u16) {
        let lamps: String = (0..10)
            .rev()
            .map(|bit| if mask & (1 << bit) != 0 { '*' } else { '.' })
            .collect();
        println!("LED [{lamps}]");
    }

    fn sleep(&mut self, _units: u32) {}
}

fn parse_selector(text: &str) -> Option<u16> {
    if text.is_empty() {
        return None;
    }
    let digits = text.strip_prefix("0b").unwrap_or(text);
    let value = if digits.chars().all(|c| c == '0' || c == '1') {
        u16::from_str_radix(digits, 2).ok()?
    } else {
        digits.parse::<u16>().ok()?
    };
    Some(value & SELECTOR_MASK)
}
