//! View module.
//!
//! Rather than printing to the console from inside each handler, handlers
//! push typed entries here and the loop renders them once per turn. On
//! target hardware the same entries would be rendered to the UART sink.

use colored::Colorize;
use mystery_data::{Direction, ItemKind};
use textwrap::{fill, termwidth};

use crate::style::GameStyle;

/// One displayable result of a command or engine event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomDescription { name: String, description: String },
    RoomItems(Vec<ItemKind>),
    RoomExits(Vec<Direction>),
    /// Direct confirmation of a successful action.
    ActionSuccess(String),
    /// A legal command that the rules refused (locked, dark, absent item).
    ActionFailure(String),
    /// Input that never became an action (unparsed line, bad bit pattern).
    Error(String),
    Inventory(Vec<String>),
    EngineMessage(String),
    Help,
    GameOver(String),
}

/// Aggregates entries to be displayed on each pass through the loop.
#[derive(Debug, Clone, Default)]
pub struct View {
    items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Drain this turn's entries without rendering (panel/test harnesses).
    pub fn take_items(&mut self) -> Vec<ViewItem> {
        std::mem::take(&mut self.items)
    }

    /// Compose and display all entries queued for the current turn.
    pub fn flush(&mut self) {
        let width = termwidth().min(84);
        for item in self.items.drain(..) {
            match item {
                ViewItem::RoomDescription { name, description } => {
                    println!("\n{}", name.room_style());
                    println!("{}", fill(&description, width).description_style());
                },
                ViewItem::RoomItems(items) => {
                    let listing = items.iter().map(|i| i.as_str()).collect::<Vec<_>>().join(", ");
                    println!("Items here: {}", listing.item_style());
                },
                ViewItem::RoomExits(exits) => {
                    if exits.is_empty() {
                        println!("Exits: {}", "none".exit_style());
                    } else {
                        let listing = exits.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ");
                        println!("Exits: {}", listing.exit_style());
                    }
                },
                ViewItem::ActionSuccess(msg) => println!("{msg}"),
                ViewItem::ActionFailure(msg) => println!("{}", msg.denied_style()),
                ViewItem::Error(msg) => println!("{}", msg.error_style()),
                ViewItem::Inventory(lines) => {
                    println!("You are carrying:");
                    if lines.is_empty() {
                        println!("  nothing");
                    }
                    for line in lines {
                        println!("  {}", line.item_style());
                    }
                },
                ViewItem::EngineMessage(msg) => println!("{}", msg.engine_style()),
                ViewItem::Help => print_help(),
                ViewItem::GameOver(msg) => println!("\n{}", fill(&msg, width).bold()),
            }
        }
    }
}

/// Center the session title, then style it. Padding has to happen on the
/// plain string; ANSI escape bytes would count toward the field width.
pub fn title_banner(title: &str) -> String {
    format!("{:^84}", title.to_uppercase()).bright_yellow().underline().to_string()
}

fn print_help() {
    println!("Commands:");
    println!("  go <north|south|east|west>   move between rooms");
    println!("  take <item>                  pick up an item in the room");
    println!("  use <item>                   toggle the flashlight / try a key");
    println!("  look                         describe the current room again");
    println!("  inventory (inv)              list what you are carrying");
    println!("  help (?)                     this summary");
    println!("  quit                         end the session");
}
