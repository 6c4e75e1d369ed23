use me::panel::{ControlPanel, run_panel};
use me::repl::input::{InputEvent, LineSource};
use me::repl::{ReplControl, dispatch, settle_turn};
use me::status::{ALL_LIT, inventory_mask, status_mask};
use me::*;
use mystery_data::{Direction, ItemKind, mystery_house};
use mystery_engine as me;

use std::collections::VecDeque;

fn new_world() -> World {
    World::from_def(&mystery_house()).expect("canonical map must build")
}

/// Parse and dispatch one text command, returning this turn's view items.
fn run(world: &mut World, line: &str) -> Vec<ViewItem> {
    let mut view = View::new();
    let action = parse_command(line);
    dispatch(world, &mut view, action).expect("dispatch");
    view.take_items()
}

fn failure_text(items: &[ViewItem]) -> Option<&str> {
    items.iter().find_map(|item| match item {
        ViewItem::ActionFailure(msg) => Some(msg.as_str()),
        _ => None,
    })
}

#[test]
fn move_without_exit_is_refused() {
    let mut world = new_world();
    let items = run(&mut world, "go south");
    assert_eq!(failure_text(&items), Some("You can't go that way."));
    assert_eq!(world.player.location, 0);
}

#[test]
fn locked_room_emits_its_lock_message_and_blocks() {
    let mut world = new_world();
    // Entrance Hall's west exit leads straight to the locked Exit Door
    let items = run(&mut world, "go west");
    assert_eq!(
        failure_text(&items),
        Some("The Exit Door is locked. A brass key might fit.")
    );
    assert_eq!(world.player.location, 0);
}

#[test]
fn dark_room_requires_an_active_light() {
    let mut world = new_world();
    world.player.location = 2; // Kitchen, above the Basement

    let items = run(&mut world, "go south");
    assert!(failure_text(&items).unwrap().contains("dark"));
    assert_eq!(world.player.location, 2);

    // carrying the flashlight switched off is not enough
    world.player.inventory.insert(ItemKind::Flashlight);
    let items = run(&mut world, "go south");
    assert!(failure_text(&items).is_some());
    assert_eq!(world.player.location, 2);

    run(&mut world, "use flashlight");
    run(&mut world, "go south");
    assert_eq!(world.player.location, 3);
}

#[test]
fn take_moves_the_item_exactly_once() {
    let mut world = new_world();
    run(&mut world, "go north");
    assert_eq!(world.player.location, 1, "Living Room");

    let items = run(&mut world, "take flashlight");
    assert!(matches!(items[0], ViewItem::ActionSuccess(_)));
    assert!(world.player.inventory.contains(&ItemKind::Flashlight));
    assert!(!world.rooms[&1].contents.contains(&ItemKind::Flashlight));
    assert_eq!(inventory_mask(&world.player), 0b001);

    // the room no longer offers it
    let items = run(&mut world, "take flashlight");
    assert_eq!(failure_text(&items), Some("No flashlight here."));
}

#[test]
fn item_locations_stay_globally_unique() {
    let mut world = new_world();
    let script = ["go north", "take flashlight", "go north", "go north", "take silver key"];
    for line in script {
        run(&mut world, line);
    }
    for item in ItemKind::ALL {
        let in_rooms = world.rooms.values().filter(|r| r.contents.contains(&item)).count();
        let in_inventory = usize::from(world.player.inventory.contains(&item));
        assert_eq!(in_rooms + in_inventory, 1, "{item} must have exactly one holder");
    }
}

#[test]
fn use_unowned_item_is_refused() {
    let mut world = new_world();
    let items = run(&mut world, "use flashlight");
    assert_eq!(failure_text(&items), Some("You don't have the flashlight."));
    assert!(!world.player.flashlight_on);
}

#[test]
fn inventory_lists_held_items_with_flashlight_state() {
    let mut world = new_world();
    let items = run(&mut world, "inventory");
    assert_eq!(items, vec![ViewItem::Inventory(vec![])], "empty hands report nothing held");

    run(&mut world, "go north");
    run(&mut world, "take flashlight");
    let items = run(&mut world, "inv");
    assert_eq!(items, vec![ViewItem::Inventory(vec!["flashlight (OFF)".to_string()])]);

    run(&mut world, "use flashlight");
    let items = run(&mut world, "inventory");
    assert_eq!(items, vec![ViewItem::Inventory(vec!["flashlight (ON)".to_string()])]);
}

#[test]
fn silver_key_unlocks_storage_from_the_kitchen() {
    let mut world = new_world();
    world.player.location = 6; // Study
    run(&mut world, "take silver key");

    // no adjacent matching door here
    let items = run(&mut world, "use silver key");
    assert_eq!(failure_text(&items), Some("Nothing here fits the silver key."));
    assert!(world.rooms[&7].locked);

    world.player.location = 2; // Kitchen, east of the Storage Room
    let mask_before = inventory_mask(&world.player);
    let items = run(&mut world, "use silver key");
    assert!(matches!(&items[0], ViewItem::ActionSuccess(msg) if msg.contains("unlock")));
    assert!(!world.rooms[&7].locked);
    // the key stays owned
    assert_eq!(inventory_mask(&world.player), mask_before);

    // idempotent: repeating reports "nothing fits" and never re-locks
    let items = run(&mut world, "use silver key");
    assert_eq!(failure_text(&items), Some("Nothing here fits the silver key."));
    assert!(!world.rooms[&7].locked);
}

#[test]
fn win_requires_the_exit_door_to_be_unlocked() {
    let mut world = new_world();
    world.player.location = 8;
    assert!(!world.win_achieved(), "reaching the room while locked is not a win");
    world.unlock(8).unwrap();
    assert!(world.win_achieved());
}

#[test]
fn unknown_text_changes_nothing() {
    let mut world = new_world();
    let before = world.clone();
    let items = run(&mut world, "dance wildly");
    assert!(matches!(items[0], ViewItem::Error(_)));
    assert_eq!(world.player.location, before.player.location);
    assert_eq!(world.player.inventory, before.player.inventory);
}

#[test]
fn full_escape_walkthrough() {
    let mut world = new_world();
    let script = [
        "go north",       // Living Room
        "take flashlight",
        "go north",       // Upstairs Hall
        "go north",       // Study
        "take silver key",
        "go south",
        "go south",       // Living Room
        "go east",        // Kitchen
        "use silver key", // unlock Storage Room
        "go east",        // Storage Room
        "take brass key",
        "go west",        // Kitchen
        "go west",        // Living Room
        "go south",       // Entrance Hall
        "use brass key",  // unlock Exit Door
        "go west",        // Exit Door
    ];
    for line in script {
        run(&mut world, line);
        assert!(
            world.player.location != 8 || line == "go west",
            "must not reach the exit early"
        );
    }
    assert!(world.win_achieved());
    assert_eq!(inventory_mask(&world.player), 0b111);
}

#[test]
fn vitality_depletion_ends_in_loss() {
    let mut def = mystery_house();
    def.vitality = Some(3);
    let mut world = World::from_def(&def).unwrap();
    assert_eq!(status_mask(&world), 0b111, "thermometer code while the rule is on");

    let mut view = View::new();
    let mut outcome = None;
    for _ in 0..3 {
        dispatch(&mut world, &mut view, Action::Look).unwrap();
        outcome = settle_turn(&mut world, &mut view);
    }
    assert_eq!(outcome, Some(GameOutcome::Loss));
    assert_eq!(status_mask(&world), 0);
    assert!(view.take_items().iter().any(|i| matches!(i, ViewItem::GameOver(_))));
}

/// Scripted stand-in for the board: each selector value is one
/// press-and-release of the confirm trigger.
struct MockPanel {
    script: VecDeque<u16>,
    masks: Vec<u16>,
    sampled: bool,
}

impl MockPanel {
    fn new(script: &[u16]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            masks: Vec::new(),
            sampled: false,
        }
    }
}

impl ControlPanel for MockPanel {
    fn trigger_asserted(&mut self) -> bool {
        if self.sampled {
            self.sampled = false;
            return false;
        }
        !self.script.is_empty()
    }

    fn sample_selector(&mut self) -> u16 {
        self.sampled = true;
        self.script.pop_front().expect("script exhausted while sampling")
    }

    fn set_status_mask(&mut self, mask: u16) {
        self.masks.push(mask);
    }

    fn sleep(&mut self, _units: u32) {
        panic!("panel loop stalled: script exhausted");
    }
}

#[test]
fn panel_take_updates_the_status_mirror() {
    let mut world = new_world();
    let script = [
        0b0000, // move north -> Living Room
        0b0100, // take flashlight
        0b0111, // take, argument 11: unknown selection, no mutation
        1 << 9, // operator exit
    ];
    let mut panel = MockPanel::new(&script);
    let outcome = run_panel(&mut world, &mut panel).unwrap();

    assert_eq!(outcome, GameOutcome::Quit);
    assert!(world.player.inventory.contains(&ItemKind::Flashlight));
    assert_eq!(world.player.location, 1);
    assert!(panel.masks.contains(&0b001), "mirror refreshed after the take");
    assert_eq!(panel.masks.last(), Some(&ALL_LIT), "all lamps lit once the session ends");
}

#[test]
fn panel_walkthrough_wins() {
    let go = |dir: Direction| dir.code();
    let take = |item: ItemKind| 0b0100 | item.code();
    let use_item = |item: ItemKind| 0b1000 | item.code();
    use Direction::*;
    use ItemKind::*;

    let script = [
        go(North),
        take(Flashlight),
        go(North),
        go(North),
        take(SilverKey),
        go(South),
        go(South),
        go(East),
        use_item(SilverKey),
        go(East),
        take(BrassKey),
        go(West),
        go(West),
        go(South),
        use_item(BrassKey),
        go(West),
    ];
    let mut world = new_world();
    let mut panel = MockPanel::new(&script);
    let outcome = run_panel(&mut world, &mut panel).unwrap();
    assert_eq!(outcome, GameOutcome::Win);
    assert_eq!(panel.masks.last(), Some(&ALL_LIT));
}

/// Scripted stand-in for the terminal: yields each event once, then Eof
/// forever.
struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            events: lines.iter().map(|l| InputEvent::Line((*l).to_string())).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Eof))
    }
}

#[test]
fn eof_ends_the_repl_as_a_quit() {
    let mut world = new_world();
    let mut input = ScriptedInput::new(&["go north"]);
    let outcome = run_repl(&mut world, &mut input).unwrap();
    assert_eq!(outcome, GameOutcome::Quit);
    assert_eq!(world.player.location, 1, "the scripted move ran before the Eof");
}

#[test]
fn interrupted_line_is_skipped_and_the_loop_continues() {
    let mut world = new_world();
    let mut input = ScriptedInput::new(&["go north"]);
    input.events.push_front(InputEvent::Interrupted);
    let outcome = run_repl(&mut world, &mut input).unwrap();
    assert_eq!(outcome, GameOutcome::Quit);
    assert_eq!(world.player.location, 1);
}

#[test]
fn dispatch_quit_signals_the_loop() {
    let mut world = new_world();
    let mut view = View::new();
    assert!(matches!(
        dispatch(&mut world, &mut view, Action::Quit).unwrap(),
        ReplControl::Quit
    ));
}
