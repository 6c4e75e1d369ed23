use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable room identifier used across `WorldDef` references.
pub type RoomId = usize;

/// Compass directions a room exit may face.
///
/// The two-bit codes match the switch-panel command encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in display / encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Two-bit argument code used by the switch-panel front end.
    pub fn code(self) -> u16 {
        match self {
            Direction::North => 0b00,
            Direction::South => 0b01,
            Direction::East => 0b10,
            Direction::West => 0b11,
        }
    }

    /// Decode a two-bit argument code. Values above 3 have no meaning.
    pub fn from_code(code: u16) -> Option<Direction> {
        match code {
            0b00 => Some(Direction::North),
            0b01 => Some(Direction::South),
            0b10 => Some(Direction::East),
            0b11 => Some(Direction::West),
            _ => None,
        }
    }

    /// Parse a direction word from player input (full name or initial).
    pub fn from_input(word: &str) -> Option<Direction> {
        match word {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of items that exist in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Flashlight,
    SilverKey,
    BrassKey,
}

impl ItemKind {
    /// Every item, in LED-bit order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Flashlight, ItemKind::SilverKey, ItemKind::BrassKey];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Flashlight => "flashlight",
            ItemKind::SilverKey => "silver key",
            ItemKind::BrassKey => "brass key",
        }
    }

    /// Bit position of this item on the status mirror.
    pub fn led_bit(self) -> u16 {
        match self {
            ItemKind::Flashlight => 0,
            ItemKind::SilverKey => 1,
            ItemKind::BrassKey => 2,
        }
    }

    /// Two-bit argument code used by the switch-panel front end.
    pub fn code(self) -> u16 {
        match self {
            ItemKind::Flashlight => 0b00,
            ItemKind::SilverKey => 0b01,
            ItemKind::BrassKey => 0b10,
        }
    }

    /// Decode a two-bit argument code. Code `0b11` is unassigned.
    pub fn from_code(code: u16) -> Option<ItemKind> {
        match code {
            0b00 => Some(ItemKind::Flashlight),
            0b01 => Some(ItemKind::SilverKey),
            0b10 => Some(ItemKind::BrassKey),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed exit from one room to another.
///
/// Exits are one-way edges; a reciprocal edge is an authoring choice, not a
/// requirement, and validation never demands symmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: Direction,
    pub to: RoomId,
}

impl ExitDef {
    pub fn new(direction: Direction, to: RoomId) -> Self {
        Self { direction, to }
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: RoomId,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    /// Entry requires the flashlight to be carried and switched on.
    #[serde(default)]
    pub dark: bool,
    /// Room starts locked; only such rooms can ever be unlocked at runtime.
    #[serde(default)]
    pub locked: bool,
    /// Message shown when entry is denied by the lock.
    pub lock_msg: Option<String>,
    /// The key that clears this room's lock when used from an adjacent room.
    #[serde(default)]
    pub key: Option<ItemKind>,
    #[serde(default)]
    pub items: Vec<ItemKind>,
}

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: RoomId,
    /// Room the player must reach (and have unlocked) to win.
    pub win_room: RoomId,
    /// Enables the depletion variant: starting vitality, decremented once
    /// per turn, with loss at zero.
    #[serde(default)]
    pub vitality: Option<u32>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// The canonical nine-room Mystery House map.
///
/// Adjacency, darkness, locks, and item seeding follow the authored game:
/// the flashlight is in the Living Room, the silver key in the Study, the
/// brass key in the locked Storage Room, and the Exit Door is the win room.
pub fn mystery_house() -> WorldDef {
    let room = |id, name: &str, desc: &str, exits: Vec<ExitDef>| RoomDef {
        id,
        name: name.to_string(),
        desc: desc.to_string(),
        exits,
        dark: false,
        locked: false,
        lock_msg: None,
        key: None,
        items: Vec::new(),
    };

    use Direction::*;
    let mut rooms = vec![
        room(
            0,
            "Entrance Hall",
            "The front door slams shut behind you. The house is silent.",
            vec![ExitDef::new(North, 1), ExitDef::new(West, 8)],
        ),
        room(
            1,
            "Living Room",
            "A cracked fireplace. Something glints under the sofa.",
            vec![ExitDef::new(North, 4), ExitDef::new(South, 0), ExitDef::new(East, 2)],
        ),
        room(
            2,
            "Kitchen",
            "Dusty plates. A narrow stairwell leads down.",
            vec![ExitDef::new(South, 3), ExitDef::new(East, 7), ExitDef::new(West, 1)],
        ),
        room(
            3,
            "Basement",
            "Cold concrete. You hear water dripping in the dark.",
            vec![ExitDef::new(North, 2)],
        ),
        room(
            4,
            "Upstairs Hall",
            "Portraits stare at you. A door to the east is slightly open.",
            vec![ExitDef::new(North, 6), ExitDef::new(South, 1), ExitDef::new(East, 5)],
        ),
        room(
            5,
            "Bedroom",
            "An unmade bed. The window is nailed shut.",
            vec![ExitDef::new(West, 4)],
        ),
        room(
            6,
            "Study",
            "A desk covered in notes. One drawer is ajar.",
            vec![ExitDef::new(South, 4)],
        ),
        room(
            7,
            "Storage Room",
            "Old crates. A heavy brass key hangs on a hook.",
            vec![ExitDef::new(West, 2)],
        ),
        room(
            8,
            "Exit Door",
            "A reinforced door with a brass lock. Fresh air seeps through.",
            vec![ExitDef::new(East, 0)],
        ),
    ];

    rooms[1].items.push(ItemKind::Flashlight);
    rooms[3].dark = true;
    rooms[6].items.push(ItemKind::SilverKey);
    rooms[7].locked = true;
    rooms[7].lock_msg = Some("The Storage Room is locked. You need a silver key.".to_string());
    rooms[7].key = Some(ItemKind::SilverKey);
    rooms[7].items.push(ItemKind::BrassKey);
    rooms[8].locked = true;
    rooms[8].lock_msg = Some("The Exit Door is locked. A brass key might fit.".to_string());
    rooms[8].key = Some(ItemKind::BrassKey);

    WorldDef {
        title: "Mystery House".to_string(),
        intro: "The door behind you is locked tight. Find a way out.".to_string(),
        start_room: 0,
        win_room: 8,
        vitality: None,
        rooms,
    }
}
