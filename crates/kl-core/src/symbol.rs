//! Key and marker symbols
//!
//! A `Symbol` is a single key or lock within the lock-and-key puzzle. Two
//! symbols are equivalent if they have the same value. Besides ordinary keys,
//! a closed set of reserved symbols marks special rooms (start, goal, boss,
//! switch object) and switch-state requirements on edges.

use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable integer value of the START marker.
pub const START: i32 = -1;
/// Stable integer value of the GOAL marker.
pub const GOAL: i32 = -2;
/// Stable integer value of the BOSS marker.
pub const BOSS: i32 = -3;
/// Stable integer value of the SWITCH_ON requirement.
pub const SWITCH_ON: i32 = -4;
/// Stable integer value of the SWITCH_OFF requirement.
pub const SWITCH_OFF: i32 = -5;
/// Stable integer value of the SWITCH item.
pub const SWITCH: i32 = -6;

/// A single key or lock within the lock-and-key puzzle.
///
/// The marker variants (`Start`, `Goal`, `Boss`, `Switch`) serve no purpose in
/// the puzzle other than flagging rooms where the client of the library places
/// special game objects. `SwitchOn` and `SwitchOff` do not appear in rooms,
/// only in [`Condition`](crate::Condition)s and [`Edge`](crate::Edge)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// An ordinary key, ranked by value. Keys are collected in rank order.
    Key(u32),
    /// Marks the entry room of the dungeon.
    Start,
    /// Marks the goal room of the dungeon.
    Goal,
    /// Marks the room containing the dungeon's boss.
    Boss,
    /// Requires the dungeon's switch to be on (lock only).
    SwitchOn,
    /// Requires the dungeon's switch to be off (lock only).
    SwitchOff,
    /// The switch object itself, placed in a room (item only).
    Switch,
}

impl Symbol {
    /// Create an ordinary key symbol of the given rank
    pub const fn key(rank: u32) -> Self {
        Symbol::Key(rank)
    }

    /// The stable integer value of this symbol. Ordinary keys are 0-based;
    /// reserved symbols use fixed negative values that external tools may
    /// depend on.
    pub const fn value(self) -> i32 {
        match self {
            Symbol::Key(rank) => rank as i32,
            Symbol::Start => START,
            Symbol::Goal => GOAL,
            Symbol::Boss => BOSS,
            Symbol::SwitchOn => SWITCH_ON,
            Symbol::SwitchOff => SWITCH_OFF,
            Symbol::Switch => SWITCH,
        }
    }

    /// The symbol for a stable integer value, or `None` if the value is
    /// negative but not one of the reserved constants.
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            START => Some(Symbol::Start),
            GOAL => Some(Symbol::Goal),
            BOSS => Some(Symbol::Boss),
            SWITCH_ON => Some(Symbol::SwitchOn),
            SWITCH_OFF => Some(Symbol::SwitchOff),
            SWITCH => Some(Symbol::Switch),
            v if v >= 0 => Some(Symbol::Key(v as u32)),
            _ => None,
        }
    }

    /// The rank of an ordinary key, or `None` for reserved symbols
    pub const fn key_rank(self) -> Option<u32> {
        match self {
            Symbol::Key(rank) => Some(rank),
            _ => None,
        }
    }

    /// Whether this is the START marker
    pub const fn is_start(self) -> bool {
        matches!(self, Symbol::Start)
    }

    /// Whether this is the GOAL marker
    pub const fn is_goal(self) -> bool {
        matches!(self, Symbol::Goal)
    }

    /// Whether this is the BOSS marker
    pub const fn is_boss(self) -> bool {
        matches!(self, Symbol::Boss)
    }

    /// Whether this is the SWITCH item
    pub const fn is_switch(self) -> bool {
        matches!(self, Symbol::Switch)
    }

    /// Whether this is one of the SWITCH_ON / SWITCH_OFF requirements
    pub const fn is_switch_state(self) -> bool {
        matches!(self, Symbol::SwitchOn | Symbol::SwitchOff)
    }
}

/// Ordinary keys are totally ordered by rank. Reserved symbols are not
/// comparable as keys: a marker compares equal to itself and as `None`
/// against everything else.
impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Symbol::Key(a), Symbol::Key(b)) => Some(a.cmp(b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Key(rank) if rank < 26 => {
                write!(f, "{}", char::from(b'A' + rank as u8))
            }
            Symbol::Key(rank) => write!(f, "{rank}"),
            Symbol::Start => write!(f, "Start"),
            Symbol::Goal => write!(f, "Goal"),
            Symbol::Boss => write!(f, "Boss"),
            Symbol::SwitchOn => write!(f, "ON"),
            Symbol::SwitchOff => write!(f, "OFF"),
            Symbol::Switch => write!(f, "SW"),
        }
    }
}
