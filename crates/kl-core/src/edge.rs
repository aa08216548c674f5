//! Directed links between rooms
//!
//! The attached symbol is a requirement that must be satisfied for the player
//! to pass from one of the linked rooms to the other via this edge. It is a
//! single [`Symbol`] rather than a full [`Condition`](crate::Condition) to
//! keep the client-facing graph simple: clients never have to handle multiple
//! symbols on one door. An unconditional edge may always be used.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// A directed, optionally symbol-guarded link to another room, referenced by
/// id into the owning dungeon's room table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    target_room_id: i32,
    symbol: Option<Symbol>,
}

impl Edge {
    /// Create an unconditional edge to the given room
    pub const fn new(target_room_id: i32) -> Self {
        Self {
            target_room_id,
            symbol: None,
        }
    }

    /// Create an edge that requires `symbol` to be collected before it may be
    /// used to travel between the rooms
    pub const fn with_symbol(target_room_id: i32, symbol: Symbol) -> Self {
        Self {
            target_room_id,
            symbol: Some(symbol),
        }
    }

    /// Whether the edge is conditional
    pub const fn has_symbol(&self) -> bool {
        self.symbol.is_some()
    }

    /// The symbol that must be obtained to pass along this edge, or `None`
    /// if the edge is unconditional
    pub const fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Replace the guard on this edge
    pub fn set_symbol(&mut self, symbol: Option<Symbol>) {
        self.symbol = symbol;
    }

    /// The id of the room being linked to
    pub const fn target_room_id(&self) -> i32 {
        self.target_room_id
    }
}
