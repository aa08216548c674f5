//! Graph consistency errors
//!
//! The core itself favors documented caller contracts and `Option` sentinels
//! over runtime faults; these errors exist for the places where a generator
//! bug should be surfaced instead of silently producing a broken puzzle:
//! linking against an unknown room id, and the post-generation consistency
//! check in [`DungeonGraph::verify`](crate::DungeonGraph::verify).

use thiserror::Error;

use crate::symbol::Symbol;

/// Faults in the room graph, produced by link operations and by
/// [`DungeonGraph::verify`](crate::DungeonGraph::verify).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("no room with id {id} in the dungeon")]
    UnknownRoom { id: i32 },

    #[error("rooms {first} and {second} both carry the special item {item}")]
    DuplicateSpecialRoom { item: Symbol, first: i32, second: i32 },

    #[error("room {room} has an edge to nonexistent room {target}")]
    DanglingEdge { room: i32, target: i32 },

    #[error("room {room} names nonexistent room {parent} as its parent")]
    DanglingParent { room: i32, parent: i32 },

    #[error("room {room} names nonexistent room {child} as a child")]
    DanglingChild { room: i32, child: i32 },

    #[error("lineage of room {room} loops back on itself")]
    LineageCycle { room: i32 },
}
