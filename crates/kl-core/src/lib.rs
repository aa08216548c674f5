//! kl-core: lock-and-key puzzle graph
//!
//! Models the spatial and logical structure of a lock-and-key puzzle: a
//! directed graph of rooms connected by edges, where traversing an edge may
//! require a key the player collected earlier or a particular state of the
//! dungeon's shared switch.
//!
//! The crate is pure, in-memory logic with no I/O: a generation algorithm
//! populates a [`Dungeon`] with [`Room`]s and [`Edge`]s, and consumers
//! (solvability checkers, renderers, engines) query it. The precondition
//! algebra lives in [`Condition`]: conjunction, implication over a totally
//! ordered key scale plus a three-valued switch state, and the
//! single-symbol-difference probe used when densifying a spanning tree into a
//! graph.

mod condition;
mod dungeon;
mod edge;
mod errors;
mod geom;
mod room;
mod symbol;

pub use condition::{Condition, SwitchState};
pub use dungeon::{Dungeon, DungeonGraph};
pub use edge::Edge;
pub use errors::GraphError;
pub use geom::{Rect2I, Vec2I};
pub use room::Room;
pub use symbol::{Symbol, BOSS, GOAL, START, SWITCH, SWITCH_OFF, SWITCH_ON};
