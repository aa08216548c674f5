//! Rooms of the puzzle graph
//!
//! A room is an individual space within the dungeon. It holds an optional
//! item symbol the player may collect by passing through, a precondition
//! required to enter, an intensity (relative difficulty, 0.0 to 1.0), one
//! outgoing edge per adjacent room, and the generation-time lineage links
//! (parent and children in the initial spanning tree, before the graph is
//! densified with extra edges).

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::edge::Edge;
use crate::geom::Vec2I;
use crate::symbol::Symbol;

/// A graph node with a spatial footprint.
///
/// `parent` and `children` reference other rooms by id in the owning
/// dungeon's table; they record the spanning-tree lineage from generation and
/// are independent of the final `edges` graph, which may gain cycles and
/// cross-links afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: i32,
    coords: BTreeSet<Vec2I>,
    center: Vec2I,
    item: Option<Symbol>,
    precond: Condition,
    intensity: f64,
    edges: Vec<Edge>,
    parent: Option<i32>,
    children: Vec<i32>,
}

impl Room {
    /// Create a room occupying the given cells, with the given parent room
    /// id (`None` for the root / entry room), contained item, and
    /// precondition.
    ///
    /// The footprint must not be empty, and must not be altered afterwards:
    /// the center is computed here, once, as the integer-averaged centroid of
    /// `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is empty.
    pub fn new(
        id: i32,
        coords: BTreeSet<Vec2I>,
        parent: Option<i32>,
        item: Option<Symbol>,
        precond: Condition,
    ) -> Self {
        assert!(!coords.is_empty(), "a room must occupy at least one cell");

        let (mut x, mut y) = (0, 0);
        for cell in &coords {
            x += cell.x;
            y += cell.y;
        }
        let center = Vec2I::new(x / coords.len() as i32, y / coords.len() as i32);

        Self {
            id,
            coords,
            center,
            item,
            precond,
            intensity: 0.0,
            edges: Vec::new(),
            parent,
            children: Vec::with_capacity(3),
        }
    }

    /// Create a room occupying a single cell
    pub fn at(
        id: i32,
        cell: Vec2I,
        parent: Option<i32>,
        item: Option<Symbol>,
        precond: Condition,
    ) -> Self {
        Self::new(id, BTreeSet::from([cell]), parent, item, precond)
    }

    /// The room's unique id within the owning dungeon, assigned at creation
    /// and immutable thereafter
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The intensity (relative difficulty) of the room, in [0.0, 1.0]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Set the room's intensity
    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity;
    }

    /// The item contained in the room, or `None` if there is none
    pub fn item(&self) -> Option<Symbol> {
        self.item
    }

    /// Place an item in the room (or clear it)
    pub fn set_item(&mut self, item: Option<Symbol>) {
        self.item = item;
    }

    /// The outgoing edge to the given room, or `None` if the rooms are not
    /// linked in this direction
    pub fn edge(&self, target_room_id: i32) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target_room_id() == target_room_id)
    }

    /// Upsert the outgoing edge to the given room: if one exists its guard is
    /// replaced, otherwise a new edge is appended. Returns the resulting
    /// edge. There is never more than one edge per target room.
    pub fn set_edge(&mut self, target_room_id: i32, symbol: Option<Symbol>) -> &Edge {
        let idx = match self
            .edges
            .iter()
            .position(|e| e.target_room_id() == target_room_id)
        {
            Some(idx) => {
                self.edges[idx].set_symbol(symbol);
                idx
            }
            None => {
                let e = match symbol {
                    Some(s) => Edge::with_symbol(target_room_id, s),
                    None => Edge::new(target_room_id),
                };
                self.edges.push(e);
                self.edges.len() - 1
            }
        };
        &self.edges[idx]
    }

    /// All outgoing edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The number of rooms this room is linked to
    pub fn link_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether this room is the entry to the dungeon
    pub fn is_start(&self) -> bool {
        self.item.is_some_and(Symbol::is_start)
    }

    /// Whether this room is the goal room of the dungeon
    pub fn is_goal(&self) -> bool {
        self.item.is_some_and(Symbol::is_goal)
    }

    /// Whether this room contains the dungeon's boss
    pub fn is_boss(&self) -> bool {
        self.item.is_some_and(Symbol::is_boss)
    }

    /// Whether this room contains the dungeon's switch object
    pub fn is_switch(&self) -> bool {
        self.item.is_some_and(Symbol::is_switch)
    }

    /// The precondition for entering this room
    pub fn precond(&self) -> Condition {
        self.precond
    }

    /// Replace the room's precondition
    pub fn set_precond(&mut self, precond: Condition) {
        self.precond = precond;
    }

    /// The id of this room's parent in the generation spanning tree, or
    /// `None` for the root
    pub fn parent(&self) -> Option<i32> {
        self.parent
    }

    /// Re-parent this room in the generation spanning tree
    pub fn set_parent(&mut self, parent: Option<i32>) {
        self.parent = parent;
    }

    /// Ids of the rooms this room parented during generation
    pub fn children(&self) -> &[i32] {
        &self.children
    }

    /// Register this room as a parent of another. Does not modify the child
    /// room's parent field; the tree is built in two phases and the caller
    /// sets the child's parent separately.
    pub fn add_child(&mut self, child_id: i32) {
        self.children.push(child_id);
    }

    /// The cells this room occupies
    pub fn coords(&self) -> &BTreeSet<Vec2I> {
        &self.coords
    }

    /// The integer-averaged centroid of the room's footprint
    pub fn center(&self) -> Vec2I {
        self.center
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room({} at {})", self.id, self.center)
    }
}
