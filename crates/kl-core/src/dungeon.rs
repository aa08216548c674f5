//! The dungeon graph contract and its in-memory implementation
//!
//! [`Dungeon`] is the contract between the generation algorithm, which
//! populates the room table and links rooms, and downstream consumers
//! (solvability checkers, renderers, engines), which only query it.
//! [`DungeonGraph`] is the plain in-memory implementation: an id-keyed room
//! arena with no ownership cycles, since rooms reference each other by id
//! only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::geom::Rect2I;
use crate::room::Room;
use crate::symbol::Symbol;

/// The spatial layout of a lock-and-key puzzle: the authoritative room table
/// plus link creation and graph-level queries.
///
/// Room ids are unique and stable for the dungeon's lifetime.
/// [`Dungeon::rooms_are_linked`] is symmetric regardless of edge
/// directionality.
pub trait Dungeon {
    /// Iterate over all rooms, in stable id order
    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_>;

    /// The number of rooms in the dungeon
    fn room_count(&self) -> usize;

    /// The room with the given id, or `None` if it is unknown
    fn get(&self, id: i32) -> Option<&Room>;

    /// Mutable access to the room with the given id
    fn get_mut(&mut self, id: i32) -> Option<&mut Room>;

    /// Insert a room, keyed by its id.
    ///
    /// Any existing room whose **coordinates** collide with the new room's
    /// footprint is removed first: spatial occupancy, not id, determines the
    /// overwrite. Two rooms never share a cell.
    fn add(&mut self, room: Room);

    /// Add a single directed edge `from` → `to` guarded by `symbol` (`None`
    /// for an unconditional passage)
    fn link_one_way(&mut self, from: i32, to: i32, symbol: Option<Symbol>)
        -> Result<(), GraphError>;

    /// Link two rooms in both directions with the same guard
    fn link(&mut self, a: i32, b: i32, symbol: Option<Symbol>) -> Result<(), GraphError> {
        if self.get(b).is_none() {
            return Err(GraphError::UnknownRoom { id: b });
        }
        self.link_one_way(a, b, symbol)?;
        self.link_one_way(b, a, symbol)
    }

    /// Whether an edge exists between the two rooms in either direction
    fn rooms_are_linked(&self, a: i32, b: i32) -> bool {
        self.get(a).is_some_and(|r| r.edge(b).is_some())
            || self.get(b).is_some_and(|r| r.edge(a).is_some())
    }

    /// The room marked as the dungeon's entry, if any
    fn find_start(&self) -> Option<&Room> {
        self.rooms().find(|r| r.is_start())
    }

    /// The room containing the dungeon's boss, if any
    fn find_boss(&self) -> Option<&Room> {
        self.rooms().find(|r| r.is_boss())
    }

    /// The dungeon's goal room, if any
    fn find_goal(&self) -> Option<&Room> {
        self.rooms().find(|r| r.is_goal())
    }

    /// The room containing the dungeon's switch object, if any
    fn find_switch(&self) -> Option<&Room> {
        self.rooms().find(|r| r.is_switch())
    }

    /// The axis-aligned bounding rectangle over every room's footprint, or
    /// `None` for an empty dungeon
    fn extent_bounds(&self) -> Option<Rect2I> {
        let mut bounds: Option<Rect2I> = None;
        for room in self.rooms() {
            for &cell in room.coords() {
                match bounds.as_mut() {
                    Some(b) => b.expand_to(cell),
                    None => bounds = Some(Rect2I::around(cell)),
                }
            }
        }
        bounds
    }
}

/// In-memory [`Dungeon`] implementation: a `BTreeMap` room arena, iterated in
/// id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DungeonGraph {
    rooms: BTreeMap<i32, Room>,
}

impl DungeonGraph {
    /// Create an empty dungeon
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the graph for generator faults: duplicate special rooms, edges
    /// or lineage links to unknown ids, and cycles in the parent chain.
    ///
    /// Returns the first fault found. Intended to be run once after
    /// generation; a dungeon that passes is safe for consumers to traverse
    /// without id-resolution checks.
    pub fn verify(&self) -> Result<(), GraphError> {
        for (item, pred) in [
            (Symbol::Start, Room::is_start as fn(&Room) -> bool),
            (Symbol::Goal, Room::is_goal),
            (Symbol::Boss, Room::is_boss),
            (Symbol::Switch, Room::is_switch),
        ] {
            let mut found: Option<i32> = None;
            for room in self.rooms.values().filter(|r| pred(r)) {
                if let Some(first) = found {
                    return Err(GraphError::DuplicateSpecialRoom {
                        item,
                        first,
                        second: room.id(),
                    });
                }
                found = Some(room.id());
            }
        }

        for room in self.rooms.values() {
            for edge in room.edges() {
                if !self.rooms.contains_key(&edge.target_room_id()) {
                    return Err(GraphError::DanglingEdge {
                        room: room.id(),
                        target: edge.target_room_id(),
                    });
                }
            }
            if let Some(parent) = room.parent() {
                if !self.rooms.contains_key(&parent) {
                    return Err(GraphError::DanglingParent {
                        room: room.id(),
                        parent,
                    });
                }
            }
            for &child in room.children() {
                if !self.rooms.contains_key(&child) {
                    return Err(GraphError::DanglingChild {
                        room: room.id(),
                        child,
                    });
                }
            }
        }

        // The parent chain from any room must terminate within room_count
        // steps, otherwise it loops.
        for room in self.rooms.values() {
            let mut current = room.parent();
            let mut steps = 0;
            while let Some(id) = current {
                steps += 1;
                if steps > self.rooms.len() {
                    return Err(GraphError::LineageCycle { room: room.id() });
                }
                current = self.rooms.get(&id).and_then(Room::parent);
            }
        }

        Ok(())
    }
}

impl Dungeon for DungeonGraph {
    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_> {
        Box::new(self.rooms.values())
    }

    fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn get(&self, id: i32) -> Option<&Room> {
        self.rooms.get(&id)
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    fn add(&mut self, room: Room) {
        let collisions: Vec<i32> = self
            .rooms
            .values()
            .filter(|r| r.coords().intersection(room.coords()).next().is_some())
            .map(|r| r.id())
            .collect();
        for id in collisions {
            self.rooms.remove(&id);
        }
        self.rooms.insert(room.id(), room);
    }

    fn link_one_way(&mut self, from: i32, to: i32, symbol: Option<Symbol>)
        -> Result<(), GraphError>
    {
        if !self.rooms.contains_key(&to) {
            return Err(GraphError::UnknownRoom { id: to });
        }
        let room = self
            .rooms
            .get_mut(&from)
            .ok_or(GraphError::UnknownRoom { id: from })?;
        room.set_edge(to, symbol);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::geom::Vec2I;

    fn add_room(d: &mut DungeonGraph, id: i32, x: i32, y: i32, item: Option<Symbol>) {
        d.add(Room::at(id, Vec2I::new(x, y), None, item, Condition::new()));
    }

    #[test]
    fn test_two_way_link_symmetry() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        add_room(&mut d, 1, 1, 0, None);
        d.link(0, 1, Some(Symbol::Key(0))).unwrap();

        assert!(d.rooms_are_linked(0, 1));
        assert!(d.rooms_are_linked(1, 0));
        assert_eq!(
            d.get(0).unwrap().edge(1).unwrap().symbol(),
            d.get(1).unwrap().edge(0).unwrap().symbol(),
        );
    }

    #[test]
    fn test_one_way_link_is_directional_but_symmetric_query() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        add_room(&mut d, 1, 1, 0, None);
        d.link_one_way(0, 1, None).unwrap();

        assert!(d.get(0).unwrap().edge(1).is_some());
        assert!(d.get(1).unwrap().edge(0).is_none());
        // Linked-query is symmetric regardless of direction.
        assert!(d.rooms_are_linked(1, 0));
    }

    #[test]
    fn test_link_unknown_room() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        assert_eq!(
            d.link(0, 9, None),
            Err(GraphError::UnknownRoom { id: 9 })
        );
        // The failed link left no half-edge behind.
        assert_eq!(d.get(0).unwrap().link_count(), 0);
    }

    #[test]
    fn test_add_overwrites_by_coordinate() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        add_room(&mut d, 1, 0, 0, None);

        assert_eq!(d.room_count(), 1);
        assert!(d.get(0).is_none());
        assert!(d.get(1).is_some());
    }

    #[test]
    fn test_add_keeps_disjoint_rooms() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        add_room(&mut d, 1, 1, 0, None);
        assert_eq!(d.room_count(), 2);
    }

    #[test]
    fn test_find_special_rooms() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, Some(Symbol::Start));
        add_room(&mut d, 1, 1, 0, Some(Symbol::Switch));
        add_room(&mut d, 2, 2, 0, Some(Symbol::Boss));
        add_room(&mut d, 3, 3, 0, Some(Symbol::Goal));
        add_room(&mut d, 4, 4, 0, Some(Symbol::Key(0)));

        assert_eq!(d.find_start().unwrap().id(), 0);
        assert_eq!(d.find_switch().unwrap().id(), 1);
        assert_eq!(d.find_boss().unwrap().id(), 2);
        assert_eq!(d.find_goal().unwrap().id(), 3);
    }

    #[test]
    fn test_extent_bounds() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 1, None);
        add_room(&mut d, 1, 5, 4, None);
        add_room(&mut d, 2, 2, 3, None);
        assert_eq!(d.extent_bounds(), Some(Rect2I::new(0, 1, 5, 4)));

        assert_eq!(DungeonGraph::new().extent_bounds(), None);
    }

    #[test]
    fn test_verify_duplicate_special_room() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, Some(Symbol::Goal));
        add_room(&mut d, 1, 1, 0, Some(Symbol::Goal));
        assert_eq!(
            d.verify(),
            Err(GraphError::DuplicateSpecialRoom {
                item: Symbol::Goal,
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn test_verify_dangling_edge() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        d.get_mut(0).unwrap().set_edge(7, None);
        assert_eq!(
            d.verify(),
            Err(GraphError::DanglingEdge { room: 0, target: 7 })
        );
    }

    #[test]
    fn test_verify_lineage_cycle() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, None);
        add_room(&mut d, 1, 1, 0, None);
        d.get_mut(0).unwrap().set_parent(Some(1));
        d.get_mut(1).unwrap().set_parent(Some(0));
        assert!(matches!(d.verify(), Err(GraphError::LineageCycle { .. })));
    }

    #[test]
    fn test_verify_clean_graph() {
        let mut d = DungeonGraph::new();
        add_room(&mut d, 0, 0, 0, Some(Symbol::Start));
        add_room(&mut d, 1, 1, 0, Some(Symbol::Goal));
        d.get_mut(1).unwrap().set_parent(Some(0));
        d.get_mut(0).unwrap().add_child(1);
        d.link(0, 1, None).unwrap();
        assert_eq!(d.verify(), Ok(()));
    }
}
