//! Room preconditions
//!
//! A room's precondition is the set of symbols the player must have collected
//! to be able to reach it. Because there is always a time ordering on the
//! collection of keys, the key part collapses to a count: the `key_level` is
//! one past the highest ordinary key rank required (0 when no key is
//! required). Holding key rank `n` implies holding every lower rank.
//!
//! The state of the dungeon's switch is also recorded here. A room behind a
//! link that requires the switch to be flipped into a particular state has a
//! precondition that includes that state.
//!
//! A condition is satisfied when the player has all the keys it requires and
//! the switch is in the state it requires. A condition `x` implies a
//! condition `y` if and only if `y` is satisfied whenever `x` is.

use core::fmt;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::symbol::Symbol;

/// The required state of the dungeon's switch for a condition to be satisfied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum SwitchState {
    /// The switch may be in any state.
    #[default]
    #[strum(to_string = "Either")]
    Either,
    /// The switch must be off.
    #[strum(to_string = "OFF")]
    Off,
    /// The switch must be on.
    #[strum(to_string = "ON")]
    On,
}

impl SwitchState {
    /// The edge symbol that requires this switch state, or `None` for
    /// [`SwitchState::Either`].
    pub const fn to_symbol(self) -> Option<Symbol> {
        match self {
            SwitchState::Either => None,
            SwitchState::Off => Some(Symbol::SwitchOff),
            SwitchState::On => Some(Symbol::SwitchOn),
        }
    }
}

/// A conjunctive precondition: a minimum key rank plus a required switch
/// state.
///
/// Conditions are values. [`Condition::and`] derives a new condition and
/// never mutates its receiver, so a condition shared between rooms cannot be
/// corrupted through aliasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Condition {
    /// Number of ordinary keys the player must hold, in rank order.
    /// Equivalently, one past the highest required key rank.
    key_level: u32,
    /// Required switch state, `Either` when the switch is unconstrained.
    switch_state: SwitchState,
}

impl Condition {
    /// The empty condition: no keys, any switch state.
    pub const fn new() -> Self {
        Self {
            key_level: 0,
            switch_state: SwitchState::Either,
        }
    }

    /// Number of ordinary keys required, in rank order
    pub const fn key_level(self) -> u32 {
        self.key_level
    }

    /// Required switch state
    pub const fn switch_state(self) -> SwitchState {
        self.switch_state
    }

    /// Fold one more requirement into this condition. Only ever called on a
    /// copy that has not yet been handed out.
    fn add(&mut self, rhs: Condition) {
        self.key_level = self.key_level.max(rhs.key_level);
        if self.switch_state == SwitchState::Either {
            self.switch_state = rhs.switch_state;
        }
        // A non-Either state is kept even when rhs contradicts it: first
        // writer wins. Conjoining ON with OFF is a caller contract violation
        // and the result for that case is unspecified.
    }

    /// The conjunction of this condition with another requirement, as a new
    /// condition. The receiver is not modified.
    ///
    /// The key level of the result is the max of the two operands' key
    /// levels; a required switch state is adopted from the right operand only
    /// when the receiver leaves the switch unconstrained. Callers must not
    /// conjoin two contradictory switch requirements (ON with OFF); the
    /// result of doing so is unspecified.
    pub fn and(self, rhs: impl Into<Condition>) -> Condition {
        let mut result = self;
        result.add(rhs.into());
        result
    }

    /// Whether `other` is satisfied whenever this condition is.
    ///
    /// This is a partial order over conditions: reflexive, transitive, and
    /// antisymmetric up to equality.
    pub fn implies(self, other: Condition) -> bool {
        self.key_level >= other.key_level
            && (self.switch_state == other.switch_state
                || other.switch_state == SwitchState::Either)
    }

    /// Whether the single-symbol requirement `s` is satisfied whenever this
    /// condition is.
    pub fn implies_symbol(self, s: Symbol) -> bool {
        self.implies(Condition::from(s))
    }

    /// The one symbol that, added to `other`, would make the two conditions
    /// equal — or `None` if no single symbol closes the gap (the conditions
    /// are already equal, or they differ in both key level and switch state,
    /// or their switch requirements contradict).
    ///
    /// When only the key levels differ, this reports the top missing key and
    /// assumes the gap is a single rank; callers must only invoke it when
    /// they know at most one requirement separates the two conditions.
    pub fn single_symbol_difference(self, other: Condition) -> Option<Symbol> {
        if self == other {
            return None;
        }
        if self.switch_state == other.switch_state {
            let top = self.key_level.max(other.key_level);
            return Some(Symbol::Key(top - 1));
        }
        if self.key_level != other.key_level {
            return None;
        }
        match (self.switch_state, other.switch_state) {
            (state, SwitchState::Either) | (SwitchState::Either, state) => state.to_symbol(),
            _ => None,
        }
    }
}

/// A single-symbol requirement as a condition. Switch-state symbols map to
/// the corresponding switch constraint; an ordinary key of rank `n` maps to
/// key level `n + 1`; the room markers carry no requirement.
impl From<Symbol> for Condition {
    fn from(s: Symbol) -> Self {
        match s {
            Symbol::Key(rank) => Condition {
                key_level: rank + 1,
                switch_state: SwitchState::Either,
            },
            Symbol::SwitchOn => Condition::from(SwitchState::On),
            Symbol::SwitchOff => Condition::from(SwitchState::Off),
            Symbol::Start | Symbol::Goal | Symbol::Boss | Symbol::Switch => Condition::new(),
        }
    }
}

impl From<SwitchState> for Condition {
    fn from(switch_state: SwitchState) -> Self {
        Condition {
            key_level: 0,
            switch_state,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if self.key_level > 0 {
            write!(f, "{}", Symbol::Key(self.key_level - 1))?;
            sep = ",";
        }
        if let Some(s) = self.switch_state.to_symbol() {
            write!(f, "{sep}{s}")?;
        }
        Ok(())
    }
}
