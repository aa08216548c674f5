//! Property tests for the precondition algebra.

use kl_core::{Condition, SwitchState, Symbol};
use proptest::prelude::*;

fn switch_state() -> impl Strategy<Value = SwitchState> {
    prop_oneof![
        Just(SwitchState::Either),
        Just(SwitchState::Off),
        Just(SwitchState::On),
    ]
}

fn condition() -> impl Strategy<Value = Condition> {
    (0u32..8, switch_state())
        .prop_map(|(key_level, state)| {
            let mut c = Condition::from(state);
            if key_level > 0 {
                c = c.and(Symbol::Key(key_level - 1));
            }
            c
        })
}

fn requirement_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        (0u32..8).prop_map(Symbol::Key),
        Just(Symbol::SwitchOn),
        Just(Symbol::SwitchOff),
    ]
}

/// Conjoining ON with OFF is outside the algebra's contract; properties over
/// `and` must not generate such pairs.
fn contradicts(c: Condition, s: Symbol) -> bool {
    match s {
        Symbol::SwitchOn => c.switch_state() == SwitchState::Off,
        Symbol::SwitchOff => c.switch_state() == SwitchState::On,
        _ => false,
    }
}

proptest! {
    #[test]
    fn implication_is_reflexive(x in condition()) {
        prop_assert!(x.implies(x));
    }

    #[test]
    fn implication_is_antisymmetric(x in condition(), y in condition()) {
        if x.implies(y) && y.implies(x) {
            prop_assert_eq!(x, y);
        }
    }

    #[test]
    fn implication_is_transitive(
        x in condition(),
        y in condition(),
        z in condition(),
    ) {
        if x.implies(y) && y.implies(z) {
            prop_assert!(x.implies(z));
        }
    }

    #[test]
    fn conjunction_is_monotonic(x in condition(), s in requirement_symbol()) {
        prop_assume!(!contradicts(x, s));
        let conjoined = x.and(s);
        prop_assert!(conjoined.implies(x));
        prop_assert!(conjoined.implies_symbol(s));
    }

    #[test]
    fn conjunction_is_idempotent(x in condition()) {
        prop_assert_eq!(x.and(x), x);
    }

    #[test]
    fn top_key_is_the_single_symbol_difference(
        base in condition(),
        extra in 0u32..8,
    ) {
        // Add a key strictly above everything the base requires.
        let rank = base.key_level() + extra;
        let s = Symbol::Key(rank);
        let extended = base.and(s);
        prop_assert_eq!(extended.single_symbol_difference(base), Some(s));
    }

    #[test]
    fn equal_conditions_have_no_difference(x in condition()) {
        prop_assert_eq!(x.single_symbol_difference(x), None);
    }
}
