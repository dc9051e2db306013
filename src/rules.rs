use crate::Status;
use std::sync::OnceLock;

/// The most neighbors any cell can have
pub const MAX_NEIGHBORS: usize = 8;

/// Next status, indexed by `[current status][living neighbors]`
type RuleTable = [[Status; MAX_NEIGHBORS + 1]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// A live cell survives with 2 or 3 living neighbors, a dead cell is born
/// with exactly 3. Everything else ends up dead.
fn generate_rule_table() -> RuleTable {
    let mut table = [[Status::Dead; MAX_NEIGHBORS + 1]; 2];
    for current in [Status::Dead, Status::Alive] {
        for (living, next) in table[current as usize].iter_mut().enumerate() {
            *next = match (current, living) {
                (Status::Alive, 2 | 3) | (Status::Dead, 3) => Status::Alive,
                _ => Status::Dead,
            };
        }
    }
    table
}

/// Computes a cell's next status from its current one and its living-neighbor count
///
/// Counts above [`MAX_NEIGHBORS`] can't occur on a board but are treated as
/// overcrowding.
#[inline]
pub fn next_status(current: Status, living: u8) -> Status {
    rule_table()[current as usize]
        .get(living as usize)
        .copied()
        .unwrap_or(Status::Dead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(next_status(Status::Alive, 2), Status::Alive);
        assert_eq!(next_status(Status::Alive, 3), Status::Alive);
        assert_eq!(next_status(Status::Dead, 3), Status::Alive);

        assert_eq!(next_status(Status::Alive, 0), Status::Dead);
        assert_eq!(next_status(Status::Alive, 1), Status::Dead);
        assert_eq!(next_status(Status::Alive, 4), Status::Dead);
        assert_eq!(next_status(Status::Dead, 2), Status::Dead);
        assert_eq!(next_status(Status::Dead, 4), Status::Dead);
    }

    #[test]
    fn table_is_generated_once() {
        assert!(std::ptr::eq(rule_table(), rule_table()));
    }

    proptest! {
        #[test]
        fn alive_survives_only_with_two_or_three(living in 0u8..=255) {
            let expected = if living == 2 || living == 3 { Status::Alive } else { Status::Dead };
            prop_assert_eq!(next_status(Status::Alive, living), expected);
        }

        #[test]
        fn dead_is_born_only_with_three(living in 0u8..=255) {
            let expected = if living == 3 { Status::Alive } else { Status::Dead };
            prop_assert_eq!(next_status(Status::Dead, living), expected);
        }
    }
}
