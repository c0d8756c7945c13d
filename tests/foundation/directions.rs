//! Integration tests for Direction

use architect_foundation::Direction;

#[test]
fn opposite_is_an_involution() {
    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
        assert_ne!(direction.opposite(), direction);
    }
}

#[test]
fn symbols_round_trip() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_symbol(direction.symbol()), Some(direction));
        assert_eq!(Direction::from_word(direction.name()), Some(direction));
    }
}

#[test]
fn link_slots_are_distinct() {
    let mut slots: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
    slots.sort_unstable();
    assert_eq!(slots, vec![0, 1, 2, 3]);
}

#[test]
fn words_are_case_insensitive() {
    assert_eq!(Direction::from_word("NORTH"), Some(Direction::North));
    assert_eq!(Direction::from_word("W"), Some(Direction::West));
    assert_eq!(Direction::from_word("up"), None);
}
