//! Cardinal directions.
//!
//! Room links are stored in a fixed four-slot array ordered
//! west, south, north, east.

use std::fmt;

/// One of the four directions a room can link in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Link slot 0.
    West,
    /// Link slot 1.
    South,
    /// Link slot 2.
    North,
    /// Link slot 3.
    East,
}

impl Direction {
    /// All directions in link-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::East,
    ];

    /// Returns the link-slot index of this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::West => 0,
            Self::South => 1,
            Self::North => 2,
            Self::East => 3,
        }
    }

    /// Returns the geometrically opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::South => Self::North,
            Self::North => Self::South,
            Self::East => Self::West,
        }
    }

    /// Parses a single direction letter (`w`, `s`, `n`, `e`), ignoring case.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'w' => Some(Self::West),
            's' => Some(Self::South),
            'n' => Some(Self::North),
            'e' => Some(Self::East),
            _ => None,
        }
    }

    /// Returns the single-letter form used in link instructions.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::West => 'w',
            Self::South => 's',
            Self::North => 'n',
            Self::East => 'e',
        }
    }

    /// Parses a movement word: a single letter or the full cardinal name.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "w" | "west" => Some(Self::West),
            "s" | "south" => Some(Self::South),
            "n" | "north" => Some(Self::North),
            "e" | "east" => Some(Self::East),
            _ => None,
        }
    }

    /// Returns the lowercase cardinal name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::West => "west",
            Self::South => "south",
            Self::North => "north",
            Self::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
