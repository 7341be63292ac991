//! Map coordinates and compass directions.

use std::fmt;

/// A position on the discovered-rooms map.
///
/// North is negative `y`, east is positive `x`. The starting room sits at the
/// origin, so coordinates may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Coord {
    /// The starting room's position.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four directions that carry a map offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up the map.
    North,
    /// Down the map.
    South,
    /// Right on the map.
    East,
    /// Left on the map.
    West,
}

impl Direction {
    /// All directions in compass order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse a full direction name (`"north"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.name() == name)
    }

    /// Parse a one-letter shortcut (`"n"`, `"s"`, `"e"`, `"w"`).
    #[must_use]
    pub fn from_shortcut(shortcut: &str) -> Option<Self> {
        match shortcut {
            "n" => Some(Self::North),
            "s" => Some(Self::South),
            "e" => Some(Self::East),
            "w" => Some(Self::West),
            _ => None,
        }
    }

    /// Full lowercase name as used for exit keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Map offset as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
