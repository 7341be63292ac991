//! Discovered-rooms map.
//!
//! Lays discovered rooms out on a grid by their stored coordinates. The
//! terminal UI colours each [`MapGrid`] cell; [`render_map`] gives the same
//! grid as plain text.
//!
//! ```text
//! . X
//! @ .
//!   .
//! ```

use thiserror::Error;

use crate::game::{Coord, GameState};

/// Legend for the map glyphs.
pub const LEGEND: [&str; 3] = ["@ = you", ". = discovered room", "X = blocked"];

/// What a map cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    /// The room the player stands in.
    Current,
    /// A discovered room the player can enter.
    Open,
    /// A discovered room whose requirements the player does not meet.
    Blocked,
}

impl MapCell {
    /// Glyph drawn for this cell.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Current => '@',
            Self::Open => '.',
            Self::Blocked => 'X',
        }
    }
}

/// Why there is no map to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// The player has not seen any room yet.
    #[error("No rooms discovered yet.")]
    NothingDiscovered,
    /// Rooms were discovered but none has a coordinate.
    #[error("Map data missing.")]
    NoPositions,
}

/// A rectangular grid covering every placed, discovered room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    /// Coordinate of the top-left cell.
    origin: Coord,
    /// Columns.
    width: usize,
    /// Rows.
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Option<MapCell>>,
}

impl MapGrid {
    /// Build the grid for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been discovered or no discovered room
    /// has a coordinate.
    pub fn from_state(state: &GameState) -> Result<Self, MapError> {
        let player = state.player();
        if player.discovered_count() == 0 {
            return Err(MapError::NothingDiscovered);
        }

        let placed: Vec<(&str, Coord)> = player
            .discovered()
            .filter_map(|id| player.position_of(id).map(|coord| (id, coord)))
            .collect();
        if placed.is_empty() {
            return Err(MapError::NoPositions);
        }

        let min_x = placed.iter().map(|(_, c)| c.x).min().unwrap_or(0);
        let max_x = placed.iter().map(|(_, c)| c.x).max().unwrap_or(0);
        let min_y = placed.iter().map(|(_, c)| c.y).min().unwrap_or(0);
        let max_y = placed.iter().map(|(_, c)| c.y).max().unwrap_or(0);

        let width = span(min_x, max_x);
        let height = span(min_y, max_y);
        let mut grid = Self {
            origin: Coord::new(min_x, min_y),
            width,
            height,
            cells: vec![None; width * height],
        };

        for (id, coord) in placed {
            let cell = if id == state.current_room_id() {
                MapCell::Current
            } else if is_blocked(state, id) {
                MapCell::Blocked
            } else {
                MapCell::Open
            };
            // Inconsistent geometry can stack two rooms on one cell; the
            // player's own marker wins.
            if let Some(slot) = grid.index(coord).and_then(|i| grid.cells.get_mut(i))
                && *slot != Some(MapCell::Current)
            {
                *slot = Some(cell);
            }
        }

        Ok(grid)
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Map coordinate of the top-left cell.
    #[must_use]
    pub const fn origin(&self) -> Coord {
        self.origin
    }

    /// Cell at grid column `col`, row `row`.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<MapCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<MapCell>> + '_ {
        (0..self.width).map(move |col| self.get(col, row))
    }

    /// Plain-text rows, cells separated by a space.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                let glyphs: Vec<String> = self
                    .row(row)
                    .map(|cell| cell.map_or(' ', MapCell::glyph).to_string())
                    .collect();
                glyphs.join(" ").trim_end().to_string()
            })
            .collect()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let col = usize::try_from(i64::from(coord.x) - i64::from(self.origin.x)).ok()?;
        let row = usize::try_from(i64::from(coord.y) - i64::from(self.origin.y)).ok()?;
        (col < self.width && row < self.height).then_some(row * self.width + col)
    }
}

/// Render the map as text lines, or a one-line explanation if there is none.
#[must_use]
pub fn render_map(state: &GameState) -> Vec<String> {
    match MapGrid::from_state(state) {
        Ok(grid) => grid.to_lines(),
        Err(e) => vec![e.to_string()],
    }
}

/// A room is blocked if its requirements are not met by what the player holds.
///
/// Rooms whose requirements are already met draw as open, not as `X`.
fn is_blocked(state: &GameState, room_id: &str) -> bool {
    state
        .rooms()
        .get(room_id)
        .and_then(|room| room.first_unmet_requirement(state.player()))
        .is_some()
}

fn span(min: i32, max: i32) -> usize {
    usize::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(1)
}
