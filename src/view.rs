use crate::{Board, Pos2, Status};
use std::fmt;

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '·';

/// A rectangular, read-only text rendering of part of a [`Board`]
///
/// Only the simulated area is ever rendered; the frame of a bordered board
/// is left out.
pub struct BoardView<'a> {
    tl: Pos2,
    br: Pos2,
    board: &'a Board,
}
impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        let bounds = board.simulated_bounds();
        Self {
            tl: Pos2::new(bounds.start, bounds.start),
            br: Pos2::new(bounds.end, bounds.end),
            board,
        }
    }

    /// Narrows the view to `[top_left, bottom_right)`, intersected with the
    /// simulated area
    pub fn window(mut self, top_left: Pos2, bottom_right: Pos2) -> Self {
        self.tl = Pos2::new(self.tl.x.max(top_left.x), self.tl.y.max(top_left.y));
        self.br = Pos2::new(
            self.br.x.min(bottom_right.x).max(self.tl.x),
            self.br.y.min(bottom_right.y).max(self.tl.y),
        );
        self
    }

    /// Statuses of one row of the view, left to right
    pub fn row(&self, y: i32) -> impl Iterator<Item = Status> + '_ {
        (self.tl.x..self.br.x).map(move |x| {
            self.board
                .status(Pos2::new(x, y))
                .unwrap_or(Status::Dead)
        })
    }

    #[inline]
    pub fn rows(&self) -> std::ops::Range<i32> {
        self.tl.y..self.br.y
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, y) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for status in self.row(y) {
                let glyph = match status {
                    Status::Alive => ALIVE_GLYPH,
                    Status::Dead => DEAD_GLYPH,
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
