use crate::Pos2;

/// Whether a cell is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Status {
    #[default]
    Dead = 0,
    Alive = 1,
}
impl Status {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}
impl From<bool> for Status {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// A single automaton unit
///
/// The position is fixed when the board is built; only the status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Pos2,
    status: Status,
}
impl Cell {
    #[inline]
    pub(crate) fn new(pos: Pos2) -> Self {
        Self {
            pos,
            status: Status::Dead,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos2 {
        self.pos
    }
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    #[inline]
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
