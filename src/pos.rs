use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

/// A column/row coordinate on the board, `x` being the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
    #[inline]
    pub const fn one() -> Self {
        Self::new(1, 1)
    }

    /// Component-wise sum, or `None` if either axis overflows
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Whether both axes fall in `[lo, hi)`
    #[inline]
    pub fn within(self, lo: i32, hi: i32) -> bool {
        (lo..hi).contains(&self.x) && (lo..hi).contains(&self.y)
    }

    /// Row-major index of this position in a `size`-wide grid
    ///
    /// The position must already be inside the grid.
    #[inline]
    pub(crate) fn to_index(self, size: i32) -> usize {
        debug_assert!(self.within(0, size), "{self} is outside a {size}-wide grid");
        (self.y * size + self.x) as usize
    }
    #[inline]
    pub(crate) fn from_index(index: usize, size: i32) -> Self {
        let index = index as i32;
        Self::new(index % size, index / size)
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl fmt::Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row first, so sorted positions follow the storage order of the board
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
