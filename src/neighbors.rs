use crate::{Cell, Pos2, error::ConfigError};
use std::{fmt, str::FromStr};

/// Offsets of the 8 cells surrounding a position
pub const NEIGHBOR_OFFSETS: [Pos2; 8] = [
    Pos2::new(-1, -1),
    Pos2::new(0, -1),
    Pos2::new(1, -1),
    Pos2::new(-1, 0),
    Pos2::new(1, 0),
    Pos2::new(-1, 1),
    Pos2::new(0, 1),
    Pos2::new(1, 1),
];

/// How the board treats its outer edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderPolicy {
    /// A one-cell frame of permanently dead cells surrounds the simulated area,
    /// so every simulated cell has exactly 8 neighbors.
    #[default]
    Bordered,
    /// Every cell is simulated and edge cells simply have fewer neighbors.
    Clamped,
}
impl BorderPolicy {
    /// Width of the unsimulated frame around the board
    #[inline]
    pub fn frame_width(self) -> i32 {
        match self {
            Self::Bordered => 1,
            Self::Clamped => 0,
        }
    }

    /// Smallest grid edge that still leaves a simulated cell
    #[inline]
    pub fn min_grid_size(self) -> usize {
        1 + 2 * self.frame_width() as usize
    }
}
impl fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bordered => "bordered",
            Self::Clamped => "clamped",
        })
    }
}
impl FromStr for BorderPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bordered" => Ok(Self::Bordered),
            "clamped" => Ok(Self::Clamped),
            other => Err(ConfigError::UnknownPolicy(other.to_owned())),
        }
    }
}

/// The surrounding positions of `pos` that fall inside a `size`-wide grid
///
/// Corners have 3, non-corner edges 5 and everything else 8.
pub fn clamped_neighbors(pos: Pos2, size: i32) -> impl Iterator<Item = Pos2> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |offset| pos + offset)
        .filter(move |neighbor| neighbor.within(0, size))
}

/// Resolves which cells neighbor which, addressed by grid index
#[derive(Debug, Clone)]
pub enum NeighborResolver {
    /// Indices of the 8 neighbors of every interior cell, linked once at
    /// construction. Frame cells have no links.
    Bordered {
        size: i32,
        links: Vec<Option<[usize; 8]>>,
    },
    /// Neighbors are derived from the position on every query.
    Clamped { size: i32 },
}
impl NeighborResolver {
    pub fn new(policy: BorderPolicy, size: i32) -> Self {
        match policy {
            BorderPolicy::Clamped => Self::Clamped { size },
            BorderPolicy::Bordered => {
                let links = (0..(size * size) as usize)
                    .map(|index| {
                        let pos = Pos2::from_index(index, size);
                        if !pos.within(1, size - 1) {
                            return None;
                        }
                        Some(NEIGHBOR_OFFSETS.map(|offset| (pos + offset).to_index(size)))
                    })
                    .collect();
                Self::Bordered { size, links }
            }
        }
    }

    #[inline]
    fn size(&self) -> i32 {
        match self {
            Self::Bordered { size, .. } | Self::Clamped { size } => *size,
        }
    }

    /// Positions neighboring `pos`; empty for positions off the grid or on a frame
    pub fn neighbors(&self, pos: Pos2) -> Vec<Pos2> {
        let size = self.size();
        if !pos.within(0, size) {
            return Vec::new();
        }
        match self {
            Self::Bordered { links, .. } => links[pos.to_index(size)]
                .map(|linked| linked.map(|index| Pos2::from_index(index, size)).to_vec())
                .unwrap_or_default(),
            Self::Clamped { size } => clamped_neighbors(pos, *size).collect(),
        }
    }

    /// Counts the living neighbors of the in-grid position `pos`
    pub(crate) fn living_neighbors(&self, pos: Pos2, cells: &[Cell]) -> u8 {
        let count = match self {
            Self::Bordered { size, links } => links[pos.to_index(*size)]
                .map(|linked| linked.iter().filter(|&&index| cells[index].is_alive()).count())
                .unwrap_or(0),
            Self::Clamped { size } => clamped_neighbors(pos, *size)
                .filter(|neighbor| cells[neighbor.to_index(*size)].is_alive())
                .count(),
        };
        count as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_corner_and_edge_counts() {
        let resolver = NeighborResolver::new(BorderPolicy::Clamped, 10);

        assert_eq!(resolver.neighbors(Pos2::new(0, 0)).len(), 3);
        assert_eq!(resolver.neighbors(Pos2::new(9, 9)).len(), 3);
        assert_eq!(resolver.neighbors(Pos2::new(0, 9)).len(), 3);
        assert_eq!(resolver.neighbors(Pos2::new(4, 0)).len(), 5);
        assert_eq!(resolver.neighbors(Pos2::new(9, 5)).len(), 5);
        assert_eq!(resolver.neighbors(Pos2::new(4, 4)).len(), 8);
    }

    #[test]
    fn clamped_corner_neighbors_are_adjacent() {
        let mut neighbors = clamped_neighbors(Pos2::zero(), 10).collect::<Vec<_>>();
        neighbors.sort();

        assert_eq!(neighbors, vec![Pos2::new(1, 0), Pos2::new(0, 1), Pos2::new(1, 1)]);
    }

    #[test]
    fn bordered_interior_has_eight_neighbors() {
        let size = 6;
        let resolver = NeighborResolver::new(BorderPolicy::Bordered, size);

        for y in 0..size {
            for x in 0..size {
                let pos = Pos2::new(x, y);
                let expected = if pos.within(1, size - 1) { 8 } else { 0 };
                assert_eq!(resolver.neighbors(pos).len(), expected, "at {pos}");
            }
        }
    }

    #[test]
    fn bordered_links_match_offsets() {
        let resolver = NeighborResolver::new(BorderPolicy::Bordered, 5);
        let pos = Pos2::new(1, 1);

        let linked = resolver.neighbors(pos);
        let expected = NEIGHBOR_OFFSETS.map(|offset| pos + offset).to_vec();
        assert_eq!(linked, expected);
    }

    #[test]
    fn off_grid_has_no_neighbors() {
        let resolver = NeighborResolver::new(BorderPolicy::Clamped, 4);

        assert!(resolver.neighbors(Pos2::new(-1, 0)).is_empty());
        assert!(resolver.neighbors(Pos2::new(4, 4)).is_empty());
    }

    #[test]
    fn policy_parses() {
        assert_eq!("bordered".parse::<BorderPolicy>(), Ok(BorderPolicy::Bordered));
        assert_eq!("clamped".parse::<BorderPolicy>(), Ok(BorderPolicy::Clamped));
        assert_eq!(
            "wrapped".parse::<BorderPolicy>(),
            Err(ConfigError::UnknownPolicy("wrapped".to_owned()))
        );
    }
}
