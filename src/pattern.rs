//! Seed patterns written in the run-length encoded text format of Life tools.

use crate::{error::PatternError, pos::Pos2};
use regex::Regex;

/// Live cells read from pattern text, relative to the pattern's top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Pos2>,
}

impl Pattern {
    /// Parses RLE text whose cells must all fit an `extent`x`extent` area
    ///
    /// Comment lines (`#...`) and the `x = .., y = ..` header are skipped and
    /// parsing ends at `!`. Anything running past the area is rejected before
    /// it is expanded.
    pub fn parse_rle(text: &str, extent: usize) -> Result<Self, PatternError> {
        let limit = i32::try_from(extent).unwrap_or(i32::MAX);
        let token = Regex::new(r"(\d*)([bo$!])")?;
        let too_large = || PatternError::TooLarge { extent };
        let advance = |from: i32, count: i32| {
            from.checked_add(count)
                .filter(|&to| to <= limit)
                .ok_or_else(too_large)
        };

        let mut cells = Vec::new();
        let mut cursor = Pos2::zero();
        for line in body_lines(text) {
            for (_, [count, tag]) in token.captures_iter(line).map(|c| c.extract()) {
                let count = run_length(count)?;
                match tag {
                    "!" => return Ok(Self::from_cells(cells)),
                    "b" => cursor.x = advance(cursor.x, count)?,
                    "o" => {
                        if cursor.y >= limit {
                            return Err(too_large());
                        }
                        let end = advance(cursor.x, count)?;
                        cells.extend((cursor.x..end).map(|x| Pos2::new(x, cursor.y)));
                        cursor.x = end;
                    }
                    "$" => cursor = Pos2::new(0, advance(cursor.y, count)?),
                    _ => unreachable!("token regex only matches b, o, $ and !"),
                }
            }
        }
        Ok(Self::from_cells(cells))
    }

    fn from_cells(mut cells: Vec<Pos2>) -> Self {
        cells.sort();
        Self { cells }
    }

    /// Live cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Pos2] {
        &self.cells
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lines that carry cell data
fn body_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with('#') && !line.starts_with('x'))
}

fn run_length(digits: &str) -> Result<i32, PatternError> {
    if digits.is_empty() {
        return Ok(1);
    }
    digits
        .parse()
        .map_err(|_| PatternError::RunLength(digits.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    fn glider() -> Vec<Pos2> {
        vec![pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)]
    }

    #[test]
    fn parses_glider_with_comments_and_header() {
        let text = "#N glider\n#C a comment\nx = 3, y = 3, rule = B3/S23\nbo$2bo$\n3o!\nignored o";

        let pattern = Pattern::parse_rle(text, 10).expect("valid pattern");
        assert_eq!(pattern.cells(), glider().as_slice());
    }

    #[test]
    fn blank_rows_are_skipped() {
        let pattern = Pattern::parse_rle("o2$o!", 3).expect("valid pattern");

        assert_eq!(pattern.cells(), &[pos(0, 0), pos(0, 2)]);
    }

    #[test]
    fn missing_terminator_is_accepted() {
        let pattern = Pattern::parse_rle("2o$2o", 2).expect("valid pattern");

        assert_eq!(pattern.cells(), &[pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1)]);
    }

    #[test]
    fn empty_pattern() {
        assert!(Pattern::parse_rle("!", 1).expect("valid pattern").is_empty());
        assert!(Pattern::parse_rle("", 1).expect("valid pattern").is_empty());
    }

    #[test]
    fn unparsable_run_is_an_error() {
        let result = Pattern::parse_rle("99999999999o!", 10);

        assert!(matches!(result, Err(PatternError::RunLength(run)) if run == "99999999999"));
    }

    #[test]
    fn runs_past_the_area_are_rejected() {
        for text in ["2147483647bo!", "2000000000o!", "4o!", "3b2o!", "o2147483647$o!", "o$o$o$o!"] {
            let result = Pattern::parse_rle(text, 3);
            assert!(
                matches!(result, Err(PatternError::TooLarge { extent: 3 })),
                "{text} gave {result:?}"
            );
        }
    }

    #[test]
    fn pattern_filling_the_area_fits() {
        let pattern = Pattern::parse_rle("3o$3o$3o$!", 3).expect("valid pattern");

        assert_eq!(pattern.cells().len(), 9);
    }
}
