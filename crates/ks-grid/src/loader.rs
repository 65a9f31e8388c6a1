//! Text map loader.
//!
//! # Format
//!
//! One line per grid row (row 0 first), one character per column:
//!
//! ```text
//! // 3 × 5 floor with a pillar
//! .....
//! ..@..
//! .....
//! ```
//!
//! | Char      | Meaning  |
//! |-----------|----------|
//! | `.`       | passable |
//! | `@`, `#`  | obstacle |
//!
//! Blank lines and lines starting with `//` are skipped.  All rows must have
//! the same width.

use std::path::Path;

use ks_core::Location;

use crate::{GridError, GridMap, GridMapBuilder, GridResult};

/// Load a [`GridMap`] from a text file.
pub fn load_map(path: &Path) -> GridResult<GridMap> {
    let text = std::fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse a [`GridMap`] from map text.
pub fn parse_map(text: &str) -> GridResult<GridMap> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end()))
        .filter(|(_, l)| !l.is_empty() && !l.trim_start().starts_with("//"))
        .collect();

    let width = rows.first().map_or(0, |(_, l)| l.chars().count());

    let mut obstacles = Vec::new();
    for (x, (line_no, line)) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(GridError::Parse {
                line: *line_no,
                msg:  format!("expected {width} columns, found {}", line.chars().count()),
            });
        }
        for (y, c) in line.chars().enumerate() {
            match c {
                '.' => {}
                '@' | '#' => obstacles.push(Location::new(x as i32, y as i32)),
                other => {
                    return Err(GridError::Parse {
                        line: *line_no,
                        msg:  format!("unexpected cell character {other:?}"),
                    });
                }
            }
        }
    }

    let mut builder = GridMapBuilder::new(rows.len() as u32, width as u32);
    for loc in obstacles {
        builder.add_obstacle(loc)?;
    }
    Ok(builder.build())
}
