//! Unit tests for ks-grid.
//!
//! All tests use hand-crafted maps so they run without any map file.

#[cfg(test)]
mod builder {
    use ks_core::{Direction, Location};
    use crate::{GridError, GridMapBuilder};

    #[test]
    fn empty_build() {
        let grid = GridMapBuilder::new(0, 0).build();
        assert!(grid.is_empty());
        assert_eq!(grid.passable_count(), 0);
    }

    #[test]
    fn open_grid_is_fully_passable() {
        let grid = GridMapBuilder::new(2, 3).build();
        assert_eq!(grid.passable_count(), 6);
        assert!(grid.is_passable(Location::new(1, 2)));
        assert!(!grid.is_passable(Location::new(2, 0)));
        assert!(!grid.is_passable(Location::new(0, -1)));
    }

    #[test]
    fn passable_locations_sorted() {
        let grid = GridMapBuilder::new(3, 3)
            .obstacle(Location::new(1, 1))
            .unwrap()
            .build();
        let locs = grid.passable_locations();
        assert_eq!(locs.len(), 8);
        assert!(locs.windows(2).all(|w| w[0] < w[1]));
        assert!(!locs.contains(&Location::new(1, 1)));
    }

    #[test]
    fn neighbors_skip_obstacles_and_edges() {
        let grid = GridMapBuilder::new(3, 3)
            .obstacle(Location::new(0, 1))
            .unwrap()
            .build();
        let n: Vec<_> = grid.neighbors(Location::new(0, 0)).collect();
        assert_eq!(n, vec![Location::new(1, 0)]);
        assert_eq!(grid.neighbor(Location::new(1, 1), Direction::North), None);
        assert_eq!(
            grid.neighbor(Location::new(1, 1), Direction::East),
            Some(Location::new(1, 2))
        );
    }

    #[test]
    fn obstacle_out_of_bounds() {
        let mut b = GridMapBuilder::new(2, 2);
        let err = b.add_obstacle(Location::new(5, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds(l) if l == Location::new(5, 0)));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Write;

    use ks_core::Location;
    use crate::{GridError, load_map, parse_map};

    const MAP: &str = "\
// test floor
.....
..@..

..#..
";

    #[test]
    fn parses_rows_and_obstacles() {
        let grid = parse_map(MAP).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert!(!grid.is_passable(Location::new(1, 2)));
        assert!(!grid.is_passable(Location::new(2, 2)));
        assert!(grid.is_passable(Location::new(2, 4)));
        assert_eq!(grid.passable_count(), 13);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = parse_map("...\n..\n").unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn unknown_character_rejected() {
        let err = parse_map("..x\n").unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 1, .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAP.as_bytes()).unwrap();
        let grid = load_map(file.path()).unwrap();
        assert_eq!(grid.passable_count(), 13);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_map(std::path::Path::new("/definitely/not/here.map")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
