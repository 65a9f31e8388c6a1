//! CSV mission loader.
//!
//! # CSV format
//!
//! One row per WMS mission.  Coordinates are `(row, column)` grid cells.
//!
//! ```csv
//! mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y
//! 0,17,2,3,0,9
//! 1,18,4,3,0,8
//! ```
//!
//! Row order is preserved in the returned `Vec`; upstream assignment decides
//! which robot gets which mission.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ks_core::{Location, MissionId, ShelfId};

use crate::{MissionError, WmsMission};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MissionRecord {
    mission_id: u32,
    shelf_id:   u32,
    pick_x:     i32,
    pick_y:     i32,
    drop_x:     i32,
    drop_y:     i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load WMS missions from a CSV file.
pub fn load_missions_csv(path: &Path) -> Result<Vec<WmsMission>, MissionError> {
    let file = std::fs::File::open(path).map_err(MissionError::Io)?;
    load_missions_reader(file)
}

/// Like [`load_missions_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for missions embedded
/// in an application binary.
pub fn load_missions_reader<R: Read>(reader: R) -> Result<Vec<WmsMission>, MissionError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut missions = Vec::new();

    for result in csv_reader.deserialize::<MissionRecord>() {
        let row = result.map_err(|e| MissionError::Parse(e.to_string()))?;
        let pick_from = Location::new(row.pick_x, row.pick_y);
        let drop_to = Location::new(row.drop_x, row.drop_y);
        if pick_from == drop_to {
            return Err(MissionError::Parse(format!(
                "mission {} picks and drops at the same cell {pick_from}",
                row.mission_id
            )));
        }
        missions.push(WmsMission {
            id:       MissionId(row.mission_id),
            shelf_id: ShelfId(row.shelf_id),
            pick_from,
            drop_to,
        });
    }

    Ok(missions)
}
