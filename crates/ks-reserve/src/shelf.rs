//! Shelf placement registry.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use ks_core::{Location, ShelfId};

use crate::{ReserveError, ReserveResult};

/// Bidirectional shelf ↔ location mapping.
///
/// At most one shelf per location and one location per shelf.  A shelf that
/// is being carried has no entry.  Mutated only by matched remove/add pairs
/// at ATTACH/DETACH boundaries; the registry outlives planning rounds.
#[derive(Clone, Debug, Default)]
pub struct ShelfRegistry {
    by_loc:   BTreeMap<Location, ShelfId>,
    by_shelf: FxHashMap<ShelfId, Location>,
}

impl ShelfRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `shelf` as standing on `loc`.
    ///
    /// # Errors
    ///
    /// `ShelfConflict` if `loc` already holds a shelf, `ShelfAlreadyPlaced`
    /// if `shelf` already stands somewhere.
    pub fn add_mapping(&mut self, shelf: ShelfId, loc: Location) -> ReserveResult<()> {
        if let Some(&occupant) = self.by_loc.get(&loc) {
            return Err(ReserveError::ShelfConflict { shelf, loc, occupant });
        }
        if let Some(&at) = self.by_shelf.get(&shelf) {
            return Err(ReserveError::ShelfAlreadyPlaced { shelf, at });
        }
        self.by_loc.insert(loc, shelf);
        self.by_shelf.insert(shelf, loc);
        Ok(())
    }

    /// Unregister `shelf` from `loc`.
    ///
    /// # Errors
    ///
    /// `ShelfMismatch` unless `loc` currently holds exactly `shelf`.
    pub fn remove_mapping(&mut self, shelf: ShelfId, loc: Location) -> ReserveResult<()> {
        match self.by_loc.get(&loc) {
            Some(&found) if found == shelf => {
                self.by_loc.remove(&loc);
                self.by_shelf.remove(&shelf);
                Ok(())
            }
            found => Err(ReserveError::ShelfMismatch { shelf, loc, found: found.copied() }),
        }
    }

    #[inline]
    pub fn has_shelf(&self, loc: Location) -> bool {
        self.by_loc.contains_key(&loc)
    }

    pub fn shelf_at(&self, loc: Location) -> Option<ShelfId> {
        self.by_loc.get(&loc).copied()
    }

    pub fn location_of(&self, shelf: ShelfId) -> Option<Location> {
        self.by_shelf.get(&shelf).copied()
    }

    pub fn len(&self) -> usize {
        self.by_loc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_loc.is_empty()
    }

    /// Placed shelves in ascending location order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, ShelfId)> + '_ {
        self.by_loc.iter().map(|(l, s)| (*l, *s))
    }
}
