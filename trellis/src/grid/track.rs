//! Track descriptors — one logical row or column slot.
//!
//! Tracks are built transiently into caller-provided buffers during a
//! flattening pass, and stored by the grid model as its authoritative
//! row/column arrays. A track either references the box that defines it or
//! is "bogus": a plain box (or a generated extra column) occupying a single
//! unstructured slot.

use crate::geometry::{Extent, UNBOUNDED};
use crate::tree::BoxId;

/// One logical row or column slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    item: Option<BoxId>,
    bogus: bool,
    pref: Extent,
    min: Extent,
    max: Extent,
}

impl Track {
    /// Create a track referencing `item`.
    pub fn new(item: Option<BoxId>, bogus: bool) -> Self {
        Self {
            item,
            bogus,
            pref: 0.0,
            min: 0.0,
            max: UNBOUNDED,
        }
    }

    /// Re-initialize this slot in place during a building pass.
    ///
    /// Extents are left untouched; they belong to the host's solving pass,
    /// not to structure discovery.
    #[inline]
    pub fn init(&mut self, item: BoxId, bogus: bool) {
        self.item = Some(item);
        self.bogus = bogus;
    }

    /// The box that defines this track, if any.
    #[inline]
    pub fn item(&self) -> Option<BoxId> {
        self.item
    }

    /// Whether this is a generated/bogus slot rather than a structured one.
    #[inline]
    pub fn is_bogus(&self) -> bool {
        self.bogus
    }

    /// Set the solved extents for this track. Host entry point.
    pub fn set_extents(&mut self, pref: Extent, min: Extent, max: Extent) {
        self.pref = pref;
        self.min = min;
        self.max = max;
    }

    /// Preferred extent.
    #[inline]
    pub fn pref(&self) -> Extent {
        self.pref
    }

    /// Minimum extent.
    #[inline]
    pub fn min(&self) -> Extent {
        self.min
    }

    /// Maximum extent.
    #[inline]
    pub fn max(&self) -> Extent {
        self.max
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new(None, true)
    }
}

/// Running totals for a counting pass.
///
/// `tracks` is the number of logical slots a part contributes.
/// `computed_columns` is the widest perpendicular span any leaf row has
/// reported so far; when it exceeds the number of built columns, the grid
/// appends extra columns at the tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackCounts {
    pub tracks: usize,
    pub computed_columns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_track_is_empty_bogus() {
        let track = Track::default();
        assert_eq!(track.item(), None);
        assert!(track.is_bogus());
        assert_eq!(track.pref(), 0.0);
        assert_eq!(track.min(), 0.0);
        assert_eq!(track.max(), UNBOUNDED);
    }

    #[test]
    fn test_init_preserves_extents() {
        let mut track = Track::default();
        track.set_extents(12.0, 4.0, 40.0);
        track.init(BoxId::from_raw(3), false);
        assert_eq!(track.item(), Some(BoxId::from_raw(3)));
        assert!(!track.is_bogus());
        assert_eq!(track.pref(), 12.0);
        assert_eq!(track.min(), 4.0);
        assert_eq!(track.max(), 40.0);
    }
}
