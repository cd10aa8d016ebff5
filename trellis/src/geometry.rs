//! Sizing primitives for the grid core.
//!
//! Extents are scalar `f32` logical units. `UNBOUNDED` marks an
//! unconstrained/intrinsic extent; folding any finite contribution into an
//! unbounded accumulator leaves it unbounded, so a dimension that cannot be
//! constrained is never shrunk back to a finite value by aggregation.

/// A scalar extent along one axis, in logical units.
pub type Extent = f32;

/// Sentinel for an unconstrained/intrinsic extent.
pub const UNBOUNDED: Extent = f32::INFINITY;

/// A two-dimensional size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: Extent,
    pub height: Extent,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// A fully unconstrained size.
    pub const UNBOUNDED: Self = Self { width: UNBOUNDED, height: UNBOUNDED };

    /// Create a new size.
    #[inline]
    pub fn new(width: Extent, height: Extent) -> Self {
        Self { width, height }
    }

    /// The extent on the given axis (`is_row` selects width).
    #[inline]
    pub fn extent(&self, is_row: bool) -> Extent {
        if is_row { self.width } else { self.height }
    }

    /// Mutable access to the extent on the given axis.
    #[inline]
    pub fn extent_mut(&mut self, is_row: bool) -> &mut Extent {
        if is_row { &mut self.width } else { &mut self.height }
    }
}

/// Fold a contributed extent into an accumulator for one dimension.
///
/// Unconstrained dominates: if either operand is `UNBOUNDED` the result is
/// `UNBOUNDED`; otherwise the contribution is added.
#[inline]
pub fn add_extent(acc: Extent, contribution: Extent) -> Extent {
    if acc == UNBOUNDED || contribution == UNBOUNDED {
        UNBOUNDED
    } else {
        acc + contribution
    }
}

/// Fold a contributed extent into the `is_row` component of a size.
#[inline]
pub fn add_to_axis(size: &mut Size, contribution: Extent, is_row: bool) {
    let slot = size.extent_mut(is_row);
    *slot = add_extent(*slot, contribution);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_extent_finite() {
        assert_eq!(add_extent(10.0, 15.0), 25.0);
        assert_eq!(add_extent(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_add_extent_unbounded_dominates() {
        assert_eq!(add_extent(UNBOUNDED, 15.0), UNBOUNDED);
        assert_eq!(add_extent(10.0, UNBOUNDED), UNBOUNDED);
        assert_eq!(add_extent(UNBOUNDED, UNBOUNDED), UNBOUNDED);
    }

    #[test]
    fn test_axis_selection() {
        let mut size = Size::new(100.0, 40.0);
        add_to_axis(&mut size, 25.0, true);
        assert_eq!(size, Size::new(125.0, 40.0));
        add_to_axis(&mut size, 5.0, false);
        assert_eq!(size, Size::new(125.0, 45.0));
    }

    #[test]
    fn test_extent_mut_targets_one_axis() {
        let mut size = Size::ZERO;
        *size.extent_mut(false) = 7.0;
        assert_eq!(size.extent(false), 7.0);
        assert_eq!(size.extent(true), 0.0);
    }
}
