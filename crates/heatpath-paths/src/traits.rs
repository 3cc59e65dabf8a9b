use heatpath_core::{Cost, CostGrid, Point, Range};

/// Read-only source of per-cell entry costs consumed by the searches.
pub trait CostMap {
    /// Rectangle outside of which no cell exists.
    fn bounds(&self) -> Range;

    /// Cost of entering `p`, or `None` when `p` is out of bounds.
    fn cost_at(&self, p: Point) -> Option<Cost>;

    /// Whether `p` is a cell of the map.
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}

impl CostMap for CostGrid {
    #[inline]
    fn bounds(&self) -> Range {
        CostGrid::bounds(self)
    }

    #[inline]
    fn cost_at(&self, p: Point) -> Option<Cost> {
        CostGrid::cost_at(self, p)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        CostGrid::in_bounds(self, p)
    }
}

impl<M: CostMap + ?Sized> CostMap for &M {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn cost_at(&self, p: Point) -> Option<Cost> {
        (**self).cost_at(p)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        (**self).in_bounds(p)
    }
}
