use crate::cell_size::CellGeometry;
use crate::config::Viewport;
use crate::core::Rect;

/// Vertical-wrap placement of uniform cells.
///
/// Cells fill a column top to bottom, then wrap into the next column to the
/// right. The number of rows per column is how many cells fit in the viewport
/// height; without a viewport everything goes in a single column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    cell: CellGeometry,
    rows: usize,
    len: usize,
}

impl GridLayout {
    /// Layout for `len` cells of size `cell` inside `viewport`.
    pub fn new(cell: CellGeometry, viewport: Option<&Viewport>, len: usize) -> Self {
        let rows = match viewport {
            Some(vp) if cell.height > 0.0 => {
                (vp.visible_height() / cell.height).floor() as usize
            }
            _ => len,
        };
        Self {
            cell,
            rows: rows.max(1),
            len,
        }
    }

    /// Cells per column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in use.
    pub fn columns(&self) -> usize {
        self.len.div_ceil(self.rows)
    }

    /// Bounding rectangle of the cell at `index`, if it exists.
    pub fn cell_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let col = index / self.rows;
        let row = index % self.rows;
        Some(Rect::new(
            [col as f32 * self.cell.width, row as f32 * self.cell.height],
            [self.cell.width, self.cell.height],
        ))
    }

    /// Index of the cell under `point`, or `None` over empty space.
    pub fn location_to_index(&self, point: [f32; 2]) -> Option<usize> {
        if self.cell.width <= 0.0 || self.cell.height <= 0.0 {
            return None;
        }
        if point[0] < 0.0 || point[1] < 0.0 {
            return None;
        }
        let col = (point[0] / self.cell.width).floor() as usize;
        let row = (point[1] / self.cell.height).floor() as usize;
        if row >= self.rows {
            return None;
        }
        let index = col.checked_mul(self.rows)?.checked_add(row)?;
        self.cell_bounds(index)
            .filter(|bounds| bounds.contains(point))
            .map(|_| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> CellGeometry {
        CellGeometry {
            width: 100.0,
            height: 20.0,
        }
    }

    #[test]
    fn cells_wrap_into_columns_by_viewport_height() {
        let vp = Viewport::new(500.0, 65.0);
        let layout = GridLayout::new(cell(), Some(&vp), 7);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.columns(), 3);
        assert_eq!(
            layout.cell_bounds(4),
            Some(Rect::new([100.0, 20.0], [100.0, 20.0]))
        );
        assert_eq!(layout.cell_bounds(7), None);
    }

    #[test]
    fn location_maps_back_to_index() {
        let vp = Viewport::new(500.0, 65.0);
        let layout = GridLayout::new(cell(), Some(&vp), 7);
        assert_eq!(layout.location_to_index([150.0, 25.0]), Some(4));
        assert_eq!(layout.location_to_index([5.0, 5.0]), Some(0));
        // below the last row of a column
        assert_eq!(layout.location_to_index([5.0, 61.0]), None);
        // past the last entry
        assert_eq!(layout.location_to_index([250.0, 25.0]), None);
        assert_eq!(layout.location_to_index([-1.0, 5.0]), None);
    }

    #[test]
    fn single_column_without_viewport() {
        let layout = GridLayout::new(cell(), None, 4);
        assert_eq!(layout.rows(), 4);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.location_to_index([10.0, 70.0]), Some(3));
    }

    #[test]
    fn zero_sized_cells_hit_nothing() {
        let layout = GridLayout::new(CellGeometry::default(), None, 3);
        assert_eq!(layout.location_to_index([0.0, 0.0]), None);
    }
}
