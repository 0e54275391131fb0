//! Grid - the raster container shared by every labeling stage
//!
//! A `Grid<T>` is a dense `width x height` raster stored row-major in a
//! single `Vec<T>`. Coordinates follow image conventions: `x` is the
//! column, `y` is the row, and `(0, 0)` is the top-left cell.
//!
//! Two instantiations carry the labeling data model:
//!
//! - [`Mask`] (`Grid<bool>`) - binary input, `true` is foreground
//! - [`LabelGrid`] (`Grid<u32>`) - labeling output, `0` is background
//!
//! Zero-sized grids (`0x0`, `0xN`, `Nx0`) are valid and simply have no
//! cells.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Binary mask: `true` marks a foreground cell.
pub type Mask = Grid<bool>;

/// Label grid: `0` marks background, any positive value names a component.
pub type LabelGrid = Grid<u32>;

/// Dense row-major 2-D raster.
///
/// # Examples
///
/// ```
/// use cclabel_core::{Grid, Mask};
///
/// let mut mask: Mask = Grid::new(4, 3).unwrap();
/// mask.set(2, 1, true).unwrap();
/// assert_eq!(mask.get(2, 1), Some(&true));
/// assert_eq!(mask.count_foreground(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

/// Number of cells in a `width x height` grid.
fn cell_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the cell count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, T::default())
    }

    /// Create a default-filled grid with the same dimensions as `other`.
    ///
    /// Infallible: `other` already proves the dimensions are addressable.
    pub fn new_like<U>(other: &Grid<U>) -> Self {
        Self {
            width: other.width,
            height: other.height,
            data: vec![T::default(); other.data.len()],
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: T) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Build a grid from a slice of rows.
    ///
    /// The width is taken from the first row; an empty slice gives a
    /// `0x0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the rows are ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = u32::try_from(rows.len()).map_err(|_| Error::InvalidDimension {
            width: 0,
            height: u32::MAX,
        })?;
        let width_usize = rows.first().map_or(0, |r| r.as_ref().len());
        let width = u32::try_from(width_usize).map_err(|_| Error::InvalidDimension {
            width: u32::MAX,
            height,
        })?;

        let mut data = Vec::with_capacity(cell_count(width, height)?);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width_usize {
                return Err(Error::DataLengthMismatch {
                    expected: width_usize,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the grid width (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `true` if `other` has the same dimensions.
    #[inline]
    pub fn same_dimensions<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Check the grid against the dimensions a caller expects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if they differ.
    pub fn ensure_dimensions(&self, expected: (u32, u32)) -> Result<()> {
        if self.dimensions() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: self.dimensions(),
            });
        }
        Ok(())
    }

    /// Row-major offset of `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Coordinates of a row-major offset.
    ///
    /// The offset must be smaller than [`Grid::len`].
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    /// Get a reference to the cell at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.data[i])
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        let i = self.index_of(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = value;
        Ok(())
    }

    /// Borrow row `y`.
    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // A zero-width grid has no data, so the chunk size never matters there.
        self.data.chunks(self.width.max(1) as usize)
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow the row-major backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the row-major backing buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Apply `f` to every cell, producing a grid of the same dimensions.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        match self.index_of(x, y) {
            Some(i) => &self.data[i],
            None => panic!(
                "grid index ({}, {}) out of bounds for {}x{}",
                x, y, self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        match self.index_of(x, y) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "grid index ({}, {}) out of bounds for {}x{}",
                x, y, self.width, self.height
            ),
        }
    }
}

impl Grid<bool> {
    /// Build a mask from bytes, treating any non-zero byte as foreground.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_vec(width, height, bytes.iter().map(|&b| b != 0).collect())
    }

    /// Number of foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

impl Grid<u32> {
    /// Largest label present, `0` for an all-background grid.
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Foreground/background pattern of this label grid.
    pub fn to_mask(&self) -> Mask {
        self.map(|&label| label != 0)
    }
}

/// Renders a mask as `#` (foreground) and `.` (background), one line per row.
impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_filled() {
        let grid: LabelGrid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_sized_grids() {
        let grid: Mask = Grid::new(0, 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);

        let tall: Mask = Grid::new(0, 5).unwrap();
        assert!(tall.is_empty());
        assert_eq!(tall.get(0, 0), None);
    }

    #[test]
    fn test_from_vec_length_check() {
        let err = Grid::from_vec(2, 2, vec![1u32, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::DataLengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[1u32, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid[(2, 1)], 6);
        assert_eq!(grid.row(0), Some(&[1, 2, 3][..]));

        let ragged: &[&[u32]] = &[&[1, 2], &[3]];
        assert!(matches!(
            Grid::from_rows(ragged),
            Err(Error::DataLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid: LabelGrid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, 7).unwrap();
        assert_eq!(grid.get(1, 1), Some(&7));
        assert_eq!(grid.get(2, 0), None);
        assert!(matches!(
            grid.set(0, 2, 1),
            Err(Error::IndexOutOfBounds { x: 0, y: 2, .. })
        ));
    }

    #[test]
    fn test_index_coords_roundtrip() {
        let grid: Mask = Grid::new(5, 4).unwrap();
        let i = grid.index_of(3, 2).unwrap();
        assert_eq!(i, 13);
        assert_eq!(grid.coords_of(i), (3, 2));
    }

    #[test]
    fn test_ensure_dimensions() {
        let grid: LabelGrid = Grid::new(4, 3).unwrap();
        assert!(grid.ensure_dimensions((4, 3)).is_ok());
        assert_eq!(
            grid.ensure_dimensions((3, 4)),
            Err(Error::DimensionMismatch {
                expected: (3, 4),
                actual: (4, 3)
            })
        );
    }

    #[test]
    fn test_mask_from_bytes_and_display() {
        let mask = Grid::from_bytes(3, 2, &[0, 255, 1, 0, 0, 9]).unwrap();
        assert_eq!(mask.count_foreground(), 3);
        assert_eq!(mask.to_string(), ".##\n..#\n");
    }

    #[test]
    fn test_label_helpers() {
        let labels = Grid::from_rows(&[[0u32, 3], [1, 0]]).unwrap();
        assert_eq!(labels.max_label(), 3);
        assert_eq!(labels.to_mask().count_foreground(), 2);

        let empty: LabelGrid = Grid::new(0, 0).unwrap();
        assert_eq!(empty.max_label(), 0);
    }
}
