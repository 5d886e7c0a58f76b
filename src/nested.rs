//! Packing of nested arrays into a single array, and the inverse direction.
//!
//! A nested array holds a sub-array in each cell, and the sub-arrays may differ
//! in shape. Flattening places the sub-arrays next to each other on a canvas:
//!
//! - Along each axis, the canvas extent is the sum over the slices of that axis
//!   of the largest sub-extent within the slice.
//! - The innermost axis advances by the extent of each block, while the outer
//!   axes advance by the largest extent seen in the current slice or lane.
//!
//! The packing is compact when all blocks in a slice agree in shape. Otherwise
//! uncovered canvas cells hold the default value.

use crate::grid::Grid;
use crate::volume::Volume;

impl<T: Clone + Default> Grid<Grid<T>> {
    /// Constructs a single grid from the blocks of the nested grid.
    ///
    /// Blocks of an x-slice are stacked along the y axis, each directly after the
    /// previous one. The next x-slice starts after the widest block of the slice.
    #[must_use]
    pub fn flatten(&self) -> Grid<T> {
        let slice_widths: Vec<usize> = (0..self.width)
            .map(|x| self.slice_x(x).iter().map(Grid::width).max().unwrap_or(0))
            .collect();

        let width = slice_widths.iter().sum();
        let height = (0..self.height)
            .map(|y| (0..self.width).map(|x| self[(x, y)].height).max().unwrap_or(0))
            .sum();

        log::trace!("flatten {:?} blocks into {:?}", self.dims(), [width, height]);

        let mut vec = vec![T::default(); width * height];
        let mut offset_x = 0;

        for (x, slice_width) in slice_widths.into_iter().enumerate() {
            let mut offset_y = 0;

            for block in self.slice_x(x) {
                for i in 0..block.width {
                    let start = (offset_x + i) * height + offset_y;

                    vec[start..start + block.height].clone_from_slice(block.slice_x(i));
                }

                offset_y += block.height;
            }

            offset_x += slice_width;
        }

        Grid::from_parts(vec, [width, height])
    }
}

impl<T> Grid<Grid<T>> {
    /// Returns a grid with each block reduced to a single element.
    #[must_use]
    pub fn collapse<U>(&self, f: impl FnMut(&Grid<T>) -> U) -> Grid<U> {
        self.map(f)
    }
}

impl<T> Grid<T> {
    /// Maps each element to a block and flattens the resulting nested grid.
    #[must_use]
    pub fn expand<U: Clone + Default>(&self, f: impl FnMut(&T) -> Grid<U>) -> Grid<U> {
        self.map(f).flatten()
    }
}

impl<T: Clone + Default> Volume<Volume<T>> {
    /// Constructs a single volume from the blocks of the nested volume.
    ///
    /// Blocks are packed along z within each `(x, y)` lane. The next lane starts
    /// after the highest block of the lane, and the next x-slice after the widest
    /// block of the slice.
    #[must_use]
    pub fn flatten(&self) -> Volume<T> {
        let [w, h, d] = self.dims();

        let slice_widths: Vec<usize> = (0..w)
            .map(|x| (0..h).flat_map(|y| self.lane(x, y)).map(Volume::width).max().unwrap_or(0))
            .collect();

        let width = slice_widths.iter().sum();
        let height = (0..h)
            .map(|y| (0..w).flat_map(|x| self.lane(x, y)).map(Volume::height).max().unwrap_or(0))
            .sum();
        let depth = (0..d)
            .map(|z| self.iter_where(move |_, _, k| k == z).map(Volume::depth).max().unwrap_or(0))
            .sum();

        log::trace!("flatten {:?} blocks into {:?}", self.dims(), [width, height, depth]);

        let mut vec = vec![T::default(); width * height * depth];
        let mut offset_x = 0;

        for (x, slice_width) in slice_widths.into_iter().enumerate() {
            let mut offset_y = 0;

            for y in 0..h {
                let lane = self.lane(x, y);
                let mut offset_z = 0;

                for block in lane {
                    for i in 0..block.width {
                        for j in 0..block.height {
                            let start =
                                ((offset_x + i) * height + offset_y + j) * depth + offset_z;

                            vec[start..start + block.depth].clone_from_slice(block.lane(i, j));
                        }
                    }

                    offset_z += block.depth;
                }

                offset_y += lane.iter().map(Volume::height).max().unwrap_or(0);
            }

            offset_x += slice_width;
        }

        Volume::from_parts(vec, [width, height, depth])
    }
}

impl<T> Volume<Volume<T>> {
    /// Returns a volume with each block reduced to a single element.
    #[must_use]
    pub fn collapse<U>(&self, f: impl FnMut(&Volume<T>) -> U) -> Volume<U> {
        self.map(f)
    }
}

impl<T> Volume<T> {
    /// Maps each element to a block and flattens the resulting nested volume.
    #[must_use]
    pub fn expand<U: Clone + Default>(&self, f: impl FnMut(&T) -> Volume<U>) -> Volume<U> {
        self.map(f).flatten()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, Volume};

    #[test]
    fn flatten_uniform_blocks() {
        let nested = Grid::from([
            [Grid::from([[1, 2], [3, 4]]), Grid::from([[5], [6]])],
            [Grid::from([[7, 8]]), Grid::from([[9]])],
        ]);

        assert_eq!(nested.flatten(), Grid::from([[1, 2, 5], [3, 4, 6], [7, 8, 9]]));
    }

    #[test]
    fn flatten_irregular_blocks_leaves_gaps() {
        let nested = Grid::from([
            [Grid::from([[1]]), Grid::from([[2]])],
            [Grid::from([[3, 4]]), Grid::from([[5]])],
        ]);

        // The y-slice 0 is 2 high because of the block [[3, 4]], but the x-slice 0
        // only covers 2 of the 3 cells.
        assert_eq!(nested.flatten(), Grid::from([[1, 2, 0], [3, 4, 5]]));
    }

    #[test]
    fn expand_and_collapse() {
        let g = Grid::from([[1, 2], [3, 4]]);
        let expanded = g.expand(|&e| Grid::from_elem(2, 1, e));

        assert_eq!(expanded, Grid::from([[1, 2], [1, 2], [3, 4], [3, 4]]));

        let blocks = expanded.split(2, 1).unwrap();

        assert_eq!(blocks.collapse(|b| b[(0, 0)] + b[(1, 0)]), g.map(|e| 2 * e));
    }

    #[test]
    fn flatten_empty() {
        assert!(Grid::<Grid<u8>>::default().flatten().is_empty());
        assert_eq!(Grid::from_elem(2, 2, Grid::<u8>::new(0, 0)).flatten().dims(), [0, 0]);
        assert!(Volume::<Volume<u8>>::default().flatten().is_empty());
    }

    #[test]
    fn volume_flatten() {
        let v = Volume::from_fn(2, 4, 6, |x, y, z| 100 * x + 10 * y + z);

        assert_eq!(v.split(1, 2, 3).unwrap().flatten(), v);
        assert_eq!(v.split(2, 4, 6).unwrap().flatten(), v);
        assert_eq!(v.split(1, 1, 1).unwrap().flatten(), v);
    }

    #[test]
    fn volume_flatten_irregular() {
        let nested = Volume::from([
            [[Volume::from([[[1, 2]]]), Volume::from([[[3]]])]],
            [[Volume::from([[[4], [5]]]), Volume::from([[[6]]])]],
        ]);

        // The z-slices are 2 and 1 deep, and the single y-slice is as high as [[[4], [5]]].
        let flat = nested.flatten();

        assert_eq!(flat.dims(), [2, 2, 3]);
        assert_eq!(flat, Volume::from([[[1, 2, 3], [0, 0, 0]], [[4, 6, 0], [5, 0, 0]]]));
    }

    #[test]
    fn volume_expand_and_collapse() {
        let v = Volume::from([[[1, 2]], [[3, 4]]]);
        let expanded = v.expand(|&e| Volume::from_elem(1, 2, 1, e));

        assert_eq!(expanded, Volume::from([[[1, 2], [1, 2]], [[3, 4], [3, 4]]]));
        assert_eq!(expanded.split(1, 2, 1).unwrap().collapse(|b| b[(0, 1, 0)]), v);
    }
}
