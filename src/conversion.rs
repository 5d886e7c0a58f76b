use crate::error::{check_positive, GridError};
use crate::grid::Grid;
use crate::shape::checked_len;
use crate::volume::Volume;

impl<T> Grid<T> {
    /// Returns an iterator over the columns of the grid.
    ///
    /// A column holds all elements sharing a y coordinate, so there are `height`
    /// columns of length `width`. Each column is a copy of the grid contents.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Vec<T>> + Clone + '_
    where
        T: Clone,
    {
        (0..self.height)
            .map(move |y| (0..self.width).map(|x| self[(x, y)].clone()).collect::<Vec<_>>())
    }

    /// Creates a grid from a flat vector by splitting it into x-slices of `row_size`
    /// elements.
    ///
    /// The result has width `len / row_size` and height `row_size`, and flat index
    /// `i` is placed at `(i / row_size, i % row_size)`. This is the inverse of
    /// `to_flat_vec` when `row_size` is the height of the source grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `row_size` is zero or does not divide the length.
    pub fn from_flat(vec: Vec<T>, row_size: usize) -> crate::Result<Self> {
        check_positive("row_size", row_size)?;

        if vec.len() % row_size != 0 {
            let reason = format!("{row_size} does not divide the length {}", vec.len());

            return Err(GridError::invalid("row_size", reason));
        }

        let width = vec.len() / row_size;

        Ok(Self::from_parts(vec, [width, row_size]))
    }

    /// Creates a grid from a jagged array, with one inner slice per x-slice.
    ///
    /// The height is the length of the longest slice. Positions past the end of
    /// a shorter slice hold the default value.
    #[must_use]
    pub fn from_jagged<S: AsRef<[T]>>(slices: &[S]) -> Self
    where
        T: Clone + Default,
    {
        let height = slices.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);

        Self::from_fn(slices.len(), height, |x, y| {
            slices[x].as_ref().get(y).cloned().unwrap_or_default()
        })
    }

    /// Converts the grid into a grid with the given shape, keeping the sequence order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the new shape holds a different number of elements.
    pub fn into_shape(self, width: usize, height: usize) -> crate::Result<Self> {
        Self::from_vec(self.vec, width, height)
    }

    /// Returns an iterator over the elements at the positions matching the predicate.
    ///
    /// The predicate is called with `(x, y)` in sequence order.
    pub fn iter_where<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T> + Clone + 'a
    where
        P: FnMut(usize, usize) -> bool + Clone + 'a,
    {
        let height = self.height;

        self.vec.iter().enumerate().filter_map(move |(i, x)| {
            if predicate(i / height, i % height) {
                Some(x)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over the rows of the grid.
    ///
    /// A row is an x-slice, holding all elements sharing an x coordinate, so there
    /// are `width` rows of length `height`. Each row is a copy of the grid contents.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Vec<T>> + Clone + '_
    where
        T: Clone,
    {
        (0..self.width).map(move |x| self.slice_x(x).to_vec())
    }

    /// Returns a vector of all elements in sequence order.
    #[must_use]
    pub fn to_flat_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vec.clone()
    }

    /// Returns a vector with the given closure applied to each element in sequence order.
    #[must_use]
    pub fn to_flat_vec_with<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.vec.iter().map(f).collect()
    }

    /// Returns a jagged array with one vector per x-slice.
    #[must_use]
    pub fn to_jagged(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().collect()
    }
}

impl<T> Volume<T> {
    /// Creates a volume from a flat vector, with `height * depth` elements per x-slice
    /// and `depth` elements per z-lane.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an extent is zero or if `height * depth` does
    /// not divide the length.
    pub fn from_flat(vec: Vec<T>, height: usize, depth: usize) -> crate::Result<Self> {
        check_positive("height", height)?;
        check_positive("depth", depth)?;

        let slice_len = checked_len(&[height, depth])
            .ok_or_else(|| GridError::invalid("height", "slice length overflow"))?;

        if vec.len() % slice_len != 0 {
            let reason = format!("{height}x{depth} does not divide the length {}", vec.len());

            return Err(GridError::invalid("height", reason));
        }

        let width = vec.len() / slice_len;

        Ok(Self::from_parts(vec, [width, height, depth]))
    }

    /// Converts the volume into a volume with the given shape, keeping the sequence order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the new shape holds a different number of elements.
    pub fn into_shape(self, width: usize, height: usize, depth: usize) -> crate::Result<Self> {
        Self::from_vec(self.vec, width, height, depth)
    }

    /// Returns an iterator over the elements at the positions matching the predicate.
    ///
    /// The predicate is called with `(x, y, z)` in sequence order.
    pub fn iter_where<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T> + Clone + 'a
    where
        P: FnMut(usize, usize, usize) -> bool + Clone + 'a,
    {
        let (height, depth) = (self.height, self.depth);

        self.vec.iter().enumerate().filter_map(move |(i, x)| {
            if predicate(i / (height * depth), i / depth % height, i % depth) {
                Some(x)
            } else {
                None
            }
        })
    }

    /// Returns a vector of all elements in sequence order.
    #[must_use]
    pub fn to_flat_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vec.clone()
    }

    /// Returns a vector with the given closure applied to each element in sequence order.
    #[must_use]
    pub fn to_flat_vec_with<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.vec.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, GridError, Volume};

    fn candidate() -> Grid<i32> {
        Grid::from([[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]])
    }

    #[test]
    fn sequence_order() {
        let g = candidate();

        assert_eq!(g.iter().copied().collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
        assert_eq!(g.to_flat_vec(), (1..=12).collect::<Vec<_>>());
        assert_eq!(g.to_flat_vec_with(|e| e % 3), [1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn iter_where_restarts() {
        let g = candidate();
        let diag = g.iter_where(|x, y| x == y);

        assert_eq!(diag.clone().copied().collect::<Vec<_>>(), [1, 5, 9]);
        assert_eq!(diag.copied().collect::<Vec<_>>(), [1, 5, 9]);

        let v = Volume::from_fn(2, 3, 4, |x, y, z| (x, y, z));

        assert_eq!(
            v.iter_where(|x, y, z| x == 1 && y == 2 && z > 1).collect::<Vec<_>>(),
            [&(1, 2, 2), &(1, 2, 3)]
        );
    }

    #[test]
    fn from_flat() {
        let g = candidate();

        assert_eq!(Grid::from_flat(g.to_flat_vec(), g.height()).unwrap(), g);
        assert_eq!(Grid::from_flat(g.to_flat_vec(), 4).unwrap().dims(), [3, 4]);
        assert_eq!(Grid::from_flat(g.to_flat_vec(), 4).unwrap()[(1, 0)], 5);

        assert!(matches!(
            Grid::from_flat(vec![1, 2, 3], 0),
            Err(GridError::InvalidArgument { name: "row_size", .. })
        ));
        assert!(matches!(
            Grid::from_flat(vec![1, 2, 3], 2),
            Err(GridError::InvalidArgument { name: "row_size", .. })
        ));

        let v = Volume::from_fn(2, 3, 4, |x, y, z| 100 * x + 10 * y + z);

        assert_eq!(Volume::from_flat(v.to_flat_vec(), 3, 4).unwrap(), v);
        assert!(Volume::from_flat(v.to_flat_vec(), 5, 4).is_err());
        assert!(Volume::from_flat(v.to_flat_vec(), 3, 0).is_err());
    }

    #[test]
    fn jagged() {
        let g = candidate();
        let jagged = g.to_jagged();

        assert_eq!(jagged.len(), 4);
        assert_eq!(jagged[1], [4, 5, 6]);
        assert_eq!(Grid::from_jagged(&jagged), g);

        let short = Grid::from_jagged(&[vec![1], vec![2, 3, 4], vec![]]);

        assert_eq!(short, Grid::from([[1, 0, 0], [2, 3, 4], [0, 0, 0]]));
        assert!(Grid::<u8>::from_jagged::<Vec<u8>>(&[]).is_empty());
    }

    #[test]
    fn rows_and_columns() {
        let g = candidate();

        assert_eq!(g.rows().len(), 4);
        assert_eq!(g.rows().last().unwrap(), [10, 11, 12]);
        assert_eq!(g.columns().len(), 3);
        assert_eq!(g.columns().next().unwrap(), [1, 4, 7, 10]);
    }

    #[test]
    fn into_shape() {
        let g = candidate().into_shape(6, 2).unwrap();

        assert_eq!(g, Grid::from([[1, 2], [3, 4], [5, 6], [7, 8], [9, 10], [11, 12]]));
        assert!(g.into_shape(5, 2).is_err());
    }
}
