use std::ops::Mul;

use num_traits::Zero;

use crate::error::GridError;
use crate::grid::Grid;
use crate::shape::Axis;

impl<T> Grid<T> {
    /// Combines an `n x m` grid with an `m x p` grid in the manner of a matrix product.
    ///
    /// For each output position `(x, y)`, the accumulator is applied to the pairs
    /// `(self[(x, i)], second[(i, y)])` for `i < m`, and the reducer turns the `m`
    /// partial results into the output element. With multiplication and summation
    /// this is the matrix product, while e.g. addition and minimum give the
    /// min-plus product used for shortest paths.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the height of the grid differs from the width of
    /// the second grid.
    pub fn cross_join<U, P, R>(
        &self,
        second: &Grid<U>,
        mut accumulate: impl FnMut(&T, &U) -> P,
        mut reduce: impl FnMut(&[P]) -> R,
    ) -> crate::Result<Grid<R>> {
        if second.width != self.height {
            return Err(GridError::mismatch(Axis::Width, self.height, second.width));
        }

        let inner = self.height;
        let mut partial = Vec::with_capacity(inner);

        log::trace!("cross join {:?} with {:?}", self.dims(), second.dims());

        Ok(Grid::from_fn(self.width, second.height, |x, y| {
            partial.clear();
            partial.extend((0..inner).map(|i| accumulate(&self[(x, i)], &second[(i, y)])));

            reduce(&partial)
        }))
    }

    /// Returns the matrix product of two grids.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the height of the grid differs from the width of
    /// the second grid.
    pub fn matmul(&self, second: &Self) -> crate::Result<Self>
    where
        T: Clone + Mul<Output = T> + Zero,
    {
        self.cross_join(
            second,
            |a, b| a.clone() * b.clone(),
            |partial| partial.iter().cloned().fold(T::zero(), |acc, x| acc + x),
        )
    }

    /// Returns the sum of the elements on the main diagonal.
    ///
    /// The sum of an empty grid is zero.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the width and height differ.
    pub fn trace(&self) -> crate::Result<T>
    where
        T: Clone + Zero,
    {
        if self.width != self.height {
            let err = GridError::NotSquare { width: self.width, height: self.height };

            log::debug!("{err}");

            return Err(err);
        }

        Ok((0..self.width).fold(T::zero(), |acc, i| acc + self[(i, i)].clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Grid, GridError};

    #[test]
    fn cross_join_is_matrix_product() {
        let a = Grid::from([[1, 2, 3], [4, 5, 6]]);
        let b = Grid::from([[7, 8], [9, 10], [11, 12]]);

        let product = a.cross_join(&b, |x, y| x * y, |p| p.iter().sum::<i32>()).unwrap();

        assert_eq!(product, Grid::from([[58, 64], [139, 154]]));
        assert_eq!(a.matmul(&b).unwrap(), product);
    }

    #[test]
    fn min_plus_product() {
        let inf = u32::MAX / 2;
        let dist = Grid::from([[0, 4, inf], [inf, 0, 1], [2, inf, 0]]);

        let two_hops = dist
            .cross_join(&dist, |a, b| a + b, |p| p.iter().copied().min().unwrap_or(inf))
            .unwrap();

        assert_eq!(two_hops[(0, 2)], 5);
        assert_eq!(two_hops[(1, 0)], 3);
        assert_eq!(two_hops[(2, 1)], 6);
    }

    #[test]
    fn cross_join_partial_length_is_inner_extent() {
        let a = Grid::<i32>::from_elem(2, 3, 1);
        let b = Grid::<i32>::from_elem(3, 4, 1);

        let lengths = a.cross_join(&b, |x, y| x + y, <[i32]>::len).unwrap();

        assert_eq!(lengths, Grid::<usize>::from_elem(2, 4, 3));
        assert_eq!(
            b.cross_join(&a, |x, y| x + y, <[i32]>::len),
            Err(GridError::ShapeMismatch { axis: Axis::Width, expected: 4, found: 2 })
        );
    }

    #[test]
    fn trace_starts_from_zero() {
        let identity = Grid::from([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

        assert_eq!(identity.trace(), Ok(3));
        assert_eq!(Grid::from([[1.5, 0.0], [0.0, 2.0]]).trace(), Ok(3.5));
        assert_eq!(Grid::<i64>::default().trace(), Ok(0));
        assert_eq!(
            Grid::<i32>::from_elem(2, 3, 0).trace(),
            Err(GridError::NotSquare { width: 2, height: 3 })
        );
    }
}
