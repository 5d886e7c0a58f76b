use crate::grid::Grid;
use crate::shape::check_same_dims;
use crate::volume::Volume;

macro_rules! impl_elementwise {
    ($type:tt) => {
        impl<T> $type<T> {
            /// Merges two arrays of the same shape element by element.
            ///
            /// # Errors
            ///
            /// Returns `ShapeMismatch` naming the first axis on which the extents differ.
            pub fn combine<U, R>(
                &self,
                second: &$type<U>,
                mut f: impl FnMut(&T, &U) -> R,
            ) -> crate::Result<$type<R>> {
                check_same_dims(&self.dims(), &second.dims())?;

                let vec = self.vec.iter().zip(&second.vec).map(|(x, y)| f(x, y)).collect();

                Ok($type::from_parts(vec, self.dims()))
            }

            /// Returns an array of the same shape with the given closure applied to each element.
            #[must_use]
            pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> $type<U> {
                $type::from_parts(self.vec.iter().map(f).collect(), self.dims())
            }

            /// Returns an array where each element not matching the predicate is
            /// replaced with the default value.
            ///
            /// The shape is preserved, unlike when filtering a sequence.
            #[must_use]
            pub fn mask(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
            where
                T: Clone + Default,
            {
                self.map(|x| if predicate(x) { x.clone() } else { T::default() })
            }

            /// Returns an array where each element matching the predicate is replaced.
            #[must_use]
            pub fn replace(&self, mut predicate: impl FnMut(&T) -> bool, replacement: T) -> Self
            where
                T: Clone,
            {
                self.map(|x| if predicate(x) { replacement.clone() } else { x.clone() })
            }

            /// Returns an array where each occurrence of `subject` is replaced.
            #[must_use]
            pub fn replace_value(&self, subject: &T, replacement: T) -> Self
            where
                T: Clone + PartialEq,
            {
                self.replace(|x| x == subject, replacement)
            }
        }
    };
}

impl_elementwise!(Grid);
impl_elementwise!(Volume);

impl<T> Grid<T> {
    /// Returns a grid with the given closure applied at each position.
    ///
    /// The closure receives the whole source grid together with `(x, y)`, which
    /// allows transforms that look at neighboring elements.
    #[must_use]
    pub fn map_indexed<U>(&self, mut f: impl FnMut(&Self, usize, usize) -> U) -> Grid<U> {
        Grid::from_fn(self.width, self.height, |x, y| f(self, x, y))
    }
}

impl<T> Volume<T> {
    /// Returns a volume with the given closure applied at each position.
    ///
    /// The closure receives the whole source volume together with `(x, y, z)`.
    #[must_use]
    pub fn map_indexed<U>(&self, mut f: impl FnMut(&Self, usize, usize, usize) -> U) -> Volume<U> {
        Volume::from_fn(self.width, self.height, self.depth, |x, y, z| f(self, x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Grid, GridError, Volume};

    #[test]
    fn map_and_combine() {
        let g = Grid::from([[1, 5, 9], [2, 6, 10], [3, 7, 11], [4, 8, 12]]);
        let doubled = Grid::from([[2, 10, 18], [4, 12, 20], [6, 14, 22], [8, 16, 24]]);

        assert_eq!(g.map(|e| 2 * e), doubled);
        assert_eq!(g.combine(&g, |a, b| a + b).unwrap(), doubled);
        assert_eq!(g.map(|e| e.to_string())[(1, 2)], "10");
    }

    #[test]
    fn combine_names_offending_axis() {
        let a = Volume::<i32>::from_elem(2, 3, 4, 0);

        assert_eq!(
            a.combine(&Volume::<i32>::from_elem(2, 3, 5, 0), |x, y| x + y),
            Err(GridError::ShapeMismatch { axis: Axis::Depth, expected: 4, found: 5 })
        );
        let b = Grid::<i32>::from_elem(2, 3, 0);

        assert_eq!(
            b.combine(&Grid::<i32>::from_elem(1, 3, 0), |x, y| x + y),
            Err(GridError::ShapeMismatch { axis: Axis::Width, expected: 2, found: 1 })
        );
    }

    #[test]
    fn neighborhood_sum() {
        let g = Grid::from([[1, 2, 3], [4, 5, 6]]);
        let sums = g.map_indexed(|src, x, y| {
            let left = if x > 0 { src[(x - 1, y)] } else { 0 };
            let above = if y > 0 { src[(x, y - 1)] } else { 0 };

            src[(x, y)] + left + above
        });

        assert_eq!(sums, Grid::from([[1, 3, 5], [5, 11, 14]]));
    }

    #[test]
    fn replace_and_mask() {
        let g = Grid::from([[1, -2], [-3, 4]]);

        assert_eq!(g.replace(|&e| e < 0, 0), Grid::from([[1, 0], [0, 4]]));
        assert_eq!(g.replace_value(&4, 40), Grid::from([[1, -2], [-3, 40]]));
        assert_eq!(g.mask(|&e| e % 2 == 0), Grid::from([[0, -2], [0, 4]]));

        let v = Volume::from([[[1, 2], [3, 4]]]);

        assert_eq!(v.mask(|&e| e > 2), Volume::from([[[0, 0], [3, 4]]]));
        assert_eq!(v.map_indexed(|_, x, y, z| x + y + z), Volume::from([[[0, 1], [1, 2]]]));
    }
}
