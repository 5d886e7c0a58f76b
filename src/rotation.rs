use crate::grid::Grid;

impl<T: Clone> Grid<T> {
    /// Returns the grid mirrored along the x axis.
    #[must_use]
    pub fn flip_horizontally(&self) -> Self {
        let width = self.width;

        Self::from_fn(width, self.height, |x, y| self[(width - 1 - x, y)].clone())
    }

    /// Returns the grid mirrored along the y axis.
    #[must_use]
    pub fn flip_vertically(&self) -> Self {
        let height = self.height;

        Self::from_fn(self.width, height, |x, y| self[(x, height - 1 - y)].clone())
    }

    /// Returns the grid rotated clockwise, with width and height swapped.
    ///
    /// The element at `(x, y)` moves to `(height - 1 - y, x)`.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let height = self.height;

        Self::from_fn(height, self.width, |x, y| self[(y, height - 1 - x)].clone())
    }

    /// Returns the grid rotated counterclockwise, with width and height swapped.
    ///
    /// The element at `(x, y)` moves to `(y, width - 1 - x)`.
    #[must_use]
    pub fn rotate_counter_clockwise(&self) -> Self {
        let width = self.width;

        Self::from_fn(self.height, width, |x, y| self[(width - 1 - y, x)].clone())
    }

    /// Returns the grid flipped along its main diagonal.
    #[doc(alias = "flip_diagonally")]
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.height, self.width, |x, y| self[(y, x)].clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::Grid;

    fn candidate() -> Grid<i32> {
        Grid::from([[1, 2, 3], [4, 5, 6]])
    }

    #[test]
    fn rotate() {
        let g = candidate();

        assert_eq!(g.rotate_clockwise(), Grid::from([[3, 6], [2, 5], [1, 4]]));
        assert_eq!(g.rotate_counter_clockwise(), Grid::from([[4, 1], [5, 2], [6, 3]]));
        assert_eq!(g.rotate_clockwise().rotate_counter_clockwise(), g);

        let half_turn = g.rotate_clockwise().rotate_clockwise();

        assert_eq!(half_turn, g.flip_horizontally().flip_vertically());
    }

    #[test]
    fn flip() {
        let g = candidate();

        assert_eq!(g.flip_horizontally(), Grid::from([[4, 5, 6], [1, 2, 3]]));
        assert_eq!(g.flip_vertically(), Grid::from([[3, 2, 1], [6, 5, 4]]));
        assert_eq!(g.transpose(), Grid::from([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(g.transpose().transpose(), g);
    }

    #[test]
    fn square_flips_match_mirrored_indices() {
        let g = Grid::from_fn(3, 3, |x, y| 3 * x + y);

        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(g.flip_horizontally()[(2 - x, y)], g[(x, y)]);
                assert_eq!(g.flip_vertically()[(x, 2 - y)], g[(x, y)]);
            }
        }
    }

    #[test]
    fn empty() {
        let g = Grid::<u8>::new(0, 3);

        assert_eq!(g.rotate_clockwise().dims(), [3, 0]);
        assert_eq!(g.flip_horizontally(), g);
    }
}
