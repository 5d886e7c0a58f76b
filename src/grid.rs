use std::borrow::Borrow;
use std::fmt::{Debug, Formatter, Result};
use std::ops::Index;
use std::slice;

use crate::error::GridError;
use crate::shape::{checked_len, DenseArray};

/// Dense 2-dimensional array.
///
/// Elements are addressed by `(x, y)` with `x < width` and `y < height`, and are
/// stored with `y` as the fastest varying index. A grid is never modified after
/// construction; every operation returns a new grid.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Grid<T> {
    pub(crate) vec: Vec<T>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl<T> Grid<T> {
    /// Returns a slice of all elements in the grid, x-slice by x-slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Returns the extents of the grid as `[width, height]`.
    #[must_use]
    pub fn dims(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    /// Creates a grid from the given element.
    #[must_use]
    pub fn from_elem(width: usize, height: usize, elem: impl Borrow<T>) -> Self
    where
        T: Clone,
    {
        Self::from_fn(width, height, |_, _| elem.borrow().clone())
    }

    /// Creates a grid with the results from the given function, called with `(x, y)`
    /// in sequence order.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut vec = Vec::with_capacity(width.saturating_mul(height));

        for x in 0..width {
            for y in 0..height {
                vec.push(f(x, y));
            }
        }

        Self::from_parts(vec, [width, height])
    }

    /// Creates a grid from a vector holding the elements in sequence order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the vector length is not `width * height`.
    pub fn from_vec(vec: Vec<T>, width: usize, height: usize) -> crate::Result<Self> {
        match checked_len(&[width, height]) {
            Some(len) if len == vec.len() => Ok(Self::from_parts(vec, [width, height])),
            _ => Err(GridError::invalid(
                "vec",
                format!("length {} does not match {width}x{height}", vec.len()),
            )),
        }
    }

    /// Returns a reference to the element at `(x, y)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.vec[x * self.height + y])
        } else {
            None
        }
    }

    /// Returns the number of elements along the y axis.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Converts the grid into a vector of all elements in sequence order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }

    /// Returns `true` if the grid contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns an iterator over all elements, with `x` outer and `y` inner.
    ///
    /// The iterator is lazy and can be cloned to restart from its current position.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Returns the number of elements in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Creates a grid filled with default values.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(width, height, |_, _| T::default())
    }

    /// Returns the number of elements along the x axis.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn from_parts(vec: Vec<T>, dims: [usize; 2]) -> Self {
        debug_assert!(vec.len() == dims[0] * dims[1], "length mismatch");

        Self { vec, width: dims[0], height: dims[1] }
    }

    /// Returns the x-slice at `x`, i.e. all elements sharing that x coordinate.
    pub(crate) fn slice_x(&self, x: usize) -> &[T] {
        &self.vec[x * self.height..(x + 1) * self.height]
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        fmt.debug_list().entries((0..self.width).map(|x| self.slice_x(x))).finish()
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), [0, 0])
    }
}

impl<T> DenseArray for Grid<T> {
    type Item = T;
    type Dims = [usize; 2];

    const RANK: usize = 2;

    fn dims(&self) -> [usize; 2] {
        self.dims()
    }

    fn get_at(&self, index: &[usize]) -> Option<&T> {
        match *index {
            [x, y] => self.get(x, y),
            _ => None,
        }
    }
}

impl<T, const X: usize, const Y: usize> From<[[T; Y]; X]> for Grid<T> {
    fn from(array: [[T; Y]; X]) -> Self {
        Self::from_parts(array.into_iter().flatten().collect(), [X, Y])
    }
}

impl<T> From<Grid<T>> for Vec<T> {
    fn from(grid: Grid<T>) -> Self {
        grid.into_vec()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        if x >= self.width {
            panic_bounds_check(x, self.width)
        }

        if y >= self.height {
            panic_bounds_check(y, self.height)
        }

        &self.vec[x * self.height + y]
    }
}

impl<T> Index<[usize; 2]> for Grid<T> {
    type Output = T;

    fn index(&self, index: [usize; 2]) -> &T {
        &self[(index[0], index[1])]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn panic_bounds_check(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}
