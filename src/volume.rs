use std::borrow::Borrow;
use std::fmt::{Debug, Formatter, Result};
use std::ops::Index;
use std::slice;

use crate::error::GridError;
use crate::grid::panic_bounds_check;
use crate::shape::{checked_len, DenseArray};

/// Dense 3-dimensional array.
///
/// Elements are addressed by `(x, y, z)` and stored with `z` as the fastest
/// varying index, followed by `y`. Like `Grid`, a volume is immutable after
/// construction.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Volume<T> {
    pub(crate) vec: Vec<T>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) depth: usize,
}

impl<T> Volume<T> {
    /// Returns a slice of all elements in the volume in sequence order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Returns the number of elements along the z axis.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the extents of the volume as `[width, height, depth]`.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    /// Creates a volume from the given element.
    #[must_use]
    pub fn from_elem(width: usize, height: usize, depth: usize, elem: impl Borrow<T>) -> Self
    where
        T: Clone,
    {
        Self::from_fn(width, height, depth, |_, _, _| elem.borrow().clone())
    }

    /// Creates a volume with the results from the given function, called with
    /// `(x, y, z)` in sequence order.
    #[must_use]
    pub fn from_fn(
        width: usize,
        height: usize,
        depth: usize,
        mut f: impl FnMut(usize, usize, usize) -> T,
    ) -> Self {
        let len = width.saturating_mul(height).saturating_mul(depth);
        let mut vec = Vec::with_capacity(len);

        for x in 0..width {
            for y in 0..height {
                for z in 0..depth {
                    vec.push(f(x, y, z));
                }
            }
        }

        Self::from_parts(vec, [width, height, depth])
    }

    /// Creates a volume from a vector holding the elements in sequence order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the vector length is not `width * height * depth`.
    pub fn from_vec(vec: Vec<T>, width: usize, height: usize, depth: usize) -> crate::Result<Self> {
        match checked_len(&[width, height, depth]) {
            Some(len) if len == vec.len() => Ok(Self::from_parts(vec, [width, height, depth])),
            _ => Err(GridError::invalid(
                "vec",
                format!("length {} does not match {width}x{height}x{depth}", vec.len()),
            )),
        }
    }

    /// Returns a reference to the element at `(x, y, z)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if x < self.width && y < self.height && z < self.depth {
            Some(&self.vec[self.offset(x, y, z)])
        } else {
            None
        }
    }

    /// Returns the number of elements along the y axis.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Converts the volume into a vector of all elements in sequence order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }

    /// Returns `true` if the volume contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns an iterator over all elements, with `x` outermost and `z` innermost.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Returns the number of elements in the volume.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Creates a volume filled with default values.
    #[must_use]
    pub fn new(width: usize, height: usize, depth: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(width, height, depth, |_, _, _| T::default())
    }

    /// Returns the number of elements along the x axis.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn from_parts(vec: Vec<T>, dims: [usize; 3]) -> Self {
        debug_assert!(vec.len() == dims[0] * dims[1] * dims[2], "length mismatch");

        Self { vec, width: dims[0], height: dims[1], depth: dims[2] }
    }

    pub(crate) fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.height + y) * self.depth + z
    }

    /// Returns the z-lane at `(x, y)`.
    pub(crate) fn lane(&self, x: usize, y: usize) -> &[T] {
        let start = self.offset(x, y, 0);

        &self.vec[start..start + self.depth]
    }
}

impl<T: Debug> Debug for Volume<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        struct Slice<'a, T>(&'a Volume<T>, usize);

        impl<T: Debug> Debug for Slice<'_, T> {
            fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
                let lanes = (0..self.0.height).map(|y| self.0.lane(self.1, y));

                fmt.debug_list().entries(lanes).finish()
            }
        }

        fmt.debug_list().entries((0..self.width).map(|x| Slice(self, x))).finish()
    }
}

impl<T> Default for Volume<T> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), [0, 0, 0])
    }
}

impl<T> DenseArray for Volume<T> {
    type Item = T;
    type Dims = [usize; 3];

    const RANK: usize = 3;

    fn dims(&self) -> [usize; 3] {
        self.dims()
    }

    fn get_at(&self, index: &[usize]) -> Option<&T> {
        match *index {
            [x, y, z] => self.get(x, y, z),
            _ => None,
        }
    }
}

impl<T, const X: usize, const Y: usize, const Z: usize> From<[[[T; Z]; Y]; X]> for Volume<T> {
    fn from(array: [[[T; Z]; Y]; X]) -> Self {
        Self::from_parts(array.into_iter().flatten().flatten().collect(), [X, Y, Z])
    }
}

impl<T> From<Volume<T>> for Vec<T> {
    fn from(volume: Volume<T>) -> Self {
        volume.into_vec()
    }
}

impl<T> Index<(usize, usize, usize)> for Volume<T> {
    type Output = T;

    fn index(&self, (x, y, z): (usize, usize, usize)) -> &T {
        if x >= self.width {
            panic_bounds_check(x, self.width)
        }

        if y >= self.height {
            panic_bounds_check(y, self.height)
        }

        if z >= self.depth {
            panic_bounds_check(z, self.depth)
        }

        &self.vec[self.offset(x, y, z)]
    }
}

impl<T> Index<[usize; 3]> for Volume<T> {
    type Output = T;

    fn index(&self, index: [usize; 3]) -> &T {
        &self[(index[0], index[1], index[2])]
    }
}

impl<'a, T> IntoIterator for &'a Volume<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Volume<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}
