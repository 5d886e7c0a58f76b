use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

/// Array axis.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Axis {
    /// The x axis, with extent `width`.
    Width,
    /// The y axis, with extent `height`.
    Height,
    /// The z axis, with extent `depth`.
    Depth,
}

impl Axis {
    /// Returns the axis for the given dimension index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not less than 3.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Width,
            1 => Self::Height,
            2 => Self::Depth,
            _ => panic!("invalid dimension"),
        }
    }

    /// Returns the dimension index of the axis.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Axis {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Depth => "depth",
        })
    }
}

/// Trait for dense arrays of a fixed rank.
///
/// This is the rank-agnostic view on `Grid` and `Volume` used by structural
/// comparison, and by external checkers that walk arrays coordinate by
/// coordinate.
pub trait DenseArray {
    /// Element type.
    type Item;

    /// Array dimensions, one extent per axis.
    type Dims: AsRef<[usize]> + Copy + Debug + Default + Eq + Hash;

    /// Array rank, i.e. the number of dimensions.
    const RANK: usize;

    /// Returns the extents of all dimensions.
    fn dims(&self) -> Self::Dims;

    /// Returns the element at the given coordinates, or `None` if out of bounds
    /// or if the number of coordinates does not match the rank.
    fn get_at(&self, index: &[usize]) -> Option<&Self::Item>;

    /// Returns the extent of the specified dimension.
    ///
    /// # Panics
    ///
    /// Panics if the dimension is out of bounds.
    fn dim(&self, index: usize) -> usize {
        assert!(index < Self::RANK, "invalid dimension");

        self.dims().as_ref()[index]
    }

    /// Returns `true` if the array contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the array.
    fn len(&self) -> usize {
        self.dims().as_ref().iter().product()
    }

    /// Returns the array rank.
    fn rank(&self) -> usize {
        Self::RANK
    }
}

/// Returns the product of the extents, or `None` on overflow.
pub(crate) fn checked_len(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &x| acc.checked_mul(x))
}

/// Checks that the same axis has the same extent in both dimension lists.
pub(crate) fn check_same_dims(expected: &[usize], found: &[usize]) -> crate::Result<()> {
    for (i, (&e, &f)) in expected.iter().zip(found).enumerate() {
        if e != f {
            return Err(crate::GridError::mismatch(Axis::from_index(i), e, f));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn axis() {
        assert_eq!(Axis::from_index(2), Axis::Depth);
        assert_eq!(Axis::Height.index(), 1);
        assert_eq!(Axis::Width.to_string(), "width");
    }

    #[test]
    fn same_dims_reports_first_axis() {
        assert!(check_same_dims(&[2, 3], &[2, 3]).is_ok());
        assert_eq!(
            check_same_dims(&[2, 3, 4], &[2, 5, 6]),
            Err(GridError::ShapeMismatch { axis: Axis::Height, expected: 3, found: 5 })
        );
    }

    #[test]
    fn len_overflow() {
        assert_eq!(checked_len(&[3, 4, 5]), Some(60));
        assert_eq!(checked_len(&[usize::MAX, 2]), None);
    }
}
