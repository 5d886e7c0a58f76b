use crate::shape::DenseArray;

/// Returns `true` if the arrays have the same rank and dimensions, and all
/// elements at the same coordinates compare equal.
///
/// # Examples
///
/// ```
/// use mdgrid::{array_eq, grid, volume};
///
/// assert!(array_eq(&grid![[1, 2], [3, 4]], &grid![[1, 2], [3, 4]]));
/// assert!(!array_eq(&grid![[1, 2], [3, 4]], &grid![[1, 2, 3, 4]]));
/// assert!(!array_eq(&grid![[1]], &volume![[[1]]]));
/// ```
pub fn array_eq<A, B>(a: &A, b: &B) -> bool
where
    A: DenseArray + ?Sized,
    B: DenseArray + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    array_eq_by(a, b, |x, y| x == y)
}

/// Returns `true` if the arrays have the same rank and dimensions, and the
/// comparer accepts all element pairs at the same coordinates.
///
/// Elements are visited in sequence order, and the comparison stops at the
/// first rejected pair.
pub fn array_eq_by<A, B>(
    a: &A,
    b: &B,
    mut comparer: impl FnMut(&A::Item, &B::Item) -> bool,
) -> bool
where
    A: DenseArray + ?Sized,
    B: DenseArray + ?Sized,
{
    if A::RANK != B::RANK || a.dims().as_ref() != b.dims().as_ref() {
        return false;
    }

    let dims = a.dims();
    let dims = dims.as_ref();

    if dims.contains(&0) {
        return true;
    }

    let mut index = vec![0; dims.len()];

    loop {
        match (a.get_at(&index), b.get_at(&index)) {
            (Some(x), Some(y)) if comparer(x, y) => {}
            _ => return false,
        }

        // Advance the innermost axis first, carrying into the outer ones.
        let mut axis = dims.len();

        loop {
            if axis == 0 {
                return true;
            }

            axis -= 1;
            index[axis] += 1;

            if index[axis] < dims[axis] {
                break;
            }

            index[axis] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Volume};

    #[test]
    fn rank_and_dims() {
        let g = Grid::from([[1, 2, 3], [4, 5, 6]]);

        assert!(array_eq(&g, &g));
        assert!(!array_eq(&g, &g.transpose()));
        assert!(!array_eq(&g, &Volume::from([[[1, 2, 3], [4, 5, 6]]])));
        assert!(!array_eq(&g, &g.replace_value(&6, 0)));
    }

    #[test]
    fn empty_arrays_with_equal_dims() {
        assert!(array_eq(&Grid::<u8>::new(0, 2), &Grid::<u8>::new(0, 2)));
        assert!(!array_eq(&Grid::<u8>::new(0, 2), &Grid::<u8>::new(2, 0)));
        assert!(array_eq(&Volume::<u8>::default(), &Volume::<u8>::default()));
    }

    #[test]
    fn custom_comparer() {
        let a = Grid::from([["a", "B"], ["c", "D"]]);
        let b = Grid::from([["A", "b"], ["C", "d"]]);

        assert!(!array_eq(&a, &b));
        assert!(array_eq_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)));
        assert!(array_eq_by(&b, &a, |x, y| x.eq_ignore_ascii_case(y)));
    }

    #[test]
    fn mixed_element_types() {
        let a = Grid::from([[1u8, 2], [3, 4]]);
        let b = a.map(|&e| u32::from(e));

        assert!(array_eq_by(&a, &b, |&x, &y| u32::from(x) == y));
    }
}
