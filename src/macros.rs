/// Creates a grid containing the arguments.
///
/// This macro is used to create a grid, similar to the `vec!` macro for vectors.
/// There are two forms of this macro:
///
/// - Create a grid containing a given list of x-slices:
///
/// ```
/// use mdgrid::{Grid, grid};
///
/// let g = grid![[1, 2, 3], [4, 5, 6]];
///
/// assert_eq!(g, Grid::from([[1, 2, 3], [4, 5, 6]]));
/// assert_eq!(g.dims(), [2, 3]);
/// ```
///
/// - Create a grid from a given element and shape by cloning the element:
///
/// ```
/// use mdgrid::{Grid, grid};
///
/// let g = grid![[1; 3]; 2];
///
/// assert_eq!(g, Grid::from_elem(2, 3, 1));
/// ```
///
/// In the second form, like for vectors the shape does not have to be constant.
#[macro_export]
macro_rules! grid {
    () => (
        $crate::Grid::default()
    );
    ($([$($x:expr),* $(,)?]),+ $(,)?) => (
        $crate::Grid::from([$([$($x),*]),+])
    );
    ([$elem:expr; $height:expr]; $width:expr) => (
        $crate::Grid::from_elem($width, $height, $elem)
    );
}

/// Creates a volume containing the arguments.
///
/// The forms are the same as for `grid!`, with three levels of nesting:
///
/// ```
/// use mdgrid::{Volume, volume};
///
/// let v = volume![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
///
/// assert_eq!(v[(1, 0, 1)], 6);
/// assert_eq!(volume![[[0; 4]; 3]; 2], Volume::from_elem(2, 3, 4, 0));
/// ```
#[macro_export]
macro_rules! volume {
    () => (
        $crate::Volume::default()
    );
    ($([$([$($x:expr),* $(,)?]),+ $(,)?]),+ $(,)?) => (
        $crate::Volume::from([$([$([$($x),*]),+]),+])
    );
    ([[$elem:expr; $depth:expr]; $height:expr]; $width:expr) => (
        $crate::Volume::from_elem($width, $height, $depth, $elem)
    );
}
