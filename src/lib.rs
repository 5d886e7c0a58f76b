/*!
# Grid and volume algebra for Rust

## Overview

The mdgrid crate provides dense two- and three-dimensional arrays together
with a set of whole-array operations on them. The arrays are plain containers
for any element type, and every operation returns a new array instead of
modifying its input.

Here are the main features of mdgrid:

- `Grid` and `Volume` types with x-major storage and `(x, y)` / `(x, y, z)` indexing.
- Element-wise mapping, combination, replacement and masking.
- Conversion to and from flat vectors and jagged arrays.
- Cropping, resizing, concatenation, minors and splitting into blocks.
- Rotation, flipping and transposition of grids.
- Nested arrays of blocks that can be flattened, expanded and collapsed.
- Generalized matrix products with user-defined accumulation and reduction.

## Coordinates and sequence order

The first coordinate is the outer one, so a literal `[[1, 2, 3], [4, 5, 6]]`
is a grid with width 2 and height 3, and `g[(1, 0)]` is 4. The sequence order
used by iteration and flat conversion visits `y` fastest for grids, and `z`
fastest for volumes:

```
use mdgrid::{Grid, grid};

let g = grid![[1, 2, 3], [4, 5, 6]];

assert_eq!(g.dims(), [2, 3]);
assert_eq!(g[(1, 0)], 4);
assert_eq!(g.to_flat_vec(), [1, 2, 3, 4, 5, 6]);
assert_eq!(Grid::from_flat(g.to_flat_vec(), 3), Ok(g));
```

## Errors

Operations with preconditions return `Result<_, GridError>`. The checks are
done before any allocation, and the error names the offending argument or
axis. Indexing with `[]` panics when out of bounds, while `get` returns
an `Option`.

## Logging

The crate reports failed preconditions at debug level, and shape changes of
larger operations at trace level, through the `log` facade.

## Features

- `serde`: implements `Serialize` and `Deserialize` for `Grid` and `Volume`,
  using nested sequences with one sequence per x-slice.
*/

#![warn(missing_docs)]

mod cmp;
mod conversion;
mod elementwise;
mod error;
mod grid;
mod macros;
mod mathematics;
mod nested;
mod rotation;
mod shape;
mod subarray;
mod volume;

#[cfg(feature = "serde")]
mod serde;

pub use cmp::{array_eq, array_eq_by};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use shape::{Axis, DenseArray};
pub use volume::Volume;
