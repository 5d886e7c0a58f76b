use std::borrow::Borrow;

use crate::error::{check_group, check_positive, check_region, GridError};
use crate::grid::Grid;
use crate::shape::Axis;
use crate::volume::Volume;

impl<T: Clone> Grid<T> {
    /// Returns a grid with the elements of the second grid appended along the x axis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the heights differ.
    pub fn concat_horizontally(&self, second: &Self) -> crate::Result<Self> {
        if second.height != self.height {
            return Err(GridError::mismatch(Axis::Height, self.height, second.height));
        }

        let mut vec = Vec::with_capacity(self.len() + second.len());

        vec.extend_from_slice(&self.vec);
        vec.extend_from_slice(&second.vec);

        Ok(Self::from_parts(vec, [self.width + second.width, self.height]))
    }

    /// Returns a grid with the elements of the second grid appended along the y axis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the widths differ.
    pub fn concat_vertically(&self, second: &Self) -> crate::Result<Self> {
        if second.width != self.width {
            return Err(GridError::mismatch(Axis::Width, self.width, second.width));
        }

        let mut vec = Vec::with_capacity(self.len() + second.len());

        for x in 0..self.width {
            vec.extend_from_slice(self.slice_x(x));
            vec.extend_from_slice(second.slice_x(x));
        }

        Ok(Self::from_parts(vec, [self.width, self.height + second.height]))
    }

    /// Returns the region `[x, x + width) x [y, y + height)` of the grid.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` naming the origin coordinate if it is past the
    /// grid, or the extent if the region does not fit.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> crate::Result<Self> {
        check_region(("x", x), ("width", width), self.width)?;
        check_region(("y", y), ("height", height), self.height)?;

        Ok(self.region(x, y, width, height))
    }

    /// Returns the minor matrix with column `x` and row `y` removed.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `x` or `y` is not a valid index.
    pub fn minor(&self, x: usize, y: usize) -> crate::Result<Self> {
        if x >= self.width {
            return Err(GridError::out_of_range("x", x, self.width.saturating_sub(1)));
        }

        if y >= self.height {
            return Err(GridError::out_of_range("y", y, self.height.saturating_sub(1)));
        }

        Ok(Self::from_fn(self.width - 1, self.height - 1, |i, j| {
            self[(i + usize::from(i >= x), j + usize::from(j >= y))].clone()
        }))
    }

    /// Returns a grid of the new shape, where elements outside the source are
    /// set to the padding element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an extent is zero.
    pub fn resize(
        &self,
        new_width: usize,
        new_height: usize,
        padding: impl Borrow<T>,
    ) -> crate::Result<Self> {
        check_positive("new_width", new_width)?;
        check_positive("new_height", new_height)?;

        log::trace!("resize {:?} to {:?}", self.dims(), [new_width, new_height]);

        Ok(Self::from_fn(new_width, new_height, |x, y| {
            self.get(x, y).unwrap_or_else(|| padding.borrow()).clone()
        }))
    }

    /// Returns a grid of the new shape, padded with the default value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an extent is zero.
    pub fn resize_default(&self, new_width: usize, new_height: usize) -> crate::Result<Self>
    where
        T: Default,
    {
        self.resize(new_width, new_height, T::default())
    }

    /// Splits the grid into blocks of the given shape.
    ///
    /// Block `(gx, gy)` of the result is the region with origin
    /// `(gx * group_width, gy * group_height)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a group extent is zero or does not divide the
    /// corresponding grid extent.
    pub fn split(&self, group_width: usize, group_height: usize) -> crate::Result<Grid<Self>> {
        check_group("group_width", group_width, self.width)?;
        check_group("group_height", group_height, self.height)?;

        Ok(Grid::from_fn(self.width / group_width, self.height / group_height, |gx, gy| {
            self.region(gx * group_width, gy * group_height, group_width, group_height)
        }))
    }

    fn region(&self, x: usize, y: usize, width: usize, height: usize) -> Self {
        let mut vec = Vec::with_capacity(width * height);

        for i in x..x + width {
            vec.extend_from_slice(&self.slice_x(i)[y..y + height]);
        }

        Self::from_parts(vec, [width, height])
    }
}

impl<T: Clone> Volume<T> {
    /// Returns a volume with the elements of the second volume appended along the x axis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the heights or depths differ.
    pub fn concat_x(&self, second: &Self) -> crate::Result<Self> {
        check_extent(Axis::Height, self.height, second.height)?;
        check_extent(Axis::Depth, self.depth, second.depth)?;

        let mut vec = Vec::with_capacity(self.len() + second.len());

        vec.extend_from_slice(&self.vec);
        vec.extend_from_slice(&second.vec);

        Ok(Self::from_parts(vec, [self.width + second.width, self.height, self.depth]))
    }

    /// Returns a volume with the elements of the second volume appended along the y axis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the widths or depths differ.
    pub fn concat_y(&self, second: &Self) -> crate::Result<Self> {
        check_extent(Axis::Width, self.width, second.width)?;
        check_extent(Axis::Depth, self.depth, second.depth)?;

        let slice = self.height * self.depth;
        let second_slice = second.height * second.depth;
        let mut vec = Vec::with_capacity(self.len() + second.len());

        for x in 0..self.width {
            vec.extend_from_slice(&self.vec[x * slice..(x + 1) * slice]);
            vec.extend_from_slice(&second.vec[x * second_slice..(x + 1) * second_slice]);
        }

        Ok(Self::from_parts(vec, [self.width, self.height + second.height, self.depth]))
    }

    /// Returns a volume with the elements of the second volume appended along the z axis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the widths or heights differ.
    pub fn concat_z(&self, second: &Self) -> crate::Result<Self> {
        check_extent(Axis::Width, self.width, second.width)?;
        check_extent(Axis::Height, self.height, second.height)?;

        let mut vec = Vec::with_capacity(self.len() + second.len());

        for x in 0..self.width {
            for y in 0..self.height {
                vec.extend_from_slice(self.lane(x, y));
                vec.extend_from_slice(second.lane(x, y));
            }
        }

        Ok(Self::from_parts(vec, [self.width, self.height, self.depth + second.depth]))
    }

    /// Returns the region `[x, x + width) x [y, y + height) x [z, z + depth)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` naming the origin coordinate if it is past the
    /// volume, or the extent if the region does not fit.
    pub fn crop(
        &self,
        x: usize,
        y: usize,
        z: usize,
        width: usize,
        height: usize,
        depth: usize,
    ) -> crate::Result<Self> {
        check_region(("x", x), ("width", width), self.width)?;
        check_region(("y", y), ("height", height), self.height)?;
        check_region(("z", z), ("depth", depth), self.depth)?;

        Ok(self.region([x, y, z], [width, height, depth]))
    }

    /// Returns a volume of the new shape, where elements outside the source are
    /// set to the padding element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an extent is zero.
    pub fn resize(
        &self,
        new_width: usize,
        new_height: usize,
        new_depth: usize,
        padding: impl Borrow<T>,
    ) -> crate::Result<Self> {
        check_positive("new_width", new_width)?;
        check_positive("new_height", new_height)?;
        check_positive("new_depth", new_depth)?;

        log::trace!("resize {:?} to {:?}", self.dims(), [new_width, new_height, new_depth]);

        Ok(Self::from_fn(new_width, new_height, new_depth, |x, y, z| {
            self.get(x, y, z).unwrap_or_else(|| padding.borrow()).clone()
        }))
    }

    /// Returns a volume of the new shape, padded with the default value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an extent is zero.
    pub fn resize_default(
        &self,
        new_width: usize,
        new_height: usize,
        new_depth: usize,
    ) -> crate::Result<Self>
    where
        T: Default,
    {
        self.resize(new_width, new_height, new_depth, T::default())
    }

    /// Splits the volume into blocks of the given shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a group extent is zero or does not divide the
    /// corresponding volume extent.
    pub fn split(
        &self,
        group_width: usize,
        group_height: usize,
        group_depth: usize,
    ) -> crate::Result<Volume<Self>> {
        check_group("group_width", group_width, self.width)?;
        check_group("group_height", group_height, self.height)?;
        check_group("group_depth", group_depth, self.depth)?;

        let group = [group_width, group_height, group_depth];

        Ok(Volume::from_fn(
            self.width / group_width,
            self.height / group_height,
            self.depth / group_depth,
            |gx, gy, gz| self.region([gx * group[0], gy * group[1], gz * group[2]], group),
        ))
    }

    fn region(&self, origin: [usize; 3], dims: [usize; 3]) -> Self {
        let [x, y, z] = origin;
        let mut vec = Vec::with_capacity(dims.iter().product());

        for i in x..x + dims[0] {
            for j in y..y + dims[1] {
                vec.extend_from_slice(&self.lane(i, j)[z..z + dims[2]]);
            }
        }

        Self::from_parts(vec, dims)
    }
}

fn check_extent(axis: Axis, expected: usize, found: usize) -> crate::Result<()> {
    if expected != found {
        Err(GridError::mismatch(axis, expected, found))
    } else {
        Ok(())
    }
}
