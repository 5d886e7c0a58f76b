use std::fmt::{self, Formatter};
use std::marker::PhantomData;
use std::mem;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::grid::Grid;
use crate::volume::Volume;

struct GridVisitor<T> {
    phantom: PhantomData<T>,
}

struct VolumeVisitor<T> {
    phantom: PhantomData<T>,
}

struct Slice<'a, T>(&'a Volume<T>, usize);

/// Returns the number of elements to reserve up front, bounded to 1 MiB since
/// the size hint comes from the input.
fn cautious<T>(inner: usize, size_hint: usize) -> usize {
    const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

    inner.saturating_mul(size_hint).min(MAX_PREALLOC_BYTES / mem::size_of::<T>().max(1))
}

/// Checks that the dimensions of an inner sequence match the first one.
fn check_dims<E: Error>(found: &[usize], expect: &[usize]) -> Result<(), E> {
    if found == expect {
        Ok(())
    } else {
        Err(E::custom(format!("invalid dimensions {found:?}, expected {expect:?}")))
    }
}

impl<'a, T: Deserialize<'a>> Visitor<'a> for GridVisitor<T> {
    type Value = Grid<T>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a sequence of equally long sequences")
    }

    fn visit_seq<A: SeqAccess<'a>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vec = Vec::new();
        let mut height = 0;
        let mut width = 0;

        let size_hint = seq.size_hint().unwrap_or(0);

        while let Some(mut value) = seq.next_element::<Vec<T>>()? {
            if width == 0 {
                vec.reserve(cautious::<T>(value.len(), size_hint));
                height = value.len();
            } else {
                check_dims::<A::Error>(&[value.len()], &[height])?;
            }

            vec.append(&mut value);
            width += 1;
        }

        Ok(Grid::from_parts(vec, [width, height]))
    }
}

impl<'a, T: Deserialize<'a>> Visitor<'a> for VolumeVisitor<T> {
    type Value = Volume<T>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a sequence of equally shaped grids")
    }

    fn visit_seq<A: SeqAccess<'a>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vec = Vec::new();
        let mut dims = [0; 2];
        let mut width = 0;

        let size_hint = seq.size_hint().unwrap_or(0);

        while let Some(value) = seq.next_element::<Grid<T>>()? {
            if width == 0 {
                vec.reserve(cautious::<T>(value.len(), size_hint));
                dims = value.dims();
            } else {
                check_dims::<A::Error>(&value.dims(), &dims)?;
            }

            vec.append(&mut value.into_vec());
            width += 1;
        }

        Ok(Volume::from_parts(vec, [width, dims[0], dims[1]]))
    }
}

impl<'a, T: Deserialize<'a>> Deserialize<'a> for Grid<T> {
    fn deserialize<R: Deserializer<'a>>(deserializer: R) -> Result<Self, R::Error> {
        deserializer.deserialize_seq(GridVisitor { phantom: PhantomData })
    }
}

impl<'a, T: Deserialize<'a>> Deserialize<'a> for Volume<T> {
    fn deserialize<R: Deserializer<'a>>(deserializer: R) -> Result<Self, R::Error> {
        deserializer.deserialize_seq(VolumeVisitor { phantom: PhantomData })
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<R: Serializer>(&self, serializer: R) -> Result<R::Ok, R::Error> {
        let mut seq = serializer.serialize_seq(Some(self.width))?;

        for x in 0..self.width {
            seq.serialize_element(self.slice_x(x))?;
        }

        seq.end()
    }
}

impl<T: Serialize> Serialize for Slice<'_, T> {
    fn serialize<R: Serializer>(&self, serializer: R) -> Result<R::Ok, R::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.height))?;

        for y in 0..self.0.height {
            seq.serialize_element(self.0.lane(self.1, y))?;
        }

        seq.end()
    }
}

impl<T: Serialize> Serialize for Volume<T> {
    fn serialize<R: Serializer>(&self, serializer: R) -> Result<R::Ok, R::Error> {
        let mut seq = serializer.serialize_seq(Some(self.width))?;

        for x in 0..self.width {
            seq.serialize_element(&Slice(self, x))?;
        }

        seq.end()
    }
}
