use thiserror::Error;

use crate::shape::Axis;

/// Error type for array operations with unmet preconditions.
///
/// Every operation checks its preconditions before allocating, so an error
/// never comes with a partial result.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    /// A scalar parameter is zero or fails a divisibility requirement.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the violated requirement.
        reason: String,
    },

    /// Two arrays disagree on an extent they are required to share.
    #[error("shape mismatch along {axis}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// First axis on which the arrays disagree.
        axis: Axis,
        /// Extent required by the first operand.
        expected: usize,
        /// Extent of the second operand.
        found: usize,
    },

    /// An origin, extent or index falls outside the array bounds.
    #[error("`{name}` out of range: the bound is {bound} but the value is {value}")]
    IndexOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value passed by the caller.
        value: usize,
        /// Largest value accepted for the parameter.
        bound: usize,
    },

    /// A square-only operation received a non-square array.
    #[error("expected a square matrix, found {width}x{height}")]
    NotSquare {
        /// Width of the array.
        width: usize,
        /// Height of the array.
        height: usize,
    },
}

/// Result type for array operations.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::InvalidArgument { name, reason: reason.into() };

        log::debug!("{err}");
        err
    }

    pub(crate) fn mismatch(axis: Axis, expected: usize, found: usize) -> Self {
        let err = Self::ShapeMismatch { axis, expected, found };

        log::debug!("{err}");
        err
    }

    pub(crate) fn out_of_range(name: &'static str, value: usize, bound: usize) -> Self {
        let err = Self::IndexOutOfRange { name, value, bound };

        log::debug!("{err}");
        err
    }
}

/// Checks that an extent is non-zero.
pub(crate) fn check_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(GridError::invalid(name, "must be positive"))
    } else {
        Ok(())
    }
}

/// Checks that the half-open region `[origin, origin + extent)` fits into `size`.
pub(crate) fn check_region(
    origin: (&'static str, usize),
    extent: (&'static str, usize),
    size: usize,
) -> Result<()> {
    if origin.1 > size {
        return Err(GridError::out_of_range(origin.0, origin.1, size));
    }

    if extent.1 > size - origin.1 {
        return Err(GridError::out_of_range(extent.0, extent.1, size - origin.1));
    }

    Ok(())
}

/// Checks that `size` is a multiple of a positive group extent.
pub(crate) fn check_group(name: &'static str, group: usize, size: usize) -> Result<()> {
    check_positive(name, group)?;

    if size % group != 0 {
        Err(GridError::invalid(name, format!("{size} is not a multiple of {group}")))
    } else {
        Ok(())
    }
}
