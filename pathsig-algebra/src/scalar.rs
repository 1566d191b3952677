use std::fmt::Debug;

use num_traits::{Float, FromPrimitive};

/// The coefficient field for algebra values.
///
/// Implemented for any floating-point type providing [`Float`] and
/// [`FromPrimitive`], in particular `f32` (single precision) and `f64`
/// (double precision). The scalar kind of a computation is fixed by this
/// type parameter rather than a runtime tag, so elements of different
/// precisions cannot be mixed by construction.
pub trait Scalar: Float + FromPrimitive + Debug {}

impl<T: Float + FromPrimitive + Debug> Scalar for T {}
