//! Piecewise-constant Lie paths and their log-signatures.
//!
//! A [`PiecewiseLiePath`] pairs time [`Interval`]s with constant
//! Lie-algebra increments; its log-signature is the iterated
//! Chen–Baker–Campbell–Hausdorff combination of those increments in time
//! order. A [`SignatureContext`] binds the algebra shape and output
//! representation and exposes both the path-level operation and the direct
//! CBH combination, so the two can be cross-checked.

mod context;
mod error;
mod interval;
mod path;

pub use context::{CoefficientVector, SignatureContext, VectorKind};
pub use error::{IntervalError, PathError};
pub use interval::Interval;
pub use path::PiecewiseLiePath;
