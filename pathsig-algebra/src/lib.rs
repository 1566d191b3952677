//! Truncated free Lie algebra arithmetic for the pathsig crates.
//!
//! Provides [`LieElement`], an immutable element of a free Lie algebra of
//! fixed width (generator count) and depth (truncation order), together
//! with the iterated Chen–Baker–Campbell–Hausdorff composition ([`cbh`],
//! [`cbh_all`]) used to reduce a sequence of per-interval Lie increments
//! to a single log-signature.

mod cbh;
mod error;
mod lie;
mod scalar;
mod tensor;

pub use cbh::{cbh, cbh_all};
pub use error::AlgebraError;
pub use lie::LieElement;
pub use scalar::Scalar;
