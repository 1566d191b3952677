use thiserror::Error;

/// Errors that may occur when constructing or combining algebra values.
///
/// All conditions are detected eagerly, before any arithmetic is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The requested algebra shape is degenerate.
    ///
    /// A free Lie algebra needs at least one generator and a truncation
    /// depth of at least one.
    #[error("width and depth must each be at least 1 (got width {width}, depth {depth})")]
    InvalidShape { width: usize, depth: usize },

    /// A degree-1 coefficient buffer does not match the generator count.
    #[error("expected {expected} degree-1 coefficients, got {actual}")]
    WrongGeneratorCount { expected: usize, actual: usize },

    /// The operands belong to algebras of different shape.
    ///
    /// Elements are only combinable when they share both width and depth.
    /// This is always a caller bug.
    #[error(
        "operands belong to different algebras: \
         width {lhs_width}, depth {lhs_depth} vs width {rhs_width}, depth {rhs_depth}"
    )]
    DimensionMismatch {
        lhs_width: usize,
        lhs_depth: usize,
        rhs_width: usize,
        rhs_depth: usize,
    },

    /// A CBH combination was requested over zero elements.
    ///
    /// The log-signature of an empty path is mathematically undefined; it
    /// is not the identity element.
    #[error("cannot combine an empty sequence of Lie elements")]
    EmptyCombination,
}
