use std::marker::PhantomData;

use pathsig_algebra::{AlgebraError, LieElement, Scalar, cbh_all};

use crate::{PathError, PiecewiseLiePath};

/// Output representation for exported coefficient vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorKind {
    /// The full flat coefficient buffer, zeros included.
    #[default]
    Dense,
    /// Only the nonzero entries, as `(index, value)` pairs.
    Sparse,
}

/// A coefficient vector exported under a [`VectorKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum CoefficientVector<T> {
    Dense(Vec<T>),
    Sparse(Vec<(usize, T)>),
}

/// Binds a (width, depth, scalar type, output representation) combination
/// and exposes both the path-level log-signature operation and the direct
/// CBH combination over it.
///
/// Construction is deterministic: equal parameters always yield an
/// equivalent, substitutable context. The scalar type is the `T`
/// parameter, so contexts of different precision are distinct types. A
/// context is an immutable value and safe to use concurrently from
/// independent call sites.
///
/// The two entry points, [`path_log_signature`](Self::path_log_signature)
/// and [`cbh`](Self::cbh), compute the same value for a path and its
/// elements taken in time order; they are exposed independently so callers
/// can cross-validate them.
///
/// # Examples
///
/// ```
/// use pathsig_streams::SignatureContext;
///
/// let ctx = SignatureContext::<f64>::new(2, 2).unwrap();
/// let x = ctx.lie(&[1.0, 0.0]).unwrap();
/// let y = ctx.lie(&[0.0, 1.0]).unwrap();
///
/// let combined = ctx.cbh(&[x, y]).unwrap();
/// assert_eq!(combined.degree_one(), &[1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureContext<T> {
    width: usize,
    depth: usize,
    vector_kind: VectorKind,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> SignatureContext<T> {
    /// Creates a context for the given algebra shape, with dense output.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidShape`] if `width` or `depth` is zero.
    pub fn new(width: usize, depth: usize) -> Result<Self, AlgebraError> {
        if width == 0 || depth == 0 {
            return Err(AlgebraError::InvalidShape { width, depth });
        }
        Ok(Self {
            width,
            depth,
            vector_kind: VectorKind::default(),
            _scalar: PhantomData,
        })
    }

    /// Returns the context with the given output representation.
    #[must_use]
    pub fn with_vector_kind(self, vector_kind: VectorKind) -> Self {
        Self {
            vector_kind,
            ..self
        }
    }

    /// Number of generators bound by this context.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Truncation depth bound by this context.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The output representation used by [`coefficients`](Self::coefficients).
    #[must_use]
    pub fn vector_kind(&self) -> VectorKind {
        self.vector_kind
    }

    /// Creates a Lie element of this context's shape from degree-1
    /// coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::WrongGeneratorCount`] if `degree_one` does
    /// not hold exactly `width` coefficients.
    pub fn lie(&self, degree_one: &[T]) -> Result<LieElement<T>, AlgebraError> {
        LieElement::new(degree_one, self.width, self.depth)
    }

    fn ensure_matches(&self, element: &LieElement<T>) -> Result<(), AlgebraError> {
        if element.width() == self.width && element.depth() == self.depth {
            Ok(())
        } else {
            Err(AlgebraError::DimensionMismatch {
                lhs_width: self.width,
                lhs_depth: self.depth,
                rhs_width: element.width(),
                rhs_depth: element.depth(),
            })
        }
    }

    /// The log-signature of a piecewise Lie path of this context's shape.
    ///
    /// Delegates to [`PiecewiseLiePath::log_signature`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] (wrapped in
    /// [`PathError::Algebra`]) if the path's shape differs from the
    /// context's, and any error of [`PiecewiseLiePath::log_signature`].
    pub fn path_log_signature(
        &self,
        path: &PiecewiseLiePath<T>,
        step_tolerance: f64,
    ) -> Result<LieElement<T>, PathError> {
        let Some((_, element)) = path.segments().next() else {
            // Unreachable: path construction rejects empty paths.
            return Err(PathError::Empty);
        };
        self.ensure_matches(element)?;
        path.log_signature(step_tolerance)
    }

    /// The iterated CBH combination of elements of this context's shape,
    /// in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyCombination`] for an empty slice and
    /// [`AlgebraError::DimensionMismatch`] if any element differs in shape
    /// from the context (both wrapped in [`PathError::Algebra`]). Shapes
    /// are checked before any arithmetic is performed.
    pub fn cbh(&self, elements: &[LieElement<T>]) -> Result<LieElement<T>, PathError> {
        if elements.is_empty() {
            return Err(AlgebraError::EmptyCombination.into());
        }
        for element in elements {
            self.ensure_matches(element)?;
        }
        Ok(cbh_all(elements)?)
    }

    /// Exports an element's coefficients under this context's
    /// [`VectorKind`].
    #[must_use]
    pub fn coefficients(&self, element: &LieElement<T>) -> CoefficientVector<T> {
        match self.vector_kind {
            VectorKind::Dense => CoefficientVector::Dense(element.dense_coefficients().to_vec()),
            VectorKind::Sparse => CoefficientVector::Sparse(element.sparse_coefficients()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Interval;

    #[test]
    fn new_rejects_degenerate_shapes() {
        assert_eq!(
            SignatureContext::<f64>::new(0, 3),
            Err(AlgebraError::InvalidShape { width: 0, depth: 3 })
        );
        assert_eq!(
            SignatureContext::<f64>::new(2, 0),
            Err(AlgebraError::InvalidShape { width: 2, depth: 0 })
        );
    }

    #[test]
    fn equal_parameters_yield_substitutable_contexts() {
        let a = SignatureContext::<f64>::new(3, 2).unwrap();
        let b = SignatureContext::<f64>::new(3, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lie_factory_binds_the_context_shape() {
        let ctx = SignatureContext::<f64>::new(3, 2).unwrap();
        let element = ctx.lie(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(element.width(), 3);
        assert_eq!(element.depth(), 2);

        assert!(matches!(
            ctx.lie(&[1.0, 2.0]),
            Err(AlgebraError::WrongGeneratorCount { .. })
        ));
    }

    #[test]
    fn foreign_elements_are_rejected() {
        let ctx = SignatureContext::<f64>::new(2, 2).unwrap();
        let foreign = LieElement::new(&[1.0, 0.0, 0.0], 3, 2).unwrap();
        assert!(matches!(
            ctx.cbh(&[foreign]),
            Err(PathError::Algebra(AlgebraError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn foreign_paths_are_rejected() {
        let ctx = SignatureContext::<f64>::new(2, 2).unwrap();
        let path = PiecewiseLiePath::new(vec![(
            Interval::new(0.0, 1.0).unwrap(),
            LieElement::new(&[1.0, 0.0, 0.0], 3, 2).unwrap(),
        )])
        .unwrap();
        assert!(matches!(
            ctx.path_log_signature(&path, 0.01),
            Err(PathError::Algebra(AlgebraError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn empty_cbh_is_rejected() {
        let ctx = SignatureContext::<f64>::new(2, 2).unwrap();
        assert_eq!(
            ctx.cbh(&[]),
            Err(PathError::Algebra(AlgebraError::EmptyCombination))
        );
    }

    #[test]
    fn coefficients_follow_the_vector_kind() {
        let ctx = SignatureContext::<f64>::new(2, 2).unwrap();
        let x = ctx.lie(&[1.0, 0.0]).unwrap();
        let y = ctx.lie(&[0.0, 1.0]).unwrap();
        let z = x.bracket(&y).unwrap();

        assert_eq!(
            ctx.coefficients(&z),
            CoefficientVector::Dense(vec![0.0, 0.0, 0.0, 1.0, -1.0, 0.0])
        );

        let sparse = ctx.with_vector_kind(VectorKind::Sparse);
        assert_eq!(
            sparse.coefficients(&z),
            CoefficientVector::Sparse(vec![(3, 1.0), (4, -1.0)])
        );
    }
}
