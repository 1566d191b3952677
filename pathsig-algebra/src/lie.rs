use crate::tensor::FreeTensor;
use crate::{AlgebraError, Scalar};

/// An element of the free Lie algebra over `width` generators, truncated at
/// bracket-nesting depth `depth`.
///
/// `LieElement` is an immutable value type: every operation returns a new
/// element and leaves its operands untouched, so values may be freely
/// cloned and shared across threads.
///
/// Internally the element is held as its embedding in the truncated free
/// tensor algebra. The degree-1 slots carry the generator coefficients and
/// higher-degree slots carry bracket contributions; sums, scalings, and
/// brackets of Lie elements never leave the Lie subspace, so the embedding
/// is closed under every exposed operation.
///
/// # Examples
///
/// ```
/// use pathsig_algebra::LieElement;
///
/// let x = LieElement::new(&[1.0, 0.0], 2, 2).unwrap();
/// let y = LieElement::new(&[0.0, 1.0], 2, 2).unwrap();
///
/// // [X, Y] has a single degree-2 contribution: the word (1,2) minus (2,1).
/// let z = x.bracket(&y).unwrap();
/// assert_eq!(z.dense_coefficients(), &[0.0, 0.0, 0.0, 1.0, -1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LieElement<T> {
    tensor: FreeTensor<T>,
}

impl<T: Scalar> LieElement<T> {
    /// Creates a Lie element from its degree-1 (generator) coefficients.
    ///
    /// Higher-degree components start at zero; they arise only through
    /// [`bracket`](Self::bracket) and CBH composition.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidShape`] if `width` or `depth` is zero,
    /// and [`AlgebraError::WrongGeneratorCount`] if `degree_one` does not
    /// hold exactly `width` coefficients.
    pub fn new(degree_one: &[T], width: usize, depth: usize) -> Result<Self, AlgebraError> {
        if width == 0 || depth == 0 {
            return Err(AlgebraError::InvalidShape { width, depth });
        }
        if degree_one.len() != width {
            return Err(AlgebraError::WrongGeneratorCount {
                expected: width,
                actual: degree_one.len(),
            });
        }
        Ok(Self {
            tensor: FreeTensor::from_degree_one(degree_one, depth),
        })
    }

    pub(crate) fn from_tensor(tensor: FreeTensor<T>) -> Self {
        Self { tensor }
    }

    pub(crate) fn tensor(&self) -> &FreeTensor<T> {
        &self.tensor
    }

    /// Number of generators of the underlying free Lie algebra.
    #[must_use]
    pub fn width(&self) -> usize {
        self.tensor.width()
    }

    /// Truncation depth of the underlying free Lie algebra.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tensor.depth()
    }

    /// Whether `other` belongs to the same algebra (equal width and depth).
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.width() == other.width() && self.depth() == other.depth()
    }

    pub(crate) fn ensure_compatible(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.is_compatible_with(other) {
            Ok(())
        } else {
            Err(AlgebraError::DimensionMismatch {
                lhs_width: self.width(),
                lhs_depth: self.depth(),
                rhs_width: other.width(),
                rhs_depth: other.depth(),
            })
        }
    }

    /// Coefficient-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the operands belong
    /// to algebras of different shape.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.ensure_compatible(other)?;
        Ok(Self {
            tensor: self.tensor.add(&other.tensor),
        })
    }

    /// The Lie bracket `[X, Y] = XY − YX`, truncated at `depth`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the operands belong
    /// to algebras of different shape.
    pub fn bracket(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.ensure_compatible(other)?;
        let xy = self.tensor.mul(&other.tensor);
        let yx = other.tensor.mul(&self.tensor);
        Ok(Self {
            tensor: xy.sub(&yx),
        })
    }

    /// Scalar multiplication.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self {
            tensor: self.tensor.scale(factor),
        }
    }

    /// The degree-1 (generator) coefficients.
    #[must_use]
    pub fn degree_one(&self) -> &[T] {
        &self.tensor.coeffs()[1..=self.width()]
    }

    /// The full coefficient buffer, degree-major, starting at degree 1.
    ///
    /// The first `width` entries are the generator coefficients; the
    /// remaining entries hold higher-degree contributions in lexicographic
    /// word order. This flat view is the caller-consumable representation
    /// for comparison or serialization.
    #[must_use]
    pub fn dense_coefficients(&self) -> &[T] {
        &self.tensor.coeffs()[1..]
    }

    /// The nonzero entries of [`dense_coefficients`](Self::dense_coefficients)
    /// as `(index, value)` pairs, in index order.
    #[must_use]
    pub fn sparse_coefficients(&self) -> Vec<(usize, T)> {
        self.dense_coefficients()
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(index, &value)| (index, value))
            .collect()
    }
}
