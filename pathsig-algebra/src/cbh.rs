use crate::{AlgebraError, LieElement, Scalar};

/// The truncated Chen–Baker–Campbell–Hausdorff composition of two elements.
///
/// Computes `log(exp(X) · exp(Y))` in the truncated tensor representation.
/// Under truncation this equals the Baker–Campbell–Hausdorff series
///
/// ```text
/// X + Y + ½[X,Y] + 1/12([X,[X,Y]] − [Y,[X,Y]]) + …
/// ```
///
/// with every term of bracket-nesting depth ≤ `depth` retained, so the
/// result agrees (up to floating-point rounding) with any path-level
/// computation performed at the same depth. CBH is non-commutative:
/// `cbh(x, y)` and `cbh(y, x)` differ whenever `[X, Y] ≠ 0`.
///
/// # Errors
///
/// Returns [`AlgebraError::DimensionMismatch`] if the operands belong to
/// algebras of different shape.
pub fn cbh<T: Scalar>(x: &LieElement<T>, y: &LieElement<T>) -> Result<LieElement<T>, AlgebraError> {
    x.ensure_compatible(y)?;
    let product = x.tensor().exp().mul(&y.tensor().exp());
    Ok(LieElement::from_tensor(product.log()))
}

/// The iterated CBH composition of a sequence of elements, in order.
///
/// Folds [`cbh`] from the left: the accumulator starts at the first
/// element, then absorbs each subsequent element in turn. The input order
/// is the concatenation order of the corresponding path segments, so
/// callers must pass elements in ascending time order.
///
/// A single element is returned unchanged, exactly: composing one segment
/// performs no arithmetic.
///
/// # Errors
///
/// Returns [`AlgebraError::EmptyCombination`] for an empty slice and
/// [`AlgebraError::DimensionMismatch`] if any element differs in shape
/// from the first. Shapes are checked before any arithmetic is performed.
///
/// # Examples
///
/// ```
/// use pathsig_algebra::{cbh_all, LieElement};
///
/// let x = LieElement::new(&[1.0, 0.0], 2, 2).unwrap();
/// let y = LieElement::new(&[0.0, 1.0], 2, 2).unwrap();
///
/// // X + Y + ½[X, Y] at depth 2.
/// let combined = cbh_all(&[x, y]).unwrap();
/// assert_eq!(combined.dense_coefficients(), &[1.0, 1.0, 0.0, 0.5, -0.5, 0.0]);
/// ```
pub fn cbh_all<T: Scalar>(elements: &[LieElement<T>]) -> Result<LieElement<T>, AlgebraError> {
    let Some((first, rest)) = elements.split_first() else {
        return Err(AlgebraError::EmptyCombination);
    };
    for element in rest {
        first.ensure_compatible(element)?;
    }
    let mut combined = first.clone();
    for element in rest {
        combined = cbh(&combined, element)?;
    }
    Ok(combined)
}
