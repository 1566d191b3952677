use crate::Scalar;

/// A dense element of the free tensor algebra over `width` letters,
/// truncated at word length `depth`.
///
/// Coefficients are stored degree-major: the empty word first, then all
/// length-1 words, then all length-2 words, and so on up to length `depth`.
/// Within a degree, words are ordered lexicographically, so the word
/// `(i_1, …, i_k)` (letters counted from zero) lives at
/// `offset(k) + i_1·width^(k-1) + … + i_k`.
///
/// This type exists to back [`LieElement`](crate::LieElement); it is not
/// part of the public API. Shape agreement between operands is the caller's
/// invariant and is only `debug_assert`ed here.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FreeTensor<T> {
    width: usize,
    depth: usize,
    coeffs: Vec<T>,
}

/// Number of words of the given length over `width` letters.
fn degree_len(width: usize, degree: usize) -> usize {
    let mut len = 1;
    for _ in 0..degree {
        len *= width;
    }
    len
}

/// Buffer position where words of the given length begin.
fn degree_offset(width: usize, degree: usize) -> usize {
    let mut offset = 0;
    let mut len = 1;
    for _ in 0..degree {
        offset += len;
        len *= width;
    }
    offset
}

/// Total coefficient count for a `(width, depth)` tensor.
pub(crate) fn buffer_len(width: usize, depth: usize) -> usize {
    degree_offset(width, depth + 1)
}

impl<T: Scalar> FreeTensor<T> {
    pub(crate) fn zero(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            coeffs: vec![T::zero(); buffer_len(width, depth)],
        }
    }

    /// The multiplicative unit: coefficient 1 on the empty word.
    pub(crate) fn unit(width: usize, depth: usize) -> Self {
        let mut tensor = Self::zero(width, depth);
        tensor.coeffs[0] = T::one();
        tensor
    }

    /// A tensor with the given degree-1 coefficients and zeros elsewhere.
    pub(crate) fn from_degree_one(coefficients: &[T], depth: usize) -> Self {
        let width = coefficients.len();
        let mut tensor = Self::zero(width, depth);
        tensor.coeffs[1..=width].copy_from_slice(coefficients);
        tensor
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        debug_assert_eq!((self.width, self.depth), (rhs.width, rhs.depth));
        Self {
            width: self.width,
            depth: self.depth,
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }

    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        debug_assert_eq!((self.width, self.depth), (rhs.width, rhs.depth));
        Self {
            width: self.width,
            depth: self.depth,
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }

    pub(crate) fn scale(&self, factor: T) -> Self {
        Self {
            width: self.width,
            depth: self.depth,
            coeffs: self.coeffs.iter().map(|&a| a * factor).collect(),
        }
    }

    /// Concatenation product, truncated at `depth`.
    ///
    /// The coefficient of an output word of length `a + b` accumulates the
    /// products of every split into a length-`a` prefix from `self` and a
    /// length-`b` suffix from `rhs`; splits whose total length exceeds the
    /// truncation are discarded.
    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        debug_assert_eq!((self.width, self.depth), (rhs.width, rhs.depth));
        let mut out = Self::zero(self.width, self.depth);
        for left_degree in 0..=self.depth {
            let left_off = degree_offset(self.width, left_degree);
            let left_len = degree_len(self.width, left_degree);
            for right_degree in 0..=(self.depth - left_degree) {
                let right_off = degree_offset(self.width, right_degree);
                let right_len = degree_len(self.width, right_degree);
                let out_off = degree_offset(self.width, left_degree + right_degree);
                for i in 0..left_len {
                    let a = self.coeffs[left_off + i];
                    if a.is_zero() {
                        continue;
                    }
                    let row = out_off + i * right_len;
                    for j in 0..right_len {
                        out.coeffs[row + j] = out.coeffs[row + j] + a * rhs.coeffs[right_off + j];
                    }
                }
            }
        }
        out
    }

    /// Exponential of a tensor with zero constant term.
    ///
    /// The argument is nilpotent under truncation, so the series
    /// `1 + X + X²/2! + …` terminates at degree `depth`.
    pub(crate) fn exp(&self) -> Self {
        debug_assert!(self.coeffs[0].is_zero());
        let mut acc = Self::unit(self.width, self.depth);
        let mut term = Self::unit(self.width, self.depth);
        for k in 1..=self.depth {
            // Small positive integer, so the conversion cannot fail.
            let k_scalar = T::from_usize(k).unwrap();
            term = term.mul(self).scale(k_scalar.recip());
            acc = acc.add(&term);
        }
        acc
    }

    /// Logarithm of a tensor with unit constant term.
    ///
    /// Evaluates `(X − 1) − (X − 1)²/2 + (X − 1)³/3 − …`, which terminates
    /// at degree `depth` because `X − 1` is nilpotent under truncation.
    pub(crate) fn log(&self) -> Self {
        let unit = Self::unit(self.width, self.depth);
        debug_assert!((self.coeffs[0] - T::one()).is_zero());
        let y = self.sub(&unit);
        let mut acc = Self::zero(self.width, self.depth);
        let mut power = unit;
        for k in 1..=self.depth {
            power = power.mul(&y);
            // Small positive integer, so the conversion cannot fail.
            let k_scalar = T::from_usize(k).unwrap();
            let coefficient = if k % 2 == 1 {
                k_scalar.recip()
            } else {
                -k_scalar.recip()
            };
            acc = acc.add(&power.scale(coefficient));
        }
        acc
    }
}
