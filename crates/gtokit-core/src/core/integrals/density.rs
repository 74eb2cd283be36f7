//! Orbital spaces and densities defined over them.

use crate::core::error::BasisSetError;
use crate::core::models::ao_basis::AOBasisSet;

/// A vector space an electronic quantity can be expressed in.
///
/// The only structure required here is a dimension and comparability, so
/// that densities over two spaces can check they actually live in the same
/// one before being combined.
pub trait OrbitalSpace: PartialEq {
    /// Dimension of the space.
    fn len(&self) -> usize;

    /// Whether the space has dimension zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The atomic-orbital space spanned by a basis set, one dimension per AO.
impl OrbitalSpace for AOBasisSet {
    fn len(&self) -> usize {
        self.n_aos()
    }
}

/// A density: one weight per dimension of an orbital space.
///
/// The space travels with the weights, so two densities compare equal only
/// when both their spaces and their weights match.
#[derive(Debug, Clone, PartialEq)]
pub struct Density<S: OrbitalSpace> {
    space: S,
    weights: Vec<f64>,
}

impl<S: OrbitalSpace> Density<S> {
    /// Creates a density from a space and one weight per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the weight count does
    /// not match the space's dimension.
    pub fn new(space: S, weights: Vec<f64>) -> Result<Self, BasisSetError> {
        if weights.len() != space.len() {
            return Err(BasisSetError::ShapeMismatch {
                what: "density weights",
                expected: space.len(),
                actual: weights.len(),
            });
        }
        Ok(Self { space, weights })
    }

    /// The space this density lives in.
    pub fn space(&self) -> &S {
        &self.space
    }

    /// All weights, in the space's dimension order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The weight of one dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `i >= space.len()`.
    pub fn weight(&self, i: usize) -> Result<f64, BasisSetError> {
        self.weights
            .get(i)
            .copied()
            .ok_or(BasisSetError::IndexOutOfRange {
                what: "density weight",
                index: i,
                len: self.weights.len(),
            })
    }
}
