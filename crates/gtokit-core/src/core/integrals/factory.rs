//! The factory seam integral engines plug into.

use crate::core::error::BasisSetError;
use itertools::Itertools;

/// A source of integral blocks over shells of a basis set.
///
/// A factory is handed one global shell index per tensor mode and returns
/// the corresponding block, one buffer per requested component. The
/// buffers borrow from the factory and stay valid until its next call,
/// so a caller that needs two blocks at once copies the first one out.
pub trait IntegralFactory {
    /// Computes the integral block for one shell tuple.
    ///
    /// # Arguments
    ///
    /// * `shells` - One global shell index per tensor mode.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] for an unknown shell
    /// index and [`BasisSetError::Unsupported`] when the factory cannot
    /// produce the requested block.
    fn compute<'a>(&'a mut self, shells: &[usize]) -> Result<Vec<&'a [f64]>, BasisSetError>;
}

/// Enumerates every shell tuple of the given arity, in row-major order.
///
/// This is the loop structure a driver runs an [`IntegralFactory`] over: a
/// basis with `n` shells and a two-mode operator visits `n²` tuples.
pub fn shell_tuples(n_shells: usize, arity: usize) -> impl Iterator<Item = Vec<usize>> {
    itertools::repeat_n(0..n_shells, arity).multi_cartesian_product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_cover_the_full_cartesian_product() {
        let tuples: Vec<Vec<usize>> = shell_tuples(3, 2).collect();
        assert_eq!(tuples.len(), 9);
        assert_eq!(tuples[0], vec![0, 0]);
        assert_eq!(tuples[1], vec![0, 1]);
        assert_eq!(tuples[8], vec![2, 2]);
    }

    #[test]
    fn four_mode_tuples_scale_as_the_fourth_power() {
        assert_eq!(shell_tuples(2, 4).count(), 16);
    }

    #[test]
    fn zero_shells_yield_no_tuples() {
        assert_eq!(shell_tuples(0, 2).count(), 0);
    }
}
