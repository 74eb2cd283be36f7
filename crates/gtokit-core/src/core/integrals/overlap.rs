//! A reference overlap factory for s shells.
//!
//! Uses the Gaussian product theorem in closed form, which exists only for
//! `l = 0`; anything with angular structure is the job of a real integral
//! engine behind the same [`IntegralFactory`] seam.

use super::factory::IntegralFactory;
use crate::core::error::BasisSetError;
use crate::core::models::ao_basis::AOBasisSet;
use std::f64::consts::PI;

/// Computes overlap blocks `⟨μ|ν⟩` between s shells of one basis set.
pub struct OverlapFactory<'b> {
    basis: &'b AOBasisSet,
    buffers: Vec<Vec<f64>>,
}

impl<'b> OverlapFactory<'b> {
    /// Creates a factory over the given basis set.
    pub fn new(basis: &'b AOBasisSet) -> Self {
        Self {
            basis,
            buffers: Vec::new(),
        }
    }

    fn check_s_shell(&self, shell: usize) -> Result<(), BasisSetError> {
        let l = *self.basis.shell(shell)?.l()?;
        if l != 0 {
            return Err(BasisSetError::Unsupported {
                what: "overlap factory",
                detail: format!("shell {shell} has l = {l}, only s shells are implemented"),
            });
        }
        Ok(())
    }

    /// Overlap of two s shells by the Gaussian product theorem.
    fn s_overlap(&self, bra: usize, ket: usize) -> Result<f64, BasisSetError> {
        let a = self.basis.shell(bra)?;
        let b = self.basis.shell(ket)?;
        let cg_a = a.contracted_gaussian()?;
        let cg_b = b.contracted_gaussian()?;
        let r2 = (cg_a.center()? - cg_b.center()?).norm_squared();

        let mut total = 0.0;
        for pa in cg_a.iter() {
            let (ca, alpha) = (*pa.coefficient()?, *pa.exponent()?);
            for pb in cg_b.iter() {
                let (cb, beta) = (*pb.coefficient()?, *pb.exponent()?);
                let p = alpha + beta;
                total += ca * cb * (PI / p).powf(1.5) * (-alpha * beta / p * r2).exp();
            }
        }
        Ok(total)
    }
}

impl IntegralFactory for OverlapFactory<'_> {
    fn compute<'a>(&'a mut self, shells: &[usize]) -> Result<Vec<&'a [f64]>, BasisSetError> {
        let [bra, ket] = shells else {
            return Err(BasisSetError::Unsupported {
                what: "overlap factory",
                detail: format!("expected 2 shell indices, got {}", shells.len()),
            });
        };
        self.check_s_shell(*bra)?;
        self.check_s_shell(*ket)?;
        let value = self.s_overlap(*bra, *ket)?;
        self.buffers.clear();
        self.buffers.push(vec![value]);
        Ok(self.buffers.iter().map(Vec::as_slice).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::integrals::factory::shell_tuples;
    use crate::core::models::atomic::AtomicBasisSet;
    use crate::core::models::shell::Purity;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn s_center(x: f64, coefficients: &[f64], exponents: &[f64]) -> AtomicBasisSet {
        let mut abs = AtomicBasisSet::new("test", 1, Point3::new(x, 0.0, 0.0));
        abs.add_shell(Purity::Spherical, 0, coefficients, exponents)
            .unwrap();
        abs
    }

    fn two_s_basis(separation: f64) -> AOBasisSet {
        let mut bs = AOBasisSet::new();
        bs.add_atomic_basis_set(&s_center(0.0, &[1.0], &[0.5])).unwrap();
        bs.add_atomic_basis_set(&s_center(separation, &[1.0], &[0.5]))
            .unwrap();
        bs
    }

    #[test]
    fn self_overlap_of_a_unit_s_primitive_is_pi_to_three_halves() {
        let bs = two_s_basis(1.0);
        let mut factory = OverlapFactory::new(&bs);
        // α + β = 1, same center.
        let block = factory.compute(&[0, 0]).unwrap();
        assert_eq!(block.len(), 1);
        assert_relative_eq!(block[0][0], PI.powf(1.5), epsilon = 1e-12);
    }

    #[test]
    fn overlap_is_symmetric_and_decays_with_separation() {
        let bs = two_s_basis(1.0);
        let far = two_s_basis(3.0);
        let mut factory = OverlapFactory::new(&bs);
        let ab = factory.compute(&[0, 1]).unwrap()[0][0];
        let ba = factory.compute(&[1, 0]).unwrap()[0][0];
        assert_relative_eq!(ab, ba);
        let mut far_factory = OverlapFactory::new(&far);
        let far_ab = far_factory.compute(&[0, 1]).unwrap()[0][0];
        assert!(far_ab < ab);
        // Closed form: (π/p)^1.5 · exp(−αβ/p · R²) with α = β = 0.5.
        assert_relative_eq!(ab, PI.powf(1.5) * (-0.25f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn contraction_overlap_sums_primitive_pairs() {
        let mut bs = AOBasisSet::new();
        bs.add_atomic_basis_set(&s_center(0.0, &[0.3, 0.7], &[1.0, 0.25]))
            .unwrap();
        let mut factory = OverlapFactory::new(&bs);
        let got = factory.compute(&[0, 0]).unwrap()[0][0];
        let pairs = [(0.3, 1.0), (0.7, 0.25)];
        let mut expected = 0.0;
        for (ca, aa) in pairs {
            for (cb, ab) in pairs {
                expected += ca * cb * (PI / (aa + ab)).powf(1.5);
            }
        }
        assert_relative_eq!(got, expected, epsilon = 1e-12);
    }

    #[test]
    fn drives_over_every_shell_tuple() {
        let bs = two_s_basis(1.4);
        let mut factory = OverlapFactory::new(&bs);
        let mut values = Vec::new();
        for tuple in shell_tuples(bs.n_shells(), 2) {
            values.push(factory.compute(&tuple).unwrap()[0][0]);
        }
        assert_eq!(values.len(), 4);
        assert_relative_eq!(values[1], values[2]);
        assert_relative_eq!(values[0], values[3]);
    }

    #[test]
    fn rejects_wrong_arity_and_non_s_shells() {
        let mut bs = two_s_basis(1.0);
        let mut p_center = AtomicBasisSet::new("test", 6, Point3::origin());
        p_center
            .add_shell(Purity::Spherical, 1, &[1.0], &[0.8])
            .unwrap();
        bs.add_atomic_basis_set(&p_center).unwrap();

        let mut factory = OverlapFactory::new(&bs);
        assert!(matches!(
            factory.compute(&[0]).unwrap_err(),
            BasisSetError::Unsupported { .. }
        ));
        assert!(matches!(
            factory.compute(&[0, 2]).unwrap_err(),
            BasisSetError::Unsupported { .. }
        ));
        assert!(matches!(
            factory.compute(&[0, 9]).unwrap_err(),
            BasisSetError::IndexOutOfRange { .. }
        ));
    }
}
