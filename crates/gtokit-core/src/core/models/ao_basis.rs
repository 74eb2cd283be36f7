use super::atomic::{AbsParts, AbsPartsMut, AtomicBasisSet, AtomicBasisSetView, AtomicBasisSetViewMut};
use super::contracted::{ContractedGaussianView, ContractedGaussianViewMut};
use super::primitive::{PrimitiveView, PrimitiveViewMut};
use super::shell::{Purity, ShellView, ShellViewMut};
use crate::core::error::BasisSetError;
use nalgebra::Point3;
use std::ops::{Add, AddAssign, Range};
use tracing::debug;

/// The full basis set of a chemical system: every center's shells flattened
/// into structure-of-arrays storage.
///
/// Appending a center copies its data into contiguous arrays; afterwards
/// the original and the stored copy are independent. Centers, shells,
/// primitives, and atomic orbitals all carry global indices, connected by
/// monotone offset tables that give O(1) forward slicing and O(log n)
/// reverse lookup.
///
/// Unlike the lower levels of the hierarchy this type has no null state: a
/// default-constructed basis set is simply empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AOBasisSet {
    store: FlatBasisStore,
}

/// Structure-of-arrays storage behind [`AOBasisSet`].
///
/// Per-center, per-shell, and per-primitive arrays run in parallel;
/// `shell_offsets`, `primitive_offsets`, and `ao_offsets` hold each
/// center's/shell's first global index in the next level down. The offset
/// arrays are monotone by construction, which the reverse lookups rely on.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct FlatBasisStore {
    // Per center.
    names: Vec<String>,
    atomic_numbers: Vec<u32>,
    centers: Vec<Point3<f64>>,
    shells_per_center: Vec<usize>,
    shell_offsets: Vec<usize>,
    // Per shell.
    purities: Vec<Purity>,
    angular_momenta: Vec<u32>,
    primitives_per_shell: Vec<usize>,
    primitive_offsets: Vec<usize>,
    ao_offsets: Vec<usize>,
    // Per primitive.
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
}

impl FlatBasisStore {
    fn n_centers(&self) -> usize {
        self.names.len()
    }

    fn n_shells(&self) -> usize {
        self.purities.len()
    }

    fn n_primitives(&self) -> usize {
        self.coefficients.len()
    }

    fn n_aos(&self) -> usize {
        match self.ao_offsets.last() {
            Some(&last) => {
                let i = self.ao_offsets.len() - 1;
                last + self.purities[i].ao_count(self.angular_momenta[i])
            }
            None => 0,
        }
    }

    /// Copies one center's data to the end of the arrays. The caller has
    /// already validated the parts, so this cannot fail.
    fn push_center(&mut self, parts: &AbsParts<'_>) {
        self.names.push(parts.name.to_owned());
        self.atomic_numbers.push(*parts.atomic_number);
        self.centers.push(*parts.center);
        self.shell_offsets.push(self.purities.len());
        self.shells_per_center.push(parts.purities.len());
        for i in 0..parts.purities.len() {
            let off = parts.primitive_offsets[i] - parts.primitive_base;
            let count = parts.primitives_per_shell[i];
            self.ao_offsets.push(self.n_aos());
            self.purities.push(parts.purities[i]);
            self.angular_momenta.push(parts.angular_momenta[i]);
            self.primitives_per_shell.push(count);
            self.primitive_offsets.push(self.coefficients.len());
            self.coefficients
                .extend_from_slice(&parts.coefficients[off..off + count]);
            self.exponents
                .extend_from_slice(&parts.exponents[off..off + count]);
        }
    }

    fn shell_range(&self, center: usize) -> Range<usize> {
        let start = self.shell_offsets[center];
        start..start + self.shells_per_center[center]
    }

    /// Global primitive index range of one center, handling centers with no
    /// shells.
    fn primitive_span(&self, center: usize) -> Range<usize> {
        let shells = self.shell_range(center);
        if shells.is_empty() {
            let at = if shells.start < self.primitive_offsets.len() {
                self.primitive_offsets[shells.start]
            } else {
                self.coefficients.len()
            };
            return at..at;
        }
        let start = self.primitive_offsets[shells.start];
        let last = shells.end - 1;
        start..self.primitive_offsets[last] + self.primitives_per_shell[last]
    }

    fn center_parts(&self, center: usize) -> AbsParts<'_> {
        let shells = self.shell_range(center);
        let prims = self.primitive_span(center);
        AbsParts {
            name: &self.names[center],
            atomic_number: &self.atomic_numbers[center],
            center: &self.centers[center],
            purities: &self.purities[shells.clone()],
            angular_momenta: &self.angular_momenta[shells.clone()],
            primitives_per_shell: &self.primitives_per_shell[shells.clone()],
            primitive_offsets: &self.primitive_offsets[shells],
            coefficients: &self.coefficients[prims.clone()],
            exponents: &self.exponents[prims.clone()],
            primitive_base: prims.start,
        }
    }
}

/// Locates the interval of a monotone offset array containing `idx`.
///
/// Where several intervals start at the same offset (empty ones), the
/// non-empty interval owning `idx` is the last of them, which is exactly
/// the one the partition point lands on.
fn interval_of(offsets: &[usize], idx: usize) -> usize {
    offsets.partition_point(|&o| o <= idx).saturating_sub(1)
}

impl AOBasisSet {
    /// Creates an empty basis set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies one center's basis functions into the flattened storage.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if `abs` is null. An empty
    /// (but non-null) center is accepted and occupies a slot with no
    /// shells.
    pub fn add_atomic_basis_set(&mut self, abs: &AtomicBasisSet) -> Result<(), BasisSetError> {
        let view = abs.view();
        let parts = view.parts().ok_or(BasisSetError::Uninitialized {
            what: "atomic basis set",
        })?;
        self.store.push_center(&parts);
        debug!(
            name = parts.name,
            atomic_number = *parts.atomic_number,
            n_shells = parts.purities.len(),
            "added basis-set center"
        );
        Ok(())
    }

    /// Number of centers.
    pub fn size(&self) -> usize {
        self.store.n_centers()
    }

    /// Whether the basis set holds no centers.
    pub fn is_empty(&self) -> bool {
        self.store.n_centers() == 0
    }

    /// Total number of shells across all centers.
    pub fn n_shells(&self) -> usize {
        self.store.n_shells()
    }

    /// Total number of primitives across all centers.
    pub fn n_primitives(&self) -> usize {
        self.store.n_primitives()
    }

    /// Total number of atomic orbitals across all centers.
    pub fn n_aos(&self) -> usize {
        self.store.n_aos()
    }

    /// Largest total angular momentum among all shells.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::NoShells`] when no center carries a shell.
    pub fn max_l(&self) -> Result<u32, BasisSetError> {
        self.store
            .angular_momenta
            .iter()
            .copied()
            .max()
            .ok_or(BasisSetError::NoShells {
                what: "ao basis set",
            })
    }

    /// Global shell index range of the `center`-th center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `center >= size()`.
    pub fn shell_range(&self, center: usize) -> Result<Range<usize>, BasisSetError> {
        self.check_center(center)?;
        Ok(self.store.shell_range(center))
    }

    /// Global primitive index range of the `shell`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `shell >= n_shells()`.
    pub fn primitive_range(&self, shell: usize) -> Result<Range<usize>, BasisSetError> {
        self.check_shell(shell)?;
        let start = self.store.primitive_offsets[shell];
        Ok(start..start + self.store.primitives_per_shell[shell])
    }

    /// Global atomic-orbital index range of the `shell`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `shell >= n_shells()`.
    pub fn ao_range(&self, shell: usize) -> Result<Range<usize>, BasisSetError> {
        self.check_shell(shell)?;
        let start = self.store.ao_offsets[shell];
        let count = self.store.purities[shell].ao_count(self.store.angular_momenta[shell]);
        Ok(start..start + count)
    }

    /// Index of the center owning the `shell`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `shell >= n_shells()`.
    pub fn shell_to_center(&self, shell: usize) -> Result<usize, BasisSetError> {
        self.check_shell(shell)?;
        let center = interval_of(&self.store.shell_offsets, shell);
        if !self.store.shell_range(center).contains(&shell) {
            return Err(BasisSetError::Internal(format!(
                "shell {shell} maps outside center {center}"
            )));
        }
        Ok(center)
    }

    /// Index of the shell owning the `primitive`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if
    /// `primitive >= n_primitives()`.
    pub fn primitive_to_shell(&self, primitive: usize) -> Result<usize, BasisSetError> {
        self.check_primitive(primitive)?;
        let shell = interval_of(&self.store.primitive_offsets, primitive);
        let start = self.store.primitive_offsets[shell];
        if !(start..start + self.store.primitives_per_shell[shell]).contains(&primitive) {
            return Err(BasisSetError::Internal(format!(
                "primitive {primitive} maps outside shell {shell}"
            )));
        }
        Ok(shell)
    }

    /// Index of the center owning the `primitive`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if
    /// `primitive >= n_primitives()`.
    pub fn primitive_to_center(&self, primitive: usize) -> Result<usize, BasisSetError> {
        self.shell_to_center(self.primitive_to_shell(primitive)?)
    }

    /// Index of the shell contributing the `ao`-th atomic orbital.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `ao >= n_aos()`.
    pub fn ao_to_shell(&self, ao: usize) -> Result<usize, BasisSetError> {
        if ao >= self.n_aos() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "atomic orbital",
                index: ao,
                len: self.n_aos(),
            });
        }
        Ok(interval_of(&self.store.ao_offsets, ao))
    }

    /// Returns a read-only view of the `center`-th center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `center >= size()`.
    pub fn atomic_basis_set(&self, center: usize) -> Result<AtomicBasisSetView<'_>, BasisSetError> {
        self.check_center(center)?;
        Ok(AtomicBasisSetView::from_parts(self.store.center_parts(center)))
    }

    /// Returns a mutable view of the `center`-th center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `center >= size()`.
    pub fn atomic_basis_set_mut(
        &mut self,
        center: usize,
    ) -> Result<AtomicBasisSetViewMut<'_>, BasisSetError> {
        self.check_center(center)?;
        let shells = self.store.shell_range(center);
        let prims = self.store.primitive_span(center);
        let s = &mut self.store;
        Ok(AtomicBasisSetViewMut::from_parts(AbsPartsMut {
            name: &mut s.names[center],
            atomic_number: &mut s.atomic_numbers[center],
            center: &mut s.centers[center],
            purities: &mut s.purities[shells.clone()],
            angular_momenta: &mut s.angular_momenta[shells.clone()],
            primitives_per_shell: &s.primitives_per_shell[shells.clone()],
            primitive_offsets: &s.primitive_offsets[shells],
            coefficients: &mut s.coefficients[prims.clone()],
            exponents: &mut s.exponents[prims.clone()],
            primitive_base: prims.start,
        }))
    }

    /// Returns a read-only view of the `shell`-th shell (global index).
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `shell >= n_shells()`.
    pub fn shell(&self, shell: usize) -> Result<ShellView<'_>, BasisSetError> {
        let center = self.shell_to_center(shell)?;
        let s = &self.store;
        let off = s.primitive_offsets[shell];
        let count = s.primitives_per_shell[shell];
        let cg = ContractedGaussianView::from_parts(
            &s.coefficients[off..off + count],
            &s.exponents[off..off + count],
            &s.centers[center],
        )?;
        Ok(ShellView::from_parts(
            &s.purities[shell],
            &s.angular_momenta[shell],
            cg,
        ))
    }

    /// Returns a mutable view of the `shell`-th shell (global index).
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if `shell >= n_shells()`.
    pub fn shell_mut(&mut self, shell: usize) -> Result<ShellViewMut<'_>, BasisSetError> {
        let center = self.shell_to_center(shell)?;
        let s = &mut self.store;
        let off = s.primitive_offsets[shell];
        let count = s.primitives_per_shell[shell];
        let cg = ContractedGaussianViewMut::from_parts(
            &mut s.coefficients[off..off + count],
            &mut s.exponents[off..off + count],
            &mut s.centers[center],
        )?;
        Ok(ShellViewMut::from_parts(
            &mut s.purities[shell],
            &mut s.angular_momenta[shell],
            cg,
        ))
    }

    /// Returns a read-only view of the `primitive`-th primitive (global
    /// index).
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if
    /// `primitive >= n_primitives()`.
    pub fn primitive(&self, primitive: usize) -> Result<PrimitiveView<'_>, BasisSetError> {
        let center = self.primitive_to_center(primitive)?;
        let s = &self.store;
        Ok(PrimitiveView::from_parts(
            &s.coefficients[primitive],
            &s.exponents[primitive],
            &s.centers[center],
        ))
    }

    /// Returns a mutable view of the `primitive`-th primitive (global
    /// index).
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::IndexOutOfRange`] if
    /// `primitive >= n_primitives()`.
    pub fn primitive_mut(&mut self, primitive: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        let center = self.primitive_to_center(primitive)?;
        let s = &mut self.store;
        Ok(PrimitiveViewMut::from_parts(
            &mut s.coefficients[primitive],
            &mut s.exponents[primitive],
            &mut s.centers[center],
        ))
    }

    /// Iterates over read-only center views, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = AtomicBasisSetView<'_>> {
        (0..self.size()).filter_map(move |i| self.atomic_basis_set(i).ok())
    }

    fn check_center(&self, center: usize) -> Result<(), BasisSetError> {
        if center >= self.store.n_centers() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "center",
                index: center,
                len: self.store.n_centers(),
            });
        }
        Ok(())
    }

    fn check_shell(&self, shell: usize) -> Result<(), BasisSetError> {
        if shell >= self.store.n_shells() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "shell",
                index: shell,
                len: self.store.n_shells(),
            });
        }
        Ok(())
    }

    fn check_primitive(&self, primitive: usize) -> Result<(), BasisSetError> {
        if primitive >= self.store.n_primitives() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "primitive",
                index: primitive,
                len: self.store.n_primitives(),
            });
        }
        Ok(())
    }
}

/// Appends every center of `rhs`, in order, after the centers of `self`.
/// Duplicate centers are kept, not merged.
impl AddAssign<&AOBasisSet> for AOBasisSet {
    fn add_assign(&mut self, rhs: &AOBasisSet) {
        for center in 0..rhs.size() {
            self.store.push_center(&rhs.store.center_parts(center));
        }
    }
}

impl Add<&AOBasisSet> for AOBasisSet {
    type Output = AOBasisSet;

    fn add(mut self, rhs: &AOBasisSet) -> AOBasisSet {
        self += rhs;
        self
    }
}
