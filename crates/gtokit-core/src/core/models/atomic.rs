use super::contracted::{ContractedGaussianView, ContractedGaussianViewMut};
use super::primitive::{PrimitiveView, PrimitiveViewMut};
use super::shell::{Purity, ShellView, ShellViewMut};
use crate::core::error::BasisSetError;
use crate::core::utils::elements;
use nalgebra::Point3;

const NULL_ABS: BasisSetError = BasisSetError::Uninitialized {
    what: "atomic basis set",
};

const NULL_ABS_VIEW: BasisSetError = BasisSetError::Uninitialized {
    what: "atomic basis set view",
};

/// The shells a basis set places on one center, tagged with the basis-set
/// name and the atomic number of the element it parameterizes.
///
/// Storage is flattened: per-shell metadata lives in parallel arrays and
/// all primitive parameters sit in two contiguous arrays, sliced per shell
/// through an offset table. Shell and primitive views returned by this type
/// alias those arrays directly, and all of them share this center's single
/// `Point3`.
///
/// `atomic_number = 0` marks a dummy center that carries basis functions
/// without a nucleus.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AtomicBasisSet {
    data: Option<AbsData>,
}

#[derive(Debug, Clone, PartialEq)]
struct AbsData {
    name: String,
    atomic_number: u32,
    center: Point3<f64>,
    purities: Vec<Purity>,
    angular_momenta: Vec<u32>,
    primitives_per_shell: Vec<usize>,
    primitive_offsets: Vec<usize>,
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
}

impl AbsData {
    fn zeroed() -> Self {
        Self {
            name: String::new(),
            atomic_number: 0,
            center: Point3::origin(),
            purities: Vec::new(),
            angular_momenta: Vec::new(),
            primitives_per_shell: Vec::new(),
            primitive_offsets: Vec::new(),
            coefficients: Vec::new(),
            exponents: Vec::new(),
        }
    }

    fn parts(&self) -> AbsParts<'_> {
        AbsParts {
            name: &self.name,
            atomic_number: &self.atomic_number,
            center: &self.center,
            purities: &self.purities,
            angular_momenta: &self.angular_momenta,
            primitives_per_shell: &self.primitives_per_shell,
            primitive_offsets: &self.primitive_offsets,
            coefficients: &self.coefficients,
            exponents: &self.exponents,
            primitive_base: 0,
        }
    }
}

impl AtomicBasisSet {
    /// Creates an empty (but non-null) basis set for one center.
    ///
    /// # Arguments
    ///
    /// * `name` - The basis-set name, e.g. `"STO-3G"`.
    /// * `atomic_number` - The element's Z; `0` for a dummy center.
    /// * `center` - The point every shell added later is centered on.
    pub fn new(name: impl Into<String>, atomic_number: u32, center: Point3<f64>) -> Self {
        Self {
            data: Some(AbsData {
                name: name.into(),
                atomic_number,
                center,
                ..AbsData::zeroed()
            }),
        }
    }

    /// Whether this basis set has no backing storage.
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Appends a shell built from parallel primitive parameter sequences.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the sequences differ in
    /// length; nothing is appended in that case. A null basis set
    /// materializes zeroed storage first.
    pub fn add_shell(
        &mut self,
        purity: Purity,
        l: u32,
        coefficients: &[f64],
        exponents: &[f64],
    ) -> Result<(), BasisSetError> {
        if coefficients.len() != exponents.len() {
            return Err(BasisSetError::ShapeMismatch {
                what: "shell exponents",
                expected: coefficients.len(),
                actual: exponents.len(),
            });
        }
        let d = self.data.get_or_insert_with(AbsData::zeroed);
        d.purities.push(purity);
        d.angular_momenta.push(l);
        d.primitives_per_shell.push(coefficients.len());
        d.primitive_offsets.push(d.coefficients.len());
        d.coefficients.extend_from_slice(coefficients);
        d.exponents.extend_from_slice(exponents);
        Ok(())
    }

    /// Number of shells; zero when null.
    pub fn n_shells(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.purities.len())
    }

    /// Total number of atomic orbitals contributed by all shells.
    pub fn n_aos(&self) -> usize {
        self.data.as_ref().map_or(0, |d| {
            d.purities
                .iter()
                .zip(&d.angular_momenta)
                .map(|(p, l)| p.ao_count(*l))
                .sum()
        })
    }

    /// Total number of primitives across all shells.
    ///
    /// Primitives are counted per shell; the same numeric parameters in two
    /// shells count twice.
    pub fn n_unique_primitives(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.coefficients.len())
    }

    /// Largest total angular momentum among the shells.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set and
    /// [`BasisSetError::NoShells`] when it holds no shells.
    pub fn max_l(&self) -> Result<u32, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_ABS)?;
        d.angular_momenta
            .iter()
            .copied()
            .max()
            .ok_or(BasisSetError::NoShells {
                what: "atomic basis set",
            })
    }

    /// Returns the basis-set name.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set.
    pub fn name(&self) -> Result<&str, BasisSetError> {
        self.data.as_ref().map(|d| d.name.as_str()).ok_or(NULL_ABS)
    }

    /// Returns the basis-set name for writing, materializing if null.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.data.get_or_insert_with(AbsData::zeroed).name
    }

    /// Returns the atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set.
    pub fn atomic_number(&self) -> Result<&u32, BasisSetError> {
        self.data.as_ref().map(|d| &d.atomic_number).ok_or(NULL_ABS)
    }

    /// Returns the atomic number for writing, materializing if null.
    pub fn atomic_number_mut(&mut self) -> &mut u32 {
        &mut self.data.get_or_insert_with(AbsData::zeroed).atomic_number
    }

    /// Returns the element symbol for the stored atomic number, or `None`
    /// for dummy centers and unknown elements.
    pub fn element_symbol(&self) -> Option<&'static str> {
        elements::element_symbol(*self.atomic_number().ok()?)
    }

    /// Returns the shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.data.as_ref().map(|d| &d.center).ok_or(NULL_ABS)
    }

    /// Returns the shared center for writing, materializing if null.
    pub fn center_mut(&mut self) -> &mut Point3<f64> {
        &mut self.data.get_or_insert_with(AbsData::zeroed).center
    }

    /// Returns a read-only view of the `i`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_shells()`.
    pub fn shell(&self, i: usize) -> Result<ShellView<'_>, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_ABS)?;
        d.parts().shell(i)
    }

    /// Returns a mutable view of the `i`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_shells()`.
    pub fn shell_mut(&mut self, i: usize) -> Result<ShellViewMut<'_>, BasisSetError> {
        let d = self.data.as_mut().ok_or(NULL_ABS)?;
        let n = d.purities.len();
        if i >= n {
            return Err(BasisSetError::IndexOutOfRange {
                what: "shell",
                index: i,
                len: n,
            });
        }
        let off = d.primitive_offsets[i];
        let count = d.primitives_per_shell[i];
        let cg = ContractedGaussianViewMut::from_parts(
            &mut d.coefficients[off..off + count],
            &mut d.exponents[off..off + count],
            &mut d.center,
        )?;
        Ok(ShellViewMut::from_parts(
            &mut d.purities[i],
            &mut d.angular_momenta[i],
            cg,
        ))
    }

    /// Returns a read-only view of the `i`-th primitive, counted across all
    /// shells in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_unique_primitives()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'_>, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_ABS)?;
        if i >= d.coefficients.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "primitive",
                index: i,
                len: d.coefficients.len(),
            });
        }
        Ok(PrimitiveView::from_parts(
            &d.coefficients[i],
            &d.exponents[i],
            &d.center,
        ))
    }

    /// Returns a mutable view of the `i`-th primitive, counted across all
    /// shells in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null basis set and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_unique_primitives()`.
    pub fn primitive_mut(&mut self, i: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        let d = self.data.as_mut().ok_or(NULL_ABS)?;
        if i >= d.coefficients.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "primitive",
                index: i,
                len: d.coefficients.len(),
            });
        }
        Ok(PrimitiveViewMut::from_parts(
            &mut d.coefficients[i],
            &mut d.exponents[i],
            &mut d.center,
        ))
    }

    /// Iterates over read-only shell views, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ShellView<'_>> {
        (0..self.n_shells()).filter_map(move |i| self.shell(i).ok())
    }

    /// Returns a read-only view aliasing this basis set's storage.
    pub fn view(&self) -> AtomicBasisSetView<'_> {
        AtomicBasisSetView {
            parts: self.data.as_ref().map(AbsData::parts),
        }
    }

    /// Returns a mutable view aliasing this basis set's storage,
    /// materializing if null.
    pub fn view_mut(&mut self) -> AtomicBasisSetViewMut<'_> {
        let d = self.data.get_or_insert_with(AbsData::zeroed);
        AtomicBasisSetViewMut {
            parts: Some(AbsPartsMut {
                name: &mut d.name,
                atomic_number: &mut d.atomic_number,
                center: &mut d.center,
                purities: &mut d.purities,
                angular_momenta: &mut d.angular_momenta,
                primitives_per_shell: &d.primitives_per_shell,
                primitive_offsets: &d.primitive_offsets,
                coefficients: &mut d.coefficients,
                exponents: &mut d.exponents,
                primitive_base: 0,
            }),
        }
    }
}

/// The raw components an [`AtomicBasisSetView`] aliases.
///
/// `primitive_offsets` may carry offsets into a larger allocation than the
/// `coefficients`/`exponents` slices (the multi-center store hands out
/// per-center slices with global offsets); `primitive_base` is subtracted
/// before slicing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AbsParts<'a> {
    pub(crate) name: &'a str,
    pub(crate) atomic_number: &'a u32,
    pub(crate) center: &'a Point3<f64>,
    pub(crate) purities: &'a [Purity],
    pub(crate) angular_momenta: &'a [u32],
    pub(crate) primitives_per_shell: &'a [usize],
    pub(crate) primitive_offsets: &'a [usize],
    pub(crate) coefficients: &'a [f64],
    pub(crate) exponents: &'a [f64],
    pub(crate) primitive_base: usize,
}

impl<'a> AbsParts<'a> {
    fn shell(&self, i: usize) -> Result<ShellView<'a>, BasisSetError> {
        if i >= self.purities.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "shell",
                index: i,
                len: self.purities.len(),
            });
        }
        let off = self.primitive_offsets[i] - self.primitive_base;
        let count = self.primitives_per_shell[i];
        let cg = ContractedGaussianView::from_parts(
            &self.coefficients[off..off + count],
            &self.exponents[off..off + count],
            self.center,
        )?;
        Ok(ShellView::from_parts(
            &self.purities[i],
            &self.angular_momenta[i],
            cg,
        ))
    }
}

/// A read-only view of one center's basis functions.
///
/// Handed out by [`AtomicBasisSet::view`] and, per center, by the
/// multi-center [`AOBasisSet`](super::ao_basis::AOBasisSet); in the latter
/// case it aliases slices of the flattened multi-center arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicBasisSetView<'a> {
    parts: Option<AbsParts<'a>>,
}

impl<'a> AtomicBasisSetView<'a> {
    pub(crate) fn from_parts(parts: AbsParts<'a>) -> Self {
        Self { parts: Some(parts) }
    }

    pub(crate) fn parts(&self) -> Option<AbsParts<'a>> {
        self.parts
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the aliased basis-set name.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn name(&self) -> Result<&'a str, BasisSetError> {
        self.parts.map(|p| p.name).ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn atomic_number(&self) -> Result<&'a u32, BasisSetError> {
        self.parts.map(|p| p.atomic_number).ok_or(NULL_ABS_VIEW)
    }

    /// Returns the element symbol for the aliased atomic number, or `None`
    /// for dummy centers and unknown elements.
    pub fn element_symbol(&self) -> Option<&'static str> {
        elements::element_symbol(*self.atomic_number().ok()?)
    }

    /// Returns the aliased shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn center(&self) -> Result<&'a Point3<f64>, BasisSetError> {
        self.parts.map(|p| p.center).ok_or(NULL_ABS_VIEW)
    }

    /// Number of shells; zero when null.
    pub fn n_shells(&self) -> usize {
        self.parts.map_or(0, |p| p.purities.len())
    }

    /// Total number of atomic orbitals contributed by all shells.
    pub fn n_aos(&self) -> usize {
        self.parts.map_or(0, |p| {
            p.purities
                .iter()
                .zip(p.angular_momenta)
                .map(|(purity, l)| purity.ao_count(*l))
                .sum()
        })
    }

    /// Total number of primitives across all shells.
    pub fn n_unique_primitives(&self) -> usize {
        self.parts.map_or(0, |p| p.coefficients.len())
    }

    /// Largest total angular momentum among the shells.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::NoShells`] when the center holds no shells.
    pub fn max_l(&self) -> Result<u32, BasisSetError> {
        let p = self.parts.ok_or(NULL_ABS_VIEW)?;
        p.angular_momenta
            .iter()
            .copied()
            .max()
            .ok_or(BasisSetError::NoShells {
                what: "atomic basis set view",
            })
    }

    /// Returns a read-only view of the `i`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_shells()`.
    pub fn shell(&self, i: usize) -> Result<ShellView<'a>, BasisSetError> {
        self.parts.ok_or(NULL_ABS_VIEW)?.shell(i)
    }

    /// Returns a read-only view of the `i`-th primitive, counted across all
    /// shells in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_unique_primitives()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'a>, BasisSetError> {
        let p = self.parts.ok_or(NULL_ABS_VIEW)?;
        if i >= p.coefficients.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "primitive",
                index: i,
                len: p.coefficients.len(),
            });
        }
        Ok(PrimitiveView::from_parts(
            &p.coefficients[i],
            &p.exponents[i],
            p.center,
        ))
    }

    /// Iterates over read-only shell views, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ShellView<'a>> + '_ {
        (0..self.n_shells()).filter_map(move |i| self.shell(i).ok())
    }

    fn content_eq(&self, other: &AtomicBasisSetView<'_>) -> bool {
        match (self.parts, other.parts) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.name == b.name
                    && a.atomic_number == b.atomic_number
                    && a.center == b.center
                    && a.purities.len() == b.purities.len()
                    && (0..a.purities.len())
                        .all(|i| match (a.shell(i), b.shell(i)) {
                            (Ok(x), Ok(y)) => x == y,
                            _ => false,
                        })
            }
            _ => false,
        }
    }
}

/// The raw components an [`AtomicBasisSetViewMut`] aliases.
///
/// The shape of the aliased storage is fixed through this view, so the
/// count and offset tables stay behind shared borrows. `primitive_base`
/// plays the same role as in [`AbsParts`].
#[derive(Debug)]
pub(crate) struct AbsPartsMut<'a> {
    pub(crate) name: &'a mut String,
    pub(crate) atomic_number: &'a mut u32,
    pub(crate) center: &'a mut Point3<f64>,
    pub(crate) purities: &'a mut [Purity],
    pub(crate) angular_momenta: &'a mut [u32],
    pub(crate) primitives_per_shell: &'a [usize],
    pub(crate) primitive_offsets: &'a [usize],
    pub(crate) coefficients: &'a mut [f64],
    pub(crate) exponents: &'a mut [f64],
    pub(crate) primitive_base: usize,
}

/// A mutable view of one center's basis functions.
///
/// Metadata and element values may be rewritten; shell and primitive counts
/// of the aliased storage may not.
#[derive(Debug, Default)]
pub struct AtomicBasisSetViewMut<'a> {
    parts: Option<AbsPartsMut<'a>>,
}

impl<'a> AtomicBasisSetViewMut<'a> {
    pub(crate) fn from_parts(parts: AbsPartsMut<'a>) -> Self {
        Self { parts: Some(parts) }
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the aliased basis-set name.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn name(&self) -> Result<&str, BasisSetError> {
        self.parts
            .as_ref()
            .map(|p| p.name.as_str())
            .ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased basis-set name for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn name_mut(&mut self) -> Result<&mut String, BasisSetError> {
        self.parts
            .as_mut()
            .map(|p| &mut *p.name)
            .ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn atomic_number(&self) -> Result<&u32, BasisSetError> {
        self.parts
            .as_ref()
            .map(|p| &*p.atomic_number)
            .ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased atomic number for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn atomic_number_mut(&mut self) -> Result<&mut u32, BasisSetError> {
        self.parts
            .as_mut()
            .map(|p| &mut *p.atomic_number)
            .ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.parts
            .as_ref()
            .map(|p| &*p.center)
            .ok_or(NULL_ABS_VIEW)
    }

    /// Returns the aliased shared center for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn center_mut(&mut self) -> Result<&mut Point3<f64>, BasisSetError> {
        self.parts
            .as_mut()
            .map(|p| &mut *p.center)
            .ok_or(NULL_ABS_VIEW)
    }

    /// Number of shells; zero when null.
    pub fn n_shells(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.purities.len())
    }

    /// Total number of primitives across all shells.
    pub fn n_unique_primitives(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.coefficients.len())
    }

    /// Returns a read-only view of the `i`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_shells()`.
    pub fn shell(&self, i: usize) -> Result<ShellView<'_>, BasisSetError> {
        let p = self.parts.as_ref().ok_or(NULL_ABS_VIEW)?;
        if i >= p.purities.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "shell",
                index: i,
                len: p.purities.len(),
            });
        }
        let off = p.primitive_offsets[i] - p.primitive_base;
        let count = p.primitives_per_shell[i];
        let cg = ContractedGaussianView::from_parts(
            &p.coefficients[off..off + count],
            &p.exponents[off..off + count],
            p.center,
        )?;
        Ok(ShellView::from_parts(
            &p.purities[i],
            &p.angular_momenta[i],
            cg,
        ))
    }

    /// Returns a mutable view of the `i`-th shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_shells()`.
    pub fn shell_mut(&mut self, i: usize) -> Result<ShellViewMut<'_>, BasisSetError> {
        let p = self.parts.as_mut().ok_or(NULL_ABS_VIEW)?;
        if i >= p.purities.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "shell",
                index: i,
                len: p.purities.len(),
            });
        }
        let off = p.primitive_offsets[i] - p.primitive_base;
        let count = p.primitives_per_shell[i];
        let cg = ContractedGaussianViewMut::from_parts(
            &mut p.coefficients[off..off + count],
            &mut p.exponents[off..off + count],
            &mut *p.center,
        )?;
        Ok(ShellViewMut::from_parts(
            &mut p.purities[i],
            &mut p.angular_momenta[i],
            cg,
        ))
    }

    /// Reborrows this view read-only.
    pub fn as_view(&self) -> AtomicBasisSetView<'_> {
        AtomicBasisSetView {
            parts: self.parts.as_ref().map(|p| AbsParts {
                name: p.name,
                atomic_number: p.atomic_number,
                center: p.center,
                purities: p.purities,
                angular_momenta: p.angular_momenta,
                primitives_per_shell: p.primitives_per_shell,
                primitive_offsets: p.primitive_offsets,
                coefficients: p.coefficients,
                exponents: p.exponents,
                primitive_base: p.primitive_base,
            }),
        }
    }

    /// Overwrites the aliased storage element-wise from an owning value.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::NullMismatch`] when exactly one side is
    /// null, and [`BasisSetError::ShapeMismatch`] when the shell count or
    /// any per-shell primitive count differs. The aliased storage is
    /// unchanged on error.
    pub fn assign(&mut self, source: &AtomicBasisSet) -> Result<(), BasisSetError> {
        match (self.parts.as_mut(), &source.data) {
            (None, None) => Ok(()),
            (Some(p), Some(d)) => {
                if p.purities.len() != d.purities.len() {
                    return Err(BasisSetError::ShapeMismatch {
                        what: "atomic basis set shells",
                        expected: p.purities.len(),
                        actual: d.purities.len(),
                    });
                }
                if p.primitives_per_shell != d.primitives_per_shell {
                    return Err(BasisSetError::ShapeMismatch {
                        what: "atomic basis set primitives",
                        expected: p.coefficients.len(),
                        actual: d.coefficients.len(),
                    });
                }
                p.name.clone_from(&d.name);
                *p.atomic_number = d.atomic_number;
                *p.center = d.center;
                p.purities.copy_from_slice(&d.purities);
                p.angular_momenta.copy_from_slice(&d.angular_momenta);
                p.coefficients.copy_from_slice(&d.coefficients);
                p.exponents.copy_from_slice(&d.exponents);
                Ok(())
            }
            _ => Err(BasisSetError::NullMismatch {
                what: "atomic basis set",
            }),
        }
    }
}

// Equality is by content, symmetric across the owner and the shared view.

impl PartialEq for AtomicBasisSetView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl PartialEq<AtomicBasisSetView<'_>> for AtomicBasisSet {
    fn eq(&self, other: &AtomicBasisSetView<'_>) -> bool {
        self.view().content_eq(other)
    }
}

impl PartialEq<AtomicBasisSet> for AtomicBasisSetView<'_> {
    fn eq(&self, other: &AtomicBasisSet) -> bool {
        self.content_eq(&other.view())
    }
}
