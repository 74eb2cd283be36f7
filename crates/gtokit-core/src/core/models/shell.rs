use super::contracted::{
    ContractedGaussian, ContractedGaussianView, ContractedGaussianViewMut,
};
use super::primitive::{PrimitiveView, PrimitiveViewMut};
use crate::core::error::BasisSetError;
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

const NULL_SHELL: BasisSetError = BasisSetError::Uninitialized { what: "shell" };

const NULL_SHELL_VIEW: BasisSetError = BasisSetError::Uninitialized {
    what: "shell view",
};

/// Whether a shell's angular part is expressed in Cartesian or spherical
/// (pure) form.
///
/// The choice fixes how many atomic orbitals the shell contributes for a
/// given total angular momentum, see [`Purity::ao_count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Purity {
    /// Cartesian Gaussians, `(l+1)(l+2)/2` orbitals.
    Cartesian,
    /// Spherical (pure) harmonics, `2l+1` orbitals.
    #[default]
    Spherical,
}

impl Purity {
    /// Number of atomic orbitals a shell of this purity contributes for
    /// total angular momentum `l`.
    pub fn ao_count(self, l: u32) -> usize {
        let l = l as usize;
        match self {
            Purity::Cartesian => (l + 1) * (l + 2) / 2,
            Purity::Spherical => 2 * l + 1,
        }
    }
}

impl FromStr for Purity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartesian" => Ok(Purity::Cartesian),
            "spherical" | "pure" => Ok(Purity::Spherical),
            _ => Err(format!("Unknown purity: {s}")),
        }
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purity::Cartesian => write!(f, "cartesian"),
            Purity::Spherical => write!(f, "spherical"),
        }
    }
}

/// One shell of a basis set: a purity flag, a total angular momentum, and
/// the contracted Gaussian giving the radial part.
///
/// Follows the same null-state contract as the rest of the hierarchy: the
/// default shell has no backing storage, read accessors on it fail, and
/// whole-object mutable accessors materialize zeroed storage (spherical,
/// `l = 0`, empty contraction).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shell {
    data: Option<ShellData>,
}

#[derive(Debug, Clone, PartialEq)]
struct ShellData {
    purity: Purity,
    l: u32,
    cg: ContractedGaussian,
}

impl ShellData {
    fn zeroed() -> Self {
        Self {
            purity: Purity::default(),
            l: 0,
            cg: ContractedGaussian::new(Vec::new(), Vec::new(), Point3::origin())
                .unwrap_or_default(),
        }
    }
}

impl Shell {
    /// Creates a shell from its purity, angular momentum, and contraction.
    pub fn new(purity: Purity, l: u32, cg: ContractedGaussian) -> Self {
        Self {
            data: Some(ShellData { purity, l, cg }),
        }
    }

    /// Creates a shell directly from primitive parameter sequences.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the sequences differ in
    /// length.
    pub fn with_primitives(
        purity: Purity,
        l: u32,
        coefficients: Vec<f64>,
        exponents: Vec<f64>,
        center: Point3<f64>,
    ) -> Result<Self, BasisSetError> {
        Ok(Self::new(
            purity,
            l,
            ContractedGaussian::new(coefficients, exponents, center)?,
        ))
    }

    /// Whether this shell has no backing storage.
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Returns the purity flag.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell.
    pub fn pure(&self) -> Result<&Purity, BasisSetError> {
        self.data.as_ref().map(|d| &d.purity).ok_or(NULL_SHELL)
    }

    /// Returns the purity flag for writing, materializing if null.
    pub fn pure_mut(&mut self) -> &mut Purity {
        &mut self.data.get_or_insert_with(ShellData::zeroed).purity
    }

    /// Returns the total angular momentum.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell.
    pub fn l(&self) -> Result<&u32, BasisSetError> {
        self.data.as_ref().map(|d| &d.l).ok_or(NULL_SHELL)
    }

    /// Returns the total angular momentum for writing, materializing if
    /// null.
    pub fn l_mut(&mut self) -> &mut u32 {
        &mut self.data.get_or_insert_with(ShellData::zeroed).l
    }

    /// Returns the underlying contracted Gaussian.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell.
    pub fn contracted_gaussian(&self) -> Result<&ContractedGaussian, BasisSetError> {
        self.data.as_ref().map(|d| &d.cg).ok_or(NULL_SHELL)
    }

    /// Returns the underlying contracted Gaussian for writing,
    /// materializing if null.
    pub fn contracted_gaussian_mut(&mut self) -> &mut ContractedGaussian {
        &mut self.data.get_or_insert_with(ShellData::zeroed).cg
    }

    /// Number of atomic orbitals this shell contributes.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell.
    pub fn size(&self) -> Result<usize, BasisSetError> {
        self.data
            .as_ref()
            .map(|d| d.purity.ao_count(d.l))
            .ok_or(NULL_SHELL)
    }

    /// Number of primitives in the contraction; zero when null.
    pub fn n_primitives(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.cg.len())
    }

    /// Returns a read-only view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_primitives()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'_>, BasisSetError> {
        self.data.as_ref().ok_or(NULL_SHELL)?.cg.primitive(i)
    }

    /// Returns a mutable view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_primitives()`.
    pub fn primitive_mut(&mut self, i: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        self.data.as_mut().ok_or(NULL_SHELL)?.cg.primitive_mut(i)
    }

    /// Evaluates the radial contraction at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null shell.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        self.data.as_ref().ok_or(NULL_SHELL)?.cg.evaluate(point)
    }

    /// Returns a read-only view aliasing this shell's storage.
    pub fn view(&self) -> ShellView<'_> {
        match &self.data {
            Some(d) => ShellView {
                parts: Some(ShellParts {
                    purity: &d.purity,
                    l: &d.l,
                    cg: d.cg.view(),
                }),
            },
            None => ShellView::default(),
        }
    }

    /// Returns a mutable view aliasing this shell's storage, materializing
    /// if null.
    pub fn view_mut(&mut self) -> ShellViewMut<'_> {
        let d = self.data.get_or_insert_with(ShellData::zeroed);
        ShellViewMut {
            parts: Some(ShellPartsMut {
                purity: &mut d.purity,
                l: &mut d.l,
                cg: d.cg.view_mut(),
            }),
        }
    }

    fn fields(&self) -> Option<(Purity, u32, ContractedGaussianView<'_>)> {
        self.data.as_ref().map(|d| (d.purity, d.l, d.cg.view()))
    }
}

/// A read-only view of a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellView<'a> {
    parts: Option<ShellParts<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct ShellParts<'a> {
    purity: &'a Purity,
    l: &'a u32,
    cg: ContractedGaussianView<'a>,
}

impl<'a> ShellView<'a> {
    /// Builds a view from raw component references.
    pub fn from_parts(purity: &'a Purity, l: &'a u32, cg: ContractedGaussianView<'a>) -> Self {
        Self {
            parts: Some(ShellParts { purity, l, cg }),
        }
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the aliased purity flag.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn pure(&self) -> Result<&'a Purity, BasisSetError> {
        self.parts.map(|p| p.purity).ok_or(NULL_SHELL_VIEW)
    }

    /// Returns the aliased total angular momentum.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn l(&self) -> Result<&'a u32, BasisSetError> {
        self.parts.map(|p| p.l).ok_or(NULL_SHELL_VIEW)
    }

    /// Returns the aliased contracted Gaussian.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn contracted_gaussian(&self) -> Result<ContractedGaussianView<'a>, BasisSetError> {
        self.parts.map(|p| p.cg).ok_or(NULL_SHELL_VIEW)
    }

    /// Number of atomic orbitals the aliased shell contributes.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn size(&self) -> Result<usize, BasisSetError> {
        self.parts
            .map(|p| p.purity.ao_count(*p.l))
            .ok_or(NULL_SHELL_VIEW)
    }

    /// Number of primitives in the aliased contraction; zero when null.
    pub fn n_primitives(&self) -> usize {
        self.parts.map_or(0, |p| p.cg.len())
    }

    /// Returns a read-only view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_primitives()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'a>, BasisSetError> {
        self.parts.ok_or(NULL_SHELL_VIEW)?.cg.primitive(i)
    }

    /// Evaluates the aliased radial contraction at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        self.parts.ok_or(NULL_SHELL_VIEW)?.cg.evaluate(point)
    }

    fn fields(&self) -> Option<(Purity, u32, ContractedGaussianView<'a>)> {
        self.parts.map(|p| (*p.purity, *p.l, p.cg))
    }
}

/// A mutable view of a shell.
///
/// Purity, angular momentum, element values, and the shared center may be
/// rewritten; the primitive count of the aliased storage may not.
#[derive(Debug, Default)]
pub struct ShellViewMut<'a> {
    parts: Option<ShellPartsMut<'a>>,
}

#[derive(Debug)]
struct ShellPartsMut<'a> {
    purity: &'a mut Purity,
    l: &'a mut u32,
    cg: ContractedGaussianViewMut<'a>,
}

impl<'a> ShellViewMut<'a> {
    /// Builds a mutable view from raw component references.
    pub fn from_parts(
        purity: &'a mut Purity,
        l: &'a mut u32,
        cg: ContractedGaussianViewMut<'a>,
    ) -> Self {
        Self {
            parts: Some(ShellPartsMut { purity, l, cg }),
        }
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the aliased purity flag.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn pure(&self) -> Result<&Purity, BasisSetError> {
        self.parts.as_ref().map(|p| &*p.purity).ok_or(NULL_SHELL_VIEW)
    }

    /// Returns the aliased purity flag for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn pure_mut(&mut self) -> Result<&mut Purity, BasisSetError> {
        self.parts
            .as_mut()
            .map(|p| &mut *p.purity)
            .ok_or(NULL_SHELL_VIEW)
    }

    /// Returns the aliased total angular momentum.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn l(&self) -> Result<&u32, BasisSetError> {
        self.parts.as_ref().map(|p| &*p.l).ok_or(NULL_SHELL_VIEW)
    }

    /// Returns the aliased total angular momentum for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn l_mut(&mut self) -> Result<&mut u32, BasisSetError> {
        self.parts
            .as_mut()
            .map(|p| &mut *p.l)
            .ok_or(NULL_SHELL_VIEW)
    }

    /// Returns a mutable view of the aliased contracted Gaussian.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn contracted_gaussian_mut(
        &mut self,
    ) -> Result<&mut ContractedGaussianViewMut<'a>, BasisSetError> {
        self.parts.as_mut().map(|p| &mut p.cg).ok_or(NULL_SHELL_VIEW)
    }

    /// Number of atomic orbitals the aliased shell contributes.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn size(&self) -> Result<usize, BasisSetError> {
        self.parts
            .as_ref()
            .map(|p| p.purity.ao_count(*p.l))
            .ok_or(NULL_SHELL_VIEW)
    }

    /// Number of primitives in the aliased contraction; zero when null.
    pub fn n_primitives(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.cg.len())
    }

    /// Returns a mutable view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= n_primitives()`.
    pub fn primitive_mut(&mut self, i: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        self.parts
            .as_mut()
            .ok_or(NULL_SHELL_VIEW)?
            .cg
            .primitive_mut(i)
    }

    /// Evaluates the aliased radial contraction at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        self.parts.as_ref().ok_or(NULL_SHELL_VIEW)?.cg.evaluate(point)
    }

    /// Reborrows this view read-only.
    pub fn as_view(&self) -> ShellView<'_> {
        match &self.parts {
            Some(p) => ShellView {
                parts: Some(ShellParts {
                    purity: p.purity,
                    l: p.l,
                    cg: p.cg.as_view(),
                }),
            },
            None => ShellView::default(),
        }
    }

    /// Overwrites the aliased storage element-wise from an owning shell.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::NullMismatch`] when exactly one side is
    /// null, and [`BasisSetError::ShapeMismatch`] when the primitive counts
    /// differ.
    pub fn assign(&mut self, source: &Shell) -> Result<(), BasisSetError> {
        match (self.parts.as_mut(), &source.data) {
            (None, None) => Ok(()),
            (Some(p), Some(d)) => {
                p.cg.assign(&d.cg)?;
                *p.purity = d.purity;
                *p.l = d.l;
                Ok(())
            }
            _ => Err(BasisSetError::NullMismatch { what: "shell" }),
        }
    }

    fn fields(&self) -> Option<(Purity, u32, ContractedGaussianView<'_>)> {
        self.parts
            .as_ref()
            .map(|p| (*p.purity, *p.l, p.cg.as_view()))
    }
}

// Equality is by content, symmetric across the owner and both view families.

impl PartialEq for ShellView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq for ShellViewMut<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ShellView<'_>> for Shell {
    fn eq(&self, other: &ShellView<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<Shell> for ShellView<'_> {
    fn eq(&self, other: &Shell) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ShellViewMut<'_>> for Shell {
    fn eq(&self, other: &ShellViewMut<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<Shell> for ShellViewMut<'_> {
    fn eq(&self, other: &Shell) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ShellViewMut<'_>> for ShellView<'_> {
    fn eq(&self, other: &ShellViewMut<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ShellView<'_>> for ShellViewMut<'_> {
    fn eq(&self, other: &ShellView<'_>) -> bool {
        self.fields() == other.fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Shell {
        Shell::with_primitives(
            Purity::Spherical,
            1,
            vec![0.3, 0.7],
            vec![2.0, 0.5],
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap()
    }

    mod purity {
        use super::*;

        #[test]
        fn spherical_shells_contribute_two_l_plus_one_orbitals() {
            assert_eq!(Purity::Spherical.ao_count(0), 1);
            assert_eq!(Purity::Spherical.ao_count(1), 3);
            assert_eq!(Purity::Spherical.ao_count(2), 5);
            assert_eq!(Purity::Spherical.ao_count(3), 7);
            assert_eq!(Purity::Spherical.ao_count(4), 9);
        }

        #[test]
        fn cartesian_shells_contribute_triangular_orbital_counts() {
            assert_eq!(Purity::Cartesian.ao_count(0), 1);
            assert_eq!(Purity::Cartesian.ao_count(1), 3);
            assert_eq!(Purity::Cartesian.ao_count(2), 6);
            assert_eq!(Purity::Cartesian.ao_count(3), 10);
            assert_eq!(Purity::Cartesian.ao_count(4), 15);
        }

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("Cartesian".parse::<Purity>().unwrap(), Purity::Cartesian);
            assert_eq!("spherical".parse::<Purity>().unwrap(), Purity::Spherical);
            assert_eq!("pure".parse::<Purity>().unwrap(), Purity::Spherical);
            assert!("hexagonal".parse::<Purity>().is_err());
        }

        #[test]
        fn displays_lowercase_names() {
            assert_eq!(Purity::Cartesian.to_string(), "cartesian");
            assert_eq!(Purity::Spherical.to_string(), "spherical");
        }
    }

    mod null_state {
        use super::*;

        #[test]
        fn default_shell_is_null() {
            let s = Shell::default();
            assert!(s.is_null());
            assert_eq!(s.pure().unwrap_err(), NULL_SHELL);
            assert!(s.l().is_err());
            assert!(s.size().is_err());
            assert_eq!(s.n_primitives(), 0);
        }

        #[test]
        fn mutable_access_materializes_a_zeroed_shell() {
            let mut s = Shell::default();
            *s.l_mut() = 2;
            assert!(!s.is_null());
            assert_eq!(*s.pure().unwrap(), Purity::Spherical);
            assert_eq!(*s.l().unwrap(), 2);
            assert_eq!(s.size().unwrap(), 5);
            assert!(s.contracted_gaussian().unwrap().is_empty());
        }

        #[test]
        fn move_leaves_the_source_null() {
            let mut a = sample();
            let b = std::mem::take(&mut a);
            assert!(a.is_null());
            assert_eq!(b, sample());
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn size_combines_purity_and_angular_momentum() {
            let mut s = sample();
            assert_eq!(s.size().unwrap(), 3);
            *s.pure_mut() = Purity::Cartesian;
            *s.l_mut() = 2;
            assert_eq!(s.size().unwrap(), 6);
        }

        #[test]
        fn primitives_are_reached_through_the_contraction() {
            let s = sample();
            assert_eq!(s.n_primitives(), 2);
            assert_eq!(*s.primitive(1).unwrap().exponent().unwrap(), 0.5);
            assert!(matches!(
                s.primitive(2).unwrap_err(),
                BasisSetError::IndexOutOfRange { .. }
            ));
        }

        #[test]
        fn evaluation_delegates_to_the_contraction() {
            let s = sample();
            let at = Point3::new(0.5, 0.5, 0.5);
            assert_eq!(
                s.evaluate(&at).unwrap(),
                s.contracted_gaussian().unwrap().evaluate(&at).unwrap()
            );
        }
    }

    mod views {
        use super::*;

        #[test]
        fn view_compares_equal_to_the_owner() {
            let s = sample();
            let v = s.view();
            assert_eq!(s, v);
            assert_eq!(v, s);
            assert_eq!(v, sample().view());
        }

        #[test]
        fn view_aliases_the_owners_storage() {
            let s = sample();
            let v = s.view();
            assert!(std::ptr::eq(v.l().unwrap(), s.l().unwrap()));
            assert!(std::ptr::eq(
                v.contracted_gaussian().unwrap().center().unwrap(),
                s.contracted_gaussian().unwrap().center().unwrap()
            ));
        }

        #[test]
        fn mutable_view_writes_reach_the_owner() {
            let mut s = sample();
            {
                let mut m = s.view_mut();
                *m.pure_mut().unwrap() = Purity::Cartesian;
                *m.primitive_mut(0).unwrap().coefficient_mut().unwrap() = 1.5;
            }
            assert_eq!(*s.pure().unwrap(), Purity::Cartesian);
            assert_eq!(*s.primitive(0).unwrap().coefficient().unwrap(), 1.5);
        }

        #[test]
        fn assign_overwrites_metadata_and_elements() {
            let mut target = sample();
            let source = Shell::with_primitives(
                Purity::Cartesian,
                3,
                vec![1.0, 2.0],
                vec![3.0, 4.0],
                Point3::new(1.0, 1.0, 1.0),
            )
            .unwrap();
            target.view_mut().assign(&source).unwrap();
            assert_eq!(target, source);
        }

        #[test]
        fn assign_rejects_primitive_count_mismatch() {
            let mut target = sample();
            let source = Shell::with_primitives(
                Purity::Spherical,
                1,
                vec![1.0],
                vec![3.0],
                Point3::origin(),
            )
            .unwrap();
            assert!(matches!(
                target.view_mut().assign(&source).unwrap_err(),
                BasisSetError::ShapeMismatch { .. }
            ));
        }

        #[test]
        fn assign_rejects_null_mismatch() {
            let mut target = sample();
            assert_eq!(
                target.view_mut().assign(&Shell::default()).unwrap_err(),
                BasisSetError::NullMismatch { what: "shell" }
            );
        }
    }
}
