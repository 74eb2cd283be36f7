use super::primitive::{PrimitiveView, PrimitiveViewMut};
use crate::core::error::BasisSetError;
use nalgebra::Point3;

const NULL_CG: BasisSetError = BasisSetError::Uninitialized {
    what: "contracted gaussian",
};

const NULL_CG_VIEW: BasisSetError = BasisSetError::Uninitialized {
    what: "contracted gaussian view",
};

/// An ordered contraction of primitive Gaussians sharing one center.
///
/// Coefficients and exponents are stored as parallel sequences; the center
/// exists exactly once, so every primitive view handed out by this type
/// aliases the same center storage. Moving the center through any primitive
/// moves all of them.
///
/// Like [`Primitive`](super::primitive::Primitive), a default-constructed
/// contraction is null (no backing storage), which is distinct from being
/// empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContractedGaussian {
    data: Option<CgData>,
}

#[derive(Debug, Clone, PartialEq)]
struct CgData {
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
    center: Point3<f64>,
}

impl CgData {
    fn empty() -> Self {
        Self {
            coefficients: Vec::new(),
            exponents: Vec::new(),
            center: Point3::origin(),
        }
    }
}

impl ContractedGaussian {
    /// Creates a contraction from parallel coefficient/exponent sequences.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - One contraction coefficient per primitive.
    /// * `exponents` - One Gaussian exponent per primitive, same order.
    /// * `center` - The single center shared by every primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the sequences differ in
    /// length.
    pub fn new(
        coefficients: Vec<f64>,
        exponents: Vec<f64>,
        center: Point3<f64>,
    ) -> Result<Self, BasisSetError> {
        if coefficients.len() != exponents.len() {
            return Err(BasisSetError::ShapeMismatch {
                what: "contracted gaussian exponents",
                expected: coefficients.len(),
                actual: exponents.len(),
            });
        }
        Ok(Self {
            data: Some(CgData {
                coefficients,
                exponents,
                center,
            }),
        })
    }

    /// Whether this contraction has no backing storage.
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Number of primitives; zero when null.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.coefficients.len())
    }

    /// Whether the contraction holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a read-only view of the `i`-th primitive.
    ///
    /// Every primitive view returned by this method aliases the same center
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null contraction and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= len()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'_>, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_CG)?;
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

    /// Returns a mutable view of the `i`-th primitive.
    ///
    /// Writing its center moves the shared center of the whole contraction.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null contraction and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= len()`.
    pub fn primitive_mut(&mut self, i: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        let d = self.data.as_mut().ok_or(NULL_CG)?;
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

    /// Returns the shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null contraction.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.data.as_ref().map(|d| &d.center).ok_or(NULL_CG)
    }

    /// Returns the shared center for writing, materializing an empty
    /// contraction at the origin if null.
    pub fn center_mut(&mut self) -> &mut Point3<f64> {
        &mut self.data.get_or_insert_with(CgData::empty).center
    }

    /// Evaluates the contraction at one point (sum of primitive values).
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null contraction.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_CG)?;
        Ok(contraction_value(
            &d.coefficients,
            &d.exponents,
            &d.center,
            point,
        ))
    }

    /// Evaluates the contraction at every point of a set, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null contraction.
    pub fn evaluate_many(&self, points: &[Point3<f64>]) -> Result<Vec<f64>, BasisSetError> {
        let d = self.data.as_ref().ok_or(NULL_CG)?;
        Ok(points
            .iter()
            .map(|p| contraction_value(&d.coefficients, &d.exponents, &d.center, p))
            .collect())
    }

    /// Iterates over read-only primitive views, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PrimitiveView<'_>> {
        let n = self.len();
        (0..n).filter_map(move |i| self.primitive(i).ok())
    }

    /// Returns a read-only view aliasing this contraction's storage.
    pub fn view(&self) -> ContractedGaussianView<'_> {
        match &self.data {
            Some(d) => ContractedGaussianView {
                parts: Some(CgParts {
                    coefficients: &d.coefficients,
                    exponents: &d.exponents,
                    center: &d.center,
                }),
            },
            None => ContractedGaussianView::default(),
        }
    }

    /// Returns a mutable view aliasing this contraction's storage,
    /// materializing an empty contraction if null.
    pub fn view_mut(&mut self) -> ContractedGaussianViewMut<'_> {
        let d = self.data.get_or_insert_with(CgData::empty);
        ContractedGaussianViewMut {
            parts: Some(CgPartsMut {
                coefficients: &mut d.coefficients,
                exponents: &mut d.exponents,
                center: &mut d.center,
            }),
        }
    }

    pub(crate) fn fields(&self) -> Option<(&[f64], &[f64], &Point3<f64>)> {
        self.data
            .as_ref()
            .map(|d| (d.coefficients.as_slice(), d.exponents.as_slice(), &d.center))
    }
}

fn contraction_value(
    coefficients: &[f64],
    exponents: &[f64],
    center: &Point3<f64>,
    point: &Point3<f64>,
) -> f64 {
    let r2 = (point - center).norm_squared();
    coefficients
        .iter()
        .zip(exponents)
        .map(|(c, a)| c * (-a * r2).exp())
        .sum()
}

/// A read-only view of a contracted Gaussian, aliasing parallel
/// coefficient/exponent slices and a shared center owned elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContractedGaussianView<'a> {
    parts: Option<CgParts<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CgParts<'a> {
    coefficients: &'a [f64],
    exponents: &'a [f64],
    center: &'a Point3<f64>,
}

impl<'a> ContractedGaussianView<'a> {
    /// Builds a view from raw component references.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the slices differ in
    /// length.
    pub fn from_parts(
        coefficients: &'a [f64],
        exponents: &'a [f64],
        center: &'a Point3<f64>,
    ) -> Result<Self, BasisSetError> {
        if coefficients.len() != exponents.len() {
            return Err(BasisSetError::ShapeMismatch {
                what: "contracted gaussian view exponents",
                expected: coefficients.len(),
                actual: exponents.len(),
            });
        }
        Ok(Self {
            parts: Some(CgParts {
                coefficients,
                exponents,
                center,
            }),
        })
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Number of primitives; zero when null.
    pub fn len(&self) -> usize {
        self.parts.map_or(0, |p| p.coefficients.len())
    }

    /// Whether the aliased contraction holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a read-only view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= len()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'a>, BasisSetError> {
        let p = self.parts.ok_or(NULL_CG_VIEW)?;
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

    /// Returns the aliased shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn center(&self) -> Result<&'a Point3<f64>, BasisSetError> {
        self.parts.map(|p| p.center).ok_or(NULL_CG_VIEW)
    }

    /// Evaluates the aliased contraction at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        let p = self.parts.ok_or(NULL_CG_VIEW)?;
        Ok(contraction_value(p.coefficients, p.exponents, p.center, point))
    }

    /// Iterates over read-only primitive views, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PrimitiveView<'a>> + '_ {
        let n = self.len();
        (0..n).filter_map(move |i| self.primitive(i).ok())
    }

    pub(crate) fn fields(&self) -> Option<(&'a [f64], &'a [f64], &'a Point3<f64>)> {
        self.parts.map(|p| (p.coefficients, p.exponents, p.center))
    }
}

/// A mutable view of a contracted Gaussian.
///
/// Element values and the shared center may be rewritten through this view;
/// the shape (primitive count) of the aliased storage may not.
#[derive(Debug, Default)]
pub struct ContractedGaussianViewMut<'a> {
    parts: Option<CgPartsMut<'a>>,
}

#[derive(Debug)]
struct CgPartsMut<'a> {
    coefficients: &'a mut [f64],
    exponents: &'a mut [f64],
    center: &'a mut Point3<f64>,
}

impl<'a> ContractedGaussianViewMut<'a> {
    /// Builds a mutable view from raw component references.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::ShapeMismatch`] if the slices differ in
    /// length.
    pub fn from_parts(
        coefficients: &'a mut [f64],
        exponents: &'a mut [f64],
        center: &'a mut Point3<f64>,
    ) -> Result<Self, BasisSetError> {
        if coefficients.len() != exponents.len() {
            return Err(BasisSetError::ShapeMismatch {
                what: "contracted gaussian view exponents",
                expected: coefficients.len(),
                actual: exponents.len(),
            });
        }
        Ok(Self {
            parts: Some(CgPartsMut {
                coefficients,
                exponents,
                center,
            }),
        })
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Number of primitives; zero when null.
    pub fn len(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.coefficients.len())
    }

    /// Whether the aliased contraction holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a read-only view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= len()`.
    pub fn primitive(&self, i: usize) -> Result<PrimitiveView<'_>, BasisSetError> {
        let p = self.parts.as_ref().ok_or(NULL_CG_VIEW)?;
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

    /// Returns a mutable view of the `i`-th primitive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view and
    /// [`BasisSetError::IndexOutOfRange`] if `i >= len()`.
    pub fn primitive_mut(&mut self, i: usize) -> Result<PrimitiveViewMut<'_>, BasisSetError> {
        let p = self.parts.as_mut().ok_or(NULL_CG_VIEW)?;
        if i >= p.coefficients.len() {
            return Err(BasisSetError::IndexOutOfRange {
                what: "primitive",
                index: i,
                len: p.coefficients.len(),
            });
        }
        Ok(PrimitiveViewMut::from_parts(
            &mut p.coefficients[i],
            &mut p.exponents[i],
            &mut *p.center,
        ))
    }

    /// Returns the aliased shared center.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.parts.as_ref().map(|p| &*p.center).ok_or(NULL_CG_VIEW)
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
            .ok_or(NULL_CG_VIEW)
    }

    /// Evaluates the aliased contraction at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] on a null view.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        let p = self.parts.as_ref().ok_or(NULL_CG_VIEW)?;
        Ok(contraction_value(p.coefficients, p.exponents, p.center, point))
    }

    /// Reborrows this view read-only.
    pub fn as_view(&self) -> ContractedGaussianView<'_> {
        match &self.parts {
            Some(p) => ContractedGaussianView {
                parts: Some(CgParts {
                    coefficients: p.coefficients,
                    exponents: p.exponents,
                    center: p.center,
                }),
            },
            None => ContractedGaussianView::default(),
        }
    }

    /// Overwrites the aliased storage element-wise from an owning value.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::NullMismatch`] when exactly one side is
    /// null, and [`BasisSetError::ShapeMismatch`] when the primitive counts
    /// differ. The aliased storage is unchanged on error.
    pub fn assign(&mut self, source: &ContractedGaussian) -> Result<(), BasisSetError> {
        match (self.parts.as_mut(), source.fields()) {
            (None, None) => Ok(()),
            (Some(p), Some((coefficients, exponents, center))) => {
                if p.coefficients.len() != coefficients.len() {
                    return Err(BasisSetError::ShapeMismatch {
                        what: "contracted gaussian assignment",
                        expected: p.coefficients.len(),
                        actual: coefficients.len(),
                    });
                }
                p.coefficients.copy_from_slice(coefficients);
                p.exponents.copy_from_slice(exponents);
                *p.center = *center;
                Ok(())
            }
            _ => Err(BasisSetError::NullMismatch {
                what: "contracted gaussian",
            }),
        }
    }

    pub(crate) fn fields(&self) -> Option<(&[f64], &[f64], &Point3<f64>)> {
        self.parts
            .as_ref()
            .map(|p| (&*p.coefficients, &*p.exponents, &*p.center))
    }
}

impl PartialEq<ContractedGaussianView<'_>> for ContractedGaussian {
    fn eq(&self, other: &ContractedGaussianView<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ContractedGaussian> for ContractedGaussianView<'_> {
    fn eq(&self, other: &ContractedGaussian) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ContractedGaussianViewMut<'_>> for ContractedGaussian {
    fn eq(&self, other: &ContractedGaussianViewMut<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ContractedGaussian> for ContractedGaussianViewMut<'_> {
    fn eq(&self, other: &ContractedGaussian) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq for ContractedGaussianViewMut<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ContractedGaussianViewMut<'_>> for ContractedGaussianView<'_> {
    fn eq(&self, other: &ContractedGaussianViewMut<'_>) -> bool {
        self.fields() == other.fields()
    }
}

impl PartialEq<ContractedGaussianView<'_>> for ContractedGaussianViewMut<'_> {
    fn eq(&self, other: &ContractedGaussianView<'_>) -> bool {
        self.fields() == other.fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> ContractedGaussian {
        ContractedGaussian::new(
            vec![0.25, 0.5, 0.75],
            vec![10.0, 2.0, 0.4],
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn parallel_sequences_must_match_in_length() {
            let err = ContractedGaussian::new(vec![1.0, 2.0], vec![1.0], Point3::origin())
                .unwrap_err();
            assert_eq!(
                err,
                BasisSetError::ShapeMismatch {
                    what: "contracted gaussian exponents",
                    expected: 2,
                    actual: 1,
                }
            );
        }

        #[test]
        fn default_is_null_with_zero_size() {
            let cg = ContractedGaussian::default();
            assert!(cg.is_null());
            assert_eq!(cg.len(), 0);
            assert!(cg.center().is_err());
            assert_eq!(cg, ContractedGaussian::default());
        }

        #[test]
        fn move_leaves_the_source_null() {
            let mut a = sample();
            let b = std::mem::take(&mut a);
            assert!(a.is_null());
            assert_eq!(b, sample());
        }

        #[test]
        fn clone_is_a_deep_copy() {
            let a = sample();
            let mut b = a.clone();
            assert_eq!(a, b);
            let (a_coefs, _, _) = a.fields().unwrap();
            let (b_coefs, _, _) = b.fields().unwrap();
            assert!(!std::ptr::eq(a_coefs.as_ptr(), b_coefs.as_ptr()));
            *b.primitive_mut(0).unwrap().coefficient_mut().unwrap() = 9.0;
            assert_eq!(*a.primitive(0).unwrap().coefficient().unwrap(), 0.25);
        }
    }

    mod shared_center {
        use super::*;

        #[test]
        fn all_primitives_alias_one_center() {
            let cg = sample();
            let c0 = cg.primitive(0).unwrap().center().unwrap();
            let c1 = cg.primitive(1).unwrap().center().unwrap();
            let c2 = cg.primitive(2).unwrap().center().unwrap();
            assert!(std::ptr::eq(c0, c1));
            assert!(std::ptr::eq(c1, c2));
            assert!(std::ptr::eq(c0, cg.center().unwrap()));
        }

        #[test]
        fn moving_one_primitive_moves_every_primitive() {
            let mut cg = sample();
            cg.primitive_mut(1).unwrap().center_mut().unwrap().x = 5.0;
            assert_eq!(cg.center().unwrap().x, 5.0);
            assert_eq!(cg.primitive(0).unwrap().center().unwrap().x, 5.0);
            assert_eq!(cg.primitive(2).unwrap().center().unwrap().x, 5.0);
        }

        #[test]
        fn center_mut_materializes_a_null_contraction() {
            let mut cg = ContractedGaussian::default();
            cg.center_mut().z = 2.0;
            assert!(!cg.is_null());
            assert!(cg.is_empty());
            assert_eq!(cg.center().unwrap().z, 2.0);
        }
    }

    mod indexing {
        use super::*;

        #[test]
        fn out_of_range_index_reports_the_bound() {
            let cg = sample();
            assert_eq!(
                cg.primitive(3).unwrap_err(),
                BasisSetError::IndexOutOfRange {
                    what: "primitive",
                    index: 3,
                    len: 3,
                }
            );
        }

        #[test]
        fn primitives_preserve_insertion_order() {
            let cg = sample();
            let exps: Vec<f64> = cg.iter().map(|p| *p.exponent().unwrap()).collect();
            assert_eq!(exps, vec![10.0, 2.0, 0.4]);
        }

        #[test]
        fn null_contraction_rejects_indexed_access() {
            let cg = ContractedGaussian::default();
            assert_eq!(cg.primitive(0).unwrap_err(), NULL_CG);
        }
    }

    mod evaluation {
        use super::*;

        #[test]
        fn value_is_the_sum_of_primitive_values() {
            let cg = sample();
            let at = Point3::new(0.5, 0.0, 0.5);
            let by_hand: f64 = (0..3)
                .map(|i| cg.primitive(i).unwrap().evaluate(&at).unwrap())
                .sum();
            assert_relative_eq!(cg.evaluate(&at).unwrap(), by_hand);
        }

        #[test]
        fn evaluate_many_matches_pointwise_evaluation() {
            let cg = sample();
            let points = [Point3::origin(), Point3::new(1.0, 1.0, 1.0)];
            let many = cg.evaluate_many(&points).unwrap();
            for (value, point) in many.iter().zip(&points) {
                assert_relative_eq!(*value, cg.evaluate(point).unwrap());
            }
        }
    }

    mod views {
        use super::*;

        #[test]
        fn view_aliases_the_owners_storage() {
            let cg = sample();
            let v = cg.view();
            let (owned, _, owned_center) = cg.fields().unwrap();
            let (viewed, _, viewed_center) = v.fields().unwrap();
            assert!(std::ptr::eq(owned.as_ptr(), viewed.as_ptr()));
            assert!(std::ptr::eq(owned_center, viewed_center));
            assert_eq!(cg, v);
            assert_eq!(v, cg);
        }

        #[test]
        fn mutable_view_writes_are_observable_in_the_owner() {
            let mut cg = sample();
            {
                let mut m = cg.view_mut();
                *m.primitive_mut(2).unwrap().exponent_mut().unwrap() = 0.9;
                m.center_mut().unwrap().y = -3.0;
            }
            assert_eq!(*cg.primitive(2).unwrap().exponent().unwrap(), 0.9);
            assert_eq!(cg.center().unwrap().y, -3.0);
        }

        #[test]
        fn assign_overwrites_element_wise() {
            let mut target = sample();
            let source = ContractedGaussian::new(
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                Point3::new(9.0, 9.0, 9.0),
            )
            .unwrap();
            target.view_mut().assign(&source).unwrap();
            assert_eq!(target, source);
        }

        #[test]
        fn assign_rejects_shape_mismatch() {
            let mut target = sample();
            let source =
                ContractedGaussian::new(vec![1.0], vec![4.0], Point3::origin()).unwrap();
            let err = target.view_mut().assign(&source).unwrap_err();
            assert!(matches!(err, BasisSetError::ShapeMismatch { .. }));
            assert_eq!(target, sample());
        }

        #[test]
        fn assign_rejects_null_mismatch() {
            let mut target = sample();
            let err = target
                .view_mut()
                .assign(&ContractedGaussian::default())
                .unwrap_err();
            assert_eq!(
                err,
                BasisSetError::NullMismatch {
                    what: "contracted gaussian",
                }
            );

            let mut null_view = ContractedGaussianViewMut::default();
            let err = null_view.assign(&sample()).unwrap_err();
            assert!(matches!(err, BasisSetError::NullMismatch { .. }));
            assert!(null_view.assign(&ContractedGaussian::default()).is_ok());
        }
    }
}
